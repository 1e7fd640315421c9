//! Client-side shopping cart.
//!
//! The [`CartManager`] owns the ordered cart lines, derives totals and
//! counts, mirrors every mutation into durable storage, and broadcasts the
//! committed state to subscribers. Persistence always happens before
//! publication: an observer never sees a state that is not already written.

use digital_cafe_core::{CartLine, MenuItemId, Price};
use tracing::{debug, warn};

use crate::gateway::types::OrderItemRequest;
use crate::storage::{SharedStore, StoreError, keys};
use crate::subscription::{Subscribers, SubscriptionId};

/// Errors raised by cart mutations.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    /// A line was added or replaced with a quantity below 1.
    #[error("cart line quantity must be at least 1, got {quantity}")]
    InvalidQuantity {
        /// The rejected quantity.
        quantity: u32,
    },

    /// The mutation could not be persisted; the in-memory cart was not
    /// changed either.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Outcome of reading the persisted cart at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartRehydration {
    /// No persisted cart existed.
    Empty,
    /// The persisted cart was adopted.
    Restored {
        /// Number of distinct lines restored.
        lines: usize,
    },
    /// The persisted cart was malformed. It was discarded, the stored
    /// record removed, and the cart started empty. Hosts should show a
    /// non-fatal warning.
    Recovered,
}

/// State delivered to cart observers after every committed mutation.
#[derive(Debug, Clone)]
pub struct CartUpdate {
    /// Immutable copy of the ordered lines.
    pub lines: Vec<CartLine>,
    /// Sum of quantities across lines (the header badge number).
    pub line_count: u32,
}

/// Owner of the client-side cart.
///
/// Insertion order is display order. At most one line exists per menu item;
/// adding an item already present merges quantities.
pub struct CartManager {
    store: SharedStore,
    lines: Vec<CartLine>,
    subscribers: Subscribers<CartUpdate>,
}

impl CartManager {
    /// Rehydrate the cart from durable storage.
    ///
    /// Absent state starts an empty cart. Malformed state - bytes that do
    /// not parse, a line with quantity 0, or a duplicated menu item - is
    /// discarded along with its stored record, and the cart starts empty.
    /// Corrupt local data never aborts startup.
    #[must_use]
    pub fn load(store: SharedStore) -> (Self, CartRehydration) {
        let raw = match store.borrow().get(keys::CART) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "cart storage unreadable, starting empty");
                None
            }
        };

        let (lines, outcome) = match raw {
            None => (Vec::new(), CartRehydration::Empty),
            Some(bytes) => match serde_json::from_slice::<Vec<CartLine>>(&bytes) {
                Ok(lines) if lines_are_valid(&lines) => {
                    debug!(lines = lines.len(), "cart restored from storage");
                    let count = lines.len();
                    (lines, CartRehydration::Restored { lines: count })
                }
                Ok(_) => {
                    warn!("persisted cart violates invariants, discarding");
                    discard_persisted_cart(&store);
                    (Vec::new(), CartRehydration::Recovered)
                }
                Err(err) => {
                    warn!(error = %err, "persisted cart malformed, discarding");
                    discard_persisted_cart(&store);
                    (Vec::new(), CartRehydration::Recovered)
                }
            },
        };

        (
            Self {
                store,
                lines,
                subscribers: Subscribers::new(),
            },
            outcome,
        )
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Add a line to the cart.
    ///
    /// If a line for the same menu item already exists its quantity is
    /// incremented by `line.quantity`; otherwise the line is appended.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] for a quantity below 1, and
    /// [`CartError::Store`] if persistence fails (the cart is unchanged).
    pub fn add_line(&mut self, line: CartLine) -> Result<(), CartError> {
        if line.quantity < 1 {
            return Err(CartError::InvalidQuantity {
                quantity: line.quantity,
            });
        }

        match self.position_of(line.menu_item_id) {
            Some(index) => {
                let mut merged = self.lines.clone();
                if let Some(existing) = merged.get_mut(index) {
                    existing.quantity += line.quantity;
                }
                self.commit(merged)?;
            }
            None => {
                let mut appended = self.lines.clone();
                appended.push(line);
                self.commit(appended)?;
            }
        }
        Ok(())
    }

    /// Remove the line for `menu_item_id`. Removing an absent line is not
    /// an error; the (unchanged) state is still persisted and republished.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Store`] if persistence fails.
    pub fn remove_line(&mut self, menu_item_id: MenuItemId) -> Result<(), CartError> {
        let mut remaining = self.lines.clone();
        remaining.retain(|line| line.menu_item_id != menu_item_id);
        self.commit(remaining)?;
        Ok(())
    }

    /// Set the quantity of an existing line. A quantity of 0 removes the
    /// line. If no line matches, nothing happens.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Store`] if persistence fails.
    pub fn set_quantity(&mut self, menu_item_id: MenuItemId, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return self.remove_line(menu_item_id);
        }
        let Some(index) = self.position_of(menu_item_id) else {
            return Ok(());
        };
        let mut updated = self.lines.clone();
        if let Some(line) = updated.get_mut(index) {
            line.quantity = quantity;
        }
        self.commit(updated)?;
        Ok(())
    }

    /// Replace the line matching `line.menu_item_id` in place. A line that
    /// is not present is left alone (no-op, no publication).
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] if the replacement quantity
    /// is below 1, and [`CartError::Store`] if persistence fails.
    pub fn update_line(&mut self, line: CartLine) -> Result<(), CartError> {
        if line.quantity < 1 {
            return Err(CartError::InvalidQuantity {
                quantity: line.quantity,
            });
        }
        let Some(index) = self.position_of(line.menu_item_id) else {
            return Ok(());
        };
        let mut updated = self.lines.clone();
        if let Some(slot) = updated.get_mut(index) {
            *slot = line;
        }
        self.commit(updated)?;
        Ok(())
    }

    /// Empty the cart and remove its persisted record.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Store`] if the stored record cannot be removed.
    pub fn clear(&mut self) -> Result<(), CartError> {
        self.store.borrow_mut().delete(keys::CART)?;
        self.lines.clear();
        self.publish();
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Immutable copy of the current ordered lines. Later mutations are
    /// never observable through a returned snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Vec<CartLine> {
        self.lines.clone()
    }

    /// Sum of `unit_price * quantity` over all lines, computed fresh on
    /// every call. Totals are never cached.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines
            .iter()
            .fold(Price::ZERO, |sum, line| sum.plus(line.subtotal()))
    }

    /// Sum of quantities across lines. Distinct from the number of lines.
    #[must_use]
    pub fn line_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn distinct_lines(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Read-only projection of the cart into order request items.
    ///
    /// Building the payload does not mutate the cart; the cart is cleared
    /// only after the backend acknowledges the order.
    #[must_use]
    pub fn order_items(&self) -> Vec<OrderItemRequest> {
        self.lines
            .iter()
            .map(|line| OrderItemRequest {
                menu_item_id: line.menu_item_id,
                quantity: line.quantity,
                price: line.unit_price,
                special_instructions: line.special_instructions.clone(),
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Subscription
    // -------------------------------------------------------------------------

    /// Register an observer of cart state.
    ///
    /// The observer immediately receives the current state, then the
    /// committed state after every mutation.
    pub fn subscribe(&mut self, mut observer: impl FnMut(&CartUpdate) + 'static) -> SubscriptionId {
        let current = self.current_update();
        observer(&current);
        self.subscribers.subscribe(observer)
    }

    /// Remove a previously registered observer.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn position_of(&self, menu_item_id: MenuItemId) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.menu_item_id == menu_item_id)
    }

    /// Persist `next`, adopt it, then publish. The in-memory cart is only
    /// replaced once the write has succeeded, so a failed write leaves
    /// both the durable and the observable state untouched.
    fn commit(&mut self, next: Vec<CartLine>) -> Result<(), CartError> {
        let bytes = serde_json::to_vec(&next).map_err(StoreError::from)?;
        self.store.borrow_mut().set(keys::CART, &bytes)?;
        self.lines = next;
        self.publish();
        Ok(())
    }

    fn publish(&mut self) {
        let update = self.current_update();
        self.subscribers.publish(&update);
    }

    fn current_update(&self) -> CartUpdate {
        CartUpdate {
            lines: self.lines.clone(),
            line_count: self.line_count(),
        }
    }
}

impl std::fmt::Debug for CartManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartManager")
            .field("lines", &self.lines)
            .field("subscribers", &self.subscribers)
            .finish_non_exhaustive()
    }
}

/// Structural validation applied to rehydrated carts: quantities at least
/// 1 and at most one line per menu item.
fn lines_are_valid(lines: &[CartLine]) -> bool {
    let mut seen = std::collections::HashSet::new();
    lines
        .iter()
        .all(|line| line.is_valid() && seen.insert(line.menu_item_id))
}

fn discard_persisted_cart(store: &SharedStore) {
    if let Err(err) = store.borrow_mut().delete(keys::CART) {
        warn!(error = %err, "failed to remove corrupt cart record");
    }
}
