//! Cart line item.

use serde::{Deserialize, Serialize};

use super::id::MenuItemId;
use super::price::Price;

/// One distinct menu item held in the cart for a pending order.
///
/// At most one line exists per [`MenuItemId`]; adding the same item again
/// merges into the existing line. A line's quantity is always at least 1
/// while the line is present - dropping to zero removes the line instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// The menu item this line refers to. Unique key within the cart.
    pub menu_item_id: MenuItemId,
    /// Name shown in the cart UI.
    pub display_name: String,
    /// Price per unit at the time the item was added.
    pub unit_price: Price,
    /// Number of units, at least 1.
    pub quantity: u32,
    /// Optional image reference for display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    /// Optional per-line note for the kitchen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

impl CartLine {
    /// Create a line with no image or instructions.
    #[must_use]
    pub fn new(
        menu_item_id: MenuItemId,
        display_name: impl Into<String>,
        unit_price: Price,
        quantity: u32,
    ) -> Self {
        Self {
            menu_item_id,
            display_name: display_name.into(),
            unit_price,
            quantity,
            image_ref: None,
            special_instructions: None,
        }
    }

    /// Price of this line (`unit_price * quantity`).
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.unit_price.line_total(self.quantity)
    }

    /// Whether the line satisfies its structural invariant.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.quantity >= 1
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn line(qty: u32) -> CartLine {
        CartLine::new(MenuItemId::new(1), "Masala Chai", Price::from_units(10), qty)
    }

    #[test]
    fn test_subtotal() {
        assert_eq!(line(3).subtotal().amount(), Decimal::from(30));
    }

    #[test]
    fn test_validity() {
        assert!(line(1).is_valid());
        assert!(!line(0).is_valid());
    }

    #[test]
    fn test_camel_case_wire_format() {
        let json = serde_json::to_value(line(2)).unwrap();
        assert!(json.get("menuItemId").is_some());
        assert!(json.get("unitPrice").is_some());
        // absent options are omitted entirely
        assert!(json.get("imageRef").is_none());
    }
}
