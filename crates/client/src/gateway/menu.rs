//! Menu item and category endpoints.

use digital_cafe_core::{CafeId, CategoryId, MenuItemId};
use serde_json::json;
use tracing::instrument;

use super::types::{Category, MenuItem};
use super::{CafeApi, GatewayError};

impl CafeApi {
    /// `GET menu-items`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn menu_items(&self) -> Result<Vec<MenuItem>, GatewayError> {
        self.get_json("menu-items").await
    }

    /// `GET menu-items/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn menu_item(&self, id: MenuItemId) -> Result<MenuItem, GatewayError> {
        self.get_json(&format!("menu-items/{id}")).await
    }

    /// `GET menu-items/cafe/{cafeId}`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn menu_items_for_cafe(&self, cafe_id: CafeId) -> Result<Vec<MenuItem>, GatewayError> {
        self.get_json(&format!("menu-items/cafe/{cafe_id}")).await
    }

    /// `GET menu-items/available/{cafeId}` - only items currently
    /// orderable.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn available_menu_items(
        &self,
        cafe_id: CafeId,
    ) -> Result<Vec<MenuItem>, GatewayError> {
        self.get_json(&format!("menu-items/available/{cafe_id}"))
            .await
    }

    /// `GET menu-items/cafe/{cafeId}/category/{categoryId}`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn menu_items_by_category(
        &self,
        cafe_id: CafeId,
        category_id: CategoryId,
    ) -> Result<Vec<MenuItem>, GatewayError> {
        self.get_json(&format!("menu-items/cafe/{cafe_id}/category/{category_id}"))
            .await
    }

    /// `POST menu-items`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self, item), fields(name = %item.name))]
    pub async fn create_menu_item(&self, item: &MenuItem) -> Result<MenuItem, GatewayError> {
        self.post_json("menu-items", item).await
    }

    /// `PUT menu-items/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self, item))]
    pub async fn update_menu_item(
        &self,
        id: MenuItemId,
        item: &MenuItem,
    ) -> Result<MenuItem, GatewayError> {
        self.put_json(&format!("menu-items/{id}"), item).await
    }

    /// `PATCH menu-items/{id}/availability`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn set_menu_item_availability(
        &self,
        id: MenuItemId,
        available: bool,
    ) -> Result<MenuItem, GatewayError> {
        self.patch_json(
            &format!("menu-items/{id}/availability"),
            &json!({ "available": available }),
        )
        .await
    }

    /// `DELETE menu-items/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn delete_menu_item(&self, id: MenuItemId) -> Result<(), GatewayError> {
        self.delete(&format!("menu-items/{id}")).await
    }

    // -------------------------------------------------------------------------
    // Categories
    // -------------------------------------------------------------------------

    /// `GET categories`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<Category>, GatewayError> {
        self.get_json("categories").await
    }

    /// `GET categories/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn category(&self, id: CategoryId) -> Result<Category, GatewayError> {
        self.get_json(&format!("categories/{id}")).await
    }

    /// `POST categories`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self, category), fields(name = %category.name))]
    pub async fn create_category(&self, category: &Category) -> Result<Category, GatewayError> {
        self.post_json("categories", category).await
    }

    /// `PUT categories/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self, category))]
    pub async fn update_category(
        &self,
        id: CategoryId,
        category: &Category,
    ) -> Result<Category, GatewayError> {
        self.put_json(&format!("categories/{id}"), category).await
    }

    /// `DELETE categories/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on any failed call.
    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: CategoryId) -> Result<(), GatewayError> {
        self.delete(&format!("categories/{id}")).await
    }
}
