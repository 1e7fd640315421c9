//! Wire types for the café backend REST API.
//!
//! Field names follow the backend's camelCase JSON. Timestamps arrive as
//! ISO local datetimes without an offset, so they are `NaiveDateTime` here;
//! the backend and client share one wall clock for display purposes.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use digital_cafe_core::{
    BookingId, BookingStatus, CafeId, CategoryId, MenuItemId, OrderId, OrderStatus, OrderType,
    PaymentId, PaymentMethod, PaymentStatus, Price, Role, TableId, UserId,
};
use serde::{Deserialize, Serialize};

// =============================================================================
// Auth
// =============================================================================

/// Login form payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username_or_email: String,
    pub password: String,
}

/// Registration form payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
}

/// Response to login and registration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    #[serde(rename = "type", default)]
    pub token_type: Option<String>,
    pub id: Option<UserId>,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub email_verified: bool,
    pub profile_completed: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic `{ "message": ... }` response.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Password change payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResetRequest {
    pub old_password: String,
    pub new_password: String,
}

// =============================================================================
// Menu
// =============================================================================

/// A menu item. `id` is absent when creating.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<MenuItemId>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Price,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub category_name: Option<String>,
    pub cafe_id: CafeId,
    #[serde(default)]
    pub cafe_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub available: bool,
}

/// A menu category. `id` is absent when creating.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CategoryId>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

// =============================================================================
// Cafes and tables
// =============================================================================

/// A café. `id` is absent when creating.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cafe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CafeId>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub owner_id: Option<UserId>,
    #[serde(default)]
    pub owner_name: Option<String>,
}

/// A café table. `id` is absent when creating.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CafeTable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<TableId>,
    pub cafe_id: CafeId,
    #[serde(default)]
    pub cafe_name: Option<String>,
    pub table_number: String,
    pub capacity: u32,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_true")]
    pub available: bool,
}

// =============================================================================
// Orders
// =============================================================================

/// One line of an order submission. A read-only projection of a cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub menu_item_id: MenuItemId,
    pub quantity: u32,
    pub price: Price,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

/// Order submission payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub customer_id: UserId,
    pub cafe_id: CafeId,
    pub order_type: OrderType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<TableId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    pub items: Vec<OrderItemRequest>,
}

/// One line of a placed order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: Option<i64>,
    pub menu_item_id: MenuItemId,
    #[serde(default)]
    pub menu_item_name: Option<String>,
    pub quantity: u32,
    pub price: Price,
    #[serde(default)]
    pub subtotal: Option<Price>,
    #[serde(default)]
    pub special_instructions: Option<String>,
}

/// A placed order as returned by the backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    #[serde(default)]
    pub order_number: Option<String>,
    pub customer_id: UserId,
    #[serde(default)]
    pub customer_name: Option<String>,
    pub cafe_id: CafeId,
    #[serde(default)]
    pub cafe_name: Option<String>,
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub total_amount: Price,
    #[serde(default)]
    pub table_id: Option<TableId>,
    #[serde(default)]
    pub special_instructions: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

// =============================================================================
// Bookings
// =============================================================================

/// Table booking payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub customer_id: UserId,
    pub cafe_id: CafeId,
    pub table_id: TableId,
    pub booking_date: NaiveDate,
    pub booking_time: NaiveTime,
    pub number_of_guests: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

/// A table booking as returned by the backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub customer_id: UserId,
    #[serde(default)]
    pub customer_name: Option<String>,
    pub cafe_id: CafeId,
    #[serde(default)]
    pub cafe_name: Option<String>,
    pub table_id: TableId,
    #[serde(default)]
    pub table_number: Option<String>,
    pub booking_date: NaiveDate,
    pub booking_time: NaiveTime,
    pub number_of_guests: u32,
    pub status: BookingStatus,
    #[serde(default)]
    pub special_requests: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

// =============================================================================
// Payments
// =============================================================================

/// Payment creation payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub order_id: OrderId,
    pub amount: Price,
    pub payment_method: PaymentMethod,
}

/// A payment as returned by the backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: PaymentId,
    pub order_id: OrderId,
    pub amount: Price,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub payment_date: Option<NaiveDateTime>,
}

// =============================================================================
// Profiles
// =============================================================================

/// A user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
    #[serde(default)]
    pub completion_percentage: Option<u8>,
}

// =============================================================================
// Users
// =============================================================================

/// A user account as listed in admin views.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub role: Role,
    #[serde(default = "default_true")]
    pub active: bool,
    pub email_verified: bool,
    pub profile_completed: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Staff account creation payload (owner/chef/waiter).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffCreationRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cafe_id: Option<CafeId>,
}

/// Response to staff creation. The temporary password is sent exactly once.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffCreationResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub temp_password: Option<String>,
}

// =============================================================================
// Dashboards
// =============================================================================

/// Admin overview numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub total_users: u64,
    pub active_users: u64,
    pub inactive_users: u64,
    pub unverified_emails: u64,
    pub incomplete_profiles: u64,
    pub total_cafes: u64,
    pub today_registrations: u64,
    #[serde(default)]
    pub weekly_growth: Vec<f64>,
    #[serde(default)]
    pub users_by_role: HashMap<String, u64>,
    #[serde(default)]
    pub recent_users: Vec<UserSummary>,
}

/// Café owner overview numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDashboard {
    pub total_tables: u64,
    pub total_menu_items: u64,
    pub today_bookings: u64,
    pub today_orders: u64,
    pub today_revenue: Price,
    pub monthly_revenue: Price,
    pub total_chefs: u64,
    pub total_waiters: u64,
    #[serde(default)]
    pub popular_items: Vec<PopularItem>,
    #[serde(default)]
    pub revenue_chart: Vec<RevenuePoint>,
}

/// A frequently ordered menu item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularItem {
    pub menu_item_id: MenuItemId,
    pub name: String,
    pub order_count: u64,
}

/// One point on the owner revenue chart.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenuePoint {
    pub date: NaiveDate,
    pub revenue: Price,
}

/// Kitchen queue overview for chefs.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChefDashboard {
    pub pending_orders: u64,
    pub preparing_orders: u64,
    pub completed_today_orders: u64,
    pub average_preparation_time: f64,
    #[serde(default)]
    pub order_queue: Vec<OrderSummary>,
}

/// Floor overview for waiters.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaiterDashboard {
    pub ready_orders: u64,
    pub active_bookings: u64,
    pub served_today_orders: u64,
    #[serde(default)]
    pub service_queue: Vec<OrderSummary>,
}

/// Compact order line for dashboard queues.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: OrderId,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    pub status: OrderStatus,
    pub total_amount: Price,
    #[serde(default)]
    pub table_number: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_request_wire_shape() {
        let request = OrderRequest {
            customer_id: UserId::new(7),
            cafe_id: CafeId::new(1),
            order_type: OrderType::DineIn,
            table_id: Some(TableId::new(4)),
            special_instructions: None,
            items: vec![OrderItemRequest {
                menu_item_id: MenuItemId::new(2),
                quantity: 3,
                price: Price::from_units(10),
                special_instructions: None,
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["orderType"], "DINE_IN");
        assert_eq!(json["tableId"], 4);
        assert_eq!(json["items"][0]["menuItemId"], 2);
        // absent options are omitted, not null
        assert!(json.get("specialInstructions").is_none());
    }

    #[test]
    fn test_auth_response_parses_backend_shape() {
        let body = serde_json::json!({
            "token": "jwt-token",
            "type": "Bearer",
            "id": 12,
            "username": "asha",
            "email": "asha@example.com",
            "role": "CUSTOMER",
            "emailVerified": true,
            "profileCompleted": false,
            "message": "Login successful"
        });

        let parsed: AuthResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.id, Some(UserId::new(12)));
        assert_eq!(parsed.role, Role::Customer);
        assert!(parsed.email_verified);
    }

    #[test]
    fn test_order_parses_local_datetimes() {
        let body = serde_json::json!({
            "id": 9,
            "customerId": 7,
            "cafeId": 1,
            "orderType": "TAKEAWAY",
            "status": "PENDING",
            "totalAmount": 42,
            "createdAt": "2025-03-14T09:30:00"
        });

        let order: Order = serde_json::from_value(body).unwrap();
        assert_eq!(order.id, OrderId::new(9));
        assert!(order.created_at.is_some());
        assert!(order.items.is_empty());
    }

    #[test]
    fn test_booking_date_and_time_split_fields() {
        let body = serde_json::json!({
            "id": 3,
            "customerId": 7,
            "cafeId": 1,
            "tableId": 2,
            "bookingDate": "2025-06-01",
            "bookingTime": "18:30:00",
            "numberOfGuests": 4,
            "status": "CONFIRMED"
        });

        let booking: Booking = serde_json::from_value(body).unwrap();
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.number_of_guests, 4);
    }
}
