//! Wire models for the POS backend.

use comanda::{catalog::MenuItemId, draft::DraftLine, ids::TypedId};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Menu id.
pub type MenuId = TypedId<Menu>;

/// Menu read model: a time-bounded collection of menu items.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    /// Backend id.
    pub id: MenuId,

    /// Display name.
    pub name: String,

    /// Start of the menu's active window, when bounded.
    #[serde(default)]
    pub active_from: Option<Timestamp>,

    /// End of the menu's active window, when bounded.
    #[serde(default)]
    pub active_until: Option<Timestamp>,
}

/// Dining table id.
pub type TableId = TypedId<DiningTable>;

/// Dining table read model.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTable {
    /// Backend id.
    pub id: TableId,

    /// Display name, e.g. `"A12"`.
    pub name: String,

    /// Seating capacity.
    #[serde(default)]
    pub capacity: u32,

    /// Whether the table is currently in service.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Reservation id.
pub type ReservationId = TypedId<Reservation>;

/// Marker for reservation identifiers. Reservations are managed by the
/// backend; orders only reference them by id.
#[derive(Debug, Clone, Copy)]
pub struct Reservation;

/// Order id.
pub type OrderId = TypedId<Order>;

/// A persisted order, as returned by the order-creation endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Backend id.
    pub id: OrderId,

    /// Order total in minor currency units, as priced by the backend.
    #[serde(default)]
    pub total: u64,

    /// Creation time stamped by the backend.
    pub created_at: Timestamp,
}

/// One line of an order-creation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    /// The menu item to order.
    pub menu_item_id: MenuItemId,

    /// Units to order.
    pub quantity: u32,
}

impl From<&DraftLine> for OrderItemRequest {
    fn from(line: &DraftLine) -> Self {
        Self {
            menu_item_id: line.menu_item_id,
            quantity: line.quantity,
        }
    }
}

/// The order-creation request body.
///
/// Association fields are attached by the calling screen; the aggregator
/// itself only contributes `order_items`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Lines to order, in draft order.
    pub order_items: Vec<OrderItemRequest>,

    /// Table this order is for, when taken at a table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<TableId>,

    /// Reservation this order belongs to, when pre-booked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_id: Option<ReservationId>,

    /// Free-text note for the kitchen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn create_order_request_serializes_to_camel_case() -> TestResult {
        let request = CreateOrderRequest {
            order_items: vec![OrderItemRequest {
                menu_item_id: MenuItemId::from_raw(12),
                quantity: 2,
            }],
            table_id: Some(TableId::from_raw(4)),
            reservation_id: None,
            note: None,
        };

        let json = serde_json::to_value(&request)?;

        assert_eq!(
            json,
            serde_json::json!({
                "orderItems": [{"menuItemId": 12, "quantity": 2}],
                "tableId": 4,
            })
        );

        Ok(())
    }

    #[test]
    fn absent_association_fields_are_omitted() -> TestResult {
        let request = CreateOrderRequest {
            order_items: vec![],
            table_id: None,
            reservation_id: None,
            note: None,
        };

        let json = serde_json::to_string(&request)?;

        assert_eq!(json, r#"{"orderItems":[]}"#);

        Ok(())
    }

    #[test]
    fn order_deserializes_from_camel_case() -> TestResult {
        let order: Order = serde_json::from_str(
            r#"{"id": 501, "total": 90000, "createdAt": "2026-08-04T11:30:00Z"}"#,
        )?;

        assert_eq!(order.id, OrderId::from_raw(501));
        assert_eq!(order.total, 90000);

        Ok(())
    }

    #[test]
    fn dining_table_defaults_to_active() -> TestResult {
        let table: DiningTable = serde_json::from_str(r#"{"id": 4, "name": "A12"}"#)?;

        assert!(table.is_active);
        assert_eq!(table.capacity, 0);

        Ok(())
    }
}
