use serde::{Deserialize, Serialize};

/// Placeholder customer identity used for every order.
///
/// Identity and payment collection are out of scope for this client; the
/// order service accepts these static fields as-is.
pub const GUEST_NAME: &str = "Guest";
pub const GUEST_ADDRESS: &str = "123 Main St";
pub const GUEST_PHONE: &str = "555-1234";

/// One cart line flattened into the shape the order service expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub menu_item_id: String,
    pub name: String,
    pub quantity: u32,
    /// Price captured at add time, not re-validated against the server.
    pub price: f64,
}

/// Request body for `POST /orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub restaurant_id: String,
    pub customer_name: String,
    pub address: String,
    pub phone: String,
    pub items: Vec<OrderItem>,
}

impl OrderRequest {
    /// Builds an order for the placeholder guest customer.
    pub fn guest(restaurant_id: impl Into<String>, items: Vec<OrderItem>) -> Self {
        Self {
            restaurant_id: restaurant_id.into(),
            customer_name: GUEST_NAME.to_string(),
            address: GUEST_ADDRESS.to_string(),
            phone: GUEST_PHONE.to_string(),
            items,
        }
    }
}

/// Response body from `POST /orders`.
///
/// The service echoes the stored order; the client only consumes the
/// authoritative `total`, which is reported to the user verbatim rather than
/// recomputed locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receipt_ignores_unknown_fields() {
        let json = r#"{"_id": "o1", "restaurant_id": "r1", "status": "placed", "total": 12.5}"#;
        let receipt: OrderReceipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.total, 12.5);
    }

    #[test]
    fn guest_order_uses_placeholder_customer() {
        let order = OrderRequest::guest("r1", vec![]);
        assert_eq!(order.customer_name, GUEST_NAME);
        assert_eq!(order.address, GUEST_ADDRESS);
        assert_eq!(order.phone, GUEST_PHONE);
    }
}
