use crate::domain::common::Entity;
use crate::shared::serde_utils::{f64_lenient, opt_datetime_lenient};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Types
// ============================================================================

crate::integer_id!(
    /// Unique order identifier
    OrderId
);

crate::integer_id!(
    /// Customer account identifier
    UserId
);

// ============================================================================
// Payment status
// ============================================================================

/// Sent lowercase; read in any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Shipped,
    Delivered,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Shipped => "shipped",
            PaymentStatus::Delivered => "delivered",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Shipped => "Shipped",
            PaymentStatus::Delivered => "Delivered",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
    }

    pub fn all() -> [PaymentStatus; 4] {
        [
            PaymentStatus::Pending,
            PaymentStatus::Paid,
            PaymentStatus::Shipped,
            PaymentStatus::Delivered,
        ]
    }
}

impl TryFrom<String> for PaymentStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("unknown payment status `{}`", value))
    }
}

// ============================================================================
// Entity
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default, alias = "customer")]
    pub customer_name: Option<String>,
    #[serde(default, alias = "amount", deserialize_with = "f64_lenient")]
    pub total_price: f64,
    #[serde(alias = "status")]
    pub payment_status: PaymentStatus,
    #[serde(default, deserialize_with = "opt_datetime_lenient")]
    pub expected_delivery_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_datetime_lenient")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity for Order {
    type Id = OrderId;

    fn entity_id(&self) -> OrderId {
        self.id
    }
}

impl Order {
    /// Date part of the expected delivery, as shown in a date input
    pub fn expected_delivery_day(&self) -> Option<NaiveDate> {
        self.expected_delivery_date.map(|dt| dt.date_naive())
    }

    /// Apply the fields of an accepted update locally
    pub fn apply_update(&mut self, dto: &UpdateOrderDto) {
        self.payment_status = dto.payment_status;
        self.expected_delivery_date = dto
            .expected_delivery_date
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc());
    }
}

// ============================================================================
// Update request / response
// ============================================================================

/// `PUT /admin/orders/{id}` body. The date travels as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateOrderDto {
    pub payment_status: PaymentStatus,
    pub expected_delivery_date: Option<NaiveDate>,
}

/// The order endpoint answers with the updated order, an `{order: ...}`
/// wrapper or just a message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum UpdateOrderResponse {
    Order(Order),
    Wrapped { order: Order },
    Other(serde_json::Value),
}

impl UpdateOrderResponse {
    pub fn into_order(self) -> Option<Order> {
        match self {
            UpdateOrderResponse::Order(order) | UpdateOrderResponse::Wrapped { order } => {
                Some(order)
            }
            UpdateOrderResponse::Other(_) => None,
        }
    }
}

/// Draft edited in the order modal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderForm {
    pub payment_status: String,
    pub expected_delivery_date: String,
}

impl OrderForm {
    pub fn from_order(order: &Order) -> Self {
        Self {
            payment_status: order.payment_status.as_str().to_string(),
            expected_delivery_date: order
                .expected_delivery_day()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }

    pub fn to_dto(&self) -> Result<UpdateOrderDto, String> {
        let payment_status = PaymentStatus::parse(&self.payment_status)
            .ok_or_else(|| format!("Unknown payment status '{}'", self.payment_status))?;
        let raw_date = self.expected_delivery_date.trim();
        let expected_delivery_date = if raw_date.is_empty() {
            None
        } else {
            Some(
                NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
                    .map_err(|_| "Expected delivery date must be YYYY-MM-DD".to_string())?,
            )
        };
        Ok(UpdateOrderDto {
            payment_status,
            expected_delivery_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_json() -> serde_json::Value {
        serde_json::json!({
            "id": 1234,
            "user_id": 7,
            "total_price": "1200.00",
            "payment_status": "paid",
            "expected_delivery_date": "2025-02-14T00:00:00.000Z"
        })
    }

    #[test]
    fn test_order_decodes() {
        let order: Order = serde_json::from_value(order_json()).unwrap();
        assert_eq!(order.id, OrderId(1234));
        assert_eq!(order.user_id, Some(UserId(7)));
        assert_eq!(order.total_price, 1200.0);
        assert_eq!(order.payment_status, PaymentStatus::Paid);
        assert_eq!(
            order.expected_delivery_day(),
            NaiveDate::from_ymd_opt(2025, 2, 14)
        );
    }

    #[test]
    fn test_unknown_payment_status_is_rejected() {
        let mut raw = order_json();
        raw["payment_status"] = "refunded".into();
        assert!(serde_json::from_value::<Order>(raw).is_err());
    }

    #[test]
    fn test_payment_status_reads_any_case() {
        let mut raw = order_json();
        raw["payment_status"] = "Shipped".into();
        let order: Order = serde_json::from_value(raw).unwrap();
        assert_eq!(order.payment_status, PaymentStatus::Shipped);
        assert_eq!(
            serde_json::to_value(order.payment_status).unwrap(),
            serde_json::json!("shipped")
        );
    }

    #[test]
    fn test_update_body_uses_plain_date() {
        let form = OrderForm {
            payment_status: "shipped".into(),
            expected_delivery_date: "2025-03-01".into(),
        };
        let body = serde_json::to_value(form.to_dto().unwrap()).unwrap();
        assert_eq!(body["payment_status"], "shipped");
        assert_eq!(body["expected_delivery_date"], "2025-03-01");
    }

    #[test]
    fn test_form_prefills_date_part_only() {
        let order: Order = serde_json::from_value(order_json()).unwrap();
        let form = OrderForm::from_order(&order);
        assert_eq!(form.payment_status, "paid");
        assert_eq!(form.expected_delivery_date, "2025-02-14");
    }

    #[test]
    fn test_form_rejects_bad_input() {
        let form = OrderForm {
            payment_status: "lost".into(),
            expected_delivery_date: String::new(),
        };
        assert!(form.to_dto().is_err());

        let form = OrderForm {
            payment_status: "paid".into(),
            expected_delivery_date: "14/02/2025".into(),
        };
        assert!(form.to_dto().is_err());
    }

    #[test]
    fn test_update_response_variants() {
        let direct: UpdateOrderResponse = serde_json::from_value(order_json()).unwrap();
        assert!(direct.into_order().is_some());

        let wrapped: UpdateOrderResponse =
            serde_json::from_value(serde_json::json!({ "order": order_json() })).unwrap();
        assert_eq!(wrapped.into_order().unwrap().id, OrderId(1234));

        let message: UpdateOrderResponse =
            serde_json::from_value(serde_json::json!({ "message": "Order updated" })).unwrap();
        assert!(message.into_order().is_none());
    }

    #[test]
    fn test_apply_update_patches_status_and_date() {
        let mut order: Order = serde_json::from_value(order_json()).unwrap();
        order.apply_update(&UpdateOrderDto {
            payment_status: PaymentStatus::Delivered,
            expected_delivery_date: None,
        });
        assert_eq!(order.payment_status, PaymentStatus::Delivered);
        assert!(order.expected_delivery_date.is_none());
    }
}
