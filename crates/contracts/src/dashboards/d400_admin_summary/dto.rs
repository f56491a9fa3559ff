use crate::domain::a003_order::aggregate::Order;
use crate::shared::serde_utils::{f64_lenient, i64_lenient, vec_skip_invalid};
use serde::{Deserialize, Serialize};

/// Response of `GET /admin`: headline totals plus the latest orders
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(default, alias = "totalSales", deserialize_with = "f64_lenient")]
    pub total_sales: f64,
    #[serde(default, alias = "totalOrders", deserialize_with = "i64_lenient")]
    pub total_orders: i64,
    #[serde(default, alias = "totalCustomers", deserialize_with = "i64_lenient")]
    pub total_customers: i64,
    #[serde(default, alias = "totalProducts", deserialize_with = "i64_lenient")]
    pub total_products: i64,
    /// Orders that fail to decode are left out so the totals still show.
    #[serde(default, alias = "recentOrders", deserialize_with = "vec_skip_invalid")]
    pub recent_orders: Vec<Order>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_order::aggregate::PaymentStatus;

    #[test]
    fn test_summary_decodes_snake_case() {
        let summary: DashboardSummary = serde_json::from_value(serde_json::json!({
            "total_sales": "120000.00",
            "total_orders": 350,
            "total_customers": "120",
            "total_products": 58,
            "recent_orders": [
                {"id": 1234, "customer_name": "John Doe", "total_price": 1200, "payment_status": "paid"},
                {"id": 1235, "customer_name": "Jane Smith", "total_price": "850", "payment_status": "pending"}
            ]
        }))
        .unwrap();
        assert_eq!(summary.total_sales, 120000.0);
        assert_eq!(summary.total_customers, 120);
        assert_eq!(summary.recent_orders.len(), 2);
        assert_eq!(summary.recent_orders[1].payment_status, PaymentStatus::Pending);
    }

    #[test]
    fn test_summary_tolerates_camel_case_and_missing_fields() {
        let summary: DashboardSummary = serde_json::from_value(serde_json::json!({
            "totalSales": 10.5,
            "recentOrders": null
        }))
        .unwrap();
        assert_eq!(summary.total_sales, 10.5);
        assert_eq!(summary.total_orders, 0);
        assert!(summary.recent_orders.is_empty());
    }

    #[test]
    fn test_summary_survives_odd_order_statuses() {
        let summary: DashboardSummary = serde_json::from_value(serde_json::json!({
            "total_sales": 500,
            "total_orders": 3,
            "recent_orders": [
                {"id": 1, "total_price": 100, "payment_status": "Paid"},
                {"id": 2, "total_price": 200, "payment_status": "cancelled"},
                {"id": 3, "total_price": 200, "payment_status": "DELIVERED"}
            ]
        }))
        .unwrap();
        assert_eq!(summary.total_sales, 500.0);
        assert_eq!(summary.total_orders, 3);
        let statuses: Vec<_> = summary
            .recent_orders
            .iter()
            .map(|o| (o.id.value(), o.payment_status))
            .collect();
        assert_eq!(
            statuses,
            vec![(1, PaymentStatus::Paid), (3, PaymentStatus::Delivered)]
        );
    }
}
