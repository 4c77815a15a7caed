//! Derived views for the seller and admin screens: the filters behind the order
//! and user tables and the figures on their dashboards.
//!
//! Everything here is a pure function of a slice of records (and, for monthly
//! revenue, the current time), so callers fetch once with
//! [`ActorClient::list`](resource_actor::ActorClient::list) and compute locally.

use crate::clients::matches_query;
use crate::model::{Account, Order, OrderStatus, PaymentConfig, Price, TenantId, UserRole};
use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

/// Order table filter. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    /// Case-insensitive substring of the order id, customer name or tenant name.
    pub query: Option<String>,
    /// Seller view: orders attributed to this tenant or containing its items.
    pub tenant: Option<TenantId>,
}

impl OrderFilter {
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn for_tenant(mut self, tenant: TenantId) -> Self {
        self.tenant = Some(tenant);
        self
    }

    pub fn matches(&self, order: &Order) -> bool {
        if self.status.is_some_and(|status| status != order.status) {
            return false;
        }
        if self.tenant.as_ref().is_some_and(|tenant| !order.involves_tenant(tenant)) {
            return false;
        }
        match &self.query {
            Some(query) => {
                let id = order.id.to_string();
                matches_query(query, &[id.as_str(), order.customer_name.as_str(), order.tenant_name.as_str()])
            }
            None => true,
        }
    }
}

/// Order counts for the dashboard tiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OrderStats {
    pub total: usize,
    pub pending: usize,
    pub processing: usize,
    pub ready: usize,
    pub delivered: usize,
    pub cancelled: usize,
}

impl OrderStats {
    pub fn from_orders(orders: &[Order]) -> Self {
        let mut stats = Self::default();
        for order in orders {
            stats.total += 1;
            *stats.slot(order.status) += 1;
        }
        stats
    }

    pub fn count(&self, status: OrderStatus) -> usize {
        match status {
            OrderStatus::Pending => self.pending,
            OrderStatus::Processing => self.processing,
            OrderStatus::Ready => self.ready,
            OrderStatus::Delivered => self.delivered,
            OrderStatus::Cancelled => self.cancelled,
        }
    }

    /// Orders still being worked on.
    pub fn active(&self) -> usize {
        self.pending + self.processing + self.ready
    }

    fn slot(&mut self, status: OrderStatus) -> &mut usize {
        match status {
            OrderStatus::Pending => &mut self.pending,
            OrderStatus::Processing => &mut self.processing,
            OrderStatus::Ready => &mut self.ready,
            OrderStatus::Delivered => &mut self.delivered,
            OrderStatus::Cancelled => &mut self.cancelled,
        }
    }
}

/// Revenue figures. Only delivered orders count as revenue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RevenueSummary {
    pub total_revenue: Price,
    /// Delivered orders placed in the same calendar month (UTC) as `now`.
    pub month_revenue: Price,
    pub completed_orders: usize,
    pub items_sold: u64,
    /// Integer division of total revenue by completed orders; 0 without any.
    pub average_order_value: Price,
}

impl RevenueSummary {
    pub fn from_orders(orders: &[Order], now: DateTime<Utc>) -> Self {
        let mut summary = Self::default();
        for order in orders.iter().filter(|o| o.status == OrderStatus::Delivered) {
            summary.total_revenue += order.total;
            summary.completed_orders += 1;
            summary.items_sold += u64::from(order.item_count());
            if order.created_at.year() == now.year() && order.created_at.month() == now.month() {
                summary.month_revenue += order.total;
            }
        }
        if summary.completed_orders > 0 {
            summary.average_order_value = summary.total_revenue / summary.completed_orders as Price;
        }
        summary
    }
}

/// User table filter. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountFilter {
    /// Case-insensitive substring of the name or email.
    pub query: Option<String>,
    pub role: Option<UserRole>,
}

impl AccountFilter {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn matches(&self, account: &Account) -> bool {
        if self.role.is_some_and(|role| role != account.user.role) {
            return false;
        }
        match &self.query {
            Some(query) => matches_query(query, &[account.user.name.as_str(), account.user.email.as_str()]),
            None => true,
        }
    }
}

/// Counts for the payment settings page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PaymentStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

impl PaymentStats {
    pub fn from_configs(configs: &[PaymentConfig]) -> Self {
        let active = configs.iter().filter(|config| config.active).count();
        Self {
            total: configs.len(),
            active,
            inactive: configs.len() - active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartLine;
    use crate::model::{AccountId, Item, ItemId, OrderId, PaymentConfigId, PaymentMethod, User, UserId};
    use chrono::TimeZone;

    fn order(id: u32, tenant: u32, customer: &str, status: OrderStatus, total: Price, month: u32) -> Order {
        let placed = Utc.with_ymd_and_hms(2024, month, 10, 9, 0, 0).unwrap();
        Order {
            id: OrderId(id),
            customer_id: UserId(customer.to_lowercase()),
            customer_name: customer.to_string(),
            tenant_id: TenantId(tenant),
            tenant_name: format!("Tenant {tenant}"),
            items: vec![CartLine {
                item: Item {
                    id: ItemId(id),
                    tenant_id: TenantId(tenant),
                    tenant_name: format!("Tenant {tenant}"),
                    name: "Menu".to_string(),
                    description: String::new(),
                    category: "Makanan".to_string(),
                    price: total - 2_000,
                    stock: 1,
                    available: true,
                },
                quantity: 1,
            }],
            subtotal: total - 2_000,
            service_fee: 2_000,
            total,
            status,
            payment_method: PaymentMethod::Qris,
            notes: None,
            created_at: placed,
            updated_at: placed,
        }
    }

    fn sample() -> Vec<Order> {
        vec![
            order(1, 1, "Rina", OrderStatus::Delivered, 52_000, 5),
            order(2, 2, "Dimas", OrderStatus::Pending, 22_000, 5),
            order(3, 1, "Dimas", OrderStatus::Delivered, 12_000, 4),
            order(4, 2, "Rina", OrderStatus::Cancelled, 30_000, 5),
        ]
    }

    #[test]
    fn test_filter_by_status_query_and_tenant() {
        let orders = sample();
        let ids = |filter: OrderFilter| -> Vec<u32> {
            orders.iter().filter(|o| filter.matches(o)).map(|o| o.id.0).collect()
        };

        assert_eq!(ids(OrderFilter::default()), [1, 2, 3, 4]);
        assert_eq!(ids(OrderFilter::default().with_status(OrderStatus::Delivered)), [1, 3]);
        assert_eq!(ids(OrderFilter::default().with_query("dimas")), [2, 3]);
        assert_eq!(ids(OrderFilter::default().with_query("ORDER_4")), [4]);
        assert_eq!(ids(OrderFilter::default().for_tenant(TenantId(2)).with_query("rina")), [4]);
    }

    #[test]
    fn test_tenant_filter_sees_foreign_lines() {
        let mut mixed = order(5, 1, "Rina", OrderStatus::Pending, 10_000, 5);
        mixed.items[0].item.tenant_id = TenantId(3);

        assert!(OrderFilter::default().for_tenant(TenantId(3)).matches(&mixed));
        assert!(OrderFilter::default().for_tenant(TenantId(1)).matches(&mixed));
        assert!(!OrderFilter::default().for_tenant(TenantId(2)).matches(&mixed));
    }

    #[test]
    fn test_stats_count_every_status() {
        let stats = OrderStats::from_orders(&sample());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.count(OrderStatus::Delivered), 2);
        assert_eq!(stats.count(OrderStatus::Ready), 0);
        assert_eq!(stats.active(), 1);
    }

    #[test]
    fn test_revenue_counts_delivered_only() {
        let now = Utc.with_ymd_and_hms(2024, 5, 20, 0, 0, 0).unwrap();
        let summary = RevenueSummary::from_orders(&sample(), now);

        assert_eq!(summary.total_revenue, 64_000);
        assert_eq!(summary.month_revenue, 52_000);
        assert_eq!(summary.completed_orders, 2);
        assert_eq!(summary.items_sold, 2);
        assert_eq!(summary.average_order_value, 32_000);
    }

    #[test]
    fn test_revenue_without_completed_orders() {
        let summary = RevenueSummary::from_orders(&[], Utc::now());
        assert_eq!(summary, RevenueSummary::default());
    }

    fn account(id: u32, name: &str, email: &str, role: UserRole) -> Account {
        Account {
            id: AccountId(id),
            user: User {
                id: UserId(format!("u-{id}")),
                name: name.to_string(),
                email: email.to_string(),
                role,
                avatar: None,
                created_at: Utc.with_ymd_and_hms(2024, 1, id, 0, 0, 0).unwrap(),
            },
            active: true,
        }
    }

    #[test]
    fn test_account_filter_by_query_and_role() {
        let accounts = [
            account(1, "Admin User", "admin@digibite.com", UserRole::Admin),
            account(2, "Ibu Jaya", "jaya@seller.com", UserRole::Seller),
            account(3, "John Doe", "john@student.com", UserRole::User),
            account(4, "Jane Smith", "jane@student.com", UserRole::User),
        ];
        let ids = |filter: AccountFilter| -> Vec<u32> {
            accounts.iter().filter(|a| filter.matches(a)).map(|a| a.id.0).collect()
        };

        assert_eq!(ids(AccountFilter::default()), [1, 2, 3, 4]);
        assert_eq!(ids(AccountFilter::default().with_role(UserRole::User)), [3, 4]);
        assert_eq!(ids(AccountFilter::default().with_query("STUDENT.com")), [3, 4]);
        assert_eq!(ids(AccountFilter::default().with_query("jaya")), [2]);
        assert!(ids(AccountFilter::default().with_query("jane").with_role(UserRole::Seller)).is_empty());
    }

    #[test]
    fn test_payment_stats() {
        let config = |id: u32, active: bool| PaymentConfig {
            id: PaymentConfigId(id),
            name: format!("Method {id}"),
            code: PaymentMethod::Cash,
            description: "Bayar di kasir".to_string(),
            instructions: String::new(),
            bank: None,
            qris_image: None,
            active,
        };
        let stats = PaymentStats::from_configs(&[config(1, true), config(2, false), config(3, true)]);
        assert_eq!(stats, PaymentStats { total: 3, active: 2, inactive: 1 });
    }
}
