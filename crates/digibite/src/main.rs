//! A scripted run through the food court: a customer logs in, browses, fills a
//! cart and pays; the seller moves the order along; the admin reads the numbers.
//!
//! ```bash
//! RUST_LOG=info cargo run -p digibite
//! DIGIBITE_CHECKOUT_DELAY_MS=0 DIGIBITE_SESSION_DIR=/tmp/digibite cargo run -p digibite
//! ```

use digibite::config::Config;
use digibite::lifecycle::{setup_tracing, FoodCourt};
use digibite::model::{OrderStatus, PaymentMethod, UserRole};
use digibite::reports::{AccountFilter, OrderFilter, OrderStats, PaymentStats, RevenueSummary};
use resource_actor::ActorClient;
use std::error::Error;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let court = FoodCourt::new(Config::from_env());
    let seeded = court.seed().await?;

    let mut auth = court.auth().await?;
    if !auth.is_authenticated() {
        court.sign_in(&mut auth, "rina@kampus.ac.id", "rahasia", UserRole::User).await?;
    }
    let customer = auth.user().cloned().ok_or("login did not produce a user")?;
    info!(user = %customer.name, "Customer session");

    let order = async {
        let mut shop = court.shop(customer.clone());
        let nasi = seeded.items[0].clone();
        let teh = seeded.items[2].clone();

        let hits = court.catalog.search("nasi").await?;
        info!(results = hits.len(), "Searched the menu");

        shop.add_to_cart(nasi.clone(), 2).await?;
        shop.add_to_cart(teh.clone(), 1).await?;
        shop.update_quantity(&teh, 2);

        let options = court.checkout().payment_options().await?;
        info!(methods = options.len(), "Payment options");

        let quote = shop.quote();
        info!(subtotal = quote.subtotal, fee = quote.service_fee, total = quote.total, "Cart ready");

        let order = shop
            .checkout(PaymentMethod::Qris, Some("Pedas ya".to_string()))
            .await?;
        info!(order_id = %order.id, items = shop.cart().total_items(), "Paid");
        Ok::<_, Box<dyn Error>>(order)
    }
    .instrument(tracing::info_span!("customer"))
    .await?;

    async {
        let orders = &court.orders;
        let mine = orders
            .find(&OrderFilter::default().for_tenant(order.tenant_id.clone()))
            .await?;
        info!(tenant = %order.tenant_name, incoming = mine.len(), "Seller order list");

        for status in [OrderStatus::Processing, OrderStatus::Ready, OrderStatus::Delivered] {
            orders.transition(order.id.clone(), status).await?;
        }
        Ok::<_, Box<dyn Error>>(())
    }
    .instrument(tracing::info_span!("seller"))
    .await?;

    let all = court.orders.list().await?;
    let stats = OrderStats::from_orders(&all);
    let revenue = RevenueSummary::from_orders(&all, court.clock.now());
    info!(
        orders = stats.total,
        delivered = stats.delivered,
        revenue = revenue.total_revenue,
        average = revenue.average_order_value,
        "Admin summary"
    );

    let students = court
        .accounts
        .find(&AccountFilter::default().with_role(UserRole::User))
        .await?;
    let payments = PaymentStats::from_configs(&court.payments.list().await?);
    info!(students = students.len(), payment_methods = payments.active, "Admin settings");

    let history = court.orders.orders_for_customer(&customer.id).await?;
    info!(orders = history.len(), "Order history");

    auth.logout().await?;
    court.shutdown().await?;
    Ok(())
}
