use chrono::{TimeZone, Utc};
use digibite::catalog_actor::CatalogError;
use digibite::clock::{ManualClock, SharedClock};
use digibite::config::Config;
use digibite::lifecycle::FoodCourt;
use digibite::checkout::CheckoutError;
use digibite::model::{
    BankAccount, ItemCreate, ItemUpdate, OrderStatus, PaymentConfigCreate, PaymentConfigUpdate, PaymentMethod,
    TenantUpdate, UserRole,
};
use digibite::payment_actor::PaymentError;
use digibite::reports::{AccountFilter, OrderFilter, OrderStats, PaymentStats, RevenueSummary};
use digibite::session::SessionError;
use digibite::tenant_actor::TenantError;
use resource_actor::ActorClient;
use std::sync::Arc;

fn config() -> Config {
    Config::default().without_delays()
}

/// Full end-to-end run with all real actors.
#[tokio::test]
async fn test_full_food_court_flow() {
    let clock: SharedClock = Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2024, 6, 3, 12, 0, 0).unwrap()));
    let court = FoodCourt::with_clock(config(), clock);
    let seeded = court.seed().await.expect("Failed to seed");
    assert_eq!(seeded.tenants.len(), 4);

    let mut auth = court.auth().await.unwrap();
    assert!(court.sign_in(&mut auth, "rina@kampus.ac.id", "rahasia", UserRole::User).await.unwrap());
    let customer = auth.user().cloned().unwrap();

    let mut shop = court.shop(customer.clone());
    let nasi = seeded.items[0].clone();
    let ayam = seeded.items[1].clone();
    shop.add_to_cart(nasi.clone(), 2).await.unwrap();
    shop.add_to_cart(ayam.clone(), 1).await.unwrap();
    shop.add_to_cart(nasi.clone(), 1).await.unwrap();
    shop.update_quantity(&nasi, 2);
    assert_eq!(shop.quote().subtotal, 50_000);

    let order = shop.checkout(PaymentMethod::Cash, None).await.unwrap();
    assert_eq!(order.total, 52_000);
    assert_eq!(order.tenant_name, "Warung Makan Jaya");
    assert!(shop.cart().is_empty());

    // Stock is informational only.
    assert_eq!(court.catalog.check_stock(nasi).await.unwrap(), 50);

    let seller_view = court
        .orders
        .find(&OrderFilter::default().for_tenant(order.tenant_id.clone()).with_status(OrderStatus::Pending))
        .await
        .unwrap();
    assert_eq!(seller_view.len(), 1);

    court.orders.transition(order.id.clone(), OrderStatus::Delivered).await.unwrap();
    let all = court.orders.list().await.unwrap();
    assert_eq!(OrderStats::from_orders(&all).delivered, 1);
    let revenue = RevenueSummary::from_orders(&all, court.clock.now());
    assert_eq!(revenue.month_revenue, 52_000);
    assert_eq!(revenue.items_sold, 3);

    let history = court.orders.orders_for_customer(&customer.id).await.unwrap();
    assert_eq!(history.len(), 1);

    drop(shop);
    court.shutdown().await.expect("Actors did not stop cleanly");
}

#[tokio::test]
async fn test_unavailable_items_stay_out_of_the_cart() {
    let court = FoodCourt::new(config());
    let seeded = court.seed().await.unwrap();
    let teh = seeded.items[2].clone();

    assert!(!court.catalog.toggle_availability(teh.clone()).await.unwrap());
    let available = court.catalog.available_items().await.unwrap();
    assert!(available.iter().all(|item| item.id != teh));

    let mut auth = court.auth().await.unwrap();
    auth.login("dimas@kampus.ac.id", "x", UserRole::User).await.unwrap();
    let mut shop = court.shop(auth.user().cloned().unwrap());

    let result = shop.add_to_cart(teh, 1).await;
    assert!(matches!(result, Err(SessionError::Unavailable(_))));
    assert!(shop.cart().is_empty());
}

#[tokio::test]
async fn test_seller_and_admin_management() {
    let court = FoodCourt::new(config());
    let seeded = court.seed().await.unwrap();
    let jaya = seeded.tenants[0].clone();

    let menu = court.catalog.items_for_tenant(&jaya).await.unwrap();
    assert_eq!(menu.len(), 3);

    let new_item = court
        .catalog
        .create_item(ItemCreate {
            tenant_id: jaya.clone(),
            tenant_name: "Warung Makan Jaya".to_string(),
            name: "Soto Ayam".to_string(),
            description: "Soto kuning".to_string(),
            category: "Indonesian".to_string(),
            price: 18_000,
            stock: 20,
        })
        .await
        .unwrap();
    let updated = court
        .catalog
        .update_item(new_item.clone(), ItemUpdate { price: Some(19_000), ..Default::default() })
        .await
        .unwrap();
    assert_eq!(updated.price, 19_000);

    let rejected = court
        .catalog
        .update_item(new_item.clone(), ItemUpdate { name: Some(" ".to_string()), ..Default::default() })
        .await;
    assert_eq!(rejected, Err(CatalogError::EmptyName));
    assert_eq!(court.catalog.get(new_item.clone()).await.unwrap().unwrap().name, "Soto Ayam");

    court.catalog.delete(new_item.clone()).await.unwrap();
    assert_eq!(
        court.catalog.check_stock(new_item.clone()).await,
        Err(CatalogError::NotFound(new_item.to_string()))
    );

    assert_eq!(court.tenants.search("ibu jaya").await.unwrap().len(), 1);
    assert!(!court.tenants.toggle_active(jaya.clone()).await.unwrap());
    assert_eq!(court.tenants.active_tenants().await.unwrap().len(), 3);
    assert_eq!(
        court
            .tenants
            .update_tenant(jaya, TenantUpdate { name: Some(String::new()), ..Default::default() })
            .await,
        Err(TenantError::EmptyName)
    );

    court.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_login_survives_restart_with_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        session_dir: Some(dir.path().to_path_buf()),
        ..config()
    };

    let court = FoodCourt::new(config.clone());
    let mut auth = court.auth().await.unwrap();
    auth.login("ibu.jaya@digibite.id", "x", UserRole::Seller).await.unwrap();
    let user = auth.user().cloned().unwrap();
    court.shutdown().await.unwrap();

    assert!(dir.path().join("auth-storage.json").exists());

    let restarted = FoodCourt::new(config);
    let mut auth = restarted.auth().await.unwrap();
    assert!(auth.is_authenticated());
    assert_eq!(auth.user(), Some(&user));
    assert_eq!(auth.user().unwrap().role, UserRole::Seller);

    // Orders do not survive.
    assert!(restarted.orders.list().await.unwrap().is_empty());

    auth.logout().await.unwrap();
    assert!(!restarted.auth().await.unwrap().is_authenticated());
    restarted.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_history_is_most_recent_first() {
    let manual = ManualClock::new(Utc.with_ymd_and_hms(2024, 6, 3, 12, 0, 0).unwrap());
    let court = FoodCourt::with_clock(config(), Arc::new(manual.clone()));
    let seeded = court.seed().await.unwrap();

    let mut auth = court.auth().await.unwrap();
    auth.login("rina@kampus.ac.id", "x", UserRole::User).await.unwrap();
    let customer = auth.user().cloned().unwrap();
    let mut shop = court.shop(customer.clone());

    let mut placed = Vec::new();
    for item in &seeded.items[..3] {
        shop.add_to_cart(item.clone(), 1).await.unwrap();
        placed.push(shop.checkout(PaymentMethod::default(), None).await.unwrap().id);
        manual.advance(chrono::Duration::minutes(5));
    }

    let history: Vec<_> = court
        .orders
        .orders_for_customer(&customer.id)
        .await
        .unwrap()
        .into_iter()
        .map(|order| order.id)
        .collect();
    placed.reverse();
    assert_eq!(history, placed);
}

#[tokio::test]
async fn test_admin_payment_settings_gate_checkout() {
    let court = FoodCourt::new(config());
    let seeded = court.seed().await.unwrap();
    assert_eq!(seeded.payment_methods.len(), 3);

    let all = court.payments.list().await.unwrap();
    assert_eq!(PaymentStats::from_configs(&all), PaymentStats { total: 3, active: 3, inactive: 0 });
    let transfer = court.payments.search("bank").await.unwrap();
    assert_eq!(transfer.len(), 1);
    assert_eq!(transfer[0].bank.as_ref().unwrap().bank_name, "BCA");

    let cash = seeded.payment_methods[0].clone();
    assert!(!court.payments.toggle_active(cash.clone()).await.unwrap());

    let mut auth = court.auth().await.unwrap();
    court.sign_in(&mut auth, "john@student.com", "x", UserRole::User).await.unwrap();
    let mut shop = court.shop(auth.user().cloned().unwrap());
    shop.add_to_cart(seeded.items[0].clone(), 1).await.unwrap();

    let refused = shop.checkout(PaymentMethod::Cash, None).await;
    assert!(matches!(
        refused,
        Err(SessionError::Checkout(CheckoutError::PaymentUnavailable(PaymentMethod::Cash)))
    ));
    assert_eq!(shop.cart().total_items(), 1);

    let edited = court
        .payments
        .update_method(
            transfer[0].id.clone(),
            PaymentConfigUpdate {
                bank: Some(BankAccount {
                    bank_name: "Mandiri".to_string(),
                    account_number: "9876543210".to_string(),
                    account_name: "PT Digibite Indonesia".to_string(),
                }),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(edited.bank.unwrap().bank_name, "Mandiri");
    assert_eq!(
        court
            .payments
            .create_method(PaymentConfigCreate {
                name: "E-Wallet".to_string(),
                code: PaymentMethod::Qris,
                description: String::new(),
                instructions: String::new(),
                bank: None,
                qris_image: None,
            })
            .await,
        Err(PaymentError::EmptyDescription)
    );

    let order = shop.checkout(PaymentMethod::Transfer, None).await.unwrap();
    assert_eq!(order.payment_method, PaymentMethod::Transfer);

    court.payments.delete(cash).await.unwrap();
    let remaining = court.payments.list().await.unwrap();
    assert_eq!(PaymentStats::from_configs(&remaining), PaymentStats { total: 2, active: 2, inactive: 0 });

    drop(shop);
    court.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_user_directory() {
    let court = FoodCourt::new(config());
    let seeded = court.seed().await.unwrap();
    assert_eq!(seeded.accounts.len(), 4);

    let students = court
        .accounts
        .find(&AccountFilter::default().with_role(UserRole::User))
        .await
        .unwrap();
    let names: Vec<_> = students.iter().map(|a| a.user.name.as_str()).collect();
    assert_eq!(names, ["John Doe", "Jane Smith"]);
    assert!(!students[1].active);

    let found = court
        .accounts
        .find(&AccountFilter::default().with_query("SELLER.COM"))
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].user.role, UserRole::Seller);

    // Deactivated accounts cannot sign in, and auth is left untouched.
    let mut auth = court.auth().await.unwrap();
    assert!(!court.sign_in(&mut auth, "jane@student.com", "x", UserRole::User).await.unwrap());
    assert!(!auth.is_authenticated());

    let jane = seeded.accounts[3].clone();
    assert!(court.accounts.toggle_active(jane).await.unwrap());
    assert!(court.sign_in(&mut auth, "jane@student.com", "x", UserRole::User).await.unwrap());

    // A first sign-in registers the user; later ones reuse the entry.
    assert!(court.sign_in(&mut auth, "rina@kampus.ac.id", "x", UserRole::User).await.unwrap());
    assert!(court.sign_in(&mut auth, "Rina@Kampus.ac.id", "x", UserRole::User).await.unwrap());
    let all = court.accounts.list().await.unwrap();
    assert_eq!(all.len(), 5);
    let rina = court.accounts.find_by_email("rina@kampus.ac.id").await.unwrap().unwrap();
    assert_eq!(rina.user.name, "rina");
    assert!(rina.active);

    assert!(!court.accounts.toggle_active(rina.id).await.unwrap());
    assert!(!court.sign_in(&mut auth, "rina@kampus.ac.id", "x", UserRole::User).await.unwrap());
    assert_eq!(auth.user().unwrap().email, "Rina@Kampus.ac.id");

    court.shutdown().await.unwrap();
}
