//! Demo data: four tenants and their menus, the payment methods and the user
//! directory.

use super::FoodCourt;
use crate::account_actor::AccountError;
use crate::catalog_actor::CatalogError;
use crate::model::{
    AccountId, BankAccount, ItemCreate, ItemId, PaymentConfigCreate, PaymentConfigId, PaymentMethod, Price,
    TenantCreate, TenantId, User, UserId, UserRole,
};
use crate::payment_actor::PaymentError;
use crate::tenant_actor::TenantError;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Tenant(#[from] TenantError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    Account(#[from] AccountError),
}

/// Ids created by [`FoodCourt::seed`], in seeding order.
#[derive(Debug, Clone, Default)]
pub struct Seeded {
    pub tenants: Vec<TenantId>,
    pub items: Vec<ItemId>,
    pub payment_methods: Vec<PaymentConfigId>,
    pub accounts: Vec<AccountId>,
}

struct SeedTenant {
    name: &'static str,
    description: &'static str,
    owner: &'static str,
    category: &'static str,
    rating: f32,
    menu: &'static [(&'static str, &'static str, Price, u32)],
}

const TENANTS: &[SeedTenant] = &[
    SeedTenant {
        name: "Warung Makan Jaya",
        description: "Masakan rumahan khas Indonesia",
        owner: "Ibu Jaya",
        category: "Indonesian",
        rating: 4.8,
        menu: &[
            ("Nasi Goreng Spesial", "Nasi goreng dengan telur dan ayam suwir", 15_000, 50),
            ("Ayam Geprek", "Ayam goreng tepung dengan sambal bawang", 20_000, 30),
            ("Es Teh Manis", "Teh manis dingin", 5_000, 100),
        ],
    },
    SeedTenant {
        name: "Ramen House",
        description: "Ramen dan donburi ala Jepang",
        owner: "Kenji Tanaka",
        category: "Japanese",
        rating: 4.6,
        menu: &[
            ("Shoyu Ramen", "Kuah kecap dengan chashu", 35_000, 20),
            ("Gyudon", "Nasi dengan irisan daging sapi", 32_000, 15),
        ],
    },
    SeedTenant {
        name: "Healthy Bowl",
        description: "Salad dan bowl sehat",
        owner: "Sarah Wijaya",
        category: "Healthy",
        rating: 4.5,
        menu: &[
            ("Chicken Salad Bowl", "Sayuran segar dengan dada ayam panggang", 28_000, 25),
            ("Smoothie Bowl", "Buah campur dengan granola", 25_000, 20),
        ],
    },
    SeedTenant {
        name: "Burger & Grill Station",
        description: "Burger dan menu panggang",
        owner: "Andi Pratama",
        category: "Western",
        rating: 4.4,
        menu: &[
            ("Classic Beef Burger", "Patty sapi dengan keju cheddar", 30_000, 40),
            ("French Fries", "Kentang goreng renyah", 12_000, 60),
        ],
    },
];

struct SeedAccount {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    role: UserRole,
    active: bool,
}

const ACCOUNTS: &[SeedAccount] = &[
    SeedAccount {
        id: "admin-1",
        name: "Admin User",
        email: "admin@digibite.com",
        role: UserRole::Admin,
        active: true,
    },
    SeedAccount {
        id: "seller-1",
        name: "Ibu Jaya",
        email: "jaya@seller.com",
        role: UserRole::Seller,
        active: true,
    },
    SeedAccount {
        id: "user-1",
        name: "John Doe",
        email: "john@student.com",
        role: UserRole::User,
        active: true,
    },
    SeedAccount {
        id: "user-2",
        name: "Jane Smith",
        email: "jane@student.com",
        role: UserRole::User,
        active: false,
    },
];

fn payment_methods() -> Vec<PaymentConfigCreate> {
    vec![
        PaymentConfigCreate {
            name: "Cash Payment".to_string(),
            code: PaymentMethod::Cash,
            description: "Pay with cash at the counter".to_string(),
            instructions: "Please pay at the cashier counter when your order is ready.".to_string(),
            bank: None,
            qris_image: None,
        },
        PaymentConfigCreate {
            name: "QRIS Payment".to_string(),
            code: PaymentMethod::Qris,
            description: "Scan QR code to pay".to_string(),
            instructions: "Scan the QR code using your mobile banking or e-wallet app.".to_string(),
            bank: None,
            qris_image: Some(
                "https://api.qrserver.com/v1/create-qr-code/?size=200x200&data=DIGIBITE-QRIS-PAYMENT".to_string(),
            ),
        },
        PaymentConfigCreate {
            name: "Bank Transfer".to_string(),
            code: PaymentMethod::Transfer,
            description: "Transfer to our bank account".to_string(),
            instructions: "Transfer the exact amount to the bank account below.".to_string(),
            bank: Some(BankAccount {
                bank_name: "BCA".to_string(),
                account_number: "1234567890".to_string(),
                account_name: "PT Digibite Indonesia".to_string(),
            }),
            qris_image: None,
        },
    ]
}

impl FoodCourt {
    /// Registers the demo tenants, menus, payment methods and accounts.
    pub async fn seed(&self) -> Result<Seeded, SeedError> {
        let mut seeded = Seeded::default();
        for (index, tenant) in TENANTS.iter().enumerate() {
            let tenant_id = self
                .tenants
                .create_tenant(TenantCreate {
                    name: tenant.name.to_string(),
                    description: tenant.description.to_string(),
                    owner_id: UserId(format!("seller-{}", index + 1)),
                    owner_name: tenant.owner.to_string(),
                    category: tenant.category.to_string(),
                    rating: tenant.rating,
                })
                .await?;

            for &(name, description, price, stock) in tenant.menu {
                let item_id = self
                    .catalog
                    .create_item(ItemCreate {
                        tenant_id: tenant_id.clone(),
                        tenant_name: tenant.name.to_string(),
                        name: name.to_string(),
                        description: description.to_string(),
                        category: tenant.category.to_string(),
                        price,
                        stock,
                    })
                    .await?;
                seeded.items.push(item_id);
            }
            seeded.tenants.push(tenant_id);
        }

        for params in payment_methods() {
            seeded.payment_methods.push(self.payments.create_method(params).await?);
        }

        for account in ACCOUNTS {
            let id = self
                .accounts
                .register(User {
                    id: UserId(account.id.to_string()),
                    name: account.name.to_string(),
                    email: account.email.to_string(),
                    role: account.role,
                    avatar: Some(format!(
                        "https://api.dicebear.com/7.x/avataaars/svg?seed={}",
                        account.email
                    )),
                    created_at: self.clock.now(),
                })
                .await?;
            if !account.active {
                self.accounts.toggle_active(id.clone()).await?;
            }
            seeded.accounts.push(id);
        }

        info!(
            tenants = seeded.tenants.len(),
            items = seeded.items.len(),
            payment_methods = seeded.payment_methods.len(),
            accounts = seeded.accounts.len(),
            "Demo data seeded"
        );
        Ok(seeded)
    }
}
