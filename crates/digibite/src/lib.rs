//! # Digibite
//!
//! The ordering core of a campus food court: a cart ledger, a checkout that turns
//! the cart into an order, and an order log whose status sellers and admins move
//! along.
//!
//! ## Layout
//!
//! - [`model`]: plain data ([`Item`](model::Item), [`Tenant`](model::Tenant),
//!   [`Order`](model::Order), [`User`](model::User), [`PaymentConfig`](model::PaymentConfig),
//!   [`Account`](model::Account))
//! - [`cart`]: the [`Cart`](cart::Cart) ledger, owned by one session
//! - [`catalog_actor`], [`tenant_actor`], [`order_actor`], [`payment_actor`],
//!   [`account_actor`]: one [`ResourceActor`](resource_actor::ResourceActor) per resource
//! - [`clients`]: typed handles to those actors
//! - [`checkout`]: [`Checkout`](checkout::Checkout), cart to order
//! - [`session`]: [`ShopSession`](session::ShopSession), a customer's cart plus clients
//! - [`identity`]: login and the persisted auth state
//! - [`reports`]: order and user filters, counts and revenue
//! - [`lifecycle`]: [`FoodCourt`](lifecycle::FoodCourt), which starts and stops it all
//!
//! ## Testing
//!
//! See [`resource_actor::mock`] for testing clients without spawning actors, and
//! [`clock::ManualClock`] for pinning timestamps.

pub mod account_actor;
pub mod cart;
pub mod catalog_actor;
pub mod checkout;
pub mod clients;
pub mod clock;
pub mod config;
pub mod identity;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod payment_actor;
pub mod reports;
pub mod session;
pub mod tenant_actor;
