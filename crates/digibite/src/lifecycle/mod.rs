//! # Lifecycle
//!
//! Starting, wiring and stopping the food court's actors.
//!
//! [`FoodCourt::new`] creates one actor per resource, spawns each on its own task
//! and keeps their clients. Dependencies are injected when an actor
//! starts (`run(context)`); the order actor's context is the shared clock.
//!
//! ## Shutdown
//!
//! Dropping every client closes the actors' mailboxes; each actor drains and exits,
//! and [`FoodCourt::shutdown`] awaits the tasks. Clients cloned out of the food
//! court (a [`Checkout`](crate::checkout::Checkout), a
//! [`ShopSession`](crate::session::ShopSession)) keep their actor alive, so drop
//! them first.
//!
//! ## Tracing
//!
//! [`setup_tracing`] installs the process-wide subscriber; see
//! [`resource_actor::tracing`].

pub mod food_court;
pub mod seed;

pub use food_court::*;
pub use resource_actor::tracing::setup_tracing;
pub use seed::*;
