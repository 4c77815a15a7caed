//! Plain data types. The catalog, tenant, order, payment and account types implement
//! [`ActorEntity`](resource_actor::ActorEntity) in their actor modules.

pub mod account;
pub mod item;
pub mod order;
pub mod payment;
pub mod tenant;
pub mod user;

pub use account::*;
pub use item::*;
pub use order::*;
pub use payment::*;
pub use tenant::*;
pub use user::*;
