//! Domain model of the Wicket server: user records and the store
//! abstraction they are persisted behind.

mod id;

pub mod store;
pub mod user;

pub use self::id::UserId;
pub use self::store::{StoreError, UserStore};
pub use self::user::{InsertUser, User};
