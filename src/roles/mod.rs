//! Administrator and banned user roles.

mod store;

pub use store::{RoleStore, Roles, CREATOR_SLOTS};
