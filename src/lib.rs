//! # netcalc-bot
//!
//! IPv4 network calculator behind a small command bot.
//!
//! - [`models`] - network arithmetic: netmask, wildcard, network, broadcast, host range
//! - [`bot`] - command parsing, routing and the text report
//! - [`roles`] - admin and ban lists persisted to a JSON file
//! - [`config`] - environment configuration
//! - [`output`] - console rendering of replies
//!
//! ```
//! use netcalc_bot::models::{calculate, format_quad};
//!
//! let info = calculate("172.16.5.5", "255.255.255.252").unwrap();
//! assert_eq!(info.host_min.map(|q| format_quad(&q)).unwrap(), "172.16.5.5");
//! assert_eq!(info.hosts_quantity, 2);
//! ```

pub mod bot;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod roles;

pub use config::Config;
pub use error::{CalcError, RoleError};
