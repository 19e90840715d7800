//! Chat bot front end.
//!
//! - [`command`] - parsing "/name args" lines
//! - [`router`] - dispatching commands to the calculator and role store
//! - [`report`] - text report of a calculated network

mod command;
mod report;
mod router;

pub use command::Command;
pub use report::render_report;
pub use router::{Reply, Router};
