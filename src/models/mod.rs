//! IPv4 network arithmetic.
//!
//! - [`Quad`] - four octets of an address, mask or derived value
//! - [`Mask`] - netmask as prefix length and dotted quad
//! - [`NetworkInfo`] - result of [`calculate`]

mod mask;
mod network;
mod quad;

pub use mask::{parse_mask, split_cidr, Mask, MAX_LENGTH};
pub use network::{calculate, calculate_with_mask, hosts_quantity, NetworkInfo};
pub use quad::{format_quad, parse_quad, Quad, OCTETS};
