//! Dotted-quad parsing and formatting.
//!
//! A [`Quad`] holds the four octets of an IPv4 address, mask, wildcard,
//! network or broadcast value, most significant octet first.

use crate::error::CalcError;
use itertools::Itertools;

/// Four octets, most significant first.
pub type Quad = [u8; OCTETS];

/// Number of octets in a [`Quad`].
pub const OCTETS: usize = 4;

/// Parse a dotted string (e.g. "192.168.1.10") into a [`Quad`].
///
/// Every segment must be an unsigned integer in 0-255 and there must be
/// exactly four of them.
///
/// # Examples
/// ```
/// use netcalc_bot::models::parse_quad;
/// assert_eq!(parse_quad("10.0.0.1").unwrap(), [10, 0, 0, 1]);
/// assert!(parse_quad("abc.1.2.3").is_err());
/// ```
pub fn parse_quad(input: &str) -> Result<Quad, CalcError> {
    let input = input.trim();
    let octets = input
        .split('.')
        .map(|segment| parse_octet(input, segment))
        .collect::<Result<Vec<u8>, CalcError>>()?;

    Quad::try_from(octets.as_slice()).map_err(|_| CalcError::WrongOctetCount {
        input: input.to_string(),
        found: octets.len(),
    })
}

fn parse_octet(input: &str, segment: &str) -> Result<u8, CalcError> {
    let value: u32 = segment.parse().map_err(|_| CalcError::MalformedQuad {
        input: input.to_string(),
        segment: segment.to_string(),
    })?;
    u8::try_from(value).map_err(|_| CalcError::OctetOutOfRange {
        input: input.to_string(),
        value,
    })
}

/// Render a [`Quad`] as "a.b.c.d".
pub fn format_quad(quad: &Quad) -> String {
    quad.iter().join(".")
}
