//! Subnet mask in both prefix-length and dotted form.

use super::quad::{format_quad, parse_quad, Quad};
use crate::error::CalcError;
use std::fmt;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Subnet mask held as prefix length and dotted quad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mask {
    /// Number of one-bits in the mask (0-32).
    pub prefix_len: u8,
    /// Dotted form, e.g. `[255, 255, 255, 0]`.
    pub dotted: Quad,
}

impl Mask {
    /// Build the canonical mask with `prefix_len` leading one-bits.
    ///
    /// # Examples
    /// ```
    /// use netcalc_bot::models::Mask;
    /// assert_eq!(Mask::from_prefix_len(20).unwrap().dotted, [255, 255, 240, 0]);
    /// ```
    pub fn from_prefix_len(prefix_len: u32) -> Result<Mask, CalcError> {
        if prefix_len > MAX_LENGTH as u32 {
            return Err(CalcError::PrefixOutOfRange(prefix_len));
        }

        let mut remaining = prefix_len;
        let mut dotted: Quad = [0; 4];
        for octet in dotted.iter_mut() {
            if remaining >= 8 {
                *octet = u8::MAX;
                remaining -= 8;
            } else {
                // remaining leading ones, 0 once the prefix is used up
                *octet = !(u8::MAX >> remaining);
                remaining = 0;
            }
        }

        Ok(Mask {
            prefix_len: prefix_len as u8,
            dotted,
        })
    }

    /// Wrap a dotted mask as given, counting its one-bits as the prefix length.
    ///
    /// The bits are not checked for contiguity: `255.0.255.0` yields a
    /// prefix length of 16 while keeping its dotted form. See
    /// [`Mask::is_contiguous`].
    pub fn from_dotted(dotted: Quad) -> Mask {
        let prefix_len = dotted.iter().map(|octet| octet.count_ones()).sum::<u32>() as u8;
        Mask { prefix_len, dotted }
    }

    /// True when the one-bits are all leading, i.e. the dotted form matches
    /// the canonical mask of `prefix_len`.
    pub fn is_contiguous(&self) -> bool {
        let bits = u32::from_be_bytes(self.dotted);
        bits.leading_ones() == bits.count_ones()
    }

    /// Bitwise complement of the mask.
    pub fn wildcard(&self) -> Quad {
        self.dotted.map(|octet| u8::MAX - octet)
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_quad(&self.dotted))
    }
}

/// Parse a mask given as dotted quad ("255.255.255.0"), bare prefix ("24")
/// or slash prefix ("/24").
pub fn parse_mask(input: &str) -> Result<Mask, CalcError> {
    let input = input.trim();
    let text = input.strip_prefix('/').unwrap_or(input);

    if text.contains('.') {
        return Ok(Mask::from_dotted(parse_quad(text)?));
    }

    let prefix_len: u32 = text.parse().map_err(|_| CalcError::MalformedQuad {
        input: input.to_string(),
        segment: text.to_string(),
    })?;
    Mask::from_prefix_len(prefix_len)
}

/// Split "a.b.c.d/nn" into address and optional prefix text.
pub fn split_cidr(input: &str) -> (&str, Option<&str>) {
    match input.trim().split_once('/') {
        Some((addr, prefix)) => (addr, Some(prefix)),
        None => (input.trim(), None),
    }
}
