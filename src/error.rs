//! Error types for the address calculator and the role store.

use thiserror::Error;

/// Errors raised while parsing or calculating an IPv4 network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Malformed octet '{segment}' in '{input}'")]
    MalformedQuad { input: String, segment: String },

    #[error("Expected 4 octets in '{input}', found {found}")]
    WrongOctetCount { input: String, found: usize },

    #[error("Octet {value} out of range 0-255 in '{input}'")]
    OctetOutOfRange { input: String, value: u32 },

    #[error("Prefix length {0} out of range 0-32")]
    PrefixOutOfRange(u32),

    #[error("Netmask {0} has non-contiguous bits")]
    NonContiguousMask(String),
}

/// Errors raised by the role store.
#[derive(Error, Debug)]
pub enum RoleError {
    #[error("Roles file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Roles JSON error: {0}")]
    Json(String),

    #[error("Unable to remove user {0} from admins, they are a creator of this bot")]
    CreatorProtected(i64),

    #[error("User {0} is currently an admin, unable to ban them")]
    AdminCannotBeBanned(i64),
}

impl From<serde_json::Error> for RoleError {
    fn from(e: serde_json::Error) -> Self {
        RoleError::Json(e.to_string())
    }
}
