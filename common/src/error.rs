use thiserror::Error;

/// Errors produced by the address engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The input could not be read as a dotted-decimal address.
    #[error("malformed address '{address}': {reason}")]
    Malformed { address: String, reason: String },
    /// The second operand of a modulus (or shift) encodes zero.
    #[error("division by zero: '{dividend}' mod '{divisor}'")]
    DivisionByZero { dividend: String, divisor: String },
    /// Zone classes are limited to A, B and C.
    #[error("invalid zone class '{0}', expected one of A, B, C")]
    InvalidZoneClass(String),
}

impl AddressError {
    pub fn malformed(address: &str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            address: address.to_string(),
            reason: reason.into(),
        }
    }
}
