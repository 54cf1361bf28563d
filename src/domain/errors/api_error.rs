//! Remote API error types.

use thiserror::Error;

/// Errors raised while talking to the Pokédex API.
///
/// `Http` and `Network` carry a message meant for the user, so their
/// `Display` output is the message itself.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ApiError {
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("{message}")]
    Network { message: String },

    #[error("failed to decode response: {message}")]
    Decode { message: String },

    #[error("invalid Pokémon identifier: {value:?}")]
    InvalidIdentifier { value: String },

    #[error("unexpected error: {message}")]
    Unexpected { message: String },
}

impl ApiError {
    /// Creates HTTP status error.
    #[must_use]
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates invalid identifier error.
    #[must_use]
    pub fn invalid_identifier(value: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            value: value.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns the HTTP status, if the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: 404, .. })
    }

    /// Returns whether the failure came from the transport rather than the payload.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_user_message() {
        let err = ApiError::http(404, "We could not find what you are looking for.");
        assert_eq!(err.to_string(), "We could not find what you are looking for.");
        assert_eq!(err.status(), Some(404));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_network_error() {
        let err = ApiError::network("Could not connect to the server");
        assert!(err.is_network_error());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_invalid_identifier_display() {
        let err = ApiError::invalid_identifier("abc");
        assert_eq!(err.to_string(), "invalid Pokémon identifier: \"abc\"");
    }
}
