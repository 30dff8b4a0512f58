use thiserror::Error;

use crate::models::{Network, Step, Token};

/// Errors produced when an event cannot be applied to the checkout session.
///
/// None of these are fatal: the session is left untouched and the widget
/// keeps running.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckoutError {
    #[error("Email address is required")]
    EmailRequired,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Fiat payment is not implemented in this demo")]
    FiatUnsupported,

    #[error("{event} is not allowed on the {step:?} step")]
    EventNotAllowed { step: Step, event: &'static str },

    #[error("{network} is not offered for {token}")]
    NetworkMismatch { token: Token, network: Network },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad user input, shown inline next to the field.
    Validation,
    /// A feature the widget does not offer, shown as a notice.
    Unsupported,
    /// An event the current screen cannot produce. Logged only.
    Flow,
}

impl CheckoutError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CheckoutError::EmailRequired | CheckoutError::InvalidEmail => ErrorKind::Validation,
            CheckoutError::FiatUnsupported => ErrorKind::Unsupported,
            CheckoutError::EventNotAllowed { .. } | CheckoutError::NetworkMismatch { .. } => {
                ErrorKind::Flow
            }
        }
    }

    /// Text for the blocking notice, for errors that get one.
    pub fn notice(&self) -> Option<String> {
        (self.kind() == ErrorKind::Unsupported).then(|| self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_what_the_user_sees() {
        assert_eq!(CheckoutError::EmailRequired.to_string(), "Email address is required");
        assert_eq!(
            CheckoutError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            CheckoutError::FiatUnsupported.to_string(),
            "Fiat payment is not implemented in this demo"
        );
    }

    #[test]
    fn kinds() {
        assert_eq!(CheckoutError::InvalidEmail.kind(), ErrorKind::Validation);
        assert_eq!(CheckoutError::FiatUnsupported.kind(), ErrorKind::Unsupported);
        let err = CheckoutError::NetworkMismatch { token: Token::Usdt, network: Network::Btc };
        assert_eq!(err.kind(), ErrorKind::Flow);
        assert_eq!(err.to_string(), "BTC is not offered for USDT");
    }

    #[test]
    fn only_unsupported_features_raise_a_notice() {
        assert_eq!(
            CheckoutError::FiatUnsupported.notice().as_deref(),
            Some("Fiat payment is not implemented in this demo")
        );
        assert_eq!(CheckoutError::InvalidEmail.notice(), None);
        let err = CheckoutError::EventNotAllowed { step: Step::Success, event: "Back" };
        assert_eq!(err.notice(), None);
    }
}
