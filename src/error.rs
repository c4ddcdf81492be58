//! Error types for the BudPay client.

use thiserror::Error;

/// Result type alias for BudPay client operations.
pub type Result<T> = std::result::Result<T, BudpayError>;

/// Errors that can occur when talking to the BudPay API.
#[derive(Debug, Error)]
pub enum BudpayError {
    /// The client is misconfigured, e.g. the secret key is missing.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// An HTTP verb other than GET or POST reached the request primitive.
    #[error("HTTP method must be GET or POST, got {0:?}")]
    EmptyMethod(String),

    /// Network or connection failure, propagated from the transport.
    #[error("request to BudPay failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the expected JSON envelope.
    #[error("malformed response from BudPay: {0}")]
    MalformedResponse(String),

    /// The gateway reported the transaction as not successfully verified.
    #[error("payment verification failed for reference {reference:?}")]
    PaymentVerificationFailed {
        /// Transaction reference that failed verification.
        reference: String,
    },

    /// An expected field was absent from the response data.
    #[error("response data has no {0:?} field")]
    MissingField(&'static str),
}
