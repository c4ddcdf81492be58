//! Rust client for the [BudPay](https://budpay.com) payment gateway.
//!
//! The client wraps BudPay's REST API: checkout initiation, transaction
//! verification, customers, dedicated virtual accounts, payment links,
//! refunds, payouts, bill payments (airtime, internet, TV, electricity)
//! and settlement queries. Every operation is one HTTP call returning
//! the gateway's `{ status, message, data }` envelope.
//!
//! # Usage
//!
//! ```rust,no_run
//! use budpay::{BudpayClient, BudpayConfig, Params};
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), budpay::BudpayError> {
//! let client = BudpayClient::new(BudpayConfig::new("sk_test_..."))?;
//!
//! let mut params = Params::new();
//! params.insert("amount".into(), json!(5000));
//! params.insert("email".into(), json!("customer@example.com"));
//! params.insert("reference".into(), json!("order-1234"));
//!
//! let checkout = client.standard_checkout(params).await?;
//! println!("pay at {}", checkout.authorization_url()?);
//! # Ok(())
//! # }
//! ```
//!
//! Verification follows the same gateway contract: the exact message
//! `"Verification successful"` means verified, anything else does not.
//!
//! ```rust,no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), budpay::BudpayError> {
//! # let client = budpay::BudpayClient::from_env()?;
//! let payment = client.get_payment_data("order-1234").await?;
//! println!("paid: {:?}", payment.data());
//! # Ok(())
//! # }
//! ```

mod bills;
mod client;
mod config;
mod error;
mod payouts;
mod response;

pub use client::{BudpayClient, INVALID_TRANSACTION_REFERENCE, VERIFICATION_SUCCESSFUL};
pub use config::{BudpayConfig, DEFAULT_BASE_URL};
pub use error::{BudpayError, Result};
pub use response::{ApiResponse, Params};
