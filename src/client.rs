//! The BudPay API client.
//!
//! Every operation funnels through one `request` primitive that attaches
//! bearer auth, filters empty body fields and parses the standard
//! `{ status, message, data }` envelope. Operations return their parsed
//! envelope directly; the client keeps no per-call state and can be
//! shared across tasks.

use std::time::Duration;

use hmac::{Hmac, Mac};
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;
use sha2::Sha512;
use tracing::{debug, info};

use crate::config::BudpayConfig;
use crate::error::{BudpayError, Result};
use crate::response::{strip_empty, ApiResponse, Params};

/// Message the gateway returns for a successfully verified transaction.
pub const VERIFICATION_SUCCESSFUL: &str = "Verification successful";

/// Message the gateway returns for an unknown transaction reference.
pub const INVALID_TRANSACTION_REFERENCE: &str = "Invalid transaction reference";

/// BudPay API client.
pub struct BudpayClient {
    config: BudpayConfig,
    http: Client,
}

impl BudpayClient {
    /// Create a client from the given configuration.
    ///
    /// Fails fast if the secret key is missing.
    pub fn new(config: BudpayConfig) -> Result<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                BudpayError::Configuration(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self { config, http })
    }

    /// Create a client from `BUDPAY_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(BudpayConfig::from_env()?)
    }

    /// API root this client is pointed at.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Perform one API call and parse the envelope.
    ///
    /// `method` is matched case-insensitively after trimming; anything
    /// other than GET or POST is rejected before a request is built.
    /// Path parameters are already substituted into `path` by callers.
    pub(crate) async fn request(
        &self,
        path: &str,
        method: &str,
        params: Params,
    ) -> Result<ApiResponse> {
        let trimmed = method.trim();
        let verb = match trimmed.to_ascii_uppercase().as_str() {
            "GET" => Method::GET,
            "POST" => Method::POST,
            _ => return Err(BudpayError::EmptyMethod(trimmed.to_string())),
        };

        let url = format!("{}{}", self.config.base_url, path);
        debug!(%url, method = %verb, "sending request to BudPay");

        let mut request = self
            .http
            .request(verb.clone(), &url)
            .bearer_auth(&self.config.secret_key);

        if verb == Method::POST {
            request = request.json(&Value::Object(strip_empty(params)));
        }

        self.dispatch(request).await
    }

    /// POST with the filtered body HMAC-SHA512 signed into an
    /// `Encryption` header.
    async fn signed_post(&self, path: &str, params: Params) -> Result<ApiResponse> {
        let body = Value::Object(strip_empty(params));
        let signature = self.sign(&body.to_string());

        let url = format!("{}{}", self.config.base_url, path);
        debug!(%url, "sending signed request to BudPay");

        let request = self
            .http
            .post(&url)
            .bearer_auth(&self.config.secret_key)
            .header("Encryption", signature)
            .json(&body);

        self.dispatch(request).await
    }

    async fn dispatch(&self, request: RequestBuilder) -> Result<ApiResponse> {
        let response = request.send().await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| BudpayError::MalformedResponse(e.to_string()))
    }

    // HMAC-SHA512 over the exact JSON serialization of the body, keyed
    // by the secret key.
    fn sign(&self, payload: &str) -> String {
        type HmacSha512 = Hmac<Sha512>;

        let mut mac = HmacSha512::new_from_slice(self.config.secret_key.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    // ---- checkout ----------------------------------------------------

    /// Initialize a payment through the standard checkout flow.
    ///
    /// `amount` is coerced to an integer and multiplied by `quantity`
    /// (default 1, not sent to the gateway); `currency` falls back to
    /// `"NGN"` when absent or blank.
    pub async fn standard_checkout(&self, params: Params) -> Result<ApiResponse> {
        let params = normalize_checkout(params);
        info!("initiating standard checkout");
        self.request("/v2/transaction/initialize", "POST", params)
            .await
    }

    /// Initialize a server-to-server bank transfer checkout.
    pub async fn server_to_server_bank_transfer_checkout(
        &self,
        params: Params,
    ) -> Result<ApiResponse> {
        let params = normalize_checkout(params);
        info!("initiating bank transfer checkout");
        self.request("/s2s/banktransfer/initialize", "POST", params)
            .await
    }

    /// Initialize a server-to-server v2 charge.
    ///
    /// The request body is signed and the signature travels in the
    /// `Encryption` header alongside the usual bearer auth.
    pub async fn server_to_server_v2(&self, params: Params) -> Result<ApiResponse> {
        let params = normalize_checkout(params);
        info!("initiating server-to-server v2 charge");
        self.signed_post("/s2s/v2/transaction/initialize", params)
            .await
    }

    /// Initialize a standard checkout and return the hosted payment
    /// page URL from the response.
    pub async fn authorization_url(&self, params: Params) -> Result<String> {
        let response = self.standard_checkout(params).await?;
        Ok(response.authorization_url()?.to_string())
    }

    /// Initialize a standard checkout and hand back the full envelope,
    /// for backends that act on the result instead of redirecting.
    ///
    /// Errors with `MissingField` if the gateway did not return an
    /// authorization URL.
    pub async fn authorization_response(&self, params: Params) -> Result<ApiResponse> {
        let response = self.standard_checkout(params).await?;
        response.authorization_url()?;
        Ok(response)
    }

    // ---- transactions & verification ---------------------------------

    /// Fetch a single transaction by its id.
    pub async fn fetch_transaction(&self, transaction_id: &str) -> Result<ApiResponse> {
        self.request(
            &format!("/v2/transaction/:{transaction_id}"),
            "GET",
            Params::new(),
        )
        .await
    }

    /// All transactions recorded against the account.
    pub async fn get_all_transactions(&self) -> Result<ApiResponse> {
        self.request("/v2/transaction", "GET", Params::new()).await
    }

    /// Ask the gateway to verify a transaction and return the raw
    /// envelope.
    pub async fn verify_transaction_at_gateway(&self, reference: &str) -> Result<ApiResponse> {
        self.request(
            &format!("/v2/transaction/verify/:{reference}"),
            "GET",
            Params::new(),
        )
        .await
    }

    /// Whether the gateway reports `reference` as successfully verified.
    ///
    /// Only the exact success message counts; every other message,
    /// recognized or not, reads as unverified rather than an error.
    pub async fn is_transaction_verification_valid(&self, reference: &str) -> Result<bool> {
        let response = self.verify_transaction_at_gateway(reference).await?;

        Ok(match response.message.as_str() {
            VERIFICATION_SUCCESSFUL => true,
            INVALID_TRANSACTION_REFERENCE => false,
            _ => false,
        })
    }

    /// Payment details for a verified transaction.
    ///
    /// Returns the full envelope on success and
    /// `PaymentVerificationFailed` for any non-success verification.
    pub async fn get_payment_data(&self, reference: &str) -> Result<ApiResponse> {
        let response = self.verify_transaction_at_gateway(reference).await?;

        if response.message == VERIFICATION_SUCCESSFUL {
            Ok(response)
        } else {
            info!(reference, message = %response.message, "transaction verification failed");
            Err(BudpayError::PaymentVerificationFailed {
                reference: reference.to_string(),
            })
        }
    }

    /// Request a payment from a customer.
    pub async fn request_payment(&self, params: Params) -> Result<ApiResponse> {
        self.request("/v2/request_payment", "POST", params).await
    }

    // ---- customers & virtual accounts --------------------------------

    /// Create a customer record.
    pub async fn create_customer(&self, params: Params) -> Result<ApiResponse> {
        self.request("/v2/customer", "POST", params).await
    }

    /// Create a dedicated virtual account for a customer.
    pub async fn create_dedicated_virtual_account(&self, params: Params) -> Result<ApiResponse> {
        self.request("/v2/dedicated_virtual_account", "POST", params)
            .await
    }

    /// List dedicated virtual accounts.
    pub async fn list_dedicated_virtual_account(&self) -> Result<ApiResponse> {
        self.request("/v2/list_dedicated_accounts", "GET", Params::new())
            .await
    }

    /// Fetch one dedicated virtual account by id.
    pub async fn fetch_dedicated_virtual_account_by_id(
        &self,
        account_id: &str,
    ) -> Result<ApiResponse> {
        self.request(
            &format!("/v2/dedicated_account/:{account_id}"),
            "GET",
            Params::new(),
        )
        .await
    }

    /// Create a shareable payment link.
    pub async fn create_payment_link(&self, params: Params) -> Result<ApiResponse> {
        self.request("/v2/create_payment_link", "POST", params)
            .await
    }

    // ---- settlements & refunds ---------------------------------------

    /// Settlements paid out to the merchant account.
    pub async fn get_settlements(&self) -> Result<ApiResponse> {
        self.request("/v2/settlement", "GET", Params::new()).await
    }

    /// Transactions that make up one settlement batch.
    pub async fn get_settlements_by_batch(&self, batch_id: &str) -> Result<ApiResponse> {
        self.request(&format!("/v2/settlement/:{batch_id}"), "GET", Params::new())
            .await
    }

    /// Refund a transaction.
    pub async fn create_refund(&self, params: Params) -> Result<ApiResponse> {
        self.request("/v2/refund", "POST", params).await
    }

    /// All refunds raised on the account.
    pub async fn list_refunds(&self) -> Result<ApiResponse> {
        self.request("/v2/refund", "GET", Params::new()).await
    }

    /// Status of one refund by its reference.
    pub async fn fetch_refund(&self, reference: &str) -> Result<ApiResponse> {
        self.request(&format!("/refund/status/:{reference}"), "GET", Params::new())
            .await
    }
}

/// Checkout payload normalization shared by the initialize flows:
/// integer amount times quantity, `"NGN"` fallback for a blank currency.
fn normalize_checkout(mut params: Params) -> Params {
    let quantity = params.remove("quantity").map(|v| int_value(&v)).unwrap_or(1);

    if let Some(amount) = params.get("amount") {
        let amount = int_value(amount) * quantity;
        params.insert("amount".to_string(), Value::from(amount));
    }

    let blank_currency = match params.get("currency") {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    };
    if blank_currency {
        params.insert("currency".to_string(), Value::from("NGN"));
    }

    params
}

// Integer coercion for amount/quantity fields that may arrive as JSON
// numbers or numeric strings. Anything non-numeric collapses to 0.
fn int_value(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .or_else(|_| s.trim().parse::<f64>().map(|f| f as i64))
            .unwrap_or(0),
        _ => 0,
    }
}
