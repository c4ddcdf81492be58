//! Payout, wallet and identity operations.

use tracing::info;

use crate::client::BudpayClient;
use crate::error::Result;
use crate::response::{ApiResponse, Params};

impl BudpayClient {
    /// Banks available for transfers in the given currency; defaults to
    /// `"NGN"` when absent or blank.
    pub async fn bank_lists(&self, currency: Option<&str>) -> Result<ApiResponse> {
        let currency = match currency {
            Some(c) if !c.trim().is_empty() => c,
            _ => "NGN",
        };
        self.request(&format!("/v2/bank_list/{currency}"), "GET", Params::new())
            .await
    }

    /// Transfer funds to a single bank account.
    pub async fn single_payout(&self, params: Params) -> Result<ApiResponse> {
        info!("initiating single payout");
        self.request("/v2/bank_transfer", "POST", params).await
    }

    /// Transfer funds to several bank accounts in one call.
    pub async fn bulk_payout(&self, params: Params) -> Result<ApiResponse> {
        info!("initiating bulk payout");
        self.request("/v2/bulk_bank_transfer", "POST", params).await
    }

    /// Status of a payout by its reference.
    pub async fn verify_payout(&self, reference: &str) -> Result<ApiResponse> {
        self.request(&format!("/v2/payout/:{reference}"), "GET", Params::new())
            .await
    }

    /// Fee the gateway will charge for a payout.
    pub async fn payout_fee(&self, params: Params) -> Result<ApiResponse> {
        self.request("/v2/payout_fee", "POST", params).await
    }

    /// Wallet balance in the given currency.
    pub async fn wallet_balance(&self, currency: &str) -> Result<ApiResponse> {
        self.request(
            &format!("/v2/wallet_balance/{currency}"),
            "GET",
            Params::new(),
        )
        .await
    }

    /// Wallet transaction history in the given currency.
    pub async fn wallet_transactions(&self, currency: &str) -> Result<ApiResponse> {
        self.request(
            &format!("/v2/wallet_transactions/{currency}"),
            "GET",
            Params::new(),
        )
        .await
    }

    /// Resolve the account name behind a bank account number.
    ///
    /// Goes through the transfer endpoint, which performs name
    /// resolution before moving any funds.
    pub async fn account_name_verify(&self, params: Params) -> Result<ApiResponse> {
        self.request("/v2/bank_transfer", "POST", params).await
    }

    /// Verify a customer's Bank Verification Number.
    pub async fn verify_bvn(&self, params: Params) -> Result<ApiResponse> {
        self.request("/v2/bvn/verify", "POST", params).await
    }
}
