//! Bill payment operations: airtime, internet, TV and electricity.

use crate::client::BudpayClient;
use crate::error::Result;
use crate::response::{ApiResponse, Params};

impl BudpayClient {
    /// Airtime providers available for top-up.
    pub async fn airtime_providers(&self) -> Result<ApiResponse> {
        self.request("/v2/airtime", "GET", Params::new()).await
    }

    /// Buy airtime for a phone number.
    pub async fn airtime_top_up(&self, params: Params) -> Result<ApiResponse> {
        self.request("/v2/airtime/topup", "POST", params).await
    }

    /// Internet service providers.
    pub async fn internet_providers(&self) -> Result<ApiResponse> {
        self.request("/v2/internet", "GET", Params::new()).await
    }

    /// Data plans offered by one internet provider.
    pub async fn internet_data_plans(&self, provider: &str) -> Result<ApiResponse> {
        self.request(
            &format!("/v2/internet/plans/{provider}"),
            "GET",
            Params::new(),
        )
        .await
    }

    /// Buy a data plan.
    pub async fn internet_data_purchase(&self, params: Params) -> Result<ApiResponse> {
        self.request("/v2/internet/data", "POST", params).await
    }

    /// TV providers.
    pub async fn tv_providers(&self) -> Result<ApiResponse> {
        self.request("/v2/tv", "GET", Params::new()).await
    }

    /// Subscription packages offered by one TV provider.
    pub async fn tv_provider_packages(&self, provider: &str) -> Result<ApiResponse> {
        self.request(&format!("/v2/tv/packages/{provider}"), "GET", Params::new())
            .await
    }

    /// Validate a smartcard number before subscribing.
    pub async fn tv_validate(&self, params: Params) -> Result<ApiResponse> {
        self.request("/v2/tv/validate", "POST", params).await
    }

    /// Pay for a TV subscription.
    pub async fn tv_subscription(&self, params: Params) -> Result<ApiResponse> {
        self.request("/v2/tv/pay", "POST", params).await
    }

    /// Electricity providers.
    pub async fn electricity_providers(&self) -> Result<ApiResponse> {
        self.request("/v2/electricity", "GET", Params::new()).await
    }

    /// Validate a meter number before recharging.
    pub async fn electricity_validate(&self, params: Params) -> Result<ApiResponse> {
        self.request("/v2/electricity/validate", "POST", params)
            .await
    }

    /// Recharge a prepaid or postpaid meter.
    pub async fn electricity_recharge(&self, params: Params) -> Result<ApiResponse> {
        self.request("/v2/electricity/recharge", "POST", params)
            .await
    }
}
