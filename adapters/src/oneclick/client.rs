use std::time::Duration;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use corelib::{
    ExecutionStatusResponse, GetQuoteParams, SubmitTxHashParams, SwapApiAsset, SwapQuoteResponse,
};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::api::SwapApi;
use super::errors::SwapApiError;
use super::types::QuoteRequestBody;

pub const DEFAULT_BASE_URL: &str = "https://1click.chaindefuser.com";

const TOKENS_ENDPOINT: &str = "v0/tokens";
const QUOTE_ENDPOINT: &str = "v0/quote";
const SUBMIT_DEPOSIT_ENDPOINT: &str = "v0/deposit/submit";
const STATUS_ENDPOINT: &str = "v0/status";

/// How long an executable quote stays valid when the caller gives no deadline.
const DEFAULT_QUOTE_DEADLINE_SECS: i64 = 60 * 60;

#[derive(Clone, Debug)]
pub struct OneClickConfig {
    pub base_url: String,
    /// Bearer token; the service works without one at reduced limits.
    pub jwt: Option<String>,
    pub timeout: Duration,
}

impl Default for OneClickConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            jwt: None,
            timeout: Duration::from_secs(10),
        }
    }
}

/// REST client for the swap service.
#[derive(Clone)]
pub struct OneClickClient {
    http: Client,
    base_url: String,
    jwt: Option<String>,
}

impl OneClickClient {
    pub fn new(config: OneClickConfig) -> Result<Self, SwapApiError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .pool_idle_timeout(Duration::from_secs(30))
            .tcp_keepalive(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            jwt: config.jwt,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.jwt {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, SwapApiError> {
        let resp = self.authorize(request).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SwapApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, SwapApiError> {
        let resp = self.send(request).await?;
        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn default_deadline() -> String {
        let deadline = Utc::now() + chrono::Duration::seconds(DEFAULT_QUOTE_DEADLINE_SECS);
        deadline.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

#[async_trait]
impl SwapApi for OneClickClient {
    #[instrument(skip(self), level = "debug")]
    async fn get_tokens(&self) -> Result<Vec<SwapApiAsset>, SwapApiError> {
        let tokens: Vec<SwapApiAsset> = self
            .send_json(self.http.get(self.url(TOKENS_ENDPOINT)))
            .await?;

        debug!(count = tokens.len(), "swap service tokens fetched");
        Ok(tokens)
    }

    #[instrument(
        skip(self, params),
        fields(
            origin = %params.origin_asset,
            destination = %params.destination_asset,
            amount = %params.amount,
            dry = params.dry
        ),
        level = "debug"
    )]
    async fn get_quote(&self, params: &GetQuoteParams) -> Result<SwapQuoteResponse, SwapApiError> {
        let body = QuoteRequestBody::from_params(params, Self::default_deadline());

        let quote: SwapQuoteResponse = self
            .send_json(self.http.post(self.url(QUOTE_ENDPOINT)).json(&body))
            .await?;

        debug!(
            deposit_address = ?quote.quote.deposit_address,
            amount_out = ?quote.quote.amount_out,
            "swap quote received"
        );
        Ok(quote)
    }

    #[instrument(
        skip(self, params),
        fields(deposit_address = %params.deposit_address, tx_hash = %params.transaction_hash),
        level = "debug"
    )]
    async fn submit_tx_hash(&self, params: &SubmitTxHashParams) -> Result<(), SwapApiError> {
        self.send(self.http.post(self.url(SUBMIT_DEPOSIT_ENDPOINT)).json(params))
            .await?;
        Ok(())
    }

    #[instrument(skip(self), level = "debug")]
    async fn get_execution_status(
        &self,
        deposit_address: &str,
    ) -> Result<ExecutionStatusResponse, SwapApiError> {
        let request = self
            .http
            .get(self.url(STATUS_ENDPOINT))
            .query(&[("depositAddress", deposit_address)]);

        let status: ExecutionStatusResponse = self.send_json(request).await?;

        debug!(status = %status.status, "execution status fetched");
        Ok(status)
    }
}
