use async_trait::async_trait;
use corelib::{
    ExecutionStatusResponse, GetQuoteParams, SubmitTxHashParams, SwapApiAsset, SwapQuoteResponse,
};

use super::errors::SwapApiError;

/// Operations the swap router needs from the remote swap service.
///
/// Implementations own transport concerns (timeouts, auth, retries on the
/// network level). Callers decide what is fatal.
#[async_trait]
pub trait SwapApi: Send + Sync {
    /// Every asset the service can route. No ordering guarantee.
    async fn get_tokens(&self) -> Result<Vec<SwapApiAsset>, SwapApiError>;

    /// Request a quote. A non-dry quote carries the deposit address.
    async fn get_quote(&self, params: &GetQuoteParams) -> Result<SwapQuoteResponse, SwapApiError>;

    /// Best-effort hint that a deposit transaction has been broadcast.
    async fn submit_tx_hash(&self, params: &SubmitTxHashParams) -> Result<(), SwapApiError>;

    /// Current execution status for a deposit address.
    async fn get_execution_status(
        &self,
        deposit_address: &str,
    ) -> Result<ExecutionStatusResponse, SwapApiError>;
}
