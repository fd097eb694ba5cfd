//! Parameters and results shared by the poller, the orchestrator and the
//! route builders.

use std::sync::Arc;
use std::time::Duration;

use accounts::DepositSender;
use adapters::SwapApi;
use corelib::{ExecutionStatus, ExecutionStatusResponse, GetQuoteParams, SwapQuoteResponse};
use tokio::sync::mpsc::UnboundedSender;

pub use corelib::SwapStateChangeEvent;

/// Slippage used by the route builders, in basis points (1%).
pub const DEFAULT_SLIPPAGE_BPS: u32 = 100;

/// Receives every swap event in order. Called inline, so it should not block.
pub type SwapEventHandler = Arc<dyn Fn(&SwapStateChangeEvent) + Send + Sync>;

/// Forward events into a channel, for callers that prefer a stream.
///
/// Events are dropped silently once the receiver is gone.
pub fn channel_handler(tx: UnboundedSender<SwapStateChangeEvent>) -> SwapEventHandler {
    Arc::new(move |ev: &SwapStateChangeEvent| {
        let _ = tx.send(ev.clone());
    })
}

/// Cadence of status polling. Total polling time is bounded by
/// `initial_delay + (max_attempts - 1) * polling_interval` plus request time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollingConfig {
    pub max_attempts: u32,
    pub polling_interval: Duration,
    pub initial_delay: Duration,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            max_attempts: 100,
            polling_interval: Duration::from_millis(10_000),
            initial_delay: Duration::from_millis(5_000),
        }
    }
}

impl PollingConfig {
    /// Tighter cadence for interactive use.
    pub fn fast() -> Self {
        Self {
            polling_interval: Duration::from_millis(3_000),
            initial_delay: Duration::from_millis(2_000),
            ..Self::default()
        }
    }
}

#[derive(Clone)]
pub struct CheckStatusParams {
    pub deposit_address: String,
    pub max_attempts: u32,
    pub polling_interval: Duration,
    pub initial_delay: Duration,
    pub on_status_change: Option<SwapEventHandler>,
}

impl CheckStatusParams {
    pub fn new(deposit_address: impl Into<String>, polling: PollingConfig) -> Self {
        Self {
            deposit_address: deposit_address.into(),
            max_attempts: polling.max_attempts,
            polling_interval: polling.polling_interval,
            initial_delay: polling.initial_delay,
            on_status_change: None,
        }
    }

    pub fn with_handler(mut self, handler: Option<SwapEventHandler>) -> Self {
        self.on_status_change = handler;
        self
    }
}

/// Input of [`crate::swap`].
pub struct SwapParams<'a> {
    pub api: &'a dyn SwapApi,
    pub quote: GetQuoteParams,
    /// When absent the swap only quotes and monitors; someone else pays.
    pub deposit: Option<&'a dyn DepositSender>,
    pub on_event: Option<SwapEventHandler>,
    pub polling: PollingConfig,
}

/// Result of a swap run: the quote that was executed against and the last
/// status the poller saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapOutcome {
    pub quote: SwapQuoteResponse,
    /// `None` when polling never got a response.
    pub final_status: Option<ExecutionStatusResponse>,
}

impl SwapOutcome {
    pub fn deposit_address(&self) -> Option<&str> {
        self.quote.deposit_address()
    }

    pub fn status(&self) -> Option<ExecutionStatus> {
        self.final_status.as_ref().map(|s| s.status)
    }

    pub fn succeeded(&self) -> bool {
        self.status() == Some(ExecutionStatus::Success)
    }

    /// Polling ended on a terminal status rather than running out of attempts.
    pub fn is_settled(&self) -> bool {
        self.status().is_some_and(ExecutionStatus::is_terminal)
    }
}
