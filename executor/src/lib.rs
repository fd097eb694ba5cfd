//! Swap orchestration.
//!
//! Flow of one swap:
//!   • route builder resolves both assets on the swap service
//!   • orchestrator requests an executable quote (deposit address)
//!   • optional deposit from the source account + tx hash hint
//!   • poller watches the remote status until it settles
//!
//! Everything the caller observes arrives through one
//! [`SwapEventHandler`], in transition order.

pub mod errors;
pub mod orchestrator;
pub mod poller;
pub mod quotes;
pub mod routes;
pub mod types;

pub use errors::SwapError;
pub use orchestrator::swap;
pub use poller::poll_status;
pub use quotes::{get_swap_api_assets, get_swap_quote, resolve_asset};
pub use routes::{RouteParams, route_into_privacy_chain, route_out_of_privacy_chain};
pub use types::{
    CheckStatusParams, DEFAULT_SLIPPAGE_BPS, PollingConfig, SwapEventHandler, SwapOutcome,
    SwapParams, channel_handler,
};
