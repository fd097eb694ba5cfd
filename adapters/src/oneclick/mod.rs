//! Client side of the cross-chain swap service.
//!
//! The service quotes a swap, hands out a deposit address per executable
//! quote, accepts deposit transaction hashes as an acceleration hint and
//! reports execution status keyed by deposit address.

pub mod api;
pub mod client;
pub mod errors;
pub mod types;

pub use api::SwapApi;
pub use client::{OneClickClient, OneClickConfig};
pub use errors::SwapApiError;
