pub mod oneclick;

pub use oneclick::{OneClickClient, OneClickConfig, SwapApi, SwapApiError};
