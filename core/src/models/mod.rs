pub mod asset;
pub mod event;
pub mod quote;
pub mod status;

pub use asset::{Blockchain, RouteAsset, SwapApiAsset};
pub use event::SwapStateChangeEvent;
pub use quote::{GetQuoteParams, QuoteDetails, SubmitTxHashParams, SwapQuoteResponse};
pub use status::{ExecutionStatus, ExecutionStatusResponse, SwapDetails, TransactionDetails};
