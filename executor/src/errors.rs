use accounts::{AccountError, Blockchain};
use adapters::SwapApiError;
use thiserror::Error;

/// Fatal swap failures. Polling errors and rejected tx hash hints never end
/// up here.
#[derive(Error, Debug)]
pub enum SwapError {
    #[error("deposit address not found in quote response")]
    NoDepositAddress,

    #[error("asset not found on swap service: blockchain={blockchain}, contract={contract_address:?}")]
    AssetNotFound {
        blockchain: Blockchain,
        contract_address: Option<String>,
    },

    #[error("swap service error: {0}")]
    Api(#[from] SwapApiError),

    #[error("account error: {0}")]
    Account(#[from] AccountError),
}
