use async_trait::async_trait;
use corelib::RouteAsset;

use crate::account::Account;
use crate::errors::AccountError;
use crate::units;

/// Address-only account: a known address plus the asset's precision.
///
/// Used for destinations the caller does not sign for, and for sources whose
/// deposit the caller will send by hand.
#[derive(Debug, Clone)]
pub struct WatchOnlyAccount {
    asset: RouteAsset,
    address: String,
    decimals: u32,
}

impl WatchOnlyAccount {
    pub fn new(asset: RouteAsset, address: impl Into<String>, decimals: u32) -> Self {
        Self {
            asset,
            address: address.into(),
            decimals,
        }
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }
}

#[async_trait]
impl Account for WatchOnlyAccount {
    fn asset(&self) -> &RouteAsset {
        &self.asset
    }

    async fn get_address(&self) -> Result<String, AccountError> {
        if self.address.is_empty() {
            return Err(AccountError::address("empty address"));
        }
        Ok(self.address.clone())
    }

    fn asset_to_base_units(&self, amount: &str) -> Result<u128, AccountError> {
        Ok(units::to_base_units(amount, self.decimals)?)
    }
}
