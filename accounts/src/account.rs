use std::sync::Arc;

use async_trait::async_trait;
use corelib::RouteAsset;

use crate::errors::AccountError;

/// Capabilities every participant in a route has.
#[async_trait]
pub trait Account: Send + Sync {
    fn asset(&self) -> &RouteAsset;

    async fn get_address(&self) -> Result<String, AccountError>;

    /// Pure conversion of a decimal amount into this asset's base units.
    fn asset_to_base_units(&self, amount: &str) -> Result<u128, AccountError>;
}

/// Payment of `amount` base units into a swap deposit address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositRequest {
    pub address: String,
    pub amount: String,
}

/// Something that can fund a deposit address and report the transaction hash.
#[async_trait]
pub trait DepositSender: Send + Sync {
    async fn send_deposit(&self, request: &DepositRequest) -> Result<String, AccountError>;
}

/// An account the caller can sign for.
#[async_trait]
pub trait FullAccount: Account {
    /// Spendable balance in base units.
    async fn get_balance(&self) -> Result<u128, AccountError>;

    async fn send_deposit(&self, request: &DepositRequest) -> Result<String, AccountError>;
}

/// A route participant, tagged by what the caller is able to do with it.
#[derive(Clone)]
pub enum RouteAccount {
    /// Destination (or monitored source) the caller cannot sign for.
    AddressOnly(Arc<dyn Account>),
    Full(Arc<dyn FullAccount>),
}

impl RouteAccount {
    pub fn address_only(account: impl Account + 'static) -> Self {
        RouteAccount::AddressOnly(Arc::new(account))
    }

    pub fn full(account: impl FullAccount + 'static) -> Self {
        RouteAccount::Full(Arc::new(account))
    }

    pub fn asset(&self) -> &RouteAsset {
        match self {
            RouteAccount::AddressOnly(a) => a.asset(),
            RouteAccount::Full(a) => a.asset(),
        }
    }

    pub async fn get_address(&self) -> Result<String, AccountError> {
        match self {
            RouteAccount::AddressOnly(a) => a.get_address().await,
            RouteAccount::Full(a) => a.get_address().await,
        }
    }

    pub fn asset_to_base_units(&self, amount: &str) -> Result<u128, AccountError> {
        match self {
            RouteAccount::AddressOnly(a) => a.asset_to_base_units(amount),
            RouteAccount::Full(a) => a.asset_to_base_units(amount),
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, RouteAccount::Full(_))
    }

    /// Deposit capability bound to this account, when it has one.
    pub fn deposit_sender(&self) -> Option<AccountDeposit<'_>> {
        match self {
            RouteAccount::Full(a) => Some(AccountDeposit(a.as_ref())),
            RouteAccount::AddressOnly(_) => None,
        }
    }
}

/// [`DepositSender`] that pays from a [`FullAccount`].
pub struct AccountDeposit<'a>(&'a dyn FullAccount);

#[async_trait]
impl DepositSender for AccountDeposit<'_> {
    async fn send_deposit(&self, request: &DepositRequest) -> Result<String, AccountError> {
        self.0.send_deposit(request).await
    }
}
