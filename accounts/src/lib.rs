//! Account capabilities consumed by the swap router.
//!
//! Chain-specific wallets live outside this workspace; they plug in by
//! implementing [`Account`] (address-only) or [`FullAccount`] (can also
//! report balances and send deposits).

pub mod account;
pub mod cache;
pub mod errors;
pub mod units;
pub mod watch_only;

pub use account::{Account, AccountDeposit, DepositRequest, DepositSender, FullAccount, RouteAccount};
pub use cache::{AccountCache, AccountKey};
pub use errors::{AccountError, AmountError};
pub use watch_only::WatchOnlyAccount;

pub use corelib::{Blockchain, RouteAsset};
