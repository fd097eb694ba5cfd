use std::fmt;

use serde::{Deserialize, Serialize};

/// Chain discriminator, serialized as the lowercase id the swap service uses
/// (`"sol"`, `"zec"`, ...). Unknown ids are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Blockchain {
    Sol,
    Zec,
    Near,
    Eth,
    Base,
    Arb,
    Btc,
    Other(String),
}

impl Blockchain {
    pub fn as_str(&self) -> &str {
        match self {
            Blockchain::Sol => "sol",
            Blockchain::Zec => "zec",
            Blockchain::Near => "near",
            Blockchain::Eth => "eth",
            Blockchain::Base => "base",
            Blockchain::Arb => "arb",
            Blockchain::Btc => "btc",
            Blockchain::Other(id) => id,
        }
    }
}

impl From<String> for Blockchain {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "sol" => Blockchain::Sol,
            "zec" => Blockchain::Zec,
            "near" => Blockchain::Near,
            "eth" => Blockchain::Eth,
            "base" => Blockchain::Base,
            "arb" => Blockchain::Arb,
            "btc" => Blockchain::Btc,
            _ => Blockchain::Other(s),
        }
    }
}

impl From<&str> for Blockchain {
    fn from(s: &str) -> Self {
        Blockchain::from(s.to_string())
    }
}

impl From<Blockchain> for String {
    fn from(b: Blockchain) -> Self {
        b.as_str().to_string()
    }
}

impl fmt::Display for Blockchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A chain plus an optional token on that chain.
///
/// `token_id == None` means the chain's native asset (SOL, ZEC, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteAsset {
    pub blockchain: Blockchain,
    pub token_id: Option<String>,
}

impl RouteAsset {
    pub fn native(blockchain: Blockchain) -> Self {
        Self {
            blockchain,
            token_id: None,
        }
    }

    pub fn token(blockchain: Blockchain, token_id: impl Into<String>) -> Self {
        Self {
            blockchain,
            token_id: Some(token_id.into()),
        }
    }

    pub fn is_native(&self) -> bool {
        self.token_id.is_none()
    }
}

impl fmt::Display for RouteAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.token_id {
            Some(token) => write!(f, "{}:{}", self.blockchain, token),
            None => write!(f, "{}:native", self.blockchain),
        }
    }
}

/// A token listed by the swap service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapApiAsset {
    /// Opaque remote identifier, passed back verbatim in quote requests.
    pub asset_id: String,
    pub blockchain: Blockchain,
    /// Absent for the chain's native asset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<String>,
    pub symbol: String,
    pub decimals: u32,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub price_updated_at: Option<String>,
}

impl SwapApiAsset {
    /// Whether this listing describes `asset`.
    ///
    /// Native assets only match listings without a contract address; tokens
    /// need an exact contract address match.
    pub fn matches(&self, asset: &RouteAsset) -> bool {
        if self.blockchain != asset.blockchain {
            return false;
        }

        match (&asset.token_id, &self.contract_address) {
            (None, None) => true,
            (Some(token), Some(contract)) => token == contract,
            _ => false,
        }
    }
}
