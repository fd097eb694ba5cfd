use std::time::Duration;

use adapters::OneClickConfig;
use adapters::oneclick::client::DEFAULT_BASE_URL;
use corelib::Blockchain;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Swap service root, without the `/v0` prefix.
    pub api_url: String,

    /// Bearer token for the swap service. Unauthenticated calls still work
    /// but pay a higher fee.
    pub api_jwt: Option<String>,

    /// Per-request HTTP timeout.
    pub http_timeout: Duration,

    /// Chain on the private side of every route.
    pub privacy_chain: Blockchain,

    /// `APP_ENV=production` switches logs to JSON.
    pub json_logs: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = var("PRIVSWAP_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let api_jwt = var("PRIVSWAP_API_JWT").filter(|jwt| !jwt.trim().is_empty());

        let http_timeout = var("PRIVSWAP_HTTP_TIMEOUT_SECS")
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(10));

        let privacy_chain = var("PRIVSWAP_PRIVACY_CHAIN")
            .map(|id| Blockchain::from(id.trim()))
            .unwrap_or(Blockchain::Zec);

        let json_logs = var("APP_ENV").is_some_and(|env| env.eq_ignore_ascii_case("production"));

        Self {
            api_url,
            api_jwt,
            http_timeout,
            privacy_chain,
            json_logs,
        }
    }

    pub fn one_click(&self) -> OneClickConfig {
        OneClickConfig {
            base_url: self.api_url.clone(),
            jwt: self.api_jwt.clone(),
            timeout: self.http_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config(&[]);
        assert_eq!(cfg.api_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.api_jwt, None);
        assert_eq!(cfg.http_timeout, Duration::from_secs(10));
        assert_eq!(cfg.privacy_chain, Blockchain::Zec);
        assert!(!cfg.json_logs);
    }

    #[test]
    fn reads_overrides() {
        let cfg = config(&[
            ("PRIVSWAP_API_URL", "http://localhost:8080"),
            ("PRIVSWAP_API_JWT", "eyJ.token"),
            ("PRIVSWAP_HTTP_TIMEOUT_SECS", "30"),
            ("PRIVSWAP_PRIVACY_CHAIN", "ZEC"),
            ("APP_ENV", "production"),
        ]);
        assert_eq!(cfg.api_url, "http://localhost:8080");
        assert_eq!(cfg.api_jwt.as_deref(), Some("eyJ.token"));
        assert_eq!(cfg.http_timeout, Duration::from_secs(30));
        assert_eq!(cfg.privacy_chain, Blockchain::Zec);
        assert!(cfg.json_logs);

        let one_click = cfg.one_click();
        assert_eq!(one_click.jwt.as_deref(), Some("eyJ.token"));
    }

    #[test]
    fn blank_jwt_and_bad_timeout_fall_back() {
        let cfg = config(&[
            ("PRIVSWAP_API_JWT", "  "),
            ("PRIVSWAP_HTTP_TIMEOUT_SECS", "ten"),
        ]);
        assert_eq!(cfg.api_jwt, None);
        assert_eq!(cfg.http_timeout, Duration::from_secs(10));
    }
}
