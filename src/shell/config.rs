use anyhow::Context;
use std::{env, fmt::Display, net::SocketAddr, str::FromStr};
use tracing::info;

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    /// Header the fronting identity proxy sets to the authenticated user id.
    pub identity_header: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            identity_header: "x-user-id".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            addr: try_load("ROOMMATE_LEDGER_ADDR", "0.0.0.0:8080")?,
            identity_header: try_load::<String>("ROOMMATE_LEDGER_IDENTITY_HEADER", "x-user-id")?
                .to_ascii_lowercase(),
        })
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> anyhow::Result<T>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    raw.parse::<T>()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("Invalid {key} value: {raw}"))
}
