use crate::{env::EnvManager, error::CliError};
use catalog::settings::DEFAULT_PAGE_SIZE;
use std::path::PathBuf;

pub const ENV_PORT: &str = "STOREFRONT_PORT";
pub const ENV_PAGE_SIZE: &str = "STOREFRONT_PAGE_SIZE";
pub const ENV_SEED: &str = "STOREFRONT_SEED";

pub const DEFAULT_PORT: u16 = 3000;

/// Settings of the `serve` command. Flags win over the environment, which
/// wins over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeConfig {
    pub port: u16,
    pub page_size: usize,
    pub seed: Option<PathBuf>,
}

impl ServeConfig {
    pub fn resolve(
        env: &EnvManager,
        port: Option<u16>,
        page_size: Option<usize>,
        seed: Option<PathBuf>,
    ) -> Result<Self, CliError> {
        let port = match port {
            Some(port) => port,
            None => env.get_parsed(ENV_PORT)?.unwrap_or(DEFAULT_PORT),
        };

        let page_size = match page_size {
            Some(size) => size,
            None => env.get_parsed(ENV_PAGE_SIZE)?.unwrap_or(DEFAULT_PAGE_SIZE),
        };
        if page_size == 0 {
            return Err(CliError::Config("page size must be at least 1".into()));
        }

        let seed = seed.or_else(|| env.get(ENV_SEED).map(PathBuf::from));

        Ok(ServeConfig {
            port,
            page_size,
            seed,
        })
    }
}
