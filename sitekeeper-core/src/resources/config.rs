use std::{env::var, num::ParseIntError, time::Duration};

use thiserror::Error;

pub const DEFAULT_INGRESS_DOMAIN: &str = "sitekeeper.dev";
pub const DEFAULT_SITE_IMAGE: &str = "nginx:alpine";

const DEFAULT_RESYNC_SECS: u64 = 60 * 5;

#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub ingress_domain: String,
    pub site_image: String,
    pub resync_period: Duration,
}

#[derive(Debug, Error)]
pub enum FromError {
    #[error("Resync period couldn't be parsed: {}", .0)]
    InvalidResyncPeriod(ParseIntError),
}

impl AgentConfig {
    pub fn from_env() -> Result<Self, FromError> {
        Ok(Self {
            ingress_domain: var("SITEKEEPER_INGRESS_DOMAIN")
                .unwrap_or_else(|_| DEFAULT_INGRESS_DOMAIN.to_owned()),
            site_image: var("SITEKEEPER_SITE_IMAGE")
                .unwrap_or_else(|_| DEFAULT_SITE_IMAGE.to_owned()),
            resync_period: match var("SITEKEEPER_RESYNC_SECS") {
                Ok(secs) => {
                    Duration::from_secs(secs.parse().map_err(FromError::InvalidResyncPeriod)?)
                }
                Err(_) => Duration::from_secs(DEFAULT_RESYNC_SECS),
            },
        })
    }
}
