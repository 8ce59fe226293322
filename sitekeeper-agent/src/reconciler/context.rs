use std::sync::Arc;

use kube::Client;
use sitekeeper_core::resources::config::AgentConfig;

use crate::fetcher::FetchContent;

pub struct ReconcilerContext {
    pub config: AgentConfig,
    pub client: Client,
    pub fetcher: Arc<dyn FetchContent>,
}
