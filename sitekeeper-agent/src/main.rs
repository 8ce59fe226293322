use std::{error::Error, process::exit, sync::Arc};

use kube::Client;
use sitekeeper_core::resources::config::AgentConfig;

use crate::{
    controller::start_site_controller,
    fetcher::{FetchContent, HttpContentFetcher},
    reconciler::context::ReconcilerContext,
};

mod controller;
mod fetcher;
mod health;
mod reconciler;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    configure_logger();

    let config = get_config();
    let client = create_client().await;
    let fetcher = create_fetcher();

    let context = ReconcilerContext {
        config,
        client: client.clone(),
        fetcher,
    };

    start_site_controller(client, context.into()).await;

    Ok(())
}

async fn create_client() -> Client {
    match Client::try_default().await {
        Ok(client) => client,
        Err(error) => {
            log::error!("Couldn't create client! {error:?}");
            exit(6)
        }
    }
}

fn get_config() -> AgentConfig {
    match AgentConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            log::error!("Couldn't retrieve agent configuration! {error:?}");
            exit(7)
        }
    }
}

fn create_fetcher() -> Arc<dyn FetchContent> {
    match HttpContentFetcher::new() {
        Ok(fetcher) => Arc::new(fetcher),
        Err(error) => {
            log::error!("Couldn't create the content fetcher! {error:?}");
            exit(8)
        }
    }
}

fn configure_logger() {
    env_logger::builder()
        .default_format()
        .format_module_path(false)
        .filter_level(log::LevelFilter::Info)
        .init()
}
