use std::sync::Arc;

use futures::StreamExt;
use k8s_openapi::api::{
    apps::v1::Deployment,
    core::v1::{ConfigMap, Service},
    networking::v1::Ingress,
};
use kube::{
    runtime::{watcher::Config, Controller},
    Client,
};
use log::{info, warn};
use sitekeeper_core::{
    kubernetes::GetApi, resources::crd::v1alpha1::site_descriptor::SiteDescriptor,
};

use crate::{
    health::start_health_server,
    reconciler::{
        context::ReconcilerContext,
        site::{reconcile_site, reconcile_site_error},
    },
};

pub async fn start_site_controller(client: Client, context: Arc<ReconcilerContext>) {
    info!("Creating site controller...");

    // no finalizers: deleted descriptors never reach the reconciler, and
    // the controller owner references on every dependent leave teardown to
    // cluster garbage collection
    let watcher_config = Config::default();
    let controller = Controller::new(client.global_api::<SiteDescriptor>(), watcher_config.clone())
        .owns(client.global_api::<ConfigMap>(), watcher_config.clone())
        .owns(client.global_api::<Deployment>(), watcher_config.clone())
        .owns(client.global_api::<Service>(), watcher_config.clone())
        .owns(client.global_api::<Ingress>(), watcher_config)
        .shutdown_on_signal();

    tokio::spawn(start_health_server(controller.store()));

    info!("Site controller created!");

    controller
        .run(reconcile_site, reconcile_site_error, context)
        .for_each(|result| async move {
            match result {
                Ok(object) => info!("Reconciled site {:?}", object),
                Err(error) => warn!("Site reconciliation failed: {:#?}", error),
            }
        })
        .await
}
