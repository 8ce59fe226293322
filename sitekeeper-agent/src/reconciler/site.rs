use std::{sync::Arc, time::Duration};

use kube::runtime::controller::Action;
use log::{info, warn};
use reqwest::Url;
use sitekeeper_core::{
    helpers::RequireMetadata,
    kubernetes::operations::{apply_resource_status, ensure_resource},
    resources::{
        crd::v1alpha1::site_descriptor::{SiteDescriptor, SiteDescriptorStatus, SiteState},
        meta::SiteMeta,
        site::{SiteRelease, SiteReleaseBuilder},
    },
};

use super::{context::ReconcilerContext, error::ReconcilerError};

const API_ERROR_REQUEUE_SECS: u64 = 10;

pub async fn reconcile_site(
    object: Arc<SiteDescriptor>,
    context: Arc<ReconcilerContext>,
) -> Result<Action, ReconcilerError> {
    let name = object.require_name_or(ReconcilerError::MissingObjectMetadata)?;
    let namespace = object.require_namespace_or(ReconcilerError::MissingObjectMetadata)?;

    info!("Reconciling site {namespace}/{name}...");

    match try_reconcile(&object, &context).await {
        Ok(endpoint) => {
            apply_status(&context, name, namespace, SiteState::Ready, endpoint).await?;

            Ok(Action::requeue(context.config.resync_period))
        }
        Err(error) => {
            warn!(
                "Reconciling site {namespace}/{name} failed during {}: {error}",
                error.step()
            );

            let _ = apply_status(&context, name, namespace, SiteState::Error, String::new()).await;

            Err(error)
        }
    }
}

pub fn reconcile_site_error(
    _object: Arc<SiteDescriptor>,
    error: &ReconcilerError,
    _context: Arc<ReconcilerContext>,
) -> Action {
    if error.is_terminal() {
        // nothing will change until the object's spec does; wait for the
        // next event instead of retrying on a timer
        Action::await_change()
    } else {
        Action::requeue(Duration::from_secs(API_ERROR_REQUEUE_SECS))
    }
}

async fn try_reconcile(
    object: &SiteDescriptor,
    context: &ReconcilerContext,
) -> Result<String, ReconcilerError> {
    let source_url = object
        .spec
        .source_url
        .as_deref()
        .ok_or(ReconcilerError::MissingSourceUrl)?;
    let source_url = Url::parse(source_url).map_err(ReconcilerError::InvalidSourceUrl)?;

    let html = context
        .fetcher
        .fetch(source_url)
        .await
        .map_err(ReconcilerError::FetchError)?;

    let release = build_release(object, context, html)?;

    apply_release(context, &release).await?;

    Ok(release.get_endpoint_url())
}

fn build_release(
    object: &SiteDescriptor,
    context: &ReconcilerContext,
    html: String,
) -> Result<SiteRelease, ReconcilerError> {
    SiteReleaseBuilder::default()
        .with_descriptor(object)
        .map_err(ReconcilerError::SiteReleaseResourceError)?
        .with_config(&context.config)
        .html(html)
        .build()
        .map_err(ReconcilerError::SiteReleaseBuilderError)
}

/// Applies the dependent resources in dependency order: the content store
/// first (the workload mounts it), then the workload, then the resources
/// exposing it. A failed write aborts the pass; already applied resources
/// stay in place and converge on the next one.
async fn apply_release(
    context: &ReconcilerContext,
    release: &SiteRelease,
) -> Result<(), ReconcilerError> {
    let configmap = release.generate_configmap();
    let deployment = release
        .generate_deployment(&configmap)
        .map_err(ReconcilerError::SiteReleaseResourceGenerationError)?;
    let service = release
        .generate_service(&deployment)
        .map_err(ReconcilerError::SiteReleaseResourceGenerationError)?;
    let ingress = release
        .generate_ingress(&service)
        .map_err(ReconcilerError::SiteReleaseResourceGenerationError)?;

    ensure_resource(&context.client, &configmap)
        .await
        .map_err(ReconcilerError::KubeApiError)?;
    ensure_resource(&context.client, &deployment)
        .await
        .map_err(ReconcilerError::KubeApiError)?;
    ensure_resource(&context.client, &service)
        .await
        .map_err(ReconcilerError::KubeApiError)?;
    ensure_resource(&context.client, &ingress)
        .await
        .map_err(ReconcilerError::KubeApiError)?;

    Ok(())
}

async fn apply_status(
    context: &ReconcilerContext,
    name: &str,
    namespace: &str,
    state: SiteState,
    endpoint: String,
) -> Result<(), ReconcilerError> {
    let status = SiteDescriptorStatus { state, endpoint };

    apply_resource_status::<SiteDescriptor, SiteDescriptorStatus>(
        &context.client,
        status,
        name,
        namespace,
    )
    .await
    .map_err(ReconcilerError::KubeApiError)
}
