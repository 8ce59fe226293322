use std::fmt::Debug;

use k8s_openapi::NamespaceResourceScope;
use kube::{
    api::{Patch, PatchParams, PostParams},
    core::object::HasStatus,
    Api, Client, Resource,
};
use log::info;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::json;

use crate::{helpers::pretty_type_name, FIELD_MANAGER};

pub async fn try_get_resource<T>(
    client: &Client,
    name: &str,
    namespace: &str,
) -> kube::Result<Option<T>>
where
    T: Resource<Scope = NamespaceResourceScope, DynamicType = ()>
        + Clone
        + DeserializeOwned
        + Debug,
{
    let resource_api: Api<T> = Api::namespaced(client.clone(), namespace);

    resource_api.get_opt(name).await
}

/// Drives a single dependent resource towards its desired shape: fetch by
/// name, create when absent, otherwise replace the whole object (carrying
/// over the live resourceVersion) so external mutations are converged away.
pub async fn ensure_resource<T>(client: &Client, resource: &T) -> kube::Result<()>
where
    T: Resource<Scope = NamespaceResourceScope, DynamicType = ()>
        + Serialize
        + Clone
        + DeserializeOwned
        + Debug,
{
    let resource_name = resource.meta().name.as_ref().unwrap();
    let namespace = resource.meta().namespace.as_ref().unwrap();
    let resource_api: Api<T> = Api::namespaced(client.clone(), namespace);
    let post_params = PostParams {
        field_manager: Some(FIELD_MANAGER.to_owned()),
        ..Default::default()
    };

    match try_get_resource::<T>(client, resource_name, namespace).await? {
        Some(existing) => {
            info!(
                "Replacing '{resource_name}' {} resource on the cluster...",
                pretty_type_name::<T>()
            );

            let mut desired = resource.clone();
            desired.meta_mut().resource_version = existing.meta().resource_version.to_owned();

            resource_api
                .replace(resource_name, &post_params, &desired)
                .await?;
        }
        None => {
            info!(
                "Creating '{resource_name}' {} resource on the cluster...",
                pretty_type_name::<T>()
            );

            resource_api.create(&post_params, resource).await?;
        }
    }

    Ok(())
}

/// Overwrites the whole status subresource; the agent is its only writer.
pub async fn apply_resource_status<T, S>(
    client: &Client,
    status: S,
    name: &str,
    namespace: &str,
) -> kube::Result<()>
where
    T: Resource<Scope = NamespaceResourceScope, DynamicType = ()>
        + HasStatus<Status = S>
        + Clone
        + DeserializeOwned
        + Debug,
    S: Serialize,
{
    let resource_api: Api<T> = Api::namespaced(client.clone(), namespace);
    let patch = Patch::Merge(json!({ "status": status }));

    resource_api
        .patch_status(name, &PatchParams::default(), &patch)
        .await?;

    Ok(())
}
