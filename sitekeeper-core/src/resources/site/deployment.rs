use k8s_openapi::{
    api::{
        apps::v1::{Deployment, DeploymentSpec},
        core::v1::{
            ConfigMap, ConfigMapVolumeSource, Container, ContainerPort, PodSpec, PodTemplateSpec,
            Volume, VolumeMount,
        },
    },
    apimachinery::pkg::apis::meta::v1::LabelSelector,
};
use kube::core::ObjectMeta;

use crate::{
    helpers::RequireMetadata,
    resources::{labels::get_site_labels, meta::SiteMeta, ResourceGenerationError},
};

use super::SiteRelease;

pub const EXPOSED_PORT: i32 = 80;
pub const EXPOSED_PORT_NAME: &str = "http";
pub const EXPOSED_PORT_PROTOCOL: &str = "TCP";

const CONTENT_VOLUME_NAME: &str = "html";
const CONTENT_MOUNT_PATH: &str = "/usr/share/nginx/html";

impl SiteRelease {
    pub fn generate_deployment(
        &self,
        configmap: &ConfigMap,
    ) -> Result<Deployment, ResourceGenerationError> {
        let labels = get_site_labels(&self.name);
        let metadata = self.generate_metadata(&self.get_deployment_name());
        let metadata_name = metadata
            .name
            .as_ref()
            .ok_or(ResourceGenerationError::DependentMissingMetadataName)?
            .to_owned();
        let configmap_name = configmap
            .require_name_or(ResourceGenerationError::DependentMissingMetadataName)?
            .to_owned();

        let pod_spec = PodSpec {
            containers: vec![Container {
                image: Some(self.site_image.to_owned()),
                image_pull_policy: Some("IfNotPresent".to_owned()),
                name: metadata_name,
                ports: Some(vec![ContainerPort {
                    name: Some(EXPOSED_PORT_NAME.to_owned()),
                    container_port: EXPOSED_PORT,
                    protocol: Some(EXPOSED_PORT_PROTOCOL.to_owned()),
                    ..Default::default()
                }]),
                volume_mounts: Some(vec![VolumeMount {
                    name: CONTENT_VOLUME_NAME.to_owned(),
                    mount_path: CONTENT_MOUNT_PATH.to_owned(),
                    read_only: Some(true),
                    ..Default::default()
                }]),
                ..Default::default()
            }],
            volumes: Some(vec![Volume {
                name: CONTENT_VOLUME_NAME.to_owned(),
                config_map: Some(ConfigMapVolumeSource {
                    name: Some(configmap_name),
                    ..Default::default()
                }),
                ..Default::default()
            }]),
            ..Default::default()
        };

        Ok(Deployment {
            metadata,
            spec: Some(DeploymentSpec {
                replicas: Some(1),
                selector: LabelSelector {
                    match_expressions: None,
                    match_labels: Some(labels.to_owned()),
                },
                template: PodTemplateSpec {
                    metadata: Some(ObjectMeta {
                        labels: Some(labels),
                        ..Default::default()
                    }),
                    spec: Some(pod_spec),
                },
                ..Default::default()
            }),
            ..Default::default()
        })
    }
}
