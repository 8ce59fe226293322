use derive_builder::Builder;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;
use kube::{core::ObjectMeta, Resource};

use crate::helpers::RequireMetadata;

use super::{
    config::AgentConfig, crd::v1alpha1::site_descriptor::SiteDescriptor, labels::get_site_labels,
    ResourceGenerationError,
};

pub mod configmap;
pub mod deployment;
pub mod ingress;
pub mod service;

#[derive(Debug, Builder)]
pub struct SiteRelease {
    pub name: String,
    pub namespace: String,
    pub owner: OwnerReference,
    pub ingress_domain: String,
    pub site_image: String,
    pub html: String,
}

impl SiteReleaseBuilder {
    pub fn with_descriptor(
        &mut self,
        descriptor: &SiteDescriptor,
    ) -> Result<&mut Self, ResourceGenerationError> {
        let owner = descriptor
            .controller_owner_ref(&())
            .ok_or(ResourceGenerationError::OwnerMissingMetadata)?;
        let namespace = descriptor
            .require_namespace_or(ResourceGenerationError::OwnerMissingMetadata)?
            .to_owned();

        Ok(self
            .name(owner.name.to_owned())
            .namespace(namespace)
            .owner(owner))
    }

    pub fn with_config(&mut self, config: &AgentConfig) -> &mut Self {
        self.ingress_domain(config.ingress_domain.to_owned())
            .site_image(config.site_image.to_owned())
    }
}

impl SiteRelease {
    pub fn generate_metadata(&self, name: &str) -> ObjectMeta {
        ObjectMeta {
            labels: Some(get_site_labels(&self.name)),
            name: Some(name.to_owned()),
            namespace: Some(self.namespace.to_owned()),
            owner_references: Some(vec![self.owner.clone()]),
            ..Default::default()
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use kube::Resource;

    use crate::resources::{
        config::AgentConfig,
        crd::v1alpha1::site_descriptor::{SiteDescriptor, SiteDescriptorSpec},
    };

    use super::{SiteRelease, SiteReleaseBuilder};

    pub fn test_descriptor(name: &str, namespace: &str, uid: &str) -> SiteDescriptor {
        let mut descriptor = SiteDescriptor::new(
            name,
            SiteDescriptorSpec {
                source_url: Some("http://ok.example/".to_owned()),
            },
        );
        descriptor.meta_mut().namespace = Some(namespace.to_owned());
        descriptor.meta_mut().uid = Some(uid.to_owned());

        descriptor
    }

    pub fn test_config() -> AgentConfig {
        AgentConfig {
            ingress_domain: "sitekeeper.dev".to_owned(),
            site_image: "nginx:alpine".to_owned(),
            resync_period: std::time::Duration::from_secs(300),
        }
    }

    pub fn test_release(name: &str, namespace: &str, uid: &str) -> SiteRelease {
        SiteReleaseBuilder::default()
            .with_descriptor(&test_descriptor(name, namespace, uid))
            .unwrap()
            .with_config(&test_config())
            .html("<html>hi</html>".to_owned())
            .build()
            .unwrap()
    }

    #[test]
    fn builder_takes_identity_and_owner_from_the_descriptor() {
        let release = test_release("demo", "team", "test-uid-1234");

        assert_eq!(release.name, "demo");
        assert_eq!(release.namespace, "team");
        assert_eq!(release.owner.uid, "test-uid-1234");
        assert_eq!(release.owner.kind, "SiteDescriptor");
    }

    #[test]
    fn builder_requires_a_uid_on_the_descriptor() {
        let mut descriptor = test_descriptor("demo", "team", "unused");
        descriptor.meta_mut().uid = None;

        let mut builder = SiteReleaseBuilder::default();
        let result = builder.with_descriptor(&descriptor);

        assert!(result.is_err());
    }

    #[test]
    fn every_dependent_resource_carries_one_controller_owner_reference() {
        let release = test_release("demo", "team", "test-uid-1234");
        let configmap = release.generate_configmap();
        let deployment = release.generate_deployment(&configmap).unwrap();
        let service = release.generate_service(&deployment).unwrap();
        let ingress = release.generate_ingress(&service).unwrap();

        let owner_refs = [
            configmap.metadata.owner_references,
            deployment.metadata.owner_references,
            service.metadata.owner_references,
            ingress.metadata.owner_references,
        ];

        for refs in owner_refs {
            let refs = refs.expect("dependent is missing owner references");
            assert_eq!(refs.len(), 1);
            assert_eq!(refs[0].uid, "test-uid-1234");
            assert_eq!(refs[0].controller, Some(true));
        }
    }

    #[test]
    fn dependents_are_namespaced_with_the_descriptor() {
        let release = test_release("demo", "team", "test-uid-1234");
        let configmap = release.generate_configmap();
        let deployment = release.generate_deployment(&configmap).unwrap();

        assert_eq!(configmap.metadata.namespace.as_deref(), Some("team"));
        assert_eq!(deployment.metadata.namespace.as_deref(), Some("team"));
    }
}
