use k8s_openapi::{
    api::{
        apps::v1::Deployment,
        core::v1::{Service, ServicePort, ServiceSpec},
    },
    apimachinery::pkg::util::intstr::IntOrString,
};

use crate::resources::{meta::SiteMeta, ResourceGenerationError};

use super::{
    deployment::{EXPOSED_PORT, EXPOSED_PORT_PROTOCOL},
    SiteRelease,
};

impl SiteRelease {
    pub fn generate_service(
        &self,
        deployment: &Deployment,
    ) -> Result<Service, ResourceGenerationError> {
        // select whatever the workload labels its pods with, so the two
        // can't drift apart
        let selector = deployment
            .spec
            .as_ref()
            .and_then(|spec| spec.selector.match_labels.to_owned())
            .ok_or(ResourceGenerationError::DependentMissingData(
                "deployment selector".into(),
            ))?;

        Ok(Service {
            metadata: self.generate_metadata(&self.get_service_name()),
            spec: Some(ServiceSpec {
                ports: Some(vec![ServicePort {
                    port: EXPOSED_PORT,
                    target_port: Some(IntOrString::Int(EXPOSED_PORT)),
                    protocol: Some(EXPOSED_PORT_PROTOCOL.to_owned()),
                    ..Default::default()
                }]),
                selector: Some(selector),
                type_: Some("ClusterIP".to_owned()),
                ..Default::default()
            }),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::resources::site::tests::test_release;

    #[test]
    fn service_selects_the_deployment_pods() {
        let release = test_release("demo", "team", "test-uid-1234");
        let configmap = release.generate_configmap();
        let deployment = release.generate_deployment(&configmap).unwrap();
        let service = release.generate_service(&deployment).unwrap();

        let selector = service.spec.as_ref().unwrap().selector.as_ref().unwrap();
        let pod_labels = deployment
            .spec
            .as_ref()
            .unwrap()
            .template
            .metadata
            .as_ref()
            .unwrap()
            .labels
            .as_ref()
            .unwrap();

        assert_eq!(service.metadata.name.as_deref(), Some("demo"));
        assert_eq!(selector, pod_labels);
    }
}
