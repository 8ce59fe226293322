use k8s_openapi::api::{
    core::v1::Service,
    networking::v1::{
        HTTPIngressPath, HTTPIngressRuleValue, Ingress, IngressBackend, IngressRule,
        IngressServiceBackend, IngressSpec, ServiceBackendPort,
    },
};

use crate::{
    helpers::RequireMetadata,
    resources::{meta::SiteMeta, ResourceGenerationError},
};

use super::{deployment::EXPOSED_PORT, SiteRelease};

impl SiteRelease {
    pub fn generate_ingress(&self, service: &Service) -> Result<Ingress, ResourceGenerationError> {
        let service_name = service
            .require_name_or(ResourceGenerationError::DependentMissingMetadataName)?
            .to_owned();

        Ok(Ingress {
            metadata: self.generate_metadata(&self.get_ingress_name()),
            spec: Some(IngressSpec {
                rules: Some(vec![IngressRule {
                    host: Some(self.get_ingress_host()),
                    http: Some(HTTPIngressRuleValue {
                        paths: vec![HTTPIngressPath {
                            path: Some("/".to_owned()),
                            path_type: Some("Prefix".to_owned()),
                            backend: IngressBackend {
                                service: Some(IngressServiceBackend {
                                    name: service_name,
                                    port: Some(ServiceBackendPort {
                                        number: Some(EXPOSED_PORT),
                                        ..Default::default()
                                    }),
                                }),
                                ..Default::default()
                            },
                        }],
                    }),
                }]),
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
    fn ingress_routes_the_site_host_to_the_service() {
        let release = test_release("demo", "team", "test-uid-1234");
        let configmap = release.generate_configmap();
        let deployment = release.generate_deployment(&configmap).unwrap();
        let service = release.generate_service(&deployment).unwrap();
        let ingress = release.generate_ingress(&service).unwrap();

        let rules = ingress.spec.as_ref().unwrap().rules.as_ref().unwrap();
        let path = &rules[0].http.as_ref().unwrap().paths[0];
        let backend = path.backend.service.as_ref().unwrap();

        assert_eq!(rules[0].host.as_deref(), Some("demo.sitekeeper.dev"));
        assert_eq!(path.path_type.as_deref(), Some("Prefix"));
        assert_eq!(backend.name, "demo");
        assert_eq!(backend.port.as_ref().unwrap().number, Some(80));
    }
}
