use super::site::SiteRelease;

pub trait SiteMeta {
    fn get_configmap_name(&self) -> String;
    fn get_deployment_name(&self) -> String;
    fn get_service_name(&self) -> String;
    fn get_ingress_name(&self) -> String;
    fn get_ingress_host(&self) -> String;
    fn get_endpoint_url(&self) -> String;
}

impl SiteMeta for SiteRelease {
    fn get_configmap_name(&self) -> String {
        format!("{}-html", self.name)
    }

    fn get_deployment_name(&self) -> String {
        self.name.to_owned()
    }

    fn get_service_name(&self) -> String {
        self.name.to_owned()
    }

    fn get_ingress_name(&self) -> String {
        self.name.to_owned()
    }

    fn get_ingress_host(&self) -> String {
        format!("{}.{}", self.name, self.ingress_domain)
    }

    fn get_endpoint_url(&self) -> String {
        format!("http://{}.{}.svc.cluster.local", self.name, self.namespace)
    }
}

#[cfg(test)]
mod tests {
    use rand::{distributions::Slice, Rng};

    use crate::resources::site::tests::test_release;

    use super::SiteMeta;

    static NAME_CHARSET: [char; 37] = [
        'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
        's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
        '-',
    ];

    fn random_valid_name(rng: &mut impl Rng) -> String {
        // DNS-1123 labels: lowercase alphanumerics and dashes, alphanumeric
        // at both ends
        let length = rng.gen_range(1..=24);
        let inner_chars = Slice::new(&NAME_CHARSET).unwrap();
        let edge_chars = Slice::new(&NAME_CHARSET[..36]).unwrap();

        (0..length)
            .map(|index| {
                if index == 0 || index == length - 1 {
                    rng.sample(edge_chars)
                } else {
                    rng.sample(inner_chars)
                }
            })
            .collect()
    }

    #[test]
    fn dependent_names_are_deterministic_for_any_valid_site_name() {
        let mut rng = rand::thread_rng();

        for _ in 0..100 {
            let name = random_valid_name(&mut rng);
            let first = test_release(&name, "demo-namespace", "test-uid-1234");
            let second = test_release(&name, "demo-namespace", "test-uid-1234");

            assert_eq!(first.get_configmap_name(), format!("{name}-html"));
            assert_eq!(first.get_deployment_name(), name);
            assert_eq!(first.get_service_name(), name);
            assert_eq!(first.get_ingress_name(), name);
            assert_eq!(first.get_configmap_name(), second.get_configmap_name());
            assert_eq!(first.get_ingress_host(), second.get_ingress_host());
            assert_eq!(first.get_endpoint_url(), second.get_endpoint_url());
        }
    }

    #[test]
    fn endpoint_url_points_at_the_cluster_local_service() {
        let release = test_release("demo", "team", "test-uid-1234");

        assert_eq!(
            release.get_endpoint_url(),
            "http://demo.team.svc.cluster.local"
        );
    }
}
