use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::ConfigMap;

use crate::resources::meta::SiteMeta;

use super::SiteRelease;

pub const CONTENT_KEY: &str = "index.html";

impl SiteRelease {
    pub fn generate_configmap(&self) -> ConfigMap {
        ConfigMap {
            metadata: self.generate_metadata(&self.get_configmap_name()),
            data: Some(BTreeMap::from([(
                CONTENT_KEY.to_owned(),
                self.html.to_owned(),
            )])),
            ..Default::default()
        }
    }
}
