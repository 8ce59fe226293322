use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, JsonSchema)]
#[kube(
    group = "sitekeeper.dev",
    version = "v1alpha1",
    kind = "SiteDescriptor",
    namespaced,
    status = "SiteDescriptorStatus"
)]
pub struct SiteDescriptorSpec {
    /// address of the page this site serves a snapshot of;
    /// optional in the schema so a missing value surfaces as a per-object
    /// validation error instead of breaking the watch stream
    #[serde(rename = "sourceURL", skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, JsonSchema)]
pub struct SiteDescriptorStatus {
    /// observed site state
    pub state: SiteState,
    /// cluster-internal address the site is served under, empty unless ready
    #[serde(default)]
    pub endpoint: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
pub enum SiteState {
    #[default]
    Pending,
    Ready,
    Error,
}

#[cfg(test)]
mod tests {
    use kube::Resource;

    use crate::RESOURCE_GROUP;

    use super::SiteDescriptor;

    #[test]
    fn descriptor_is_served_under_the_sitekeeper_group() {
        assert_eq!(SiteDescriptor::group(&()), RESOURCE_GROUP);
        assert_eq!(SiteDescriptor::kind(&()), "SiteDescriptor");
        assert_eq!(SiteDescriptor::plural(&()), "sitedescriptors");
    }
}
