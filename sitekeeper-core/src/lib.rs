pub mod helpers;
pub mod kubernetes;
pub mod resources;

pub const RESOURCE_GROUP: &str = "sitekeeper.dev";

pub const FIELD_MANAGER: &str = "sitekeeper-agent";
