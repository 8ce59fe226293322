use std::borrow::Cow;

use thiserror::Error;

pub mod config;
pub mod crd;
pub mod labels;
pub mod meta;
pub mod site;

#[derive(Debug, Error)]
pub enum ResourceGenerationError {
    #[error("Owning object is missing required metadata!")]
    OwnerMissingMetadata,
    #[error("Provided dependent resource is missing a name!")]
    DependentMissingMetadataName,
    #[error("Provided dependent resource is missing required data ({})!", .0)]
    DependentMissingData(Cow<'static, str>),
}
