use sitekeeper_core::resources::{site::SiteReleaseBuilderError, ResourceGenerationError};
use thiserror::Error;

use crate::fetcher::FetchError;

#[derive(Debug, Error)]
pub enum ReconcilerError {
    #[error("Object is missing metadata!")]
    MissingObjectMetadata,
    #[error("Object doesn't specify a source URL!")]
    MissingSourceUrl,
    #[error("Object specifies an invalid source URL! Reason: {}", .0)]
    InvalidSourceUrl(url::ParseError),
    #[error("Couldn't fetch the site content! Reason: {}", .0)]
    FetchError(FetchError),
    #[error("Couldn't patch the resource! Reason: {}", .0)]
    KubeApiError(kube::Error),
    #[error("Couldn't prepare a site release! Reason: {}", .0)]
    SiteReleaseBuilderError(SiteReleaseBuilderError),
    #[error("Couldn't prepare a site release! Reason: {}", .0)]
    SiteReleaseResourceError(ResourceGenerationError),
    #[error("Couldn't generate a release resource! Reason: {}", .0)]
    SiteReleaseResourceGenerationError(ResourceGenerationError),
}

impl ReconcilerError {
    /// Name of the reconcile step the error originated from, for logs.
    pub fn step(&self) -> &'static str {
        match self {
            ReconcilerError::MissingObjectMetadata
            | ReconcilerError::MissingSourceUrl
            | ReconcilerError::InvalidSourceUrl(_) => "validation",
            ReconcilerError::FetchError(_) => "fetch",
            ReconcilerError::SiteReleaseBuilderError(_)
            | ReconcilerError::SiteReleaseResourceError(_)
            | ReconcilerError::SiteReleaseResourceGenerationError(_) => "synthesis",
            ReconcilerError::KubeApiError(_) => "apply",
        }
    }

    /// Terminal errors won't resolve without a spec change; retrying them
    /// on a timer is pointless.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ReconcilerError::KubeApiError(_))
    }
}
