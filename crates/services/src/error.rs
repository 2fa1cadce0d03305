//! Shared error types for the services crate.

use thiserror::Error;

use mastery_core::CatalogError;

/// Errors emitted while assembling `TutorialService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TutorialServiceError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("catalog entry `{slug}` has no lesson content")]
    MissingContent { slug: String },
    #[error("lesson `{slug}` is not listed in the catalog")]
    OrphanLesson { slug: String },
}
