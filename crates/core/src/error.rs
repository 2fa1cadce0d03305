use thiserror::Error;

/// Reasons a catalog definition is rejected at construction time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("group name cannot be empty")]
    EmptyGroupName,

    #[error("group `{name}` is declared more than once")]
    DuplicateGroup { name: String },

    #[error("lesson path `{path}` must start with `/`")]
    InvalidPath { path: String },

    #[error("lesson at `{path}` has an empty {field}")]
    EmptyField { path: String, field: &'static str },

    #[error("lesson path `{path}` appears more than once")]
    DuplicatePath { path: String },

    #[error("lesson slug `{slug}` appears more than once")]
    DuplicateSlug { slug: String },
}
