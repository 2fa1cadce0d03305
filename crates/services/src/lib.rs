#![forbid(unsafe_code)]

pub mod error;
pub mod tutorial_service;
pub mod view;

pub use error::TutorialServiceError;
pub use tutorial_service::TutorialService;
pub use view::{Breadcrumb, LessonPage};

pub use mastery_core::{Catalog, Progress};
