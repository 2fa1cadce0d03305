mod lesson;
mod level;

pub use lesson::{LessonEntry, LessonGroup};
pub use level::{Badge, Difficulty};
