mod code_block;
mod demo;
mod home;
mod lesson;
mod not_found;
mod scripts;
mod shell;
mod sidebar;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use code_block::CodeBlock;
pub use demo::DemoStage;
pub use home::HomeView;
pub use lesson::LessonView;
pub use not_found::{NotFoundBody, NotFoundView};
pub use shell::{CONTENT_ID, Layout, Topbar};
pub use sidebar::Sidebar;
