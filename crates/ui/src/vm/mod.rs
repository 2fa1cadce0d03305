mod home_vm;
mod lesson_vm;
mod markdown_vm;
mod nav_vm;

pub use home_vm::{CurriculumCardVm, CurriculumGroupVm, FeatureVm, HomeVm, LinkVm, StatVm};
pub use lesson_vm::{LessonPageVm, NeighborVm, SectionVm, numbered_lines};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use nav_vm::{NavEffect, NavGroupVm, NavIntent, NavItemVm, NavState, build_nav_tree};
