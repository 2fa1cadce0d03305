mod advanced;
mod fundamentals;
mod layout;
mod visual_effects;

use super::LessonContent;

pub(super) const LESSONS: &[LessonContent] = &[
    fundamentals::SELECTORS,
    fundamentals::BOX_MODEL,
    fundamentals::COLORS,
    fundamentals::TYPOGRAPHY,
    layout::DISPLAY,
    layout::FLEXBOX,
    layout::GRID,
    layout::POSITIONING,
    visual_effects::BACKGROUNDS,
    visual_effects::TRANSITIONS,
    visual_effects::TRANSFORMS,
    visual_effects::ANIMATIONS,
    visual_effects::FILTERS,
    advanced::VARIABLES,
    advanced::PSEUDO,
    advanced::RESPONSIVE,
    advanced::MODERN,
];
