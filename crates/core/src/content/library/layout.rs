use crate::content::{Demo, DemoControl, DemoTarget, LessonContent, LessonSection};
use crate::model::{Badge, Difficulty};

const DISPLAY_TYPES: Demo = Demo {
    stage: "padding: 10px; background: rgba(255,255,255,0.03); border: 1px dashed rgba(255,255,255,0.1); border-radius: 8px",
    item_style: "padding: 6px 10px; margin: 4px; background: rgba(16,185,129,0.15); border: 1px solid rgba(16,185,129,0.5); border-radius: 6px; color: #34d399; font-size: 12px",
    items: &["first", "second", "third"],
    controls: &[
        DemoControl {
            label: "display",
            property: "display",
            target: DemoTarget::Items,
            options: &["block", "inline", "inline-block"],
            default: 1,
        },
    ],
};

const FLEX_DIRECTION: Demo = Demo {
    stage: "display: flex; gap: 6px; min-height: 60px; padding: 10px; background: rgba(255,255,255,0.03); border: 1px dashed rgba(255,255,255,0.1); border-radius: 8px",
    item_style: "padding: 6px 12px; background: rgba(99,102,241,0.15); border: 1px solid rgba(99,102,241,0.4); border-radius: 6px; color: #818cf8; font-size: 12px; white-space: nowrap",
    items: &["Item 1", "Item 2", "Item 3"],
    controls: &[
        DemoControl {
            label: "direction",
            property: "flex-direction",
            target: DemoTarget::Stage,
            options: &["row", "row-reverse", "column", "column-reverse"],
            default: 0,
        },
    ],
};

const FLEX_ALIGN: Demo = Demo {
    stage: "display: flex; gap: 6px; height: 90px; padding: 10px; background: rgba(255,255,255,0.03); border: 1px dashed rgba(255,255,255,0.1); border-radius: 8px",
    item_style: "padding: 6px 12px; background: rgba(99,102,241,0.15); border: 1px solid rgba(99,102,241,0.4); border-radius: 6px; color: #818cf8; font-size: 12px; white-space: nowrap",
    items: &["1", "2", "3"],
    controls: &[
        DemoControl {
            label: "justify",
            property: "justify-content",
            target: DemoTarget::Stage,
            options: &["flex-start", "center", "flex-end", "space-between", "space-around"],
            default: 0,
        },
        DemoControl {
            label: "align",
            property: "align-items",
            target: DemoTarget::Stage,
            options: &["flex-start", "center", "flex-end", "stretch", "baseline"],
            default: 1,
        },
    ],
};

const FLEX_GROW: Demo = Demo {
    stage: "display: flex; gap: 6px; padding: 10px; background: rgba(255,255,255,0.03); border: 1px dashed rgba(255,255,255,0.1); border-radius: 8px",
    item_style: "padding: 6px 12px; background: rgba(99,102,241,0.15); border: 1px solid rgba(99,102,241,0.4); border-radius: 6px; color: #818cf8; font-size: 12px; white-space: nowrap",
    items: &["A", "B", "C"],
    controls: &[
        DemoControl {
            label: "flex",
            property: "flex",
            target: DemoTarget::Items,
            options: &["0 1 auto", "1 1 0", "1 1 auto"],
            default: 0,
        },
    ],
};

const GRID_COLUMNS: Demo = Demo {
    stage: "display: grid; gap: 6px; padding: 10px; background: rgba(255,255,255,0.03); border: 1px dashed rgba(255,255,255,0.1); border-radius: 8px",
    item_style: "padding: 6px 12px; background: rgba(99,102,241,0.15); border: 1px solid rgba(99,102,241,0.4); border-radius: 6px; color: #818cf8; font-size: 12px; white-space: nowrap; text-align: center",
    items: &["1", "2", "3", "4", "5", "6"],
    controls: &[
        DemoControl {
            label: "columns",
            property: "grid-template-columns",
            target: DemoTarget::Stage,
            options: &["1fr 1fr 1fr", "repeat(2, 1fr)", "2fr 1fr", "100px 1fr", "repeat(auto-fill, minmax(60px, 1fr))"],
            default: 0,
        },
    ],
};

const GRID_ALIGN: Demo = Demo {
    stage: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 6px; height: 120px; padding: 10px; background: rgba(255,255,255,0.03); border: 1px dashed rgba(255,255,255,0.1); border-radius: 8px",
    item_style: "padding: 6px 12px; background: rgba(99,102,241,0.15); border: 1px solid rgba(99,102,241,0.4); border-radius: 6px; color: #818cf8; font-size: 12px; white-space: nowrap",
    items: &["1", "2", "3"],
    controls: &[
        DemoControl {
            label: "justify-items",
            property: "justify-items",
            target: DemoTarget::Stage,
            options: &["stretch", "start", "center", "end"],
            default: 0,
        },
        DemoControl {
            label: "align-items",
            property: "align-items",
            target: DemoTarget::Stage,
            options: &["stretch", "start", "center", "end"],
            default: 0,
        },
    ],
};

const POSITION: Demo = Demo {
    stage: "position: relative; height: 110px; padding: 10px; background: rgba(255,255,255,0.03); border: 1px dashed rgba(255,255,255,0.1); border-radius: 8px",
    item_style: "padding: 6px 12px; background: rgba(99,102,241,0.15); border: 1px solid rgba(99,102,241,0.4); border-radius: 6px; color: #818cf8; font-size: 12px; white-space: nowrap; top: 24px; left: 40px; width: 80px",
    items: &["box"],
    controls: &[
        DemoControl {
            label: "position",
            property: "position",
            target: DemoTarget::Items,
            options: &["static", "relative", "absolute"],
            default: 0,
        },
    ],
};

pub(super) const DISPLAY: LessonContent = LessonContent {
    slug: "display",
    title: "Display & Flow",
    icon: "🧩",
    description: "The display property is the most influential CSS property — it controls how an element participates in the layout flow of the page.",
    difficulty: Difficulty::Beginner,
    sections: &[
        LessonSection {
            explanation: Some("Block elements stack vertically and take full width. Inline elements flow in text and ignore width/height. Inline-block is a hybrid: it flows inline but respects dimensions."),
            filename: Some("display-types.css"),
            demo: Some(DISPLAY_TYPES),
            tips: &[
                "Prefer flexbox or grid over display: inline-block for modern layouts.",
                "vertical-align only works on inline and inline-block elements.",
            ],
            ..LessonSection::new(
                "Block vs Inline vs Inline-Block",
                r#"/* Block — stacks, takes full width, respects w/h/margin */
div, p, h1, section, article { display: block; }

.card {
  display: block;
  width: 300px;       /* respected */
  height: 200px;      /* respected */
  margin: 16px auto;  /* centers horizontally */
}

/* Inline — flows with text, ignores w/h, vertical margin */
span, a, strong, em { display: inline; }

.badge {
  display: inline;
  /* width/height ignored */
  /* padding-top/bottom affect layout differently */
}

/* Inline-block — inline flow + block sizing */
.pill-btn {
  display: inline-block;
  width: 120px;        /* respected */
  height: 40px;        /* respected */
  padding: 8px 16px;
  vertical-align: middle;
}"#,
            )
        },
        LessonSection {
            explanation: Some("display: none removes the element from the document flow entirely (no space reserved). visibility: hidden hides it visually but preserves its space in the layout."),
            filename: Some("visibility.css"),
            tips: &[
                "Use the .visually-hidden pattern to provide context for screen readers without visual clutter.",
                "opacity: 0 still occupies space and can receive pointer events — combine with pointer-events: none if needed.",
            ],
            ..LessonSection::new(
                "display: none vs visibility: hidden",
                r#".hidden-remove {
  display: none;
  /* Element gone: no space, not in tab order */
}

.hidden-preserve {
  visibility: hidden;
  /* Space reserved, children also hidden */
}

/* Hide visually but keep accessible */
.visually-hidden {
  position: absolute;
  width: 1px; height: 1px;
  overflow: hidden;
  clip: rect(0,0,0,0);
  white-space: nowrap;
}

/* Modern clip approach */
.sr-only {
  clip-path: inset(50%);
  white-space: nowrap;
  overflow: hidden;
  width: 1px; height: 1px;
}"#,
            )
        },
        LessonSection {
            explanation: Some("When content is larger than its container, the overflow property controls what happens: visible (default), hidden (clips), scroll, or auto."),
            filename: Some("overflow.css"),
            tips: &[
                "Setting overflow to anything but visible on a parent creates a new block formatting context, which prevents margin collapse.",
                "overflow: auto is preferable over scroll — it only shows scrollbars when necessary.",
                "overflow: clip (modern) clips without creating a scroll container.",
            ],
            ..LessonSection::new(
                "Overflow",
                r#".container {
  width: 300px;
  height: 150px;
}

/* Default — content spills out */
.overflow-visible { overflow: visible; }

/* Clip content at container edge */
.overflow-hidden  { overflow: hidden; }

/* Always show scrollbars */
.overflow-scroll  { overflow: scroll; }

/* Scrollbar only when needed */
.overflow-auto    { overflow: auto; }

/* Independent x/y control */
.scroll-x { overflow-x: auto; overflow-y: hidden; }
.scroll-y { overflow-y: auto; overflow-x: hidden; }

/* Modern — clip without scroll context creation */
.clip { overflow: clip; }"#,
            )
        },
    ],
};

pub(super) const FLEXBOX: LessonContent = LessonContent {
    slug: "flexbox",
    title: "Flexbox",
    icon: "↔️",
    description: "Flexbox is a one-dimensional layout system — it arranges items in a row or column and provides powerful alignment and distribution controls.",
    difficulty: Difficulty::Beginner,
    sections: &[
        LessonSection {
            explanation: Some("Adding display: flex to a container makes its direct children flex items. The main axis (flex-direction) and cross axis are the two core concepts."),
            filename: Some("flex-container.css"),
            demo: Some(FLEX_DIRECTION),
            tips: &[
                "Prefer gap over margins for spacing between flex items — it handles edges correctly.",
                "flex-direction: column is useful for card layouts and vertical centring.",
            ],
            ..LessonSection::new(
                "Flex Container Basics",
                r#".container {
  display: flex;

  /* Direction — main axis */
  flex-direction: row;           /* default → */
  flex-direction: row-reverse;   /* ← */
  flex-direction: column;        /* ↓ */
  flex-direction: column-reverse;/* ↑ */

  /* Wrapping */
  flex-wrap: nowrap;    /* default — single line */
  flex-wrap: wrap;      /* items wrap to next line */

  /* Shorthand */
  flex-flow: row wrap;

  /* Spacing between items */
  gap: 16px;
  gap: 16px 24px;  /* row-gap column-gap */
}"#,
            )
        },
        LessonSection {
            explanation: Some("justify-content aligns items along the main axis. align-items aligns on the cross axis. Both are among the most useful CSS properties ever created."),
            filename: Some("flex-align.css"),
            demo: Some(FLEX_ALIGN),
            tips: &[
                "The classic \"vertically center anything\" trick: display:flex + align-items:center + justify-content:center.",
                "align-items works on individual items via align-self on the child.",
                "align-content only takes effect when there are multiple lines (wrap needed).",
            ],
            ..LessonSection::new(
                "Alignment",
                r#".container {
  display: flex;

  /* Main axis (horizontal for row) */
  justify-content: flex-start;    /* left */
  justify-content: center;        /* center */
  justify-content: flex-end;      /* right */
  justify-content: space-between; /* evenly spaced, no edge gap */
  justify-content: space-around;  /* evenly spaced with edge gaps */
  justify-content: space-evenly;  /* perfectly equal spaces */

  /* Cross axis (vertical for row) */
  align-items: stretch;     /* default — fill cross axis */
  align-items: center;      /* center vertically */
  align-items: flex-start;  /* top */
  align-items: flex-end;    /* bottom */
  align-items: baseline;    /* text baselines aligned */

  /* Multiple lines (only when flex-wrap: wrap) */
  align-content: space-between;
}"#,
            )
        },
        LessonSection {
            explanation: Some("The flex shorthand on children controls how items grow, shrink, and their base size. These three properties interact to distribute available space."),
            filename: Some("flex-items.css"),
            demo: Some(FLEX_GROW),
            tips: &[
                "Use flex: 1 instead of specifying all three values when you want equal-width items.",
                "flex: 0 0 auto (same as flex: none) prevents items from growing or shrinking.",
                "The order property visually reorders items without changing DOM order — useful for accessibility.",
            ],
            ..LessonSection::new(
                "Flex Items (flex-grow, shrink, basis)",
                r#"/* flex: grow shrink basis */
.item {
  flex: 0 1 auto; /* default — don't grow, can shrink */
  flex: 1;        /* grow: 1, shrink: 1, basis: 0 */
  flex: 1 0 200px;/* grow, don't shrink, start at 200px */
  flex: none;     /* 0 0 auto — fixed size */
}

/* Equal-width columns */
.col { flex: 1; }

/* Specific growth ratios */
.sidebar { flex: 1; }    /* 1 part */
.content { flex: 3; }    /* 3 parts — 3× wider */

/* Fixed sidebar + fluid content */
.sidebar { flex: 0 0 260px; } /* fixed */
.content { flex: 1; }          /* takes remaining */

/* Override alignment for one item */
.special {
  align-self: flex-end;
  order: -1; /* move to front visually */
}"#,
            )
        },
        LessonSection {
            explanation: Some("Flexbox solves classic layout problems elegantly. Here are the most-used patterns you'll reach for daily."),
            filename: Some("flex-patterns.css"),
            tips: &[
                "Flexbox is 1D — use Grid for 2D layouts (rows AND columns simultaneously).",
                "gap in flex containers does not add outside space — no need for negative margins.",
            ],
            ..LessonSection::new(
                "Common Flexbox Patterns",
                r#"/* 1. Perfect center */
.center {
  display: flex;
  align-items: center;
  justify-content: center;
}

/* 2. Navigation bar */
.navbar {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

/* 3. Sticky footer (full-page) */
body { display: flex; flex-direction: column; min-height: 100vh; }
main { flex: 1; }

/* 4. Equal-height cards */
.card-row { display: flex; align-items: stretch; gap: 16px; }

/* 5. Push last item to end */
.list { display: flex; gap: 8px; }
.list .spacer { flex: 1; }
.list .last-item { /* pushed right */ }

/* 6. Auto-fill columns (with wrap) */
.tags { display: flex; flex-wrap: wrap; gap: 8px; }
.tag  { flex: 0 0 auto; }"#,
            )
        },
    ],
};

pub(super) const GRID: LessonContent = LessonContent {
    slug: "grid",
    title: "CSS Grid",
    icon: "⊞",
    description: "CSS Grid is a two-dimensional layout system — it handles both rows and columns simultaneously, making it ideal for complex page layouts and card grids.",
    difficulty: Difficulty::Intermediate,
    sections: &[
        LessonSection {
            explanation: Some("Define a grid by specifying column and row tracks with grid-template-columns and grid-template-rows. Items are automatically placed into cells."),
            filename: Some("grid-basics.css"),
            demo: Some(GRID_COLUMNS),
            tips: &[
                "fr is the \"fractional unit\" — 1fr means \"1 part of the available space\".",
                "repeat(auto-fill, minmax(200px, 1fr)) creates a responsive grid with no media queries.",
                "auto-fill creates empty ghost columns; auto-fit collapses them.",
            ],
            ..LessonSection::new(
                "Grid Basics: Columns & Rows",
                r#".grid {
  display: grid;

  /* 3 equal columns */
  grid-template-columns: 1fr 1fr 1fr;
  grid-template-columns: repeat(3, 1fr); /* shorthand */

  /* Fixed + fluid + fixed */
  grid-template-columns: 200px 1fr 200px;

  /* Named tracks */
  grid-template-columns: [sidebar] 260px [main] 1fr [end];

  /* Rows */
  grid-template-rows: auto;   /* size to content (default) */
  grid-template-rows: 60px 1fr 40px; /* header + main + footer */

  gap: 16px;
  gap: 16px 24px; /* row-gap column-gap */
}

/* Auto-fill responsive grid (no media queries!) */
.auto-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
  gap: 16px;
}"#,
            )
        },
        LessonSection {
            explanation: Some("Items occupy a single cell by default. Use grid-column and grid-row to span multiple cells with line numbers. -1 references the last grid line."),
            filename: Some("grid-placement.css"),
            tips: &[
                "grid-column: 1 / -1 is the shorthand for \"span all columns\" regardless of how many there are.",
                "Use grid lines for precise control; use span for relative positioning.",
            ],
            ..LessonSection::new(
                "Placing Items: Line Numbers",
                r#".item {
  /* column: start / end */
  grid-column: 1 / 3;   /* span columns 1 and 2 */
  grid-column: 1 / -1;  /* span ALL columns */
  grid-column: span 2;  /* span 2 from current position */

  /* row: start / end */
  grid-row: 1 / 3;
  grid-row: span 2;

  /* Shorthand: row-start / col-start / row-end / col-end */
  grid-area: 1 / 1 / 3 / -1;
}

/* Classic page layout */
.page {
  display: grid;
  grid-template-columns: 260px 1fr;
  grid-template-rows: 60px 1fr 48px;
  min-height: 100vh;
}

.header  { grid-column: 1 / -1; }
.sidebar { grid-row: 2; }
.main    { grid-row: 2; }
.footer  { grid-column: 1 / -1; }"#,
            )
        },
        LessonSection {
            explanation: Some("Named areas provide the most readable way to define page layouts. Each string represents a row; repeated names span that area across cells."),
            filename: Some("grid-areas.css"),
            tips: &[
                "Grid template areas are self-documenting — the layout reads like ASCII art.",
                "All rows must have the same number of cells in grid-template-areas.",
                "Areas must form a rectangle — L-shapes are not allowed.",
            ],
            badge: Some(Badge::Modern),
            ..LessonSection::new(
                "Grid Template Areas",
                r#".layout {
  display: grid;
  grid-template-areas:
    "header  header"
    "sidebar content"
    "footer  footer";
  grid-template-columns: 260px 1fr;
  grid-template-rows: 60px 1fr 48px;
  min-height: 100vh;
  gap: 12px;
}

/* Each child just references its area name */
.header  { grid-area: header; }
.sidebar { grid-area: sidebar; }
.content { grid-area: content; }
.footer  { grid-area: footer; }

/* Use . for an empty cell */
.grid-with-gap {
  grid-template-areas:
    "header header"
    "sidebar ."     /* empty cell → no content */
    "footer footer";
}"#,
            )
        },
        LessonSection {
            explanation: Some("Grid supports the same alignment properties as Flexbox, with additional per-item and content-level controls."),
            filename: Some("grid-align.css"),
            demo: Some(GRID_ALIGN),
            tips: &[
                "place-items is a shorthand for align-items + justify-items.",
                "place-self on a child overrides the container's place-items for that item.",
            ],
            ..LessonSection::new(
                "Alignment in Grid",
                r#".grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);

  /* Align ALL items in their cells */
  justify-items: stretch;  /* default — fill cell width */
  justify-items: start | center | end;

  align-items: stretch;    /* default — fill cell height */
  align-items: start | center | end;

  /* Align the grid tracks within the container */
  justify-content: start | center | end | space-between;
  align-content: start | center | end | space-between;
}

/* Override for a single item */
.item {
  justify-self: center;
  align-self: end;

  /* Place an item in the center of its cell */
  place-self: center;
}

/* Center the entire grid's content */
.page { place-items: center; }"#,
            )
        },
    ],
};

pub(super) const POSITIONING: LessonContent = LessonContent {
    slug: "positioning",
    title: "Positioning",
    icon: "📌",
    description: "CSS positioning removes elements from the normal document flow and places them with precise coordinates. Understanding stacking context is key.",
    difficulty: Difficulty::Intermediate,
    sections: &[
        LessonSection {
            explanation: Some("There are five position values. static is the default. relative offsets from normal position. absolute removes from flow and anchors to nearest positioned ancestor. fixed anchors to the viewport. sticky is a hybrid."),
            filename: Some("positioning.css"),
            demo: Some(POSITION),
            tips: &[
                "Always set position: relative on a parent when you want absolute children to position relative to it.",
                "Fixed elements are removed from flow — add padding-top to the page equal to the navbar height.",
                "Sticky requires a scroll container ancestor with defined height and overflow other than visible.",
            ],
            ..LessonSection::new(
                "Position Values",
                r#"/* static — default, part of normal flow */
.item { position: static; }

/* relative — offset but still in flow */
.nudge {
  position: relative;
  top: 8px;     /* moves DOWN 8px */
  left: -4px;   /* moves LEFT 4px */
  /* Space is still reserved at original position */
}

/* absolute — removed from flow */
.badge {
  position: absolute;
  top: 8px;
  right: 8px;
  /* Anchors to nearest position:relative ancestor */
}

/* Parent must be positioned for absolute child to anchor */
.card {
  position: relative; /* establishes containing block */
}

/* fixed — anchors to viewport (ignores scroll) */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 100;
}

/* sticky — flows normally, then "sticks" at threshold */
.table-header {
  position: sticky;
  top: 0;
  z-index: 1;
}"#,
            )
        },
        LessonSection {
            explanation: Some("position: sticky acts like relative until the element reaches a specified offset, then it acts like fixed — within its parent container."),
            filename: Some("sticky.css"),
            tips: &[
                "Sticky requires the parent to have a defined height and overflow that allows scrolling.",
                "In a flex column container, use align-self: start so the sticky element doesn't stretch to full height.",
                "backdrop-filter: blur() on sticky headers creates a modern frosted-glass look.",
            ],
            ..LessonSection::new(
                "Sticky Positioning",
                r#"/* Section headers that stick while scrolling */
.section-header {
  position: sticky;
  top: 0;           /* sticks at 0 from scroll parent top */
  background: #1a1d27;
  backdrop-filter: blur(8px);
  z-index: 10;
  padding: 8px 16px;
}

/* Sticky sidebar */
.sidebar {
  position: sticky;
  top: 80px;   /* below a fixed navbar */
  align-self: start; /* inside a flex/grid container */
  height: calc(100vh - 80px);
  overflow-y: auto;
}

/* Sticky table column */
.table th:first-child,
.table td:first-child {
  position: sticky;
  left: 0;
  background: #1a1d27;
}"#,
            )
        },
        LessonSection {
            explanation: Some("z-index controls which element appears on top when they overlap. It only works on positioned elements. Stacking contexts are created by transforms, opacity, filters, and more."),
            filename: Some("z-index.css"),
            tips: &[
                "Use CSS variables for z-index values to create a maintainable layering system.",
                "If a z-index isn't working, the element likely doesn't have a position property set.",
                "Transforms on a parent create a stacking context — children cannot escape it with z-index.",
                "Use isolation: isolate on a component to prevent its z-index from leaking outside.",
            ],
            ..LessonSection::new(
                "Z-index & Stacking Context",
                r#"/* z-index only works on positioned elements */
.modal-overlay { position: fixed; z-index: 1000; }
.modal         { position: fixed; z-index: 1001; }
.tooltip       { position: absolute; z-index: 9999; }

/* ⚠️ New stacking context created by: */
.creates-context {
  opacity: 0.99;        /* opacity < 1 */
  transform: scale(1);  /* any transform */
  filter: blur(0);      /* any filter */
  isolation: isolate;   /* explicit */
  z-index: 0;           /* on positioned element */
  will-change: transform;
}

/* isolation: isolate — explicitly creates stacking context */
/* Prevents child z-indexes from affecting the outer stack */
.card-stack {
  isolation: isolate;
}

/* Recommended z-index scale */
:root {
  --z-base: 0;
  --z-dropdown: 100;
  --z-sticky: 200;
  --z-overlay: 300;
  --z-modal: 400;
  --z-toast: 500;
}"#,
            )
        },
    ],
};
