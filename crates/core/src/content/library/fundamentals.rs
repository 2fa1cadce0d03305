use crate::content::{Demo, DemoControl, DemoTarget, LessonContent, LessonSection};
use crate::model::Difficulty;

const BOX_SIZING: Demo = Demo {
    stage: "display: flex; gap: 12px; align-items: flex-start; padding: 10px; background: rgba(255,255,255,0.03); border: 1px dashed rgba(255,255,255,0.1); border-radius: 8px",
    item_style: "width: 160px; padding: 16px; border: 6px solid #6366f1; background: rgba(99,102,241,0.15); color: #818cf8; font-size: 12px",
    items: &["width: 160px"],
    controls: &[
        DemoControl {
            label: "box-sizing",
            property: "box-sizing",
            target: DemoTarget::Items,
            options: &["content-box", "border-box"],
            default: 0,
        },
    ],
};

const OPACITY: Demo = Demo {
    stage: "display: flex; gap: 8px; padding: 12px; border-radius: 8px; background: repeating-conic-gradient(#1e2433 0% 25%, #151a26 0% 50%) 50% / 16px 16px",
    item_style: "padding: 10px 16px; border-radius: 6px; background: #6366f1; color: white; font-size: 12px",
    items: &["A", "B", "C"],
    controls: &[
        DemoControl {
            label: "opacity",
            property: "opacity",
            target: DemoTarget::Items,
            options: &["1", "0.75", "0.5", "0.25"],
            default: 0,
        },
    ],
};

const LINE_HEIGHT: Demo = Demo {
    stage: "max-width: 280px; font-size: 13px; color: #cbd5e1; padding: 10px; background: rgba(255,255,255,0.03); border: 1px dashed rgba(255,255,255,0.1); border-radius: 8px",
    item_style: "",
    items: &["Line height sets the vertical space each line of text occupies. Longer lines of text need more generous leading to stay readable."],
    controls: &[
        DemoControl {
            label: "line-height",
            property: "line-height",
            target: DemoTarget::Items,
            options: &["1", "1.4", "1.6", "2"],
            default: 2,
        },
    ],
};

pub(super) const SELECTORS: LessonContent = LessonContent {
    slug: "selectors",
    title: "CSS Selectors",
    icon: "🎯",
    description: "Selectors are patterns that tell the browser which HTML elements to style. Mastering them is the foundation of every CSS project.",
    difficulty: Difficulty::Beginner,
    sections: &[
        LessonSection {
            explanation: Some("CSS provides several fundamental selectors: element (tag), class, ID, and attribute selectors. Each targets elements in a different way."),
            filename: Some("selectors-basic.css"),
            tips: &[
                "Prefer classes over IDs for styling — IDs are too specific and harder to override.",
                "Attribute selectors like [type=\"email\"] are great for styling form inputs without extra classes.",
                "Element selectors are best for global resets or base typography styles.",
            ],
            ..LessonSection::new(
                "Basic Selectors",
                r#"/* Element selector — targets all <p> tags */
p {
  color: #e2e8f0;
  line-height: 1.6;
}

/* Class selector — targets elements with class="highlight" */
.highlight {
  color: #818cf8;
  font-weight: 600;
}

/* ID selector — targets a single unique element */
#unique {
  color: #06b6d4;
  font-style: italic;
}

/* Attribute selector — targets <a> with an href */
a[href] {
  color: #f59e0b;
  text-decoration: underline;
}"#,
            )
        },
        LessonSection {
            explanation: Some("Combinators define relationships between selectors. The four combinators are: descendant (space), child (>), adjacent sibling (+), and general sibling (~)."),
            filename: Some("selectors-combinators.css"),
            tips: &[
                "Use the child combinator (>) instead of the descendant (space) when you only want to target direct children — it avoids unintended deep matches.",
                "The adjacent sibling (+) is useful for styling the first paragraph after a heading.",
            ],
            ..LessonSection::new(
                "Combinators",
                r#"/* Descendant — any <p> inside a <div> (any depth) */
div p { color: #818cf8; }

/* Child — only direct <p> children of <div> */
div > p { color: #06b6d4; }

/* Adjacent sibling — <p> immediately after an <h2> */
h2 + p {
  font-size: 1.125rem;
  color: #a5b4fc;
}

/* General sibling — all <p> after an <h2> in same parent */
h2 ~ p { color: #94a3b8; }"#,
            )
        },
        LessonSection {
            explanation: Some("When multiple rules target the same element, the browser picks the winner using specificity — a scoring system based on selector type. Higher score wins."),
            filename: Some("specificity.css"),
            tips: &[
                "Avoid !important in application styles — it creates specificity wars that are hard to debug.",
                "Keep specificity low and flat; use BEM or CSS Modules to scope styles by default.",
                "The :is() and :where() pseudo-classes help write complex selectors with controlled specificity.",
                "!important in user agent or accessibility stylesheets is intentional and appropriate.",
            ],
            ..LessonSection::new(
                "Specificity",
                r#"/*  Specificity: (inline, IDs, classes, elements) */

/* (0,0,0) — universal selector */
* { box-sizing: border-box; }

/* (0,0,1) — element */
p { color: gray; }

/* (0,1,0) — class */
.text { color: blue; }

/* (1,0,0) — ID overrides class */
#intro { color: cyan; }

/* Inline style beats all normal rules */
/* <p style="color: orange"> */

/* !important — use sparingly, last resort only */
.override { color: red !important; }"#,
            )
        },
        LessonSection {
            subtitle: Some("Preview — covered in depth in the Pseudo-classes lesson"),
            explanation: Some("Pseudo-classes target elements in a specific state. Pseudo-elements target a part of an element."),
            filename: Some("pseudo-quick.css"),
            tips: &[
                "Always include :focus styles for keyboard accessibility — never just :hover.",
                "::before and ::after require content: \"\" to be rendered, even if visually hidden.",
            ],
            ..LessonSection::new(
                "Pseudo-class & Pseudo-element Quick Reference",
                r#"/* Pseudo-classes */
a:hover   { color: #818cf8; }       /* mouse over */
a:focus   { outline: 2px solid #818cf8; } /* keyboard focus */
li:first-child { font-weight: bold; }
li:nth-child(2n) { background: #1a1d27; } /* even rows */

/* Pseudo-elements */
p::first-line { color: #818cf8; }   /* first line of text */
p::before {
  content: "→ ";
  color: #06b6d4;
}
p::after {
  content: " ✓";
  color: #10b981;
}"#,
            )
        },
    ],
};

pub(super) const BOX_MODEL: LessonContent = LessonContent {
    slug: "box-model",
    title: "The Box Model",
    icon: "📦",
    description: "Every HTML element is a rectangular box. The box model defines how that box's dimensions are calculated using content, padding, border, and margin.",
    difficulty: Difficulty::Beginner,
    sections: &[
        LessonSection {
            explanation: Some("From inside out: Content (the actual text/image), Padding (space between content and border), Border (a visible or invisible edge), Margin (space outside the border separating elements from each other)."),
            filename: Some("box-model.css"),
            tips: &[
                "Use margin: 0 auto on block elements with a fixed width to center them horizontally.",
                "Padding increases the clickable/tappable area of buttons — prefer padding over min-height alone.",
            ],
            ..LessonSection::new(
                "The Four Layers",
                r#".card {
  /* Content area */
  width: 300px;
  height: 200px;

  /* Space inside the border */
  padding: 24px;              /* all sides */
  padding: 16px 24px;         /* top/bottom left/right */
  padding: 10px 20px 15px 8px; /* top right bottom left */

  /* The visible edge */
  border: 2px solid #6366f1;
  border-radius: 12px;

  /* Space outside the border */
  margin: 16px;
  margin: 0 auto;             /* center horizontally */
}"#,
            )
        },
        LessonSection {
            explanation: Some("By default (`content-box`), width and height only apply to the content area — padding and border are added on top. With `border-box`, the stated width/height includes padding and border, making layout math much more predictable."),
            filename: Some("box-sizing.css"),
            demo: Some(BOX_SIZING),
            tips: &[
                "Always set box-sizing: border-box globally — it is the most common CSS reset after margin/padding 0.",
                "Every modern CSS framework and reset sheet includes this rule.",
            ],
            ..LessonSection::new(
                "box-sizing",
                r#"/* The global reset — add this to every project */
*, *::before, *::after {
  box-sizing: border-box;
}

.sidebar {
  width: 300px;
  padding: 24px;
  border: 2px solid #6366f1;
  /* With border-box: total width stays 300px */
  /* Without it: 300 + 48 + 4 = 352px total! */
}

/* Override for a specific element */
.legacy-component {
  box-sizing: content-box;
}"#,
            )
        },
        LessonSection {
            explanation: Some("Vertical margins between adjacent block elements collapse into the larger of the two values. This only happens vertically and not with floated, inline, or flex/grid items."),
            filename: Some("margin-collapse.css"),
            tips: &[
                "Margin collapsing surprises many developers — prefer gap in flex/grid layouts to avoid it entirely.",
                "Margins never collapse through padding, borders, or overflow other than visible.",
                "Use logical properties (margin-block-start) instead of margin-top for internationalized layouts.",
            ],
            ..LessonSection::new(
                "Margin Collapsing",
                r#"/* These two paragraphs are adjacent */
.top-para    { margin-bottom: 24px; }
.bottom-para { margin-top: 16px; }
/* Result: gap = 24px (not 40px!) */

/* Prevent collapse by adding padding or border to parent */
.parent {
  padding-top: 1px;     /* prevents top child margin collapse */
  overflow: hidden;     /* also prevents collapse */
}

/* No collapsing: flex/grid containers */
.flex-parent {
  display: flex;
  flex-direction: column;
  gap: 24px; /* prefer gap over margins in flex/grid */
}"#,
            )
        },
        LessonSection {
            explanation: Some("Outline looks like a border but doesn't affect layout — it doesn't take up space. It's most commonly used for focus indicators."),
            filename: Some("outline.css"),
            tips: &[
                "Never set outline: none on focused elements without providing an alternative — this harms keyboard users.",
                "Use :focus-visible instead of :focus to only show outlines for keyboard navigation.",
                "outline-offset creates a gap between the outline and the element edges.",
            ],
            ..LessonSection::new(
                "Outline vs Border",
                r#"/* Border — affects layout (adds to box size without border-box) */
.btn {
  border: 2px solid #6366f1;
  padding: 10px 20px;
}

/* Outline — does NOT affect layout */
.btn:focus {
  outline: 2px solid #818cf8;
  outline-offset: 3px;   /* gap between element and outline */
}

/* Never do this — it breaks keyboard accessibility */
.btn:focus { outline: none; } /* ❌ */

/* Instead, provide a custom visible focus style */
.btn:focus-visible {
  outline: 2px solid #818cf8;
  outline-offset: 3px;
}"#,
            )
        },
    ],
};

pub(super) const COLORS: LessonContent = LessonContent {
    slug: "colors",
    title: "Colors",
    icon: "🎨",
    description: "CSS supports multiple color formats, gradients, and transparency controls. Modern formats like OKLCH provide perceptually uniform color manipulation.",
    difficulty: Difficulty::Beginner,
    sections: &[
        LessonSection {
            explanation: Some("CSS accepts color values in many formats. HEX and RGB are most common, but HSL and OKLCH are more human-friendly for creating color palettes."),
            filename: Some("color-formats.css"),
            tips: &[
                "Use HSL or OKLCH when building color palettes — adjust lightness/chroma while keeping the same hue.",
                "HEX with alpha (#RRGGBBAA) shorthand works in all modern browsers.",
                "OKLCH produces more visually consistent gradients between two colors than RGB.",
            ],
            ..LessonSection::new(
                "Color Formats",
                r#"/* Named colors — 140+ keywords */
color: tomato;
color: cornflowerblue;

/* HEX — #RRGGBB or shorthand #RGB */
color: #6366f1;
color: #63f;  /* shorthand */
color: #6366f180; /* with alpha (last 2 hex digits) */

/* RGB / RGBA */
color: rgb(99, 102, 241);
color: rgba(99, 102, 241, 0.5); /* 50% opacity */
color: rgb(99 102 241 / 50%);   /* modern space syntax */

/* HSL — Hue (0-360°), Saturation, Lightness */
color: hsl(239, 84%, 67%);
color: hsl(239deg 84% 67% / 80%);

/* OKLCH — perceptually uniform (modern CSS) */
color: oklch(65% 0.2 258);
/* lightness% chroma hue-angle */"#,
            )
        },
        LessonSection {
            explanation: Some("CSS gradients are images created by the browser — they can be used anywhere an image is expected. Three types: linear, radial, and conic."),
            filename: Some("gradients.css"),
            tips: &[
                "Use multiple comma-separated backgrounds to stack a gradient overlay on top of an image.",
                "Add many small color stops to create noise/texture effects with a gradient.",
                "linear-gradient(in oklch, red, blue) interpolates in OKLCH space for vivid gradients.",
            ],
            ..LessonSection::new(
                "Gradients",
                r#"/* Linear gradient */
background: linear-gradient(135deg, #6366f1, #06b6d4);
background: linear-gradient(to right, #0f1117, #6366f1 50%, #06b6d4);

/* Radial gradient */
background: radial-gradient(circle at center, #f59e0b, #ef4444);
background: radial-gradient(ellipse 80% 60% at 50% 40%, #6366f1, transparent);

/* Conic gradient */
background: conic-gradient(from 0deg, #6366f1, #06b6d4, #10b981, #6366f1);

/* Stacked gradients (multiple backgrounds) */
background:
  linear-gradient(rgba(0,0,0,0.4), rgba(0,0,0,0.4)),
  url('image.jpg') center/cover;"#,
            )
        },
        LessonSection {
            explanation: Some("There are two ways to add transparency: the opacity property (affects the whole element including children) or an alpha channel in the color value (only affects that color)."),
            filename: Some("opacity.css"),
            demo: Some(OPACITY),
            tips: &[
                "Prefer rgba/alpha channels over the opacity property so children are not affected.",
                "opacity: 0 still makes an element interactive (it receives clicks). Use visibility: hidden or pointer-events: none to disable.",
                "Split color channels into CSS variables to reuse them at different opacities.",
            ],
            ..LessonSection::new(
                "Opacity & Transparency",
                r#"/* opacity — affects entire element + all children */
.overlay { opacity: 0.5; }  /* 0 = invisible, 1 = opaque */

/* Alpha channel — only this color is transparent */
.card {
  background: rgba(99, 102, 241, 0.15);
  border: 1px solid rgba(99, 102, 241, 0.3);
  /* Children are NOT affected */
}

/* Transparent keyword */
.ghost { background: transparent; }

/* CSS variable with alpha */
:root { --primary: 99 102 241; }
.tinted {
  background: rgb(var(--primary) / 0.2);
}"#,
            )
        },
        LessonSection {
            explanation: Some("currentColor is a special keyword that references the current element's color value, making it easy to keep SVG icons and borders in sync with text color."),
            filename: Some("current-color.css"),
            tips: &[
                "Use currentColor on SVG icons — the icon color will automatically match surrounding text.",
                "currentColor is inherited, so setting it on a parent propagates through all child SVG icons.",
            ],
            ..LessonSection::new(
                "currentColor & inherit",
                r#"/* currentColor mirrors the element's own color value */
.btn {
  color: #6366f1;
  border: 2px solid currentColor;  /* matches color */
}

.btn svg {
  fill: currentColor;  /* icon matches button text */
}

.btn:hover {
  color: #818cf8;
  /* border and icon automatically follow */
}

/* inherit — explicitly take the parent's value */
.child { color: inherit; }

/* initial — reset to browser default */
.reset { color: initial; }

/* unset — inherit if inherited, otherwise initial */
.unset { color: unset; }"#,
            )
        },
    ],
};

pub(super) const TYPOGRAPHY: LessonContent = LessonContent {
    slug: "typography",
    title: "Typography",
    icon: "✍️",
    description: "Typography is about making text readable, beautiful, and appropriate for its context. CSS provides fine-grained control over fonts, sizing, spacing, and layout.",
    difficulty: Difficulty::Beginner,
    sections: &[
        LessonSection {
            explanation: Some("CSS uses a font stack — a prioritised list of fonts. The browser uses the first one available. Google Fonts and local fonts can be loaded with @font-face or @import."),
            filename: Some("fonts.css"),
            tips: &[
                "Always end your font stack with a generic family: serif, sans-serif, or monospace.",
                "Use font-display: swap to prevent invisible text during font loading.",
                "Prefer WOFF2 format for self-hosted fonts — best compression and universal browser support.",
            ],
            ..LessonSection::new(
                "Font Families & Loading",
                r#"/* Font stack: tries each in order until one is found */
body {
  font-family: 'Inter', system-ui, -apple-system, sans-serif;
}

code {
  font-family: 'Fira Code', 'Cascadia Code', monospace;
}

/* Google Fonts — add to your HTML <head> */
/* <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;600;700&display=swap" rel="stylesheet"> */

/* @font-face — self-hosted fonts */
@font-face {
  font-family: 'MyFont';
  src: url('/fonts/myfont.woff2') format('woff2');
  font-weight: 100 900; /* variable font range */
  font-display: swap;   /* show fallback while loading */
}"#,
            )
        },
        LessonSection {
            explanation: Some("Avoid fixed pixel sizes for body text. Use rem (relative to root) for accessibility. The clamp() function creates fluid typography that scales between screen sizes without media queries."),
            filename: Some("font-size.css"),
            tips: &[
                "Never set font-size in px on the <html> element if you want to respect user accessibility preferences.",
                "clamp() eliminates many font-size media queries.",
                "Avoid font sizes below 12px — they become unreadable and fail accessibility audits.",
            ],
            ..LessonSection::new(
                "Font Size & Fluid Typography",
                r#"/* rem — scales with user's browser font size setting */
html  { font-size: 16px; } /* 1rem = 16px */
body  { font-size: 1rem; }   /* 16px */
h1    { font-size: 2.25rem; } /* 36px */
small { font-size: 0.75rem; } /* 12px */

/* em — relative to the PARENT's font size */
.parent { font-size: 20px; }
.child  { font-size: 0.9em; } /* 18px */

/* clamp(min, preferred, max) — fluid sizing */
h1 {
  font-size: clamp(1.5rem, 4vw, 3rem);
  /* min: 24px | scales with viewport | max: 48px */
}

p {
  font-size: clamp(1rem, 1.5vw, 1.125rem);
}"#,
            )
        },
        LessonSection {
            explanation: Some("Weight ranges from 100 (thin) to 900 (black). Variable fonts support any value in between. Decoration includes underline, strikethrough, and more."),
            filename: Some("text-style.css"),
            tips: &[
                "Constrain paragraph width with max-width: 65-75ch for comfortable reading.",
                "Use letter-spacing sparingly — negative values on headings, small positive values on uppercase labels.",
                "text-underline-offset adds breathing room under link underlines, improving clarity.",
            ],
            ..LessonSection::new(
                "Font Weight, Style & Decoration",
                r#".light    { font-weight: 300; }
.regular  { font-weight: 400; }
.semibold { font-weight: 600; }
.bold     { font-weight: 700; }

/* Italic */
em, .italic { font-style: italic; }

/* Text decoration */
a {
  text-decoration: underline;
  text-decoration-color: #6366f1;
  text-underline-offset: 3px; /* gap between text and line */
}

del { text-decoration: line-through; }

/* Letter & word spacing */
.heading {
  letter-spacing: -0.02em;  /* tighten heading */
}

.label {
  letter-spacing: 0.1em;
  text-transform: uppercase;
}

/* Line & text wrapping */
p {
  line-height: 1.7;
  max-width: 70ch; /* ch = width of "0" character */
  text-wrap: pretty; /* smart hyphenation (modern) */
}"#,
            )
        },
        LessonSection {
            explanation: Some("Line height controls the space between lines of text. A value of 1.5–1.8 is ideal for body text. Always use unitless values to avoid inheritance issues."),
            filename: Some("line-height.css"),
            demo: Some(LINE_HEIGHT),
            tips: &[
                "Use unitless line-height so it scales proportionally when font-size changes.",
                "text-wrap: balance distributes text evenly across lines in headings.",
                "text-wrap: pretty avoids orphans (single words on a line) in paragraphs.",
            ],
            ..LessonSection::new(
                "Line Height & Vertical Rhythm",
                r#"/* Use unitless values — relative to element's font-size */
body   { line-height: 1.6; }    /* ✅ inherits correctly */
body   { line-height: 1.6em; }  /* ⚠️ can cause issues */
body   { line-height: 26px; }   /* ❌ breaks scaling */

/* Headings need tighter line height */
h1, h2, h3 {
  line-height: 1.1;
  text-wrap: balance; /* even line lengths (modern) */
}

/* Good vertical rhythm: use multiples of base unit */
:root { --base: 8px; }
h1    { margin-bottom: calc(var(--base) * 3); }
p     { margin-bottom: calc(var(--base) * 2); }"#,
            )
        },
    ],
};
