use crate::content::{Demo, DemoControl, DemoTarget, LessonContent, LessonSection};
use crate::model::{Badge, Difficulty};

const STAGE_WIDTH: Demo = Demo {
    stage: "display: grid; grid-template-columns: repeat(auto-fit, minmax(70px, 1fr)); gap: 6px; padding: 10px; background: rgba(255,255,255,0.03); border: 1px dashed rgba(255,255,255,0.1); border-radius: 8px",
    item_style: "padding: 6px 12px; background: rgba(99,102,241,0.15); border: 1px solid rgba(99,102,241,0.4); border-radius: 6px; color: #818cf8; font-size: 12px; white-space: nowrap; text-align: center",
    items: &["1", "2", "3", "4"],
    controls: &[
        DemoControl {
            label: "viewport",
            property: "width",
            target: DemoTarget::Stage,
            options: &["100%", "75%", "50%", "30%"],
            default: 0,
        },
    ],
};

const LOGICAL_PROPERTIES: Demo = Demo {
    stage: "padding: 10px; background: rgba(255,255,255,0.03); border: 1px dashed rgba(255,255,255,0.1); border-radius: 8px",
    item_style: "padding: 6px 12px; background: rgba(99,102,241,0.15); border: 1px solid rgba(99,102,241,0.4); border-radius: 6px; color: #818cf8; font-size: 12px; white-space: nowrap; margin-inline-start: 24px; border-inline-start: 4px solid #06b6d4; margin-block: 4px",
    items: &["margin-inline-start", "border-inline-start"],
    controls: &[
        DemoControl {
            label: "direction",
            property: "direction",
            target: DemoTarget::Stage,
            options: &["ltr", "rtl"],
            default: 0,
        },
    ],
};

pub(super) const VARIABLES: LessonContent = LessonContent {
    slug: "variables",
    title: "CSS Variables",
    icon: "🎨",
    description: "CSS custom properties (variables) unlock dynamic, maintainable theming directly in CSS. Unlike preprocessor variables, they're live — JavaScript can read and write them at runtime.",
    difficulty: Difficulty::Intermediate,
    sections: &[
        LessonSection {
            explanation: Some("Custom properties are declared with a -- prefix and accessed via var(). They cascade and inherit like any other CSS property."),
            filename: Some("variables.css"),
            tips: &[
                "Custom properties ARE case-sensitive: --Color is different from --color.",
                "The fallback in var() only applies when the property is not defined, not when it's invalid.",
                "Custom properties can hold any CSS value, including partial values like calc arguments.",
            ],
            ..LessonSection::new(
                "Declaring & Using Custom Properties",
                r#"/* Declare on :root to make globally accessible */
:root {
  --color-primary: #6366f1;
  --color-bg: #0a0c14;
  --font-size-base: 1rem;
  --space-4: 1rem;
  --radius: 8px;
}

/* Access with var() — second arg is fallback */
.button {
  background: var(--color-primary);
  padding: var(--space-4);
  border-radius: var(--radius, 4px); /* fallback: 4px */
  font-size: var(--font-size-base);
}

/* Fallback chains */
.card {
  color: var(--card-color, var(--color-text, #fff));
}"#,
            )
        },
        LessonSection {
            explanation: Some("Custom properties obey CSS inheritance. Scoping them to a component element prevents polluting the global namespace."),
            filename: Some("scope.css"),
            tips: &[
                "Scope variables to a component class rather than :root when they are only relevant to that component.",
                "This pattern keeps your global variable namespace clean and predictable.",
            ],
            ..LessonSection::new(
                "Scope & Inheritance",
                r#"/* Each component can override its own scope */
.card {
  --card-bg: #1a1f2e;
  --card-radius: 12px;
  background: var(--card-bg);
  border-radius: var(--card-radius);
}

/* Variants: just override the variable */
.card--featured {
  --card-bg: #2d1458;
  --card-radius: 20px;
}

/* Theming: override at a containing element */
[data-theme="light"] {
  --color-bg: #ffffff;
  --color-text: #0a0c14;
  --color-surface: #f1f5f9;
}

/* Dark theme (default) */
:root {
  --color-bg: #0a0c14;
  --color-text: #e2e8f0;
  --color-surface: #1a1f2e;
}"#,
            )
        },
        LessonSection {
            explanation: Some("Because custom properties live in the CSSOM, JavaScript can read and write them with getPropertyValue() and setProperty()."),
            filename: Some("dynamic-theme.js"),
            language: "javascript",
            tips: &[
                "Storing a hue value lets you derive an entire palette — primary, surface, bg — from one variable.",
                "hsl() with a CSS variable hue is a powerful one-variable theming pattern.",
                "Use @property to register custom properties with type safety and animation support (CSS Houdini).",
            ],
            badge: Some(Badge::Pro),
            ..LessonSection::new(
                "Dynamic Theming — Live Demo",
                r#"/* CSS: define the variable */
:root {
  --hue: 240;
  --primary: hsl(var(--hue), 80%, 65%);
  --bg: hsl(var(--hue), 70%, 10%);
}
.button { background: var(--primary); }

/* JS: change the theme at runtime */
const slider = document.querySelector('#hue');
slider.addEventListener('input', e => {
  document.documentElement.style
    .setProperty('--hue', e.target.value);
});

/* Read a custom property */
const hue = getComputedStyle(document.documentElement)
  .getPropertyValue('--hue');"#,
            )
        },
        LessonSection {
            explanation: Some("CSS variables work seamlessly inside calc(), making spacing systems, fluid sizing, and component math reusable."),
            filename: Some("calc-vars.css"),
            tips: &[
                "Build a spacing scale by multiplying a single --space-unit variable.",
                "Avoid deeply nested calc() expressions — they become hard to debug.",
                "@property can enforce a number type on a variable, enabling animation via CSS transition.",
            ],
            ..LessonSection::new(
                "Using Variables in calc()",
                r#"/* Systematic spacing with a base unit */
:root {
  --space-unit: 4px;
}
.sm { padding: calc(var(--space-unit) * 2); }  /* 8px  */
.md { padding: calc(var(--space-unit) * 4); }  /* 16px */
.lg { padding: calc(var(--space-unit) * 8); }  /* 32px */

/* Fluid sidebar with variable override */
:root { --sidebar-width: 260px; }
.sidebar     { width: var(--sidebar-width); }
.main-content {
  margin-left: calc(var(--sidebar-width) + 2rem);
}

/* Breakpoint-driven variable */
@media (max-width: 768px) {
  :root { --sidebar-width: 0px; }
}"#,
            )
        },
    ],
};

pub(super) const PSEUDO: LessonContent = LessonContent {
    slug: "pseudo",
    title: "Pseudo-classes & Pseudo-elements",
    icon: "🔵",
    description: "Pseudo-classes target elements in a particular state (:hover, :focus). Pseudo-elements create virtual sub-parts of elements (::before, ::after). Together they unlock rich interactive CSS without extra markup.",
    difficulty: Difficulty::Intermediate,
    sections: &[
        LessonSection {
            explanation: Some("Structural pseudo-classes select elements based on their position in the DOM — no class names required."),
            filename: Some("structural.css"),
            tips: &[
                ":nth-child(An+B) — A is the cycle size, B is the offset. Example: 3n+1 → 1, 4, 7, 10…",
                ":not() accepts any simple selector as of CSS Selectors Level 4, including :not(.foo, .bar).",
                "Prefer :nth-child over manually adding first/last classes to your markup.",
            ],
            ..LessonSection::new(
                "Structural Pseudo-classes",
                r#":first-child   { color: gold; }     /* first sibling */
:last-child    { color: coral; }    /* last sibling */
:only-child    { color: teal; }     /* no siblings */

/* nth-child — powerful pattern matching */
:nth-child(2)     { }  /* exactly the 2nd child */
:nth-child(2n)    { }  /* every EVEN child (2,4,6…) */
:nth-child(2n+1)  { }  /* every ODD child (1,3,5…) */
:nth-child(3n)    { }  /* every 3rd child */
:nth-child(-n+3)  { }  /* first 3 children */
:nth-child(n+4)   { }  /* from 4th onwards */

/* Type-based variants */
:first-of-type, :last-of-type, :nth-of-type(2n) { }

/* Negation */
li:not(:last-child) { border-bottom: 1px solid #eee; }

/* Quantity queries */
li:nth-last-child(n+4) { font-size: 0.9em; } /* if 4+ items, shrink */"#,
            )
        },
        LessonSection {
            explanation: Some("State pseudo-classes react to user interaction, form state, and browser features."),
            filename: Some("state.css"),
            tips: &[
                "Always provide a visible :focus style — removing it harms keyboard accessibility.",
                ":focus-visible is a modern improvement — it shows focus rings for keyboard users only.",
                ":has() is now supported in all major browsers and enables powerful parent-aware styling.",
            ],
            ..LessonSection::new(
                "State Pseudo-classes",
                r#"/* Pointer interactions */
a:hover   { color: #6366f1; }
a:active  { opacity: 0.7; }  /* while clicking */
a:visited { color: #818cf8; }

/* Keyboard focus — never remove! */
:focus { outline: 2px solid #6366f1; outline-offset: 3px; }
:focus-visible { /* only keyboard focus, not mouse click */
  outline: 2px solid #6366f1;
}
/* Remove default only when replacing with custom style */
:focus:not(:focus-visible) { outline: none; }

/* Form states */
input:valid     { border-color: #10b981; }
input:invalid   { border-color: #ef4444; }
input:required  { border-left: 3px solid #f59e0b; }
input:disabled  { opacity: 0.5; cursor: not-allowed; }
input:checked + label { color: #6366f1; }
input:placeholder-shown { background: #f9fafb; }

/* :has() — parent selector */
.form-group:has(input:invalid) label { color: #ef4444; }
.card:has(img) { padding-top: 0; }  /* card has an image? */"#,
            )
        },
        LessonSection {
            explanation: Some("Pseudo-elements create virtual child nodes that can be styled with CSS, enabling decorative effects without extra HTML elements."),
            filename: Some("pseudo-elements.css"),
            tips: &[
                "::before and ::after require content: \"\" even if they display nothing — it activates the pseudo-element.",
                "Never rely on ::before/::after for meaningful content — screen readers may not read it.",
                "::selection styles only work for color, background, and a few text properties.",
            ],
            ..LessonSection::new(
                "Pseudo-elements",
                r#"/* Generated content */
.required::after {
  content: ' *';
  color: red;
}

.blockquote::before {
  content: '"';
  font-size: 4rem;
  color: #6366f1;
  line-height: 0;
  vertical-align: -1rem;
}

/* Decorative ::before / ::after */
.underline-hover {
  position: relative;
}
.underline-hover::after {
  content: '';
  position: absolute;
  bottom: 0; left: 0;
  width: 0; height: 2px;
  background: #6366f1;
  transition: width 300ms ease;
}
.underline-hover:hover::after { width: 100%; }

/* ::placeholder, ::selection */
input::placeholder { color: #4a5568; font-style: italic; }
::selection { background: #6366f1; color: white; }"#,
            )
        },
        LessonSection {
            explanation: Some("Modern CSS provides powerful selector grouping and relational selectors. :is() and :where() simplify complex selector lists. :has() selects a parent based on its children."),
            filename: Some("modern-selectors.css"),
            tips: &[
                ":where() is great for resets and base styles because its zero specificity is easy to override.",
                ":has() is now supported in Chrome, Edge, Safari and Firefox. Check caniuse.com for exact versions.",
                ":is() raises specificity to the most specific selector in its argument list.",
            ],
            badge: Some(Badge::Modern),
            ..LessonSection::new(
                ":is(), :where(), :has()",
                r#"/* :is() — group selectors, uses highest specificity in list */
:is(h1, h2, h3) a { color: inherit; }
:is(article, section, aside) p { line-height: 1.7; }

/* :where() — same as :is() but ZERO specificity */
:where(h1, h2, h3) { font-weight: 700; }  /* easy to override */

/* :has() — parent selector (game changer!) */
/* Select a form-group that contains an invalid input */
.form-group:has(input:invalid) {
  --border-color: #ef4444;
}
/* Style a card differently when it has an image */
.card:has(> img:first-child) { padding-top: 0; }
/* Select items following a checked radio */
input[type="radio"]:checked + label { color: #6366f1; }
/* Quantity queries */
ul:has(li:nth-child(5)) li { font-size: 0.85rem; }  /* 5+ items?"#,
            )
        },
    ],
};

pub(super) const RESPONSIVE: LessonContent = LessonContent {
    slug: "responsive",
    title: "Responsive Design",
    icon: "📱",
    description: "Responsive design means building layouts that adapt gracefully to any screen size. The modern toolkit — fluid units, clamp(), media queries, and container queries — makes single-source-of-truth CSS possible.",
    difficulty: Difficulty::Intermediate,
    sections: &[
        LessonSection {
            explanation: Some("Media queries apply CSS conditionally based on device characteristics. The mobile-first approach uses min-width — start small, add complexity as the screen grows."),
            filename: Some("media-queries.css"),
            demo: Some(STAGE_WIDTH),
            tips: &[
                "Mobile-first (min-width) is preferred — base styles are simplest and then you enhance.",
                "Avoid device-specific breakpoints (768px = iPad) — use content-driven breakpoints instead.",
                "The new range syntax (@media (480px <= width < 768px)) is cleaner but check browser support.",
            ],
            ..LessonSection::new(
                "Media Queries",
                r#"/* Viewport width breakpoints (mobile-first) */
/* Base styles: mobile */
.grid { grid-template-columns: 1fr; }

@media (min-width: 480px) {   /* small tablets */
  .grid { grid-template-columns: repeat(2, 1fr); }
}
@media (min-width: 768px) {   /* tablets */
  .grid { grid-template-columns: repeat(3, 1fr); }
}
@media (min-width: 1024px) {  /* laptops */
  .grid { grid-template-columns: repeat(4, 1fr); }
}

/* Range syntax (modern — CSS Media Queries Level 4) */
@media (480px <= width < 768px) {
  .grid { grid-template-columns: repeat(2, 1fr); }
}

/* Non-width queries */
@media (orientation: landscape) { }
@media (prefers-color-scheme: dark) { }
@media (prefers-reduced-motion: reduce) { }
@media (hover: none) { }          /* touch devices */
@media print { * { color: black; } }

/* Logical operators */
@media (min-width: 768px) and (max-width: 1024px) { }"#,
            )
        },
        LessonSection {
            explanation: Some("clamp(min, preferred, max) creates values that scale with the viewport, eliminating the need for multiple breakpoints for typography and spacing."),
            filename: Some("fluid.css"),
            tips: &[
                "clamp() eliminates many breakpoint-specific font-size declarations.",
                "Use svh (small viewport height) instead of vh for mobile to avoid address bar issues.",
                "max-width: 65ch on paragraphs ensures optimal reading line length across screen sizes.",
            ],
            ..LessonSection::new(
                "Fluid Sizing with clamp()",
                r#"/* font-size that scales from 14px (mobile) to 20px (desktop) */
/* clamp(minimum, preferred, maximum) */
h1 { font-size: clamp(1.25rem, 4vw, 2.5rem); }
p  { font-size: clamp(0.875rem, 2vw, 1.125rem); }

/* Fluid spacing */
.section {
  padding-block: clamp(2rem, 8vw, 6rem);
}

/* Fluid grid column sizing */
.auto-grid {
  grid-template-columns: repeat(auto-fit, minmax(min(250px, 100%), 1fr));
}

/* viewport units */
.hero { height: 100svh; } /* svh = small viewport height (mobile-safe) */
.full { width: 100vw; }

/* ch unit — based on character width */
p { max-width: 65ch; }  /* ~optimal reading line length */"#,
            )
        },
        LessonSection {
            explanation: Some("Container queries apply styles based on the parent container's size, not the viewport. This enables truly component-driven responsive design."),
            filename: Some("container-queries.css"),
            tips: &[
                "container-queries allow a component to be responsive to where it is placed, not the viewport.",
                "container-type: inline-size is the most common — it enables width-based queries.",
                "This is one of the biggest improvements to responsive CSS in years. Browser support is excellent.",
            ],
            badge: Some(Badge::Modern),
            ..LessonSection::new(
                "Container Queries",
                r#"/* 1. Define a containment context */
.card-wrapper {
  container-type: inline-size;
  container-name: card; /* optional — for named queries */
}

/* 2. Query the container's size */
@container (min-width: 400px) {
  .card {
    display: grid;
    grid-template-columns: 200px 1fr;
  }
}

/* Named container query */
@container card (min-width: 600px) {
  .card__title { font-size: 1.5rem; }
}

/* Container query units */
.card__img {
  width: 50cqi;  /* 50% of container inline size */
  height: 20cqb; /* 20% of container block size */
}

/* Combine with CSS variables for compound components */
@container (width < 300px) {
  .price { font-size: 0.875rem; }
}"#,
            )
        },
    ],
};

pub(super) const MODERN: LessonContent = LessonContent {
    slug: "modern",
    title: "Modern CSS",
    icon: "✨",
    description: "CSS has evolved dramatically. Nesting, cascade layers, logical properties, color-mix(), and @property bring language-level features that were previously only possible with preprocessors.",
    difficulty: Difficulty::Advanced,
    sections: &[
        LessonSection {
            explanation: Some("Native CSS nesting (now supported without a preprocessor) lets you write component styles without repeating the parent selector, similar to Sass."),
            filename: Some("nesting.css"),
            tips: &[
                "Native nesting uses & to refer to the parent — it's required for combinators and pseudo-classes.",
                "Nesting reduces repetition but can hurt readability if more than 3 levels deep.",
                "Check caniuse.com — CSS Nesting is now supported in Chrome 112+, Firefox 117+, Safari 16.5+.",
            ],
            badge: Some(Badge::Modern),
            ..LessonSection::new(
                "CSS Nesting",
                r#"/* Native CSS nesting — supported in all modern browsers */
.card {
  background: #1a1f2e;
  padding: 1.5rem;
  border-radius: 12px;

  /* Nested selectors — & represents the parent (.card) */
  & .title {
    font-size: 1.25rem;
    color: #e2e8f0;
  }

  &:hover {
    transform: translateY(-2px);
  }

  & .badge {
    background: #6366f1;
    & span { font-size: 0.75rem; }  /* further nesting */
  }

  /* Media query nesting */
  @media (max-width: 768px) {
    padding: 1rem;
  }
}

/* Implicit & (selector starts with element/class) */
.button {
  background: blue;
  :hover & { background: darkblue; }  /* parent hover */
}"#,
            )
        },
        LessonSection {
            explanation: Some("@layer gives you explicit control over the CSS cascade. Styles in later layers win over earlier ones, regardless of specificity — solving specificity wars."),
            filename: Some("layers.css"),
            tips: &[
                "Layers are declared in order — later-declared layers win. Declare the order explicitly at the top.",
                "Third-party styles imported into a @layer can never override your unlayered styles.",
                "Unlayered styles always beat layered styles, regardless of specificity.",
            ],
            badge: Some(Badge::Modern),
            ..LessonSection::new(
                "Cascade Layers (@layer)",
                r#"/* Declare layer order — EARLIER layers have LOWER priority */
@layer reset, base, components, utilities;

/* Assign styles to layers */
@layer reset {
  *, *::before, *::after { box-sizing: border-box; }
  body { margin: 0; }
}

@layer base {
  h1 { font-size: 2rem; }
  a  { color: blue; }
}

@layer components {
  .btn { background: #6366f1; padding: 0.5rem 1rem; }
}

/* Utilities always win — highest priority */
@layer utilities {
  .mt-0 { margin-top: 0 !important; }
  .hidden { display: none; }
}

/* Import a library into a layer (contained specificity) */
@import url('bootstrap.css') layer(bootstrap);"#,
            )
        },
        LessonSection {
            explanation: Some(":has() lets you style a parent element based on its children or subsequent siblings. It was previously impossible in pure CSS."),
            filename: Some("has-selector.css"),
            tips: &[
                ":has() now has broad browser support (Chrome/Edge 105+, Safari 15.4+, Firefox 121+).",
                ":has() accepts a relative selector list — it's checking for descendants matching that selector.",
                "Avoid deeply nested :has() chains — they can be expensive for the browser to evaluate.",
            ],
            badge: Some(Badge::Modern),
            ..LessonSection::new(
                ":has() — The Parent Selector",
                r#"/* Style a form-group when its input is invalid */
.form-group:has(input:invalid) label {
  color: #ef4444;
}
.form-group:has(input:invalid) .hint {
  display: block;
}

/* Card layout changes when it contains an image */
.card:has(> img:first-child) {
  padding-top: 0;
}

/* Navigation with open submenu */
.nav-item:has(.submenu:hover) > .nav-link {
  color: #6366f1;
}

/* Sibling-based (! operator not needed) */
h2:has(+ p) { margin-bottom: 0.25em; }

/* Quantity queries */
ul:has(li:nth-child(10)) {  /* if 10+ items… */
  font-size: 0.85rem;
  columns: 2;
}"#,
            )
        },
        LessonSection {
            explanation: Some("Logical properties replace directional terms (left/right/top/bottom) with start/end/inline/block — enabling automatic RTL and writing-mode support."),
            filename: Some("logical.css"),
            demo: Some(LOGICAL_PROPERTIES),
            tips: &[
                "Use logical properties in new projects — they are now widely supported.",
                "They automatically flip left/right for RTL languages when dir=\"rtl\" or writing-mode changes.",
                "Logical shorthands (padding-inline, margin-block) are especially clean.",
            ],
            badge: Some(Badge::Modern),
            ..LessonSection::new(
                "Logical Properties",
                r#"/* Physical → Logical property equivalents */
margin-top    → margin-block-start
margin-bottom → margin-block-end
margin-left   → margin-inline-start
margin-right  → margin-inline-end
padding-left  → padding-inline-start

/* Shorthand logical properties */
margin-inline:  auto;          /* left + right */
margin-block:   1rem 2rem;     /* top + bottom */
padding-inline: 1rem;          /* left + right */
padding-block:  0.5rem 1rem;   /* top + bottom */

inset-inline-start: 0;  /* replaces left: 0 */
inset-block-start:  0;  /* replaces top: 0 */
inset: 0;               /* shorthand for all four sides */

/* Borders */
border-inline: 1px solid #6366f1;  /* left + right border */
border-block-end: 1px solid #2d3748; /* bottom border */

/* Dimensions */
inline-size:     400px;   /* width */
block-size:      200px;   /* height */
min-inline-size: 200px;   /* min-width */"#,
            )
        },
        LessonSection {
            explanation: Some("color-mix() blends two colors in CSS. @property registers a custom property with a type, enabling animations on color variables and numeric values."),
            filename: Some("modern-color.css"),
            tips: &[
                "color-mix() is now supported in all major browsers (Chrome 111+, Firefox 113+, Safari 16.2+).",
                "@property is Chrome/Edge-only for now — use it as progressive enhancement.",
                "@property enables CSS-only gradient animations that were previously JavaScript-only.",
            ],
            badge: Some(Badge::Modern),
            ..LessonSection::new(
                "color-mix() & @property",
                r#"/* color-mix(in colorspace, color1 amount, color2 amount) */
.mixed-50  { color: color-mix(in srgb, #6366f1, #06b6d4); }
.mixed-30  { color: color-mix(in srgb, #6366f1 30%, #06b6d4); }
.tinted    { color: color-mix(in srgb, #6366f1 80%, transparent); }

/* Mix with currentColor for automatic tinting */
.badge { background: color-mix(in srgb, currentColor 15%, transparent); }

/* @property — typed custom properties (CSS Houdini) */
@property --progress {
  syntax: '<number>';
  inherits: false;
  initial-value: 0;
}

/* Now --progress can be animated! */
.loader {
  --progress: 0;
  width: calc(var(--progress) * 1%);
  transition: --progress 500ms ease;
}
.loader.loaded { --progress: 100; }

/* Animate a gradient via @property */
@property --hue {
  syntax: '<angle>';
  inherits: false;
  initial-value: 0deg;
}
.spinning-gradient {
  background: hsl(var(--hue), 80%, 60%);
  animation: spin-hue 3s linear infinite;
}
@keyframes spin-hue {
  to { --hue: 360deg; }
}"#,
            )
        },
    ],
};
