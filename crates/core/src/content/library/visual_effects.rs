use crate::content::{Demo, DemoControl, DemoTarget, LessonContent, LessonSection};
use crate::model::{Badge, Difficulty};

const BOX_SHADOW: Demo = Demo {
    stage: "display: flex; justify-content: center; padding: 24px",
    item_style: "width: 140px; height: 70px; border-radius: 10px; background: #1e2433; display: flex; align-items: center; justify-content: center; color: #cbd5e1; font-size: 12px",
    items: &["card"],
    controls: &[
        DemoControl {
            label: "box-shadow",
            property: "box-shadow",
            target: DemoTarget::Items,
            options: &["none", "0 1px 3px rgba(0,0,0,0.4)", "0 10px 25px rgba(0,0,0,0.5)", "0 0 0 3px rgba(99,102,241,0.6)", "inset 0 2px 8px rgba(0,0,0,0.6)"],
            default: 2,
        },
    ],
};

const EASING: Demo = Demo {
    stage: "display: flex; flex-direction: column; gap: 6px; padding: 10px; background: rgba(255,255,255,0.03); border: 1px dashed rgba(255,255,255,0.1); border-radius: 8px",
    item_style: "padding: 6px 12px; background: rgba(99,102,241,0.15); border: 1px solid rgba(99,102,241,0.4); border-radius: 6px; color: #818cf8; font-size: 12px; white-space: nowrap; width: 60px; transition: margin-left 0.8s",
    items: &["ease"],
    controls: &[
        DemoControl {
            label: "timing",
            property: "transition-timing-function",
            target: DemoTarget::Items,
            options: &["ease", "linear", "ease-in", "ease-out", "cubic-bezier(0.68, -0.55, 0.27, 1.55)"],
            default: 0,
        },
        DemoControl {
            label: "offset",
            property: "margin-left",
            target: DemoTarget::Items,
            options: &["0", "160px"],
            default: 0,
        },
    ],
};

const TRANSFORM: Demo = Demo {
    stage: "display: flex; justify-content: center; align-items: center; height: 120px; padding: 10px; background: rgba(255,255,255,0.03); border: 1px dashed rgba(255,255,255,0.1); border-radius: 8px",
    item_style: "padding: 6px 12px; background: rgba(99,102,241,0.15); border: 1px solid rgba(99,102,241,0.4); border-radius: 6px; color: #818cf8; font-size: 12px; white-space: nowrap; transition: transform 0.3s ease",
    items: &["transform"],
    controls: &[
        DemoControl {
            label: "transform",
            property: "transform",
            target: DemoTarget::Items,
            options: &["none", "translateX(40px)", "rotate(45deg)", "scale(1.3)", "skew(15deg, 5deg)"],
            default: 0,
        },
    ],
};

const KEYFRAMES: Demo = Demo {
    stage: "display: flex; justify-content: center; align-items: center; height: 110px; padding: 10px; background: rgba(255,255,255,0.03); border: 1px dashed rgba(255,255,255,0.1); border-radius: 8px",
    item_style: "width: 48px; height: 48px; border-radius: 10px; background: linear-gradient(135deg, #6366f1, #06b6d4)",
    items: &[""],
    controls: &[
        DemoControl {
            label: "animation",
            property: "animation",
            target: DemoTarget::Items,
            options: &["none", "demo-spin 1.5s linear infinite", "demo-pulse 1.2s ease-in-out infinite", "demo-bounce 0.6s ease-in-out infinite alternate"],
            default: 1,
        },
    ],
};

const FILTER: Demo = Demo {
    stage: "display: flex; justify-content: center; padding: 10px; background: rgba(255,255,255,0.03); border: 1px dashed rgba(255,255,255,0.1); border-radius: 8px",
    item_style: "width: 140px; height: 80px; border-radius: 10px; background: linear-gradient(135deg, #f59e0b, #ef4444 50%, #6366f1)",
    items: &[""],
    controls: &[
        DemoControl {
            label: "filter",
            property: "filter",
            target: DemoTarget::Items,
            options: &["none", "blur(2px)", "grayscale(100%)", "sepia(80%)", "hue-rotate(90deg)", "contrast(180%)", "drop-shadow(0 4px 8px rgba(0,0,0,0.6))"],
            default: 0,
        },
    ],
};

pub(super) const BACKGROUNDS: LessonContent = LessonContent {
    slug: "backgrounds",
    title: "Backgrounds",
    icon: "🖼️",
    description: "CSS backgrounds go far beyond a solid color — they support images, gradients, clipping, sizing, blending, and multiple layered backgrounds.",
    difficulty: Difficulty::Beginner,
    sections: &[
        LessonSection {
            explanation: Some("background-color sets a solid fill. background-image accepts URLs and generated gradients. Multiple backgrounds are layered from top to bottom."),
            filename: Some("backgrounds.css"),
            tips: &[
                "Always provide a background-color fallback when using background-image — shown if image fails to load.",
                "background-size: cover on hero images may clip important content — use object-position for focal point.",
            ],
            ..LessonSection::new(
                "Background Color & Image",
                r#"/* Solid color */
.card { background-color: #1a1d27; }

/* Image */
.hero {
  background-image: url('/hero.jpg');
  background-size: cover;      /* fill, may crop */
  background-size: contain;    /* fit, may letterbox */
  background-size: 100% auto;  /* explicit */
  background-position: center center;
  background-repeat: no-repeat;
}

/* Shorthand */
.hero {
  background: url('/hero.jpg') center/cover no-repeat;
}

/* Multiple backgrounds (first = on top) */
.overlay {
  background:
    linear-gradient(rgba(0,0,0,0.5), rgba(0,0,0,0.5)),
    url('/photo.jpg') center/cover no-repeat,
    #1a1d27;        /* fallback color */
}"#,
            )
        },
        LessonSection {
            explanation: Some("background-clip controls where the background is rendered (content box, padding box, or border box). background-clip: text makes text itself the mask."),
            filename: Some("background-clip.css"),
            tips: &[
                "Always add -webkit-background-clip: text for Safari compatibility alongside the standard property.",
                "Gradient text accessibility: ensure color contrast is still readable for low-vision users.",
            ],
            ..LessonSection::new(
                "Background Clip & Origin",
                r#"/* Gradient text — very popular modern effect */
.gradient-text {
  background: linear-gradient(135deg, #6366f1, #06b6d4);
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
  background-clip: text;
  color: transparent; /* fallback */
}

/* Background only behind content area */
.padded {
  background-clip: content-box;
  padding: 16px;
}

/* Background includes border area */
.full {
  background-clip: border-box; /* default */
}

/* Background origin — where background-position starts */
.card {
  background-origin: content-box;
  background-image: url('/pattern.svg');
}"#,
            )
        },
        LessonSection {
            explanation: Some("box-shadow adds drop shadows to elements. Multiple comma-separated shadows layer from front to back. The inset keyword creates inner shadows."),
            filename: Some("box-shadow.css"),
            demo: Some(BOX_SHADOW),
            tips: &[
                "Layer 2-3 shadows of different sizes for natural, multi-depth shadows.",
                "box-shadow: 0 0 0 2px color works as a crisp outline that does not affect layout (unlike border).",
                "Transition box-shadow on hover for a smooth elevation effect on cards.",
            ],
            ..LessonSection::new(
                "Box Shadow",
                r#"/* box-shadow: x y blur spread color */
.card {
  box-shadow: 0 4px 16px rgba(0, 0, 0, 0.4);
}

/* Multiple shadows */
.elevated {
  box-shadow:
    0 1px 2px rgba(0,0,0,0.2),   /* tight contact shadow */
    0 4px 12px rgba(0,0,0,0.3),  /* soft ambient shadow */
    0 8px 32px rgba(0,0,0,0.2);  /* wide elevation shadow */
}

/* Inset shadow — inner effect */
.pressed {
  box-shadow: inset 0 2px 6px rgba(0,0,0,0.4);
}

/* Glow effect */
.glow {
  box-shadow: 0 0 24px rgba(99, 102, 241, 0.4);
}

/* No blur spread — sharp outline */
.outline {
  box-shadow: 0 0 0 2px #6366f1;
}

/* On hover — transition it! */
.card {
  box-shadow: 0 2px 8px rgba(0,0,0,0.3);
  transition: box-shadow 250ms ease;
}
.card:hover {
  box-shadow: 0 8px 32px rgba(99,102,241,0.4);
}"#,
            )
        },
        LessonSection {
            explanation: Some("backdrop-filter applies visual effects (blur, brightness, saturation) to the content behind the element — creating the popular frosted glass effect."),
            filename: Some("backdrop-filter.css"),
            tips: &[
                "backdrop-filter requires the element to have some transparency (rgba background) to be visible.",
                "Always include -webkit-backdrop-filter for Safari support.",
                "Heavy blur values on large elements can impact performance — use will-change: transform sparingly.",
            ],
            badge: Some(Badge::Modern),
            ..LessonSection::new(
                "Backdrop Filter",
                r#"/* Frosted glass card */
.glass-card {
  background: rgba(255, 255, 255, 0.08);
  backdrop-filter: blur(16px) saturate(180%);
  -webkit-backdrop-filter: blur(16px) saturate(180%);
  border: 1px solid rgba(255, 255, 255, 0.12);
  border-radius: 16px;
}

/* Dark frosted glass */
.dark-glass {
  background: rgba(0, 0, 0, 0.4);
  backdrop-filter: blur(20px);
}

/* Modal overlay blur */
.modal-overlay {
  background: rgba(0, 0, 0, 0.6);
  backdrop-filter: blur(8px);
}"#,
            )
        },
    ],
};

pub(super) const TRANSITIONS: LessonContent = LessonContent {
    slug: "transitions",
    title: "Transitions",
    icon: "🔄",
    description: "CSS transitions animate property changes smoothly over time. They're the simplest way to add motion to your UI on interaction.",
    difficulty: Difficulty::Intermediate,
    sections: &[
        LessonSection {
            explanation: Some("transition takes a property name, duration, timing function, and optional delay. It activates whenever that CSS property changes value."),
            filename: Some("transitions.css"),
            tips: &[
                "Never use transition: all in production — it animates every property including layout ones (expensive).",
                "prefer transform and opacity transitions — they are GPU-accelerated and do not trigger layout.",
                "For enter/exit animations in React, use the transition property paired with class toggling.",
            ],
            ..LessonSection::new(
                "The transition Property",
                r#"/* transition: property duration timing-function delay */
.btn {
  background: #6366f1;
  transform: translateY(0);
  box-shadow: 0 2px 8px rgba(99,102,241,0.3);

  transition: background 250ms ease,
              transform  200ms ease,
              box-shadow 250ms ease;
}

.btn:hover {
  background: #4f46e5;
  transform: translateY(-2px);
  box-shadow: 0 6px 20px rgba(99,102,241,0.5);
}

/* Transition ALL changes */
.card { transition: all 300ms ease; } /* ⚠️ can be slow */

/* Better: be explicit */
.card {
  transition:
    opacity   200ms ease,
    transform 300ms cubic-bezier(0.34, 1.56, 0.64, 1);
}"#,
            )
        },
        LessonSection {
            explanation: Some("The timing function controls the rate of change during the transition. Cubic bezier curves let you define any easing curve."),
            filename: Some("easing.css"),
            demo: Some(EASING),
            tips: &[
                "ease-out feels most natural for UI interactions — elements decelerate like real objects.",
                "Use cubic-bezier.com to preview and copy custom easing curves.",
                "For enter animations use ease-out; for exit animations use ease-in.",
            ],
            ..LessonSection::new(
                "Timing Functions (Easing)",
                r#"/* Keyword easings */
transition-timing-function: linear;      /* constant speed */
transition-timing-function: ease;        /* slow-fast-slow (default) */
transition-timing-function: ease-in;     /* slow start */
transition-timing-function: ease-out;    /* slow end */
transition-timing-function: ease-in-out; /* slow both ends */

/* Custom cubic-bezier(x1, y1, x2, y2) */
transition-timing-function: cubic-bezier(0.34, 1.56, 0.64, 1);
/* ↑ overshoot spring effect */

/* Steps — discrete jumps */
transition-timing-function: steps(4, end);

/* CSS custom properties for consistent easing */
:root {
  --ease-spring: cubic-bezier(0.34, 1.56, 0.64, 1);
  --ease-out-quart: cubic-bezier(0.25, 1, 0.5, 1);
  --ease-in-out: cubic-bezier(0.45, 0, 0.55, 1);
}"#,
            )
        },
        LessonSection {
            explanation: Some("Some properties like display and height: auto cannot be directly transitioned. Here are the modern workarounds."),
            filename: Some("transition-tricks.css"),
            tips: &[
                "The max-height trick works but can feel snappy if max-height is much larger than real content.",
                "@starting-style is the future — it enables enter/exit animations without JavaScript.",
                "For complex state-based animations in React, prefer CSS transitions triggered by class toggling.",
            ],
            ..LessonSection::new(
                "Transitioning Display & Height",
                r#"/* ❌ Cannot transition display: none → block */
/* Use opacity + visibility instead */
.tooltip {
  opacity: 0;
  visibility: hidden;
  transition: opacity 200ms ease, visibility 200ms ease;
}
.tooltip.visible {
  opacity: 1;
  visibility: visible;
}

/* ❌ Cannot transition height: auto */
/* Option 1: max-height trick */
.accordion {
  max-height: 0;
  overflow: hidden;
  transition: max-height 400ms ease;
}
.accordion.open {
  max-height: 500px; /* larger than content */
}

/* Option 2: Modern — @starting-style (Chrome 117+) */
dialog {
  transition: opacity 300ms, display 300ms allow-discrete;
  opacity: 1;
}
dialog:not([open]) { opacity: 0; }

@starting-style {
  dialog[open] { opacity: 0; }
}"#,
            )
        },
    ],
};

pub(super) const TRANSFORMS: LessonContent = LessonContent {
    slug: "transforms",
    title: "Transforms",
    icon: "🔀",
    description: "CSS transforms move, scale, rotate, and skew elements without affecting document flow. They are GPU-accelerated and the foundation of performant animations.",
    difficulty: Difficulty::Intermediate,
    sections: &[
        LessonSection {
            explanation: Some("The transform property accepts one or more transform functions. They are applied right-to-left. Transforms do not affect layout flow — other elements don't move."),
            filename: Some("transforms.css"),
            demo: Some(TRANSFORM),
            tips: &[
                "transform: translate(-50%, -50%) combined with position:absolute + top:50% + left:50% is the classic centering technique.",
                "Transforms are GPU-accelerated — always prefer them over changing top/left for animations.",
                "Transform functions apply right to left: translate() scale() first scales then translates.",
            ],
            ..LessonSection::new(
                "Transform Functions",
                r#"/* Translate — move element (does not affect layout) */
.move { transform: translate(20px, -10px); }
.move-x { transform: translateX(50px); }
.move-y { transform: translateY(-20px); }
/* Percentage relative to element's own size */
.center { transform: translate(-50%, -50%); }

/* Scale — resize element */
.grow   { transform: scale(1.1); }        /* uniform */
.wide   { transform: scaleX(1.5); }
.flip-x { transform: scaleX(-1); }        /* mirror */

/* Rotate */
.spin   { transform: rotate(45deg); }
.spin3d { transform: rotateY(180deg); }   /* 3D */

/* Skew */
.tilt  { transform: skew(10deg, 0); }
.perspective { transform: skewY(-3deg); } /* slanted sections */

/* Combine (applied right to left) */
.combined {
  transform: translateY(-4px) scale(1.02) rotate(1deg);
}

/* Transform origin — pivot point */
.from-top    { transform-origin: top center; }
.from-corner { transform-origin: 0 0; }"#,
            )
        },
        LessonSection {
            explanation: Some("CSS supports 3D transforms with rotateX, rotateY, rotateZ, and translateZ. The perspective property controls the depth illusion."),
            filename: Some("3d-transforms.css"),
            tips: &[
                "perspective must be set on the parent of the element being transformed in 3D.",
                "backface-visibility: hidden prevents the back of a flipped element from showing through.",
                "transform-style: preserve-3d on a container allows children to exist in the same 3D space.",
            ],
            ..LessonSection::new(
                "3D Transforms & Perspective",
                r#"/* 3D flip card */
.card-container {
  perspective: 600px;   /* depth — lower = more dramatic */
}

.card {
  transform-style: preserve-3d;  /* children in 3D space */
  transition: transform 600ms ease;
  position: relative;
}

.card.flipped {
  transform: rotateY(180deg);
}

.card-front,
.card-back {
  backface-visibility: hidden;  /* hide reversed face */
  position: absolute;
  inset: 0;
}

.card-back {
  transform: rotateY(180deg);  /* starts face-down */
}

/* Parallax-like tilt effect */
.tilt-card {
  transform: perspective(800px) rotateX(5deg) rotateY(-5deg);
}"#,
            )
        },
        LessonSection {
            explanation: Some("will-change hints to the browser which properties will animate, allowing it to optimize in advance — but use it sparingly."),
            filename: Some("will-change.css"),
            tips: &[
                "Only add will-change to elements about to animate — do not apply it globally.",
                "Remove will-change after animation completes to free GPU memory.",
                "Stick to animating transform and opacity for the best performance.",
            ],
            ..LessonSection::new(
                "will-change",
                r#"/* Tell the browser to prepare for transform changes */
.animated-card {
  will-change: transform;
}

/* Multiple properties */
.complex {
  will-change: transform, opacity;
}

/* ⚠️ Only add will-change when needed — it consumes memory */

/* Add dynamically in JavaScript */
/* element.addEventListener('mouseenter', () => {
    element.style.willChange = 'transform';
   })
   element.addEventListener('mouseleave', () => {
    element.style.willChange = 'auto';
   }) */

/* Composited properties (fast, GPU) */
/* ✅ transform, opacity, filter */

/* Non-composited (slow, triggers layout) */
/* ❌ width, height, top, left, margin, padding */"#,
            )
        },
    ],
};

pub(super) const ANIMATIONS: LessonContent = LessonContent {
    slug: "animations",
    title: "Animations",
    icon: "✨",
    description: "CSS @keyframes animations allow multi-step, looping, and complex motion without JavaScript. They are declarative, performant, and highly composable.",
    difficulty: Difficulty::Intermediate,
    sections: &[
        LessonSection {
            explanation: Some("Define an animation with @keyframes, then apply it with the animation shorthand. Keyframes describe the state at each point in the animation timeline."),
            filename: Some("keyframes.css"),
            demo: Some(KEYFRAMES),
            tips: &[
                "Use animation-fill-mode: both to apply the first keyframe before the animation starts and keep the last after it ends.",
                "Keep animations under 300ms for UI feedback; use longer durations for decorative/illustrative animations.",
                "animation: spin 1s linear infinite is the standard loading spinner pattern.",
            ],
            ..LessonSection::new(
                "@keyframes & animation Property",
                r#"/* Define the keyframes */
@keyframes fadeIn {
  from { opacity: 0; transform: translateY(8px); }
  to   { opacity: 1; transform: translateY(0); }
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

@keyframes bounce {
  0%, 100% { transform: translateY(0); }
  50%       { transform: translateY(-16px); }
}

/* Apply: name duration timing-function delay
    iteration-count direction fill-mode */
.fade-in {
  animation: fadeIn 400ms ease-out both;
}

.spinner {
  animation: spin 1s linear infinite;
}

.bouncing {
  animation: bounce 1s ease-in-out infinite;
}

/* Pause/Resume */
.paused { animation-play-state: paused; }
.playing { animation-play-state: running; }"#,
            )
        },
        LessonSection {
            explanation: Some("Use animation-delay to create staggered effects where multiple elements animate one after another — a powerful technique for lists and grids."),
            filename: Some("staggered.css"),
            tips: &[
                "Keep stagger delays short (50-100ms) — longer values make the animation feel sluggish.",
                "In React, pass animationDelay via inline styles to stagger JSX-rendered lists.",
            ],
            ..LessonSection::new(
                "Staggered Animations",
                r#"/* Parent — no animation needed */
.list {}

/* Each child gets an increasing delay */
.list-item {
  animation: fadeSlideIn 400ms ease-out both;
}

.list-item:nth-child(1) { animation-delay: 0ms; }
.list-item:nth-child(2) { animation-delay: 80ms; }
.list-item:nth-child(3) { animation-delay: 160ms; }
.list-item:nth-child(4) { animation-delay: 240ms; }

/* In React — use inline style for dynamic delay */
/* style={{ animationDelay: `${index * 80}ms` }} */

@keyframes fadeSlideIn {
  from {
    opacity: 0;
    transform: translateY(12px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}"#,
            )
        },
        LessonSection {
            explanation: Some("Some users configure their OS to reduce motion due to vestibular disorders. Always respect this with the prefers-reduced-motion media query."),
            filename: Some("reduced-motion.css"),
            tips: &[
                "prefers-reduced-motion is a WCAG 2.1 Success Criterion — not optional for accessible sites.",
                "Consider showing a simplified version rather than removing all motion: fade instead of slide.",
                "Test with \"Reduce Motion\" enabled in your OS accessibility settings.",
            ],
            ..LessonSection::new(
                "Reduced Motion Accessibility",
                r#"/* Default — full animation */
.hero-title {
  animation: heroSlideIn 600ms cubic-bezier(0.34, 1.56, 0.64, 1) both;
}

/* Respect user preferences */
@media (prefers-reduced-motion: reduce) {
  /* Option 1: Remove animation entirely */
  .hero-title { animation: none; }

  /* Option 2: Keep but make instantaneous */
  * {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
  }
}

/* Or use the CSS custom media query approach */
@media (prefers-reduced-motion: no-preference) {
  .hero-title {
    animation: heroSlideIn 600ms ease both;
  }
  /* animations only applied when motion is OK */
}"#,
            )
        },
    ],
};

pub(super) const FILTERS: LessonContent = LessonContent {
    slug: "filters",
    title: "Filters & Effects",
    icon: "ðŸ”®",
    description: "CSS filter and mix-blend-mode add Photoshop-level image processing directly in the browser. Combined with backdrop-filter, they enable stunning visual effects.",
    difficulty: Difficulty::Intermediate,
    sections: &[
        LessonSection {
            explanation: Some("The filter property applies graphic effects to an element and all its descendants. Multiple filters can be chained in a single declaration."),
            filename: Some("filters.css"),
            demo: Some(FILTER),
            tips: &[
                "drop-shadow() is aware of PNG transparency â€” it follows the element shape, not the bounding box.",
                "Avoid heavy blur (> 20px) on large elements â€” it is computationally expensive.",
                "A dark-mode toggle can use filter: invert(1) hue-rotate(180deg) as a quick approximation.",
            ],
            ..LessonSection::new(
                "CSS filter Functions",
                r#"/* Individual filter functions */
.img { filter: blur(4px); }
.img { filter: brightness(1.5); }   /* 0=black, 1=normal, 2=double */
.img { filter: contrast(2); }       /* 0=gray, 1=normal */
.img { filter: grayscale(1); }      /* 0=normal, 1=fully gray */
.img { filter: hue-rotate(90deg); } /* rotates colors on the wheel */
.img { filter: invert(1); }         /* 0=normal, 1=inverted */
.img { filter: saturate(3); }       /* 0=gray, 1=normal, >1=vivid */
.img { filter: sepia(0.8); }        /* 0=normal, 1=full sepia */
.img { filter: opacity(0.5); }      /* same as opacity property */

/* drop-shadow â€” follows PNG transparency unlike box-shadow */
.icon { filter: drop-shadow(2px 4px 8px rgba(0,0,0,0.5)); }

/* Chain multiple filters */
.stylized {
  filter: contrast(1.2) saturate(1.4) hue-rotate(10deg);
}

/* Animated filter */
.photo:hover {
  filter: brightness(1.1) saturate(1.2);
  transition: filter 300ms ease;
}"#,
            )
        },
        LessonSection {
            explanation: Some("mix-blend-mode controls how an element blends with the content behind it, like Photoshop blend modes. Ideal for overlapping text on images."),
            filename: Some("blend-modes.css"),
            tips: &[
                "mix-blend-mode: overlay is the most common choice for text overlaid on photography.",
                "Use isolation: isolate on a container to prevent its contents from blending with elements outside.",
                "Blend modes can cause unexpected results â€” always test across light and dark backgrounds.",
            ],
            ..LessonSection::new(
                "mix-blend-mode",
                r#"/* Common blend modes */
.overlay-text {
  mix-blend-mode: multiply;   /* darkens â€” great on light bgs */
  mix-blend-mode: screen;     /* lightens â€” great on dark bgs */
  mix-blend-mode: overlay;    /* contrast blend */
  mix-blend-mode: difference; /* inverts based on background */
  mix-blend-mode: luminosity; /* preserves bg color */
  mix-blend-mode: color;      /* applies element hue to bg luminosity */
}

/* Classic white text on photo */
.hero-text {
  color: white;
  mix-blend-mode: overlay;
}

/* SVG icon tinting */
.tinted-icon {
  filter: saturate(3);
  mix-blend-mode: luminosity;
}

/* Isolate from blending */
.no-blend {
  isolation: isolate; /* prevents blend with sibling layers */
}"#,
            )
        },
        LessonSection {
            explanation: Some("clip-path clips an element to a geometric shape. mask provides more complex masking with gradients or images."),
            filename: Some("clip-mask.css"),
            tips: &[
                "clippy.css and Bennett Feely's clippy tool generate clip-path polygon values visually.",
                "Animate clip-path with transition for dramatic reveal effects.",
                "mask-image supports gradients for elegant soft-edge fades.",
            ],
            ..LessonSection::new(
                "CSS Masking & Clip-Path",
                r#"/* clip-path â€” clip to a shape */
.diamond  { clip-path: polygon(50% 0%, 100% 50%, 50% 100%, 0% 50%); }
.triangle { clip-path: polygon(50% 0%, 100% 100%, 0% 100%); }
.circle   { clip-path: circle(50%); }
.hexagon  { clip-path: polygon(25% 0%, 75% 0%, 100% 50%, 75% 100%, 25% 100%, 0% 50%); }
.rounded  { clip-path: inset(0 round 16px); }

/* Animated clip-path reveal */
.reveal {
  clip-path: inset(100% 0 0 0);  /* hidden */
  transition: clip-path 600ms cubic-bezier(0.76, 0, 0.24, 1);
}
.reveal.visible {
  clip-path: inset(0 0 0 0);     /* fully shown */
}

/* Gradient mask */
.fade-out {
  mask-image: linear-gradient(to bottom, black 60%, transparent 100%);
  -webkit-mask-image: linear-gradient(to bottom, black 60%, transparent 100%);
}"#,
            )
        },
    ],
};
