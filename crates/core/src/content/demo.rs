use serde::Serialize;

/// Which element a control writes its property onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DemoTarget {
    Stage,
    Items,
}

/// One row of option buttons in a live preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoControl {
    pub label: &'static str,
    pub property: &'static str,
    pub target: DemoTarget,
    pub options: &'static [&'static str],
    pub default: usize,
}

impl DemoControl {
    /// The option at `index`, falling back to the default for out-of-range picks.
    #[must_use]
    pub fn value(&self, index: usize) -> &'static str {
        self.options
            .get(index)
            .or_else(|| self.options.get(self.default))
            .copied()
            .unwrap_or_default()
    }
}

/// A live preview: a stage holding a few labelled items, restyled by the
/// option buttons above it.
///
/// A selection is one option index per control, in control order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Demo {
    pub stage: &'static str,
    pub item_style: &'static str,
    pub items: &'static [&'static str],
    pub controls: &'static [DemoControl],
}

impl Demo {
    #[must_use]
    pub fn default_selection(&self) -> Vec<usize> {
        self.controls.iter().map(|control| control.default).collect()
    }

    /// Current value of control `control`; missing selections read as the default.
    #[must_use]
    pub fn selected_value(&self, selection: &[usize], control: usize) -> Option<&'static str> {
        let ctrl = self.controls.get(control)?;
        let index = selection.get(control).copied().unwrap_or(ctrl.default);
        Some(ctrl.value(index))
    }

    #[must_use]
    pub fn stage_style(&self, selection: &[usize]) -> String {
        self.compose(self.stage, DemoTarget::Stage, selection)
    }

    #[must_use]
    pub fn item_style(&self, selection: &[usize]) -> String {
        self.compose(self.item_style, DemoTarget::Items, selection)
    }

    fn compose(&self, base: &str, target: DemoTarget, selection: &[usize]) -> String {
        let mut declarations: Vec<String> = base
            .split(';')
            .map(str::trim)
            .filter(|decl| !decl.is_empty())
            .map(str::to_string)
            .collect();

        for (i, control) in self.controls.iter().enumerate() {
            if control.target != target {
                continue;
            }
            if let Some(value) = self.selected_value(selection, i) {
                declarations.push(format!("{}: {value}", control.property));
            }
        }

        declarations.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO: Demo = Demo {
        stage: "display: flex; gap: 6px;",
        item_style: "padding: 4px",
        items: &["1", "2"],
        controls: &[
            DemoControl {
                label: "direction",
                property: "flex-direction",
                target: DemoTarget::Stage,
                options: &["row", "column"],
                default: 0,
            },
            DemoControl {
                label: "grow",
                property: "flex-grow",
                target: DemoTarget::Items,
                options: &["0", "1"],
                default: 1,
            },
        ],
    };

    #[test]
    fn default_selection_uses_control_defaults() {
        assert_eq!(DEMO.default_selection(), vec![0, 1]);
        assert_eq!(
            DEMO.stage_style(&DEMO.default_selection()),
            "display: flex; gap: 6px; flex-direction: row"
        );
        assert_eq!(
            DEMO.item_style(&DEMO.default_selection()),
            "padding: 4px; flex-grow: 1"
        );
    }

    #[test]
    fn selection_changes_only_its_target() {
        let selection = [1, 1];
        assert_eq!(
            DEMO.stage_style(&selection),
            "display: flex; gap: 6px; flex-direction: column"
        );
        assert_eq!(DEMO.item_style(&selection), "padding: 4px; flex-grow: 1");
    }

    #[test]
    fn out_of_range_and_missing_picks_fall_back_to_default() {
        assert_eq!(DEMO.selected_value(&[9, 9], 0), Some("row"));
        assert_eq!(DEMO.selected_value(&[], 1), Some("1"));
        assert_eq!(DEMO.selected_value(&[0, 0], 5), None);
    }
}
