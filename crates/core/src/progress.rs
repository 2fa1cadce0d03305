use crate::catalog::Catalog;

/// Where a path sits in the curriculum and how far along that is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub position: Option<usize>,
    pub total: usize,
    pub percent: u8,
}

impl Progress {
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}% complete", self.percent)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.percent == 100
    }
}

/// Completion for the lesson at `path`.
///
/// Entry `i` of `n` (flattened order, first match) maps to
/// `round((i + 1) / n * 100)`, halves rounding up. Unknown paths map to 0.
#[must_use]
pub fn progress(catalog: &Catalog, path: &str) -> Progress {
    let total = catalog.len();
    let position = catalog.position(path);
    let percent = position.map_or(0, |index| percent_of(index + 1, total));
    Progress {
        position,
        total,
        percent,
    }
}

#[must_use]
pub fn progress_percent(catalog: &Catalog, path: &str) -> u8 {
    progress(catalog, path).percent
}

fn percent_of(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let done = done.min(total);
    // floor(done * 100 / total + 1/2) without floats
    let rounded = (done * 200 + total) / (total * 2);
    u8::try_from(rounded).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LessonEntry, LessonGroup};

    fn catalog_of(sizes: &[usize]) -> Catalog {
        let mut n = 0;
        let groups = sizes
            .iter()
            .enumerate()
            .map(|(g, &size)| {
                let items = (0..size)
                    .map(|_| {
                        n += 1;
                        LessonEntry::new(format!("/l{n}"), format!("l{n}"), format!("L{n}"), "•")
                    })
                    .collect();
                LessonGroup::new(format!("G{g}"), items)
            })
            .collect();
        Catalog::new(groups).unwrap()
    }

    #[test]
    fn builtin_scenario_first_last_and_unknown() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(progress_percent(&catalog, "/"), 6);
        assert_eq!(progress_percent(&catalog, "/flexbox"), 39);
        assert_eq!(progress_percent(&catalog, "/modern"), 100);
        assert_eq!(progress_percent(&catalog, "/does-not-exist"), 0);
    }

    #[test]
    fn matches_rounded_ratio_and_strictly_increases() {
        let catalog = Catalog::builtin().unwrap();
        let n = catalog.len();
        let mut last = 0u8;
        for (i, path) in catalog.paths().enumerate() {
            let expected = (((i + 1) as f64 / n as f64) * 100.0 + 0.5).floor() as u8;
            let got = progress_percent(&catalog, path);
            assert_eq!(got, expected, "path {path}");
            assert!(got > last, "progress must increase at {path}");
            last = got;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn halves_round_up() {
        // 1 of 8 = 12.5%
        let catalog = catalog_of(&[8]);
        assert_eq!(progress_percent(&catalog, "/l1"), 13);
        // 3 of 8 = 37.5%
        assert_eq!(progress_percent(&catalog, "/l3"), 38);
    }

    #[test]
    fn progress_reports_position_and_label() {
        let catalog = catalog_of(&[2, 2]);
        let p = progress(&catalog, "/l3");
        assert_eq!(p.position, Some(2));
        assert_eq!(p.total, 4);
        assert_eq!(p.percent, 75);
        assert_eq!(p.label(), "75% complete");
        assert!(!p.is_complete());
        assert!(progress(&catalog, "/l4").is_complete());
    }

    #[test]
    fn empty_catalog_is_zero() {
        let catalog = catalog_of(&[0, 0]);
        let p = progress(&catalog, "/l1");
        assert_eq!(p.percent, 0);
        assert_eq!(p.position, None);
        assert_eq!(p.total, 0);
    }
}
