//! Human-readable layout summary for `venue check`.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use std::collections::BTreeMap;
use std::fmt;

use venue_canvas::boundary::Placement;
use venue_canvas::doc::{Scene, SceneStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneSummary {
    pub name: String,
    pub shape: &'static str,
    pub active: bool,
    pub elements: usize,
    /// Element count per kind.
    pub kinds: BTreeMap<&'static str, usize>,
    /// Element count per status, obstacles excluded.
    pub statuses: BTreeMap<&'static str, usize>,
    /// Labels of elements crossing or outside the boundary.
    pub out_of_bounds: Vec<(String, Placement)>,
}

impl SceneSummary {
    #[must_use]
    pub fn of(scene: &Scene, active: bool) -> Self {
        let mut kinds = BTreeMap::new();
        let mut statuses = BTreeMap::new();
        for el in &scene.elements {
            *kinds.entry(el.kind.as_str()).or_insert(0) += 1;
            if el.kind.has_status() {
                *statuses.entry(el.status.as_str()).or_insert(0) += 1;
            }
        }
        let out_of_bounds =
            scene.out_of_bounds().into_iter().map(|(el, placement)| (el.label.clone(), placement)).collect();
        Self {
            name: scene.name.clone(),
            shape: scene.shape.as_str(),
            active,
            elements: scene.elements.len(),
            kinds,
            statuses,
            out_of_bounds,
        }
    }
}

#[must_use]
pub fn summarize(store: &SceneStore) -> Vec<SceneSummary> {
    let active = store.active_id();
    store.scenes().iter().map(|s| SceneSummary::of(s, s.id == active)).collect()
}

fn counts(map: &BTreeMap<&'static str, usize>) -> String {
    if map.is_empty() {
        return "none".to_string();
    }
    map.iter().map(|(k, n)| format!("{k} {n}")).collect::<Vec<_>>().join(", ")
}

impl fmt::Display for SceneSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.active { ", active" } else { "" };
        writeln!(f, "{} ({}{marker}): {} elements", self.name, self.shape, self.elements)?;
        writeln!(f, "  kinds: {}", counts(&self.kinds))?;
        writeln!(f, "  status: {}", counts(&self.statuses))?;
        if self.out_of_bounds.is_empty() {
            write!(f, "  outside boundary: none")
        } else {
            let list = self
                .out_of_bounds
                .iter()
                .map(|(label, placement)| match placement {
                    Placement::Partial => format!("{label} (partial)"),
                    Placement::Outside | Placement::Inside => label.clone(),
                })
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, "  outside boundary: {list}")
        }
    }
}
