//! Property panel: the selected element's editable fields.
//!
//! The panel is a read-only projection built on demand from the scene
//! model; edits come back as [`PropertyEdit`] values and are applied through
//! the same sparse-update path as gestures.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use serde::Serialize;

use crate::doc::{ElementId, ElementKind, ElementStatus, PartialElement, SceneElement};

/// Fields shown for the selected element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPanel {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub width: f64,
    pub height: f64,
    pub label: String,
    /// Absent for kinds without booking state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ElementStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

impl PropertyPanel {
    #[must_use]
    pub fn of(el: &SceneElement) -> Self {
        Self {
            id: el.id,
            kind: el.kind,
            width: el.width,
            height: el.height,
            label: el.label.clone(),
            status: el.kind.has_status().then_some(el.status),
            assigned_to: el.assigned_to.clone(),
        }
    }
}

/// One edit from the property panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyEdit {
    Width(f64),
    Height(f64),
    Label(String),
    Status(ElementStatus),
    /// `None` clears the assignment.
    AssignedTo(Option<String>),
}

impl PropertyEdit {
    /// Sparse update for an element of `kind`, or `None` when the edit does
    /// not apply to that kind (status on an obstacle).
    #[must_use]
    pub fn to_partial(&self, kind: ElementKind) -> Option<PartialElement> {
        let partial = match self {
            Self::Width(w) => PartialElement { width: Some(*w), ..Default::default() },
            Self::Height(h) => PartialElement { height: Some(*h), ..Default::default() },
            Self::Label(label) => PartialElement { label: Some(label.clone()), ..Default::default() },
            Self::Status(status) => {
                if !kind.has_status() {
                    return None;
                }
                PartialElement { status: Some(*status), ..Default::default() }
            }
            Self::AssignedTo(assigned) => {
                if kind == ElementKind::Obstacle {
                    return None;
                }
                PartialElement { assigned_to: Some(assigned.clone()), ..Default::default() }
            }
        };
        Some(partial)
    }
}
