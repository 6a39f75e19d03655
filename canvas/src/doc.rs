//! Document model: floor plans, placed elements, and the scene collection.
//!
//! This module defines what a venue layout is made of (`Scene`,
//! `SceneElement`, `ElementKind`, `ElementStatus`), a sparse-update type for
//! property and gesture edits (`PartialElement`), and the store that owns the
//! ordered collection of floor plans and the active-plan pointer
//! (`SceneStore`).
//!
//! The store is the single source of truth for the editing session. Every
//! mutation keeps its invariants by construction: the collection is never
//! empty, exactly one scene is active, ids are unique, and element sizes never
//! drop below [`MIN_ELEMENT_SIZE`]. Operations that reference an id the store
//! no longer knows about are silent no-ops.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::boundary::{BoundaryShape, Placement, Rect};
use crate::consts::{DEFAULT_ELEMENT_X, DEFAULT_ELEMENT_Y, MIN_ELEMENT_SIZE};

/// Unique identifier for a floor plan.
pub type SceneId = Uuid;

/// Unique identifier for an element within its floor plan.
pub type ElementId = Uuid;

/// What a placed element represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Exhibitor booth.
    Booth,
    /// Single attendee seat.
    Seat,
    /// Presentation stage.
    Stage,
    /// Door or access point.
    Entrance,
    /// Info desk, restroom, catering and the like.
    Amenity,
    /// Pillar or blocked area; never assignable.
    Obstacle,
}

impl ElementKind {
    pub const ALL: [ElementKind; 6] =
        [Self::Booth, Self::Seat, Self::Stage, Self::Entrance, Self::Amenity, Self::Obstacle];

    /// Lowercase name, as serialized.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Booth => "booth",
            Self::Seat => "seat",
            Self::Stage => "stage",
            Self::Entrance => "entrance",
            Self::Amenity => "amenity",
            Self::Obstacle => "obstacle",
        }
    }

    /// Width and height of a freshly added element of this kind.
    #[must_use]
    pub fn default_size(self) -> (f64, f64) {
        match self {
            Self::Booth => (80.0, 80.0),
            Self::Obstacle => (40.0, 40.0),
            Self::Seat | Self::Stage | Self::Entrance | Self::Amenity => (60.0, 60.0),
        }
    }

    #[must_use]
    pub fn default_status(self) -> ElementStatus {
        match self {
            Self::Obstacle => ElementStatus::Occupied,
            _ => ElementStatus::Available,
        }
    }

    #[must_use]
    pub fn default_label(self) -> String {
        match self {
            Self::Obstacle => "Blocked".to_string(),
            other => format!("New {}", other.as_str()),
        }
    }

    /// Whether the status field carries meaning (and may be edited) for this kind.
    #[must_use]
    pub fn has_status(self) -> bool {
        self != Self::Obstacle
    }
}

/// Booking state of a placed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementStatus {
    Available,
    Reserved,
    Occupied,
}

impl ElementStatus {
    pub const ALL: [ElementStatus; 3] = [Self::Available, Self::Reserved, Self::Occupied];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Reserved => "reserved",
            Self::Occupied => "occupied",
        }
    }
}

/// A placed object on a floor plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneElement {
    /// Unique within the owning scene.
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// Left edge in logical units. Unbounded.
    pub x: f64,
    /// Top edge in logical units. Unbounded.
    pub y: f64,
    /// Never below [`MIN_ELEMENT_SIZE`].
    pub width: f64,
    /// Never below [`MIN_ELEMENT_SIZE`].
    pub height: f64,
    pub label: String,
    pub status: ElementStatus,
    /// Exhibitor or attendee id this element is assigned to. Reference only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

impl SceneElement {
    /// A new element with kind-specific defaults at the fixed default position.
    #[must_use]
    pub fn new(kind: ElementKind) -> Self {
        let (width, height) = kind.default_size();
        Self {
            id: Uuid::new_v4(),
            kind,
            x: DEFAULT_ELEMENT_X,
            y: DEFAULT_ELEMENT_Y,
            width,
            height,
            label: kind.default_label(),
            status: kind.default_status(),
            assigned_to: None,
        }
    }

    /// Bounding rectangle in logical units.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Apply a sparse update. Sizes are clamped to the minimum and non-finite
    /// coordinates are dropped. Returns `true` when any field changed.
    pub fn apply(&mut self, partial: &PartialElement) -> bool {
        let before = self.clone();
        if let Some(x) = partial.x.filter(|v| v.is_finite()) {
            self.x = x;
        }
        if let Some(y) = partial.y.filter(|v| v.is_finite()) {
            self.y = y;
        }
        if let Some(w) = partial.width {
            self.width = clamp_dimension(w);
        }
        if let Some(h) = partial.height {
            self.height = clamp_dimension(h);
        }
        if let Some(ref label) = partial.label {
            self.label.clone_from(label);
        }
        if let Some(status) = partial.status {
            self.status = status;
        }
        if let Some(ref assigned) = partial.assigned_to {
            self.assigned_to.clone_from(assigned);
        }
        *self != before
    }
}

/// Coerce a requested width or height into the allowed range.
///
/// Non-finite input collapses to the minimum.
#[must_use]
pub fn clamp_dimension(value: f64) -> f64 {
    if value.is_finite() { value.max(MIN_ELEMENT_SIZE) } else { MIN_ELEMENT_SIZE }
}

/// Sparse update for an element. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ElementStatus>,
    /// `Some(None)` clears the assignment; `None` leaves it untouched.
    #[serde(default, deserialize_with = "deserialize_some", skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<Option<String>>,
}

impl PartialElement {
    #[must_use]
    pub fn position(x: f64, y: f64) -> Self {
        Self { x: Some(x), y: Some(y), ..Default::default() }
    }

    #[must_use]
    pub fn size(width: f64, height: f64) -> Self {
        Self { width: Some(width), height: Some(height), ..Default::default() }
    }
}

/// Distinguishes an explicit `null` from an absent key.
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// One floor plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Assigned at creation, never changes.
    pub id: SceneId,
    pub name: String,
    pub shape: BoundaryShape,
    /// Draw order: later elements paint over earlier ones.
    #[serde(default)]
    pub elements: Vec<SceneElement>,
}

impl Scene {
    /// An empty scene with a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>, shape: BoundaryShape) -> Self {
        Self { id: Uuid::new_v4(), name: name.into(), shape, elements: Vec::new() }
    }

    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&SceneElement> {
        self.elements.iter().find(|el| el.id == *id)
    }

    pub fn element_mut(&mut self, id: &ElementId) -> Option<&mut SceneElement> {
        self.elements.iter_mut().find(|el| el.id == *id)
    }

    /// Elements whose bounds cross or leave the boundary outline.
    #[must_use]
    pub fn out_of_bounds(&self) -> Vec<(&SceneElement, Placement)> {
        let outline = self.shape.outline();
        self.elements
            .iter()
            .map(|el| (el, outline.placement(el.rect())))
            .filter(|(_, placement)| *placement != Placement::Inside)
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Outcome of [`SceneStore::remove_scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneRemoval {
    /// The scene was removed. `activated` is set when the active scene moved.
    Removed { activated: Option<SceneId> },
    /// The scene is the last one; the collection is left untouched.
    PrecondIgnored,
    /// No scene with that id.
    Unknown,
}

/// Error returned when loading a snapshot that breaks the store invariants.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DocError {
    /// A snapshot must hold at least one scene.
    #[error("scene collection is empty")]
    Empty,
    /// Two scenes share an id.
    #[error("duplicate scene id: {0}")]
    DuplicateScene(SceneId),
    /// Two elements in one scene share an id.
    #[error("duplicate element id {element} in scene {scene}")]
    DuplicateElement { scene: SceneId, element: ElementId },
}

/// Ordered collection of floor plans with exactly one active.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneStore {
    scenes: Vec<Scene>,
    active_scene_id: SceneId,
}

/// Wire form of [`SceneStore`]; validated through [`SceneStore::from_snapshot`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSnapshot {
    pub scenes: Vec<Scene>,
    #[serde(default)]
    pub active_scene_id: Option<SceneId>,
}

impl SceneStore {
    /// A store holding one empty rectangular scene, which is active.
    #[must_use]
    pub fn new(first_scene_name: &str) -> Self {
        let scene = Scene::new(first_scene_name, BoundaryShape::default());
        let active_scene_id = scene.id;
        Self { scenes: vec![scene], active_scene_id }
    }

    /// Build a store from loaded scenes.
    ///
    /// An unknown or missing `active` falls back to the first scene, and
    /// undersized elements are clamped to the minimum.
    ///
    /// # Errors
    ///
    /// Returns [`DocError`] when `scenes` is empty or ids collide.
    pub fn from_snapshot(mut scenes: Vec<Scene>, active: Option<SceneId>) -> Result<Self, DocError> {
        let Some(first) = scenes.first() else {
            return Err(DocError::Empty);
        };
        let first_id = first.id;

        let mut scene_ids = HashSet::new();
        for scene in &mut scenes {
            if !scene_ids.insert(scene.id) {
                return Err(DocError::DuplicateScene(scene.id));
            }
            let mut element_ids = HashSet::new();
            for el in &mut scene.elements {
                if !element_ids.insert(el.id) {
                    return Err(DocError::DuplicateElement { scene: scene.id, element: el.id });
                }
                el.width = clamp_dimension(el.width);
                el.height = clamp_dimension(el.height);
            }
        }

        let active_scene_id = active.filter(|id| scene_ids.contains(id)).unwrap_or(first_id);
        Ok(Self { scenes, active_scene_id })
    }

    /// Validate a deserialized [`SceneSnapshot`].
    ///
    /// # Errors
    ///
    /// Same as [`SceneStore::from_snapshot`].
    pub fn try_from_snapshot(snapshot: SceneSnapshot) -> Result<Self, DocError> {
        Self::from_snapshot(snapshot.scenes, snapshot.active_scene_id)
    }

    // --- Queries ---

    #[must_use]
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    #[must_use]
    pub fn active_id(&self) -> SceneId {
        self.active_scene_id
    }

    #[must_use]
    pub fn active_scene(&self) -> &Scene {
        // The active id always names a member; the fallback only satisfies the type.
        self.scene(&self.active_scene_id).unwrap_or(&self.scenes[0])
    }

    #[must_use]
    pub fn scene(&self, id: &SceneId) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.id == *id)
    }

    fn scene_mut(&mut self, id: &SceneId) -> Option<&mut Scene> {
        self.scenes.iter_mut().find(|s| s.id == *id)
    }

    #[must_use]
    pub fn element(&self, scene_id: &SceneId, element_id: &ElementId) -> Option<&SceneElement> {
        self.scene(scene_id).and_then(|s| s.element(element_id))
    }

    // --- Scene mutations ---

    /// Append an empty scene. The active scene does not change.
    ///
    /// A blank name becomes `"New Layout {n}"`, `n` being the new collection size.
    pub fn add_scene(&mut self, name: &str, shape: BoundaryShape) -> SceneId {
        let name = if name.trim().is_empty() {
            format!("New Layout {}", self.scenes.len() + 1)
        } else {
            name.trim().to_string()
        };
        let scene = Scene::new(name, shape);
        let id = scene.id;
        self.scenes.push(scene);
        id
    }

    /// Switch the active scene. Returns `false` for an unknown id.
    pub fn set_active_scene(&mut self, id: &SceneId) -> bool {
        if self.scene(id).is_none() {
            debug!(scene_id = %id, "set_active_scene: unknown scene");
            return false;
        }
        self.active_scene_id = *id;
        true
    }

    /// Remove a scene unless it is the last one.
    ///
    /// When the active scene is removed the first remaining scene becomes active.
    pub fn remove_scene(&mut self, id: &SceneId) -> SceneRemoval {
        let Some(index) = self.scenes.iter().position(|s| s.id == *id) else {
            debug!(scene_id = %id, "remove_scene: unknown scene");
            return SceneRemoval::Unknown;
        };
        if self.scenes.len() == 1 {
            debug!(scene_id = %id, "remove_scene: refusing to remove the last scene");
            return SceneRemoval::PrecondIgnored;
        }
        self.scenes.remove(index);
        if self.active_scene_id == *id {
            self.active_scene_id = self.scenes[0].id;
            return SceneRemoval::Removed { activated: Some(self.active_scene_id) };
        }
        SceneRemoval::Removed { activated: None }
    }

    /// Rename a scene. Blank names are ignored; names are stored trimmed.
    pub fn rename_scene(&mut self, id: &SceneId, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            debug!(scene_id = %id, "rename_scene: blank name ignored");
            return false;
        }
        let Some(scene) = self.scene_mut(id) else {
            return false;
        };
        if scene.name == trimmed {
            return false;
        }
        scene.name = trimmed.to_string();
        true
    }

    pub fn set_boundary_shape(&mut self, id: &SceneId, shape: BoundaryShape) -> bool {
        let Some(scene) = self.scene_mut(id) else {
            return false;
        };
        if scene.shape == shape {
            return false;
        }
        scene.shape = shape;
        true
    }

    // --- Element mutations ---

    /// Append an element of `kind` with its defaults. Returns the new element's id.
    pub fn add_element(&mut self, scene_id: &SceneId, kind: ElementKind) -> Option<ElementId> {
        let scene = self.scene_mut(scene_id)?;
        let element = SceneElement::new(kind);
        let id = element.id;
        scene.elements.push(element);
        Some(id)
    }

    /// Apply a sparse update. Returns `true` when the element exists and changed.
    pub fn update_element(&mut self, scene_id: &SceneId, element_id: &ElementId, partial: &PartialElement) -> bool {
        let Some(el) = self.scene_mut(scene_id).and_then(|s| s.element_mut(element_id)) else {
            debug!(scene_id = %scene_id, element_id = %element_id, "update_element: unknown element");
            return false;
        };
        el.apply(partial)
    }

    pub fn remove_element(&mut self, scene_id: &SceneId, element_id: &ElementId) -> Option<SceneElement> {
        let scene = self.scene_mut(scene_id)?;
        let index = scene.elements.iter().position(|el| el.id == *element_id)?;
        Some(scene.elements.remove(index))
    }
}
