//! Interaction controller: pointer, wheel and keyboard events in, model
//! mutations and host actions out.
//!
//! `EngineCore` owns every piece of editor state (scene store, camera,
//! selection, gesture, save indicator) and contains no browser types, so the
//! whole editor can be driven from tests. `Engine` wraps it with the canvas
//! element and its 2D context.
//!
//! Mutations apply to the active scene only and are visible as soon as the
//! handler returns. References to elements or scenes that no longer exist are
//! ignored and produce no actions.

use tracing::{debug, error, info, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::boundary::BoundaryShape;
use crate::camera::{Camera, Point};
use crate::consts::{DEFAULT_SCENE_NAME, WHEEL_ZOOM_STEP};
use crate::doc::{
    ElementId, ElementKind, PartialElement, Scene, SceneElement, SceneId, SceneRemoval, SceneStore,
};
use crate::hit::{self, HitPart};
use crate::input::{Button, InputState, Key, Modifiers, UiState, WheelDelta};
use crate::panel::{PropertyEdit, PropertyPanel};
use crate::render;
use crate::save::{SaveIndicator, SaveStatus};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

const CURSOR_DEFAULT: &str = "default";
const CURSOR_MOVE: &str = "move";
const CURSOR_RESIZE: &str = "nwse-resize";

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone)]
pub enum Action {
    None,
    ElementCreated { scene_id: SceneId, element: SceneElement },
    ElementUpdated { scene_id: SceneId, id: ElementId, fields: PartialElement },
    ElementDeleted { scene_id: SceneId, id: ElementId },
    SceneCreated { id: SceneId },
    SceneRemoved { id: SceneId },
    SceneUpdated { id: SceneId },
    ActiveSceneChanged { id: SceneId },
    SelectionChanged { id: Option<ElementId> },
    SetCursor(String),
    /// Hand this snapshot to the persistence gateway, then call
    /// [`EngineCore::finish_save`] with the outcome.
    SaveRequested(SceneStore),
    RenderNeeded,
}

/// Core engine state: all logic that does not depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub doc: SceneStore,
    pub camera: Camera,
    pub ui: UiState,
    pub input: InputState,
    pub save: SaveIndicator,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_store(SceneStore::new(DEFAULT_SCENE_NAME))
    }
}

impl EngineCore {
    /// An editor holding one empty rectangular scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An editor over an already loaded scene collection.
    #[must_use]
    pub fn with_store(doc: SceneStore) -> Self {
        Self {
            doc,
            camera: Camera::default(),
            ui: UiState::default(),
            input: InputState::default(),
            save: SaveIndicator::new(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }

    /// Replace the scene collection, dropping selection and any gesture.
    pub fn load(&mut self, doc: SceneStore) -> Action {
        self.doc = doc;
        self.reset_interaction();
        Action::RenderNeeded
    }

    // --- Scenes ---

    /// Append an empty scene. The active scene does not change.
    pub fn add_scene(&mut self, name: &str, shape: BoundaryShape) -> SceneId {
        let id = self.doc.add_scene(name, shape);
        debug!(scene_id = %id, shape = shape.as_str(), "scene added");
        id
    }

    pub fn set_active_scene(&mut self, id: &SceneId) -> Action {
        if self.doc.active_id() == *id {
            return Action::None;
        }
        if !self.doc.set_active_scene(id) {
            return Action::None;
        }
        self.reset_interaction();
        Action::ActiveSceneChanged { id: *id }
    }

    pub fn remove_scene(&mut self, id: &SceneId) -> Vec<Action> {
        match self.doc.remove_scene(id) {
            SceneRemoval::Removed { activated: Some(active) } => {
                self.reset_interaction();
                vec![
                    Action::SceneRemoved { id: *id },
                    Action::ActiveSceneChanged { id: active },
                    Action::RenderNeeded,
                ]
            }
            SceneRemoval::Removed { activated: None } => vec![Action::SceneRemoved { id: *id }],
            SceneRemoval::PrecondIgnored | SceneRemoval::Unknown => Vec::new(),
        }
    }

    pub fn rename_scene(&mut self, id: &SceneId, name: &str) -> Action {
        if self.doc.rename_scene(id, name) {
            Action::SceneUpdated { id: *id }
        } else {
            Action::None
        }
    }

    pub fn set_boundary_shape(&mut self, id: &SceneId, shape: BoundaryShape) -> Action {
        if self.doc.set_boundary_shape(id, shape) {
            Action::SceneUpdated { id: *id }
        } else {
            Action::None
        }
    }

    // --- Elements ---

    /// Add an element of `kind` to the active scene at the default position
    /// and select it.
    pub fn add_element(&mut self, kind: ElementKind) -> Action {
        let scene_id = self.doc.active_id();
        let Some(id) = self.doc.add_element(&scene_id, kind) else {
            return Action::None;
        };
        let Some(element) = self.doc.element(&scene_id, &id).cloned() else {
            return Action::None;
        };
        self.input = InputState::Idle;
        self.ui.selected_id = Some(id);
        debug!(scene_id = %scene_id, element_id = %id, kind = kind.as_str(), "element added");
        Action::ElementCreated { scene_id, element }
    }

    /// Apply a sparse update to an element of the active scene.
    pub fn update_element(&mut self, id: &ElementId, fields: PartialElement) -> Action {
        let scene_id = self.doc.active_id();
        if !self.doc.update_element(&scene_id, id, &fields) {
            return Action::None;
        }
        Action::ElementUpdated { scene_id, id: *id, fields }
    }

    /// Remove an element from the active scene.
    pub fn remove_element(&mut self, id: &ElementId) -> Action {
        let scene_id = self.doc.active_id();
        if self.doc.remove_element(&scene_id, id).is_none() {
            return Action::None;
        }
        if self.ui.selected_id == Some(*id) {
            self.ui.selected_id = None;
        }
        if self.input.active_id() == Some(*id) {
            self.input = InputState::Idle;
        }
        Action::ElementDeleted { scene_id, id: *id }
    }

    // --- Selection and property panel ---

    /// Select an element of the active scene without starting a gesture.
    /// Ignored while a drag or resize is in progress.
    pub fn select(&mut self, id: &ElementId) -> Action {
        if !self.input.is_idle() {
            debug!(element_id = %id, "select: gesture in progress");
            return Action::None;
        }
        if self.active_scene().element(id).is_none() || self.ui.selected_id == Some(*id) {
            return Action::None;
        }
        self.ui.selected_id = Some(*id);
        Action::SelectionChanged { id: Some(*id) }
    }

    pub fn clear_selection(&mut self) -> Action {
        if !self.input.is_idle() {
            debug!("clear_selection: gesture in progress");
            return Action::None;
        }
        if self.ui.selected_id.take().is_none() {
            return Action::None;
        }
        Action::SelectionChanged { id: None }
    }

    pub fn delete_selected(&mut self) -> Action {
        match self.ui.selected_id {
            Some(id) => self.remove_element(&id),
            None => Action::None,
        }
    }

    /// Fields of the selected element, if any.
    #[must_use]
    pub fn property_panel(&self) -> Option<PropertyPanel> {
        self.selected_element().map(PropertyPanel::of)
    }

    /// Apply a property-panel edit to the selected element.
    pub fn edit_selected(&mut self, edit: &PropertyEdit) -> Action {
        let Some(el) = self.selected_element() else {
            return Action::None;
        };
        let (id, kind) = (el.id, el.kind);
        let Some(fields) = edit.to_partial(kind) else {
            debug!(element_id = %id, kind = kind.as_str(), "edit_selected: field not editable for kind");
            return Action::None;
        };
        self.update_element(&id, fields)
    }

    // --- Viewport ---

    /// Store the viewport size and refit the camera to the view box.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        self.camera = Camera::fit_view_box(width_css, height_css);
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    // --- Pointer input ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, _modifiers: Modifiers) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let world = self.camera.screen_to_world(screen_pt);
        let hit = hit::hit_test(world, self.doc.active_scene(), &self.camera, self.ui.selected_id);
        let Some(hit) = hit else {
            // A new press always ends the previous gesture.
            self.input = InputState::Idle;
            return Vec::new();
        };
        let Some(el) = self.active_scene().element(&hit.element_id) else {
            return Vec::new();
        };

        let (input, cursor) = match hit.part {
            HitPart::Body => (InputState::begin_drag(el, world), CURSOR_MOVE),
            HitPart::ResizeHandle => (InputState::begin_resize(el, world), CURSOR_RESIZE),
        };
        self.input = input;

        let mut actions = Vec::new();
        if self.ui.selected_id != Some(hit.element_id) {
            self.ui.selected_id = Some(hit.element_id);
            actions.push(Action::SelectionChanged { id: Some(hit.element_id) });
        }
        actions.push(Action::SetCursor(cursor.to_owned()));
        actions.push(Action::RenderNeeded);
        actions
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, _modifiers: Modifiers) -> Vec<Action> {
        let world = self.camera.screen_to_world(screen_pt);

        if self.input.is_idle() {
            return vec![Action::SetCursor(self.hover_cursor(world).to_owned())];
        }

        let Some(manipulation) = self.input.pointer_move(world) else {
            return Vec::new();
        };
        let id = manipulation.id();
        if self.active_scene().element(&id).is_none() {
            debug!(element_id = %id, "gesture target vanished; ending gesture");
            self.input = InputState::Idle;
            return Vec::new();
        }
        match self.update_element(&id, manipulation.to_partial()) {
            Action::None => Vec::new(),
            updated => vec![updated, Action::RenderNeeded],
        }
    }

    pub fn on_pointer_up(&mut self, _screen_pt: Point, _button: Button, _modifiers: Modifiers) -> Vec<Action> {
        self.end_gesture()
    }

    /// Pointer left the canvas: ends any gesture exactly like a release.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.end_gesture()
    }

    /// Ctrl/meta + wheel zooms at the cursor; a plain wheel pans.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        let before = self.camera;
        if modifiers.ctrl || modifiers.meta {
            let factor = WHEEL_ZOOM_STEP.powf(-delta.dy / 100.0);
            self.camera.zoom_at(screen_pt, factor);
        } else {
            self.camera.pan_by(-delta.dx, -delta.dy);
        }
        if self.camera == before {
            return Vec::new();
        }
        vec![Action::RenderNeeded]
    }

    // --- Keyboard ---

    pub fn on_key_down(&mut self, key: Key, _modifiers: Modifiers) -> Vec<Action> {
        if !self.input.is_idle() {
            return Vec::new();
        }
        let action = match key.0.as_str() {
            "Delete" | "Backspace" => self.delete_selected(),
            "Escape" => self.clear_selection(),
            _ => Action::None,
        };
        match action {
            Action::None => Vec::new(),
            other => vec![other, Action::RenderNeeded],
        }
    }

    // --- Save ---

    /// Start a save. Returns the snapshot to persist, or `Action::None`
    /// while a save is already in flight.
    pub fn request_save(&mut self) -> Action {
        if !self.save.begin() {
            debug!("request_save: save already in flight");
            return Action::None;
        }
        info!(scenes = self.doc.len(), "save requested");
        Action::SaveRequested(self.doc.clone())
    }

    /// Report the outcome of the save started by [`EngineCore::request_save`].
    pub fn finish_save(&mut self, result: Result<(), String>, now_ms: u64) -> Action {
        let changed = match result {
            Ok(()) => {
                let changed = self.save.succeed(now_ms);
                if changed {
                    info!("layout saved");
                }
                changed
            }
            Err(message) => {
                let changed = self.save.fail(message.clone());
                if changed {
                    error!(error = %message, "layout save failed");
                }
                changed
            }
        };
        if changed { Action::RenderNeeded } else { Action::None }
    }

    /// Advance the save indicator clock.
    pub fn tick(&mut self, now_ms: u64) -> Action {
        if self.save.tick(now_ms) { Action::RenderNeeded } else { Action::None }
    }

    pub fn dismiss_save_error(&mut self) -> Action {
        if self.save.dismiss() { Action::RenderNeeded } else { Action::None }
    }

    // --- Queries ---

    #[must_use]
    pub fn active_scene(&self) -> &Scene {
        self.doc.active_scene()
    }

    /// The currently selected element, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ElementId> {
        self.ui.selected_id
    }

    #[must_use]
    pub fn selected_element(&self) -> Option<&SceneElement> {
        self.ui.selected_id.and_then(|id| self.active_scene().element(&id))
    }

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Look up an element of the active scene by id.
    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&SceneElement> {
        self.active_scene().element(id)
    }

    #[must_use]
    pub fn save_status(&self) -> &SaveStatus {
        self.save.status()
    }

    #[must_use]
    pub fn save_label(&self) -> &'static str {
        self.save.label()
    }

    // --- Internals ---

    fn end_gesture(&mut self) -> Vec<Action> {
        if self.input.release().is_none() {
            return Vec::new();
        }
        vec![Action::SetCursor(CURSOR_DEFAULT.to_owned())]
    }

    fn reset_interaction(&mut self) {
        self.ui.selected_id = None;
        self.input = InputState::Idle;
    }

    fn hover_cursor(&self, world: Point) -> &'static str {
        match hit::hit_test(world, self.active_scene(), &self.camera, self.ui.selected_id) {
            Some(h) if h.part == HitPart::ResizeHandle => CURSOR_RESIZE,
            Some(_) => CURSOR_MOVE,
            None => CURSOR_DEFAULT,
        }
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the element has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx, core: EngineCore::new() })
    }

    /// Resize the backing store to the viewport and refit the camera.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        let dpr = self.core.dpr;
        self.canvas.set_width((width_css.max(0.0) * dpr).round() as u32);
        self.canvas.set_height((height_css.max(0.0) * dpr).round() as u32);
    }

    // --- Delegated input ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button, modifiers)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt, modifiers)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, button, modifiers)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_wheel(screen_pt, delta, modifiers)
    }

    pub fn on_key_down(&mut self, key: Key, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_key_down(key, modifiers)
    }

    // --- Render ---

    /// Draw the active scene to the canvas.
    pub fn render(&self) {
        let view = render::scene_view(self.core.active_scene(), self.core.selection());
        let core = &self.core;
        if let Err(err) =
            render::draw(&self.ctx, &view, &core.camera, core.viewport_width, core.viewport_height, core.dpr)
        {
            warn!(?err, "render failed");
        }
    }
}
