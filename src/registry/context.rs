use std::collections::BTreeMap;

use crate::{
    boundary::events::{EventSink, NullSink, RuntimeEvent},
    config::HostSettings,
    foundation::core::{Argb, ElementId, ElementKind, SurfaceSize},
    foundation::error::{HostError, HostResult},
    registry::canvas::Canvas,
    registry::ids::IdAllocator,
    registry::sprite::{Sprite, SpriteStore},
    registry::widgets::{Button, Column, TextView, Widget},
    render::plan::RenderPlan,
    render::surface::execute_plan,
};

/// Owner of every element the runtime creates.
///
/// One value per runtime instance; there is no global state, so independent
/// contexts can coexist (tests create many). All methods take `&mut self` for
/// mutation, which serializes creation, mutation, deletion, and rendering. Wrap
/// the whole context in one `Mutex` if it must be shared across threads.
pub struct GuiContext {
    settings: HostSettings,
    ids: IdAllocator,
    sprites: SpriteStore,
    canvases: BTreeMap<ElementId, Canvas>,
    text_views: BTreeMap<ElementId, TextView>,
    buttons: BTreeMap<ElementId, Button>,
    column: Column,
    sink: Box<dyn EventSink>,
}

impl std::fmt::Debug for GuiContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuiContext")
            .field("settings", &self.settings)
            .field("sprites", &self.sprites.len())
            .field("canvases", &self.canvases.len())
            .field("text_views", &self.text_views.len())
            .field("buttons", &self.buttons.len())
            .finish()
    }
}

impl Default for GuiContext {
    fn default() -> Self {
        Self::build(HostSettings::default(), Box::new(NullSink))
    }
}

impl GuiContext {
    /// Context delivering button presses to `sink`.
    pub fn new(settings: HostSettings, sink: impl EventSink + 'static) -> HostResult<Self> {
        settings.validate()?;
        Ok(Self::build(settings, Box::new(sink)))
    }

    fn build(settings: HostSettings, sink: Box<dyn EventSink>) -> Self {
        Self {
            sprites: SpriteStore::with_limit(settings.max_surface_dim),
            settings,
            ids: IdAllocator::new(),
            canvases: BTreeMap::new(),
            text_views: BTreeMap::new(),
            buttons: BTreeMap::new(),
            column: Column::default(),
            sink,
        }
    }

    /// Active settings.
    pub fn settings(&self) -> &HostSettings {
        &self.settings
    }

    /// Widget layout, top to bottom.
    pub fn column(&self) -> &Column {
        &self.column
    }

    /// Sprite table (read-only).
    pub fn sprites(&self) -> &SpriteStore {
        &self.sprites
    }

    // Text views

    /// Append a text view to the column.
    pub fn create_text_view(&mut self, text: impl Into<String>) -> ElementId {
        let id = self.ids.next(ElementKind::TextView);
        self.text_views
            .insert(id, TextView { text: text.into() });
        self.column.push(Widget::TextView(id));
        tracing::debug!(id, "created text view");
        id
    }

    /// Replace a text view's text.
    pub fn modify_text_view(&mut self, id: ElementId, text: impl Into<String>) -> HostResult<()> {
        let view = self
            .text_views
            .get_mut(&id)
            .ok_or_else(|| HostError::not_found(ElementKind::TextView, id))?;
        view.text = text.into();
        Ok(())
    }

    /// Remove a text view. Removing an absent id is not an error.
    pub fn remove_text_view(&mut self, id: ElementId) -> bool {
        if self.text_views.remove(&id).is_none() {
            return false;
        }
        self.column.remove(Widget::TextView(id));
        true
    }

    /// Look up a text view.
    pub fn text_view(&self, id: ElementId) -> HostResult<&TextView> {
        self.text_views
            .get(&id)
            .ok_or_else(|| HostError::not_found(ElementKind::TextView, id))
    }

    // Buttons

    /// Append a button to the column.
    pub fn create_button(&mut self, label: impl Into<String>) -> ElementId {
        let id = self.ids.next(ElementKind::Button);
        self.buttons.insert(id, Button::new(label.into()));
        self.column.push(Widget::Button(id));
        tracing::debug!(id, "created button");
        id
    }

    /// Look up a button.
    pub fn button(&self, id: ElementId) -> HostResult<&Button> {
        self.buttons
            .get(&id)
            .ok_or_else(|| HostError::not_found(ElementKind::Button, id))
    }

    /// Toolkit activation of a button: emit exactly one `ButtonPress` to the sink.
    ///
    /// Fails only if the button does not exist. Delivery failures are logged and
    /// swallowed.
    #[tracing::instrument(skip(self))]
    pub fn press_button(&mut self, id: ElementId) -> HostResult<()> {
        self.button(id)?;
        if let Err(err) = self.sink.deliver(RuntimeEvent::ButtonPress { id }) {
            tracing::warn!(id, error = %err, "button press delivery failed");
        }
        Ok(())
    }

    // Canvases

    /// Create a canvas and append it to the column.
    pub fn create_canvas(&mut self, width: i32, height: i32) -> HostResult<ElementId> {
        let size = SurfaceSize::new(width, height, self.settings.max_surface_dim)?;
        let id = self.ids.next(ElementKind::Canvas);
        self.canvases.insert(id, Canvas::new(id, size));
        self.column.push(Widget::Canvas(id));
        tracing::debug!(id, width, height, "created canvas");
        Ok(id)
    }

    /// Look up a canvas.
    pub fn canvas(&self, id: ElementId) -> HostResult<&Canvas> {
        self.canvases
            .get(&id)
            .ok_or_else(|| HostError::not_found(ElementKind::Canvas, id))
    }

    fn canvas_mut(&mut self, id: ElementId) -> HostResult<&mut Canvas> {
        self.canvases
            .get_mut(&id)
            .ok_or_else(|| HostError::not_found(ElementKind::Canvas, id))
    }

    /// Attach a live sprite to a canvas.
    pub fn canvas_add_sprite(&mut self, canvas: ElementId, sprite: ElementId) -> HostResult<()> {
        self.sprites.get(sprite)?;
        self.canvas_mut(canvas)?.attach(sprite);
        Ok(())
    }

    /// Detach one reference to `sprite`. A sprite that is not attached is a no-op.
    pub fn canvas_remove_sprite(
        &mut self,
        canvas: ElementId,
        sprite: ElementId,
    ) -> HostResult<bool> {
        Ok(self.canvas_mut(canvas)?.detach(sprite))
    }

    /// Draw sequence the next redraw of `canvas` would execute.
    pub fn render_canvas(&self, canvas: ElementId) -> HostResult<RenderPlan<'_>> {
        Ok(self
            .canvas(canvas)?
            .render(&self.sprites, self.settings.clear_argb))
    }

    /// Render `canvas` into its surface and present it. Returns the frame number.
    #[tracing::instrument(skip(self))]
    pub fn redraw_canvas(&mut self, canvas: ElementId) -> HostResult<u64> {
        let clear = self.settings.clear_argb;
        let target = self
            .canvases
            .get_mut(&canvas)
            .ok_or_else(|| HostError::not_found(ElementKind::Canvas, canvas))?;
        let plan = target.render(&self.sprites, clear);
        let frame = execute_plan(target.surface_mut(), &plan)?;
        tracing::trace!(frame, ops = plan.ops.len(), "presented");
        Ok(frame)
    }

    // Sprites

    /// Create a transparent bitmap sprite.
    pub fn create_bitmap(&mut self, width: i32, height: i32) -> HostResult<ElementId> {
        let id = self.sprites.create_bitmap(&mut self.ids, width, height)?;
        tracing::debug!(id, width, height, "created bitmap sprite");
        Ok(id)
    }

    /// Create a text sprite.
    pub fn create_text(
        &mut self,
        text: impl Into<String>,
        color: Argb,
        font_size: i32,
    ) -> HostResult<ElementId> {
        let id = self
            .sprites
            .create_text(&mut self.ids, text, color, font_size)?;
        tracing::debug!(id, font_size, "created text sprite");
        Ok(id)
    }

    /// Look up a sprite.
    pub fn sprite(&self, id: ElementId) -> HostResult<&Sprite> {
        self.sprites.get(id)
    }

    /// Replace a text sprite's content.
    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) -> HostResult<()> {
        self.sprites.set_text(id, text)
    }

    /// Write one pixel of a bitmap sprite.
    pub fn set_pixel(&mut self, id: ElementId, x: i32, y: i32, color: Argb) -> HostResult<()> {
        self.sprites.set_pixel(id, x, y, color)
    }

    /// Replace every pixel of a bitmap sprite.
    pub fn upload_pixels(&mut self, id: ElementId, raw: &[u32]) -> HostResult<()> {
        self.sprites.upload_pixels(id, raw)
    }

    /// Move a sprite.
    pub fn set_position(&mut self, id: ElementId, left: i32, top: i32) -> HostResult<()> {
        self.sprites.set_position(id, left, top)
    }

    /// Change a sprite's z-index.
    pub fn set_z_index(&mut self, id: ElementId, z_index: i32) -> HostResult<()> {
        self.sprites.set_z_index(id, z_index)
    }

    /// Delete a sprite from the store. Idempotent.
    ///
    /// Canvases are not scanned; references left behind are skipped at render time.
    pub fn delete_sprite(&mut self, id: ElementId) -> bool {
        self.sprites.delete(id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/context.rs"]
mod tests;
