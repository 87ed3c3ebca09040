use crate::{
    boundary::handlers::{CallbackIndex, HandlerTable},
    foundation::core::{Argb, ElementId},
    foundation::error::HostResult,
    registry::context::GuiContext,
};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "call", rename_all = "camelCase", rename_all_fields = "camelCase")]
/// One inbound request from the runtime.
pub enum HostCall {
    /// Append a text view.
    CreateTextView {
        /// Initial text.
        text: String,
    },
    /// Replace a text view's text.
    ModifyTextView {
        /// Text view id.
        id: ElementId,
        /// New text.
        text: String,
    },
    /// Remove a text view (idempotent).
    RemoveTextView {
        /// Text view id.
        id: ElementId,
    },
    /// Append a button.
    CreateButton {
        /// Button label.
        label: String,
    },
    /// Append a canvas.
    CreateCanvas {
        /// Width in pixels.
        width: i32,
        /// Height in pixels.
        height: i32,
    },
    /// Create a transparent bitmap sprite.
    CreateBitmap {
        /// Width in pixels.
        width: i32,
        /// Height in pixels.
        height: i32,
    },
    /// Create a text sprite.
    CreateText {
        /// Content.
        text: String,
        /// Text color.
        color: Argb,
        /// Font size in pixels.
        font_size: i32,
    },
    /// Replace a text sprite's content.
    SetText {
        /// Text sprite id.
        id: ElementId,
        /// New content.
        text: String,
    },
    /// Write one bitmap pixel.
    ModifyBitmap {
        /// Bitmap sprite id.
        id: ElementId,
        /// Column.
        x: i32,
        /// Row.
        y: i32,
        /// New color.
        color: Argb,
    },
    /// Replace all bitmap pixels.
    BitmapSetPixels {
        /// Bitmap sprite id.
        id: ElementId,
        /// Row-major `0xAARRGGBB` words, `width * height` of them.
        pixels: Vec<u32>,
    },
    /// Move a sprite.
    BitmapSetPosition {
        /// Sprite id.
        id: ElementId,
        /// Horizontal offset.
        left: i32,
        /// Vertical offset.
        top: i32,
    },
    /// Change a sprite's z-index.
    BitmapSetZIndex {
        /// Sprite id.
        id: ElementId,
        /// New z-index.
        z_index: i32,
    },
    /// Attach a sprite to a canvas.
    CanvasAddBitmap {
        /// Canvas id.
        canvas_id: ElementId,
        /// Sprite id.
        bitmap_id: ElementId,
    },
    /// Detach one reference from a canvas.
    CanvasRemoveBitmap {
        /// Canvas id.
        canvas_id: ElementId,
        /// Sprite id.
        bitmap_id: ElementId,
    },
    /// Delete a sprite (idempotent).
    CanvasDeleteBitmap {
        /// Sprite id.
        bitmap_id: ElementId,
    },
    /// Render and present a canvas.
    CanvasRedraw {
        /// Canvas id.
        canvas_id: ElementId,
    },
    /// Route presses of a button to a runtime callback.
    RegisterOnClick {
        /// Button id.
        id: ElementId,
        /// Runtime function-table index.
        callback: CallbackIndex,
    },
    /// Add a runtime tick callback.
    RegisterOnTick {
        /// Runtime function-table index.
        callback: CallbackIndex,
    },
    /// Activate a button as the toolkit would.
    PressButton {
        /// Button id.
        id: ElementId,
    },
}

impl HostCall {
    /// Wire name of the call, as used in the `call` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateTextView { .. } => "createTextView",
            Self::ModifyTextView { .. } => "modifyTextView",
            Self::RemoveTextView { .. } => "removeTextView",
            Self::CreateButton { .. } => "createButton",
            Self::CreateCanvas { .. } => "createCanvas",
            Self::CreateBitmap { .. } => "createBitmap",
            Self::CreateText { .. } => "createText",
            Self::SetText { .. } => "setText",
            Self::ModifyBitmap { .. } => "modifyBitmap",
            Self::BitmapSetPixels { .. } => "bitmapSetPixels",
            Self::BitmapSetPosition { .. } => "bitmapSetPosition",
            Self::BitmapSetZIndex { .. } => "bitmapSetZIndex",
            Self::CanvasAddBitmap { .. } => "canvasAddBitmap",
            Self::CanvasRemoveBitmap { .. } => "canvasRemoveBitmap",
            Self::CanvasDeleteBitmap { .. } => "canvasDeleteBitmap",
            Self::CanvasRedraw { .. } => "canvasRedraw",
            Self::RegisterOnClick { .. } => "registerOnClick",
            Self::RegisterOnTick { .. } => "registerOnTick",
            Self::PressButton { .. } => "pressButton",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "reply", rename_all = "camelCase")]
/// Result of a successful [`HostCall`].
pub enum HostReply {
    /// Id of a newly created element.
    Id {
        /// New id.
        id: ElementId,
    },
    /// Call completed with nothing to report.
    Done,
    /// A canvas frame was presented.
    Redrawn {
        /// Canvas id.
        canvas: ElementId,
        /// Frame number (starts at 1 per canvas).
        frame: u64,
    },
}

/// Apply one call to the registry and the runtime handler table.
#[tracing::instrument(skip_all, fields(call = call.name()))]
pub fn dispatch(
    ctx: &mut GuiContext,
    handlers: &mut HandlerTable,
    call: HostCall,
) -> HostResult<HostReply> {
    let done = |(): ()| HostReply::Done;
    let reply = match call {
        HostCall::CreateTextView { text } => HostReply::Id {
            id: ctx.create_text_view(text),
        },
        HostCall::ModifyTextView { id, text } => ctx.modify_text_view(id, text).map(done)?,
        HostCall::RemoveTextView { id } => {
            ctx.remove_text_view(id);
            HostReply::Done
        }
        HostCall::CreateButton { label } => HostReply::Id {
            id: ctx.create_button(label),
        },
        HostCall::CreateCanvas { width, height } => HostReply::Id {
            id: ctx.create_canvas(width, height)?,
        },
        HostCall::CreateBitmap { width, height } => HostReply::Id {
            id: ctx.create_bitmap(width, height)?,
        },
        HostCall::CreateText {
            text,
            color,
            font_size,
        } => HostReply::Id {
            id: ctx.create_text(text, color, font_size)?,
        },
        HostCall::SetText { id, text } => ctx.set_text(id, text).map(done)?,
        HostCall::ModifyBitmap { id, x, y, color } => ctx.set_pixel(id, x, y, color).map(done)?,
        HostCall::BitmapSetPixels { id, pixels } => ctx.upload_pixels(id, &pixels).map(done)?,
        HostCall::BitmapSetPosition { id, left, top } => {
            ctx.set_position(id, left, top).map(done)?
        }
        HostCall::BitmapSetZIndex { id, z_index } => ctx.set_z_index(id, z_index).map(done)?,
        HostCall::CanvasAddBitmap {
            canvas_id,
            bitmap_id,
        } => ctx.canvas_add_sprite(canvas_id, bitmap_id).map(done)?,
        HostCall::CanvasRemoveBitmap {
            canvas_id,
            bitmap_id,
        } => {
            ctx.canvas_remove_sprite(canvas_id, bitmap_id)?;
            HostReply::Done
        }
        HostCall::CanvasDeleteBitmap { bitmap_id } => {
            ctx.delete_sprite(bitmap_id);
            HostReply::Done
        }
        HostCall::CanvasRedraw { canvas_id } => HostReply::Redrawn {
            canvas: canvas_id,
            frame: ctx.redraw_canvas(canvas_id)?,
        },
        HostCall::RegisterOnClick { id, callback } => {
            ctx.button(id)?;
            handlers.register_on_click(id, callback);
            HostReply::Done
        }
        HostCall::RegisterOnTick { callback } => {
            handlers.register_on_tick(callback);
            HostReply::Done
        }
        HostCall::PressButton { id } => ctx.press_button(id).map(done)?,
    };
    Ok(reply)
}

#[cfg(test)]
#[path = "../../tests/unit/boundary/calls.rs"]
mod tests;
