//! Reusable UI widget helpers

use super::components::ItemsControl;
use super::context::GuiContext;
use super::renderer::BufferRenderer;
use crate::error::GuiResult;
use crate::state::ListItem;
use ratatui::{layout::Rect, Frame};

/// Place an items control in `area` and draw it into the frame.
///
/// # Example
/// ```ignore
/// render_items_control(frame, area, &mut app.list_box, &app.context)?;
/// ```
pub fn render_items_control<T, C>(
    frame: &mut Frame,
    area: Rect,
    control: &mut C,
    ctx: &dyn GuiContext,
) -> GuiResult<()>
where
    T: ListItem,
    C: ItemsControl<T> + ?Sized,
{
    control.set_bounds(area.into());
    let mut renderer = BufferRenderer::new(frame.buffer_mut());
    control.draw(ctx, &mut renderer)
}
