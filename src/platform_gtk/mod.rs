//! GTK4 host for a live chart with hover tooltips.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::ChartView;
use crate::render::{CairoContextRenderer, Renderer};

/// Shared handle to the view driven by the adapter's event controllers.
pub type SharedChartView<R> = Rc<RefCell<ChartView<R>>>;

/// `DrawingArea` that paints a [`ChartView`] through Cairo and forwards
/// pointer motion to its tooltip state.
pub struct GtkChartAdapter<R>
where
    R: Renderer + CairoContextRenderer + 'static,
{
    view: SharedChartView<R>,
    drawing_area: gtk::DrawingArea,
}

impl<R> GtkChartAdapter<R>
where
    R: Renderer + CairoContextRenderer + 'static,
{
    #[must_use]
    pub fn new(view: ChartView<R>) -> Self {
        let viewport = view.config().viewport;
        let view = Rc::new(RefCell::new(view));

        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        drawing_area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));

        {
            let view = Rc::clone(&view);
            drawing_area.set_draw_func(move |_, context, _width, _height| {
                let Ok(mut view) = view.try_borrow_mut() else {
                    return;
                };
                let frame = view.build_render_frame();
                if let Err(err) = view.renderer_mut().render_on_cairo_context(context, &frame) {
                    warn!(error = %err, "failed to paint chart");
                }
            });
        }

        let motion = gtk::EventControllerMotion::new();
        {
            let view = Rc::clone(&view);
            let drawing_area = drawing_area.clone();
            motion.connect_motion(move |_, x, y| {
                let changed = view
                    .try_borrow_mut()
                    .map(|mut view| view.pointer_move(x, y))
                    .unwrap_or(false);
                if changed {
                    drawing_area.queue_draw();
                }
            });
        }
        {
            let view = Rc::clone(&view);
            let drawing_area = drawing_area.clone();
            motion.connect_leave(move |_| {
                let changed = view
                    .try_borrow_mut()
                    .map(|mut view| view.pointer_leave())
                    .unwrap_or(false);
                if changed {
                    drawing_area.queue_draw();
                }
            });
        }
        drawing_area.add_controller(motion);

        Self { view, drawing_area }
    }

    #[must_use]
    pub fn view(&self) -> SharedChartView<R> {
        Rc::clone(&self.view)
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }
}
