mod frame;
mod null_renderer;
mod primitives;
mod svg_backend;

pub use frame::{FrameLayer, LayerKind, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, MarkerTag, PolylinePrimitive, RectPrimitive,
    TextHAlign, TextPrimitive,
};
pub use svg_backend::{SvgRenderer, render_document};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from data loading, scales and hover state.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
