use tracing::debug;

use crate::core::Record;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HoverTracker, TooltipContent, TooltipState};
use crate::render::{
    LayerKind, MarkerTag, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::{ChartConfig, ChartScene, build_chart};

/// Approximate advance of one glyph, in ems, used to size the tooltip box.
const TOOLTIP_GLYPH_WIDTH_EM: f64 = 0.6;
const TOOLTIP_LINE_HEIGHT_EM: f64 = 1.25;

/// Interactive chart: a built scene, its renderer and the hover tooltip.
pub struct ChartView<R: Renderer> {
    renderer: R,
    config: ChartConfig,
    scene: ChartScene,
    hover: HoverTracker,
}

impl<R: Renderer> ChartView<R> {
    /// Builds the scene for `records` and wraps it with `renderer`.
    pub fn new(renderer: R, records: &[Record], config: ChartConfig) -> ChartResult<Self> {
        let scene = build_chart(records, &config)?;
        Ok(Self::from_scene(renderer, scene, config))
    }

    #[must_use]
    pub fn from_scene(renderer: R, scene: ChartScene, config: ChartConfig) -> Self {
        let hover = HoverTracker::new(config.hover_slop_px);
        Self {
            renderer,
            config,
            scene,
            hover,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn scene(&self) -> &ChartScene {
        &self.scene
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    #[must_use]
    pub fn tooltip_state(&self) -> TooltipState {
        self.hover.state()
    }

    /// Feeds a pointer position in canvas coordinates; returns whether the
    /// tooltip changed and a redraw is due.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.hover.pointer_move(x, y, &self.scene.markers)
    }

    pub fn pointer_leave(&mut self) -> bool {
        self.hover.pointer_leave()
    }

    /// Shows the tooltip for the marker tagged `tag`, anchored at `position`.
    pub fn marker_enter(&mut self, tag: MarkerTag, position: (f64, f64)) -> ChartResult<bool> {
        let hit = self
            .scene
            .markers
            .iter()
            .find(|marker| marker.tag == tag)
            .ok_or_else(|| {
                ChartError::InvalidData(format!(
                    "no {} marker for record {}",
                    tag.series.column(),
                    tag.record_index
                ))
            })?;
        Ok(self.hover.marker_enter(hit, position))
    }

    pub fn marker_leave(&mut self) -> bool {
        self.hover.marker_leave()
    }

    /// Static scene plus the tooltip overlay when it is shown.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let mut frame = self.scene.frame.clone();
        if let Some(content) = self.hover.state().content() {
            self.append_tooltip(&mut frame, content);
        }
        frame
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame();
        self.renderer.render(&frame)?;
        debug!(
            tooltip_shown = self.hover.state().is_shown(),
            "rendered chart frame"
        );
        Ok(())
    }

    fn append_tooltip(&self, frame: &mut RenderFrame, content: &TooltipContent) {
        let style = self.config.tooltip;
        let colors = self.config.series_style(content.series);
        let lines = content.text_lines();

        let font = style.font_size_px;
        let longest = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        let width = longest as f64 * font * TOOLTIP_GLYPH_WIDTH_EM + 2.0 * style.padding_px;
        let line_height = font * TOOLTIP_LINE_HEIGHT_EM;
        let height = lines.len() as f64 * line_height + 2.0 * style.padding_px;

        let viewport_width = f64::from(frame.viewport.width);
        let viewport_height = f64::from(frame.viewport.height);
        let (anchor_x, anchor_y) = content.position;
        let mut x = anchor_x + style.offset_px.0;
        if x + width > viewport_width {
            x = anchor_x - style.offset_px.0 - width;
        }
        let mut y = anchor_y + style.offset_px.1;
        if y + height > viewport_height {
            y = anchor_y - style.offset_px.1 - height;
        }
        let x = x.max(0.0);
        let y = y.max(0.0);

        let layer = frame.layer_mut(LayerKind::Tooltip);
        layer.rects.push(
            RectPrimitive::new(x, y, width, height, colors.tooltip_background)
                .with_corner_radius(style.corner_radius_px),
        );
        for (index, line) in lines.into_iter().enumerate() {
            let baseline = y + style.padding_px + index as f64 * line_height + font;
            layer.texts.push(TextPrimitive::new(
                line,
                x + style.padding_px,
                baseline,
                font,
                colors.tooltip_text,
                TextHAlign::Left,
            ));
        }
    }
}
