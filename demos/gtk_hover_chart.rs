use dual_axis_chart::api::{ChartConfig, ChartView};
use dual_axis_chart::data::{LoadOptions, load_records};
use dual_axis_chart::platform_gtk::GtkChartAdapter;
use dual_axis_chart::render::CairoRenderer;
use gtk4 as gtk;
use gtk4::prelude::*;

fn main() {
    let _ = dual_axis_chart::telemetry::init_default_tracing();
    let app = gtk::Application::builder()
        .application_id("rs.dual_axis_chart.demos.gtk_hover_chart")
        .build();
    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &gtk::Application) {
    let view = match build_view() {
        Ok(view) => view,
        Err(err) => {
            eprintln!("failed to initialize chart: {err}");
            return;
        }
    };
    let viewport = view.config().viewport;
    let adapter = GtkChartAdapter::new(view);

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("Dow Index vs Smurf Sightings")
        .default_width(i32::try_from(viewport.width).unwrap_or(960))
        .default_height(i32::try_from(viewport.height).unwrap_or(660))
        .build();
    window.set_child(Some(adapter.drawing_area()));
    window.present();
}

fn build_view() -> dual_axis_chart::ChartResult<ChartView<CairoRenderer>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/data/data.csv").to_owned());
    let outcome = load_records(path, LoadOptions::default())?;
    let config = ChartConfig::default();
    let renderer = CairoRenderer::new(
        i32::try_from(config.viewport.width).unwrap_or(i32::MAX),
        i32::try_from(config.viewport.height).unwrap_or(i32::MAX),
    )?;
    ChartView::new(renderer, &outcome.records, config)
}
