use chrono::NaiveDate;
use dual_axis_chart::api::{ChartConfig, ChartView, build_chart};
use dual_axis_chart::core::{Record, SeriesId};
use dual_axis_chart::render::{Renderer, SvgRenderer};

fn records() -> Vec<Record> {
    let date = |d| NaiveDate::from_ymd_opt(2022, 1, d).expect("valid date");
    vec![Record::new(date(1), 10, 2), Record::new(date(2), 20, 5)]
}

fn rendered_document() -> String {
    let scene = build_chart(&records(), &ChartConfig::default()).expect("scene");
    let mut renderer = SvgRenderer::new();
    renderer.render(&scene.frame).expect("render");
    renderer.into_document().expect("document")
}

#[test]
fn document_uses_viewport_size() {
    let svg = rendered_document();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"960\" height=\"660\""));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn series_lines_are_unfilled_polylines() {
    let svg = rendered_document();
    assert!(svg.contains(
        "<polyline class=\"line dow_index\" points=\"50,305 920,30\" fill=\"none\" stroke=\"#008000\""
    ));
    assert!(svg.contains(
        "<polyline class=\"line smurf_sightings\" points=\"50,360 920,30\" fill=\"none\" stroke=\"#0000ff\""
    ));
}

#[test]
fn markers_carry_their_class_and_tooltip_title() {
    let svg = rendered_document();
    assert_eq!(svg.matches("class=\"dow_indexcircle\"").count(), 2);
    assert_eq!(svg.matches("class=\"smurf_sightingscircle\"").count(), 2);
    assert!(svg.contains(
        "<circle class=\"dow_indexcircle\" cx=\"50\" cy=\"305\" r=\"3\" fill=\"#008000\"><title>dow_index: 10\nsmurf_sightings: 2</title></circle>"
    ));
}

#[test]
fn marker_classes_map_back_to_their_series() {
    let svg = rendered_document();
    let series: Vec<_> = svg
        .split("<circle class=\"")
        .skip(1)
        .map(|rest| rest.split('"').next().and_then(SeriesId::from_marker_class))
        .collect();
    assert_eq!(
        series,
        vec![
            Some(SeriesId::Primary),
            Some(SeriesId::Primary),
            Some(SeriesId::Secondary),
            Some(SeriesId::Secondary),
        ]
    );
}

#[test]
fn captions_are_centered_text() {
    let svg = rendered_document();
    assert!(svg.contains(
        "<text x=\"485\" y=\"630\" font-family=\"sans-serif\" font-size=\"16\" fill=\"#008000\" text-anchor=\"middle\">Dow Index Level</text>"
    ));
    assert!(svg.contains(">Smurf Sightings</text>"));
    assert!(svg.contains(">01-Jan-2022</text>"));
}

#[test]
fn layers_are_painted_back_to_front() {
    let svg = rendered_document();
    let axis = svg.find("<g class=\"axis\">").expect("axis group");
    let series = svg.find("<g class=\"series\">").expect("series group");
    let markers = svg.find("<g class=\"markers\">").expect("markers group");
    assert!(axis < series && series < markers);
    assert!(!svg.contains("<g class=\"tooltip\">"));
}

#[test]
fn shown_tooltip_is_part_of_the_document() {
    let mut view =
        ChartView::new(SvgRenderer::new(), &records(), ChartConfig::default()).expect("view");
    view.pointer_move(50.0, 305.0);
    view.render().expect("render");

    let svg = view.renderer().document().expect("document");
    assert!(svg.contains("<g class=\"tooltip\">"));
    assert!(svg.contains(">dow_index: 10</text>"));
    assert!(svg.contains(">smurf_sightings: 2</text>"));
}

#[test]
fn write_to_requires_a_rendered_document() {
    let renderer = SvgRenderer::new();
    let path = std::env::temp_dir().join("dual_axis_chart_unrendered.svg");
    assert!(renderer.write_to(&path).is_err());
}

#[test]
fn write_to_persists_the_document_creating_directories() {
    let scene = build_chart(&records(), &ChartConfig::default()).expect("scene");
    let mut renderer = SvgRenderer::new();
    renderer.render(&scene.frame).expect("render");

    let dir = std::env::temp_dir().join(format!("dual_axis_chart_svg_{}", std::process::id()));
    let path = dir.join("nested").join("chart.svg");
    renderer.write_to(&path).expect("write");

    let written = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(Some(written.as_str()), renderer.document());
    std::fs::remove_dir_all(&dir).expect("cleanup");
}
