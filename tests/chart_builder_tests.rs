use approx::assert_relative_eq;
use chrono::NaiveDate;
use dual_axis_chart::api::{ChartConfig, build_chart};
use dual_axis_chart::core::{Margins, Record, SeriesId, Viewport};
use dual_axis_chart::error::ChartError;
use dual_axis_chart::render::{Color, LayerKind, TextHAlign};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn two_records() -> Vec<Record> {
    vec![
        Record::new(date(2022, 1, 1), 10, 2),
        Record::new(date(2022, 1, 2), 20, 5),
    ]
}

#[test]
fn default_layout_leaves_an_870_by_550_plot_area() {
    let plot = ChartConfig::default().plot_area().expect("plot area");
    assert_relative_eq!(plot.origin_x, 50.0);
    assert_relative_eq!(plot.origin_y, 30.0);
    assert_relative_eq!(plot.width, 870.0);
    assert_relative_eq!(plot.height, 550.0);
}

#[test]
fn scales_fit_date_extent_and_zero_based_maxima() {
    let scene = build_chart(&two_records(), &ChartConfig::default()).expect("scene");

    let x = scene.scales.x.expect("x scale");
    assert_eq!(x.domain(), (date(2022, 1, 1), date(2022, 1, 2)));
    assert_eq!(x.range(), (0.0, 870.0));

    let primary = scene.scales.y_primary.expect("primary scale");
    assert_eq!(primary.domain(), (0.0, 20.0));
    assert_eq!(primary.range(), (550.0, 0.0));

    let secondary = scene.scales.y(SeriesId::Secondary).expect("secondary scale");
    assert_eq!(secondary.domain(), (0.0, 5.0));
}

#[test]
fn each_series_becomes_one_polyline_in_input_order() {
    let scene = build_chart(&two_records(), &ChartConfig::default()).expect("scene");
    let series = scene.frame.layer(LayerKind::Series).expect("series layer");
    assert_eq!(series.polylines.len(), 2);

    let primary = &series.polylines[0];
    assert_eq!(primary.series, SeriesId::Primary);
    assert_eq!(primary.color, Color::GREEN);
    assert_eq!(primary.points, vec![(50.0, 305.0), (920.0, 30.0)]);

    let secondary = &series.polylines[1];
    assert_eq!(secondary.series, SeriesId::Secondary);
    assert_eq!(secondary.color, Color::BLUE);
    assert_eq!(secondary.points, vec![(50.0, 360.0), (920.0, 30.0)]);
}

#[test]
fn markers_are_tagged_by_series_and_record() {
    let scene = build_chart(&two_records(), &ChartConfig::default()).expect("scene");

    assert_eq!(scene.markers.len(), 4);
    let tags: Vec<_> = scene
        .markers
        .iter()
        .map(|m| (m.tag.series, m.tag.record_index))
        .collect();
    assert_eq!(
        tags,
        vec![
            (SeriesId::Primary, 0),
            (SeriesId::Primary, 1),
            (SeriesId::Secondary, 0),
            (SeriesId::Secondary, 1),
        ]
    );
    assert_eq!(scene.markers_for(SeriesId::Secondary).count(), 2);

    let circles = &scene.frame.layer(LayerKind::Markers).expect("markers").circles;
    assert_eq!(circles.len(), 4);
    assert!(circles.iter().all(|c| c.radius == 3.0));
    assert_eq!(
        circles[0].title.as_deref(),
        Some("dow_index: 10\nsmurf_sightings: 2")
    );
    assert_eq!((circles[2].cx, circles[2].cy), (50.0, 360.0));
    assert_eq!(circles[2].fill_color, Color::BLUE);
}

#[test]
fn series_captions_sit_below_the_plot_in_series_colors() {
    let scene = build_chart(&two_records(), &ChartConfig::default()).expect("scene");
    let texts = &scene.frame.layer(LayerKind::Labels).expect("labels").texts;

    assert_eq!(texts.len(), 2);
    assert_eq!(texts[0].text, "Dow Index Level");
    assert_eq!((texts[0].x, texts[0].y), (485.0, 630.0));
    assert_eq!(texts[0].color, Color::GREEN);
    assert_eq!(texts[0].font_size_px, 16.0);
    assert_eq!(texts[1].text, "Smurf Sightings");
    assert_eq!((texts[1].x, texts[1].y), (485.0, 650.0));
    assert_eq!(texts[1].color, Color::BLUE);
    assert!(texts.iter().all(|t| t.h_align == TextHAlign::Center));
}

#[test]
fn value_axes_are_colored_by_their_series() {
    let scene = build_chart(&two_records(), &ChartConfig::default()).expect("scene");
    let axis = scene.frame.layer(LayerKind::Axis).expect("axis layer");

    let left: Vec<_> = axis
        .texts
        .iter()
        .filter(|t| t.h_align == TextHAlign::Right)
        .collect();
    let right: Vec<_> = axis
        .texts
        .iter()
        .filter(|t| t.h_align == TextHAlign::Left)
        .collect();
    assert!(!left.is_empty() && left.iter().all(|t| t.color == Color::GREEN));
    assert!(!right.is_empty() && right.iter().all(|t| t.color == Color::BLUE));
    assert!(left.iter().all(|t| t.x < 50.0));
    assert!(right.iter().all(|t| t.x > 920.0));
    assert_eq!(left.last().map(|t| t.text.as_str()), Some("20"));
    assert_eq!(right.last().map(|t| t.text.as_str()), Some("5.0"));
}

#[test]
fn date_axis_labels_use_day_month_year() {
    let scene = build_chart(&two_records(), &ChartConfig::default()).expect("scene");
    let axis = scene.frame.layer(LayerKind::Axis).expect("axis layer");
    let bottom: Vec<_> = axis
        .texts
        .iter()
        .filter(|t| t.h_align == TextHAlign::Center)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(bottom, vec!["01-Jan-2022", "02-Jan-2022"]);
}

#[test]
fn empty_input_keeps_axes_and_captions_only() {
    let scene = build_chart(&[], &ChartConfig::default()).expect("scene");

    assert!(scene.scales.x.is_none());
    assert!(scene.scales.y_primary.is_none());
    assert!(scene.scales.y_secondary.is_none());
    assert!(scene.markers.is_empty());
    assert_eq!(scene.frame.polylines().count(), 0);
    assert_eq!(scene.frame.circles().count(), 0);

    let axis = scene.frame.layer(LayerKind::Axis).expect("axis layer");
    assert_eq!(axis.lines.len(), 9, "domain line and two outer ticks per axis");
    assert!(axis.texts.is_empty());
    assert_eq!(
        scene.frame.layer(LayerKind::Labels).expect("labels").texts.len(),
        2
    );
    scene.frame.validate().expect("valid frame");
}

#[test]
fn single_date_places_every_point_at_the_horizontal_middle() {
    let records = vec![
        Record::new(date(2022, 1, 5), 10, 1),
        Record::new(date(2022, 1, 5), 30, 3),
    ];
    let scene = build_chart(&records, &ChartConfig::default()).expect("scene");
    assert!(scene.markers.iter().all(|m| m.cx == 50.0 + 435.0));
}

#[test]
fn all_zero_metric_places_points_at_the_vertical_middle() {
    let records = vec![
        Record::new(date(2022, 1, 1), 0, 4),
        Record::new(date(2022, 1, 2), 0, 8),
    ];
    let scene = build_chart(&records, &ChartConfig::default()).expect("scene");
    assert!(
        scene
            .markers_for(SeriesId::Primary)
            .all(|m| m.cy == 30.0 + 275.0)
    );
    assert!(
        scene
            .markers_for(SeriesId::Secondary)
            .any(|m| m.cy == 30.0)
    );
}

#[test]
fn unsorted_records_are_drawn_in_input_order() {
    let records = vec![
        Record::new(date(2022, 1, 3), 1, 1),
        Record::new(date(2022, 1, 1), 2, 2),
        Record::new(date(2022, 1, 2), 3, 3),
    ];
    let scene = build_chart(&records, &ChartConfig::default()).expect("scene");
    let primary = &scene.frame.layer(LayerKind::Series).expect("series").polylines[0];
    let xs: Vec<f64> = primary.points.iter().map(|(x, _)| *x).collect();
    assert_eq!(xs, vec![920.0, 50.0, 485.0]);
}

#[test]
fn layout_follows_custom_viewport_and_margins() {
    let config = ChartConfig::default()
        .with_viewport(Viewport::new(400, 300))
        .with_margins(Margins::new(10, 10, 10, 10));
    let scene = build_chart(&two_records(), &config).expect("scene");

    assert_eq!(scene.frame.viewport, Viewport::new(400, 300));
    let xs: Vec<f64> = scene.markers_for(SeriesId::Primary).map(|m| m.cx).collect();
    assert_eq!(xs, vec![10.0, 390.0]);
}

#[test]
fn unusable_layout_is_rejected() {
    let zero = ChartConfig::default().with_viewport(Viewport::new(0, 660));
    assert!(matches!(
        build_chart(&two_records(), &zero),
        Err(ChartError::InvalidViewport { width: 0, .. })
    ));

    let crowded = ChartConfig::default().with_viewport(Viewport::new(80, 660));
    assert!(matches!(
        build_chart(&two_records(), &crowded),
        Err(ChartError::InvalidData(_))
    ));
}

#[test]
fn built_frame_passes_validation() {
    let scene = build_chart(&two_records(), &ChartConfig::default()).expect("scene");
    scene.frame.validate().expect("valid frame");
    assert!(!scene.frame.is_empty());
}
