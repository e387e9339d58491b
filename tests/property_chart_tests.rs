use approx::{assert_relative_eq, relative_eq};
use chrono::{Days, NaiveDate};
use dual_axis_chart::api::{ChartConfig, build_chart};
use dual_axis_chart::core::{LinearScale, Record, SeriesId, TimeScale, ticks::linear_ticks};
use dual_axis_chart::render::LayerKind;
use proptest::prelude::*;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date")
}

fn record_strategy() -> impl Strategy<Value = Record> {
    (0u64..20_000, 0i64..1_000_000, 0i64..10_000).prop_map(|(offset, primary, secondary)| {
        let date = base_date()
            .checked_add_days(Days::new(offset))
            .expect("date in range");
        Record::new(date, primary, secondary)
    })
}

proptest! {
    #[test]
    fn time_scale_is_monotonic_and_spans_the_range(
        mut offsets in prop::collection::vec(0u64..50_000, 1..64)
    ) {
        offsets.sort_unstable();
        let dates: Vec<NaiveDate> = offsets
            .iter()
            .map(|offset| base_date().checked_add_days(Days::new(*offset)).expect("date"))
            .collect();
        let scale = TimeScale::from_extent(dates.iter().copied(), (0.0, 870.0)).expect("scale");

        let pixels: Vec<f64> = dates.iter().map(|date| scale.date_to_pixel(*date)).collect();
        prop_assert!(pixels.windows(2).all(|pair| pair[0] <= pair[1]));
        if scale.span_days() > 0 {
            assert_relative_eq!(pixels[0], 0.0);
            assert_relative_eq!(pixels[pixels.len() - 1], 870.0, epsilon = 1e-9);
        } else {
            prop_assert!(pixels.iter().all(|px| *px == 435.0));
        }
    }

    #[test]
    fn value_scale_maps_zero_to_bottom_and_max_to_top(
        max in 1i64..1_000_000_000,
        fraction in 0.0f64..=1.0
    ) {
        let scale = LinearScale::zero_based_vertical(max as f64, 550.0).expect("scale");
        assert_relative_eq!(scale.domain_to_pixel(0.0), 550.0);
        assert_relative_eq!(scale.domain_to_pixel(max as f64), 0.0, epsilon = 1e-9);

        let value = fraction * max as f64;
        let px = scale.domain_to_pixel(value);
        prop_assert!((0.0 - 1e-9..=550.0 + 1e-9).contains(&px));
        prop_assert!(relative_eq!(scale.pixel_to_domain(px), value, epsilon = 1e-6, max_relative = 1e-9));
    }

    #[test]
    fn linear_ticks_stay_inside_the_domain(
        max in 1.0f64..1e9,
        count in 1usize..20
    ) {
        let ticks = linear_ticks(0.0, max, count);
        prop_assert!(!ticks.is_empty());
        prop_assert!(ticks.iter().all(|tick| *tick >= 0.0 && *tick <= max));
        prop_assert!(ticks.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn every_record_yields_one_point_and_marker_per_series(
        records in prop::collection::vec(record_strategy(), 0..48)
    ) {
        let config = ChartConfig::default();
        let scene = build_chart(&records, &config).expect("scene");
        scene.frame.validate().expect("valid frame");

        prop_assert_eq!(scene.markers.len(), records.len() * 2);
        let polylines = &scene.frame.layer(LayerKind::Series).expect("series").polylines;
        if records.is_empty() {
            prop_assert!(polylines.is_empty());
        } else {
            prop_assert_eq!(polylines.len(), 2);
            prop_assert!(polylines.iter().all(|line| line.points.len() == records.len()));
        }

        let plot = scene.plot_area;
        for marker in &scene.markers {
            prop_assert!(marker.cx >= plot.origin_x - 1e-9 && marker.cx <= plot.right() + 1e-9);
            prop_assert!(marker.cy >= plot.origin_y - 1e-9 && marker.cy <= plot.bottom() + 1e-9);
            let record = records[marker.tag.record_index];
            prop_assert_eq!(marker.record, record);
        }
        for series in SeriesId::ALL {
            prop_assert_eq!(scene.markers_for(series).count(), records.len());
        }
    }
}
