use approx::assert_relative_eq;
use chrono::NaiveDate;
use dual_axis_chart::core::{LinearScale, TickInterval, TimeScale};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn zero_based_vertical_scale_maps_zero_to_bottom_and_max_to_top() {
    let scale = LinearScale::zero_based_vertical(20.0, 550.0).expect("scale");
    assert_relative_eq!(scale.domain_to_pixel(0.0), 550.0);
    assert_relative_eq!(scale.domain_to_pixel(20.0), 0.0);
    assert_relative_eq!(scale.domain_to_pixel(10.0), 275.0);
    assert_relative_eq!(scale.pixel_to_domain(137.5), 15.0);
}

#[test]
fn zero_max_maps_every_value_to_the_middle() {
    let scale = LinearScale::zero_based_vertical(0.0, 550.0).expect("scale");
    assert!(scale.is_degenerate());
    assert_relative_eq!(scale.domain_to_pixel(0.0), 275.0);
    assert_eq!(scale.ticks(10), vec![0.0]);
}

#[test]
fn non_finite_domain_is_rejected() {
    assert!(LinearScale::new((0.0, f64::INFINITY), (0.0, 1.0)).is_err());
    assert!(LinearScale::new((0.0, 1.0), (f64::NAN, 1.0)).is_err());
}

#[test]
fn value_axis_ticks_use_nice_steps_and_grouped_labels() {
    let scale = LinearScale::zero_based_vertical(36_202.0, 550.0).expect("scale");
    let ticks = scale.labeled_ticks(10);

    let labels: Vec<&str> = ticks.iter().map(|(_, label)| label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["0", "5,000", "10,000", "15,000", "20,000", "25,000", "30,000", "35,000"]
    );
    assert_relative_eq!(ticks[0].0, 550.0);
    assert!(ticks.windows(2).all(|pair| pair[1].0 < pair[0].0));
}

#[test]
fn time_scale_spans_the_plot_width() {
    let dates = [date(2022, 1, 10), date(2022, 1, 1), date(2022, 1, 4)];
    let scale = TimeScale::from_extent(dates, (0.0, 870.0)).expect("non-empty extent");

    assert_eq!(scale.domain(), (date(2022, 1, 1), date(2022, 1, 10)));
    assert_relative_eq!(scale.date_to_pixel(date(2022, 1, 1)), 0.0);
    assert_relative_eq!(scale.date_to_pixel(date(2022, 1, 10)), 870.0);
    assert_relative_eq!(scale.date_to_pixel(date(2022, 1, 4)), 290.0);
}

#[test]
fn empty_extent_has_no_time_scale() {
    assert!(TimeScale::from_extent(std::iter::empty(), (0.0, 870.0)).is_none());
}

#[test]
fn pixel_to_date_rounds_to_the_nearest_day() {
    let scale = TimeScale::new((date(2022, 1, 1), date(2022, 1, 3)), (0.0, 870.0));
    assert_eq!(scale.pixel_to_date(435.0).expect("date"), date(2022, 1, 2));
    assert_eq!(scale.pixel_to_date(200.0).expect("date"), date(2022, 1, 1));
    assert_eq!(scale.pixel_to_date(870.0).expect("date"), date(2022, 1, 3));
}

#[test]
fn quarter_of_trading_days_gets_weekly_ticks() {
    let scale = TimeScale::new((date(2022, 1, 3), date(2022, 3, 31)), (0.0, 870.0));
    assert_eq!(scale.tick_interval(10), TickInterval::Week);

    let ticks = scale.labeled_ticks(10, "%d-%b-%Y");
    assert_eq!(ticks.first().map(|(_, label)| label.as_str()), Some("09-Jan-2022"));
    assert_eq!(ticks.last().map(|(_, label)| label.as_str()), Some("27-Mar-2022"));
    assert_eq!(ticks.len(), 12);
}

#[test]
fn multi_year_span_gets_year_ticks() {
    let scale = TimeScale::new((date(2000, 6, 1), date(2020, 6, 1)), (0.0, 870.0));
    assert_eq!(scale.tick_interval(10), TickInterval::Years(2));
    let ticks = scale.ticks(10);
    assert_eq!(ticks.first().copied(), Some(date(2002, 1, 1)));
    assert_eq!(ticks.last().copied(), Some(date(2020, 1, 1)));
}
