use std::time::Duration;

use pipeline_dashboard::api::{DEFAULT_CHART_HEIGHT, DashboardConfig};
use pipeline_dashboard::core::DisplayTimeZone;

#[test]
fn missing_fields_take_defaults() {
    let config = DashboardConfig::from_json_str(r#"{"api_base_url":"https://api.example.com"}"#)
        .expect("parse config");
    assert_eq!(config.api_base_url, "https://api.example.com");
    assert_eq!(config.chart_height, DEFAULT_CHART_HEIGHT);
    assert_eq!(config.request_timeout(), Duration::from_secs(30));
    assert_eq!(config.time_zone, DisplayTimeZone::Local);
}

#[test]
fn config_round_trips_through_json() {
    let config = DashboardConfig::new("https://api.example.com/v1")
        .with_chart_height(400)
        .with_request_timeout_secs(5)
        .with_time_zone(DisplayTimeZone::FixedOffset(3_600));

    let json = config.to_json_pretty().expect("serialize");
    let restored = DashboardConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored, config);
}

#[test]
fn rejects_non_http_base_url() {
    let err = DashboardConfig::from_json_str(r#"{"api_base_url":"ftp://example.com"}"#)
        .expect_err("ftp is rejected");
    assert!(err.to_string().contains("http://"));
}

#[test]
fn rejects_zero_height_and_timeout() {
    assert!(DashboardConfig::default().with_chart_height(0).validate().is_err());
    assert!(
        DashboardConfig::default()
            .with_request_timeout_secs(0)
            .validate()
            .is_err()
    );
    assert!(DashboardConfig::default().validate().is_ok());
}

#[test]
fn rejects_out_of_range_offset() {
    let err = DashboardConfig::from_json_str(
        r#"{"time_zone":{"kind":"fixed_offset","offset_seconds":100000}}"#,
    )
    .expect_err("offset too large");
    assert!(err.to_string().contains("offset"));
}
