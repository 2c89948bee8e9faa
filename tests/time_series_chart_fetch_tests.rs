use std::cell::Cell;
use std::sync::Arc;

use crossbeam_channel::{TryRecvError, unbounded};
use pipeline_dashboard::DashboardError;
use pipeline_dashboard::api::{
    ChartKind, ChartStatus, DashboardConfig, FetchState, TimeSeriesChart,
};
use pipeline_dashboard::client::ArtifactFetcher;
use pipeline_dashboard::core::{ArtifactRef, AxisConfig, CsvParser, DisplayTimeZone, ParsedCsv};
use pipeline_dashboard::render::{ChartRenderer, NullRenderer};

const BODY: &str = "ts,temp,status\n1700000000,21.5,idle\n1700000060,22.5,busy\n";

fn artifact(uuid: &str) -> ArtifactRef {
    ArtifactRef::new("metrics.csv", format!("https://artifacts.example.com/{uuid}"), uuid)
}

fn chart() -> TimeSeriesChart {
    TimeSeriesChart::new(ChartKind::LineChart, artifact("run-1")).with_time_zone(DisplayTimeZone::Utc)
}

struct CountingFetcher {
    body: Result<&'static str, ()>,
    calls: Cell<usize>,
}

impl CountingFetcher {
    fn ok(body: &'static str) -> Self {
        Self {
            body: Ok(body),
            calls: Cell::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            body: Err(()),
            calls: Cell::new(0),
        }
    }
}

impl ArtifactFetcher for CountingFetcher {
    fn fetch(&self, artifact: &ArtifactRef) -> pipeline_dashboard::DashboardResult<String> {
        self.calls.set(self.calls.get() + 1);
        match self.body {
            Ok(body) => Ok(body.to_owned()),
            Err(()) => Err(DashboardError::HttpStatus {
                status: 404,
                url: artifact.url.clone(),
            }),
        }
    }
}

#[test]
fn first_poll_starts_exactly_one_fetch() {
    let mut chart = chart();
    assert_eq!(chart.state(), &FetchState::Unfetched);

    let request = chart.poll_fetch().expect("first poll starts a fetch");
    assert_eq!(request.artifact, artifact("run-1"));
    assert_eq!(chart.state(), &FetchState::Fetching(request.id));
    assert!(chart.poll_fetch().is_none());
}

#[test]
fn completed_fetch_stores_dataset_and_metadata() {
    let mut chart = chart();
    let request = chart.poll_fetch().expect("fetch");
    assert!(chart.complete_fetch(request.id, Ok(BODY.to_owned())));

    let data = chart.data().expect("ready");
    assert_eq!(data.dataset.len(), 2);
    assert_eq!(data.metadata.len(), 3);
    assert!(chart.poll_fetch().is_none(), "ready charts do not refetch");
}

#[test]
fn loading_chart_describes_no_widgets() {
    let mut chart = chart();
    let _ = chart.poll_fetch();
    let description = chart.describe(&AxisConfig::new(["ts"], ["temp"]));

    assert_eq!(description.status, ChartStatus::Loading);
    assert!(description.axes.is_empty());
    assert!(description.series.is_empty());
    assert!(description.data.is_none());
    assert_eq!(description.height, 264);
}

#[test]
fn ready_chart_describes_and_renders() {
    let mut chart = chart().with_height(320);
    let fetcher = CountingFetcher::ok(BODY);
    assert!(chart.load_with(&fetcher));
    assert!(!chart.load_with(&fetcher));
    assert_eq!(fetcher.calls.get(), 1);

    let description = chart.describe(&AxisConfig::new(["ts"], ["temp", "status"]));
    assert_eq!(description.status, ChartStatus::Ready);
    assert_eq!(description.height, 320);
    assert_eq!(description.axes.len(), 3);
    assert_eq!(description.series.len(), 2);
    assert_eq!(description.data.map(|d| d.len()), Some(2));

    let mut renderer = NullRenderer::default();
    renderer.render(&description).expect("render");
    assert_eq!(renderer.last_axis_count, 3);
    assert_eq!(renderer.last_series_count, 2);
    assert_eq!(renderer.last_row_count, 2);
}

#[test]
fn sink_receives_dataset_once_per_fetch() {
    let (sender, receiver) = unbounded();
    let mut chart = chart().with_sink(sender);

    let request = chart.poll_fetch().expect("fetch");
    chart.complete_fetch(request.id, Ok(BODY.to_owned()));

    let sent = receiver.try_recv().expect("dataset forwarded");
    let held = Arc::clone(&chart.data().expect("ready").dataset);
    assert!(Arc::ptr_eq(&sent, &held));

    // A late duplicate resolution must not forward again.
    assert!(!chart.complete_fetch(request.id, Ok(BODY.to_owned())));
    let _ = chart.describe(&AxisConfig::default());
    assert_eq!(receiver.try_recv(), Err(TryRecvError::Empty));
}

#[test]
fn stale_response_after_artifact_change_is_dropped() {
    let mut chart = chart();
    let first = chart.poll_fetch().expect("fetch");

    chart.set_artifact(artifact("run-2"));
    assert_eq!(chart.state(), &FetchState::Unfetched);
    let second = chart.poll_fetch().expect("refetch for new artifact");
    assert_ne!(first.id, second.id);
    assert_eq!(second.artifact.uuid, "run-2");

    assert!(!chart.complete_fetch(first.id, Ok(BODY.to_owned())));
    assert_eq!(chart.state(), &FetchState::Fetching(second.id));
}

#[test]
fn same_artifact_does_not_reset_ready_chart() {
    let mut chart = chart();
    chart.load_with(&CountingFetcher::ok(BODY));
    chart.set_artifact(artifact("run-1"));
    assert!(chart.data().is_some());
}

#[test]
fn changing_sink_identity_triggers_refetch() {
    let (first_sender, _first_receiver) = unbounded();
    let mut chart = chart().with_sink(first_sender.clone());
    chart.load_with(&CountingFetcher::ok(BODY));
    assert!(chart.data().is_some());

    chart.set_sink(Some(first_sender));
    assert!(chart.data().is_some(), "same channel keeps the data");

    let (second_sender, second_receiver) = unbounded();
    chart.set_sink(Some(second_sender));
    assert_eq!(chart.state(), &FetchState::Unfetched);

    chart.load_with(&CountingFetcher::ok(BODY));
    assert!(second_receiver.try_recv().is_ok());
}

#[test]
fn failed_fetch_surfaces_error_and_allows_retry() {
    let mut chart = chart();
    let failing = CountingFetcher::failing();
    assert!(chart.load_with(&failing));
    assert!(matches!(chart.state(), FetchState::Failed { .. }));
    assert!(chart.poll_fetch().is_none(), "failures wait for an explicit retry");

    let description = chart.describe(&AxisConfig::new(["ts"], ["temp"]));
    match description.status {
        ChartStatus::Failed { message } => assert!(message.contains("404")),
        other => panic!("expected failed status, got {other:?}"),
    }

    assert!(chart.retry());
    assert!(!chart.retry());
    assert!(chart.load_with(&CountingFetcher::ok(BODY)));
    assert!(chart.data().is_some());
}

#[test]
fn parser_error_marks_fetch_failed() {
    struct RejectingParser;

    impl CsvParser for RejectingParser {
        fn parse(&self, _text: &str) -> pipeline_dashboard::DashboardResult<ParsedCsv> {
            Err(DashboardError::InvalidData("not a csv artifact".to_owned()))
        }
    }

    let mut chart =
        TimeSeriesChart::with_parser(ChartKind::BarChart, artifact("run-1"), RejectingParser);
    let request = chart.poll_fetch().expect("fetch");
    assert!(chart.complete_fetch(request.id, Ok(BODY.to_owned())));
    assert_eq!(
        chart.state(),
        &FetchState::Failed {
            request_id: request.id,
            message: "invalid data: not a csv artifact".to_owned(),
        }
    );
}

#[test]
fn dashboard_config_sets_chart_height_and_time_zone() {
    let config = DashboardConfig::default()
        .with_chart_height(400)
        .with_time_zone(DisplayTimeZone::FixedOffset(3600));
    let mut chart = TimeSeriesChart::from_config(ChartKind::LineChart, artifact("run-1"), &config)
        .expect("valid config");
    assert_eq!(chart.height(), 400);

    chart.load_with(&CountingFetcher::ok(BODY));
    let description = chart.describe(&AxisConfig::new(["ts"], ["temp"]));
    assert_eq!(description.height, 400);
    assert_eq!(
        description.tooltip.formatter.time_zone,
        DisplayTimeZone::FixedOffset(3600)
    );
    assert_eq!(
        description.tooltip.formatter.format_text("1700000000"),
        "11/14/2023 11:13:20 PM"
    );
}

#[test]
fn invalid_dashboard_config_is_rejected_for_charts() {
    let config = DashboardConfig::default().with_chart_height(0);
    let err = TimeSeriesChart::from_config(ChartKind::BarChart, artifact("run-1"), &config)
        .expect_err("zero height");
    assert!(matches!(err, DashboardError::InvalidConfig(_)));
}
