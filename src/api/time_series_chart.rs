use std::sync::Arc;

use crossbeam_channel::Sender;
use tracing::{debug, trace, warn};

use crate::client::ArtifactFetcher;
use crate::core::{
    ArtifactRef, AxisConfig, AxisValueFormatter, ColumnMetadata, CsvParser, Dataset,
    DisplayTimeZone, InferringCsvParser,
};
use crate::error::DashboardResult;

use super::{
    ChartDescription, ChartKind, ChartLayout, ChartStatus, DEFAULT_CHART_HEIGHT, DashboardConfig,
    assemble_chart,
};

pub type RequestId = u64;

/// One-shot channel that receives the dataset once per completed fetch.
pub type DatasetSink = Sender<Arc<Dataset>>;

/// Dataset and column metadata held for one fetched artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub dataset: Arc<Dataset>,
    pub metadata: ColumnMetadata,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Unfetched,
    Fetching(RequestId),
    Ready(ChartData),
    Failed { request_id: RequestId, message: String },
}

/// Work order handed to the host when a fetch should start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub id: RequestId,
    pub artifact: ArtifactRef,
}

/// Time-series chart backed by a CSV artifact fetched once per mount.
///
/// The host drives it from its event loop: `poll_fetch` hands out at most one
/// outstanding request, `complete_fetch` resolves it. Resolutions carrying a
/// stale id (after the artifact or sink changed) are dropped.
#[derive(Debug)]
pub struct TimeSeriesChart<P = InferringCsvParser> {
    kind: ChartKind,
    artifact: ArtifactRef,
    height: u32,
    formatter: AxisValueFormatter,
    sink: Option<DatasetSink>,
    parser: P,
    state: FetchState,
    next_request_id: RequestId,
}

impl TimeSeriesChart {
    #[must_use]
    pub fn new(kind: ChartKind, artifact: ArtifactRef) -> Self {
        Self::with_parser(kind, artifact, InferringCsvParser)
    }

    /// Chart sized and zoned by `config`, which is validated first.
    pub fn from_config(
        kind: ChartKind,
        artifact: ArtifactRef,
        config: &DashboardConfig,
    ) -> DashboardResult<Self> {
        config.validate()?;
        Ok(Self::new(kind, artifact).with_config(config))
    }
}

impl<P: CsvParser> TimeSeriesChart<P> {
    #[must_use]
    pub fn with_parser(kind: ChartKind, artifact: ArtifactRef, parser: P) -> Self {
        Self {
            kind,
            artifact,
            height: DEFAULT_CHART_HEIGHT,
            formatter: AxisValueFormatter::default(),
            sink: None,
            parser,
            state: FetchState::Unfetched,
            next_request_id: 1,
        }
    }

    #[must_use]
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_time_zone(mut self, time_zone: DisplayTimeZone) -> Self {
        self.formatter = AxisValueFormatter::new(time_zone);
        self
    }

    /// Takes chart height and display time zone from `config`.
    #[must_use]
    pub fn with_config(self, config: &DashboardConfig) -> Self {
        self.with_height(config.chart_height).with_time_zone(config.time_zone)
    }

    #[must_use]
    pub fn with_sink(mut self, sink: DatasetSink) -> Self {
        self.sink = Some(sink);
        self
    }

    #[must_use]
    pub fn kind(&self) -> &ChartKind {
        &self.kind
    }

    #[must_use]
    pub fn artifact(&self) -> &ArtifactRef {
        &self.artifact
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn state(&self) -> &FetchState {
        &self.state
    }

    #[must_use]
    pub fn data(&self) -> Option<&ChartData> {
        match &self.state {
            FetchState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn set_kind(&mut self, kind: ChartKind) {
        self.kind = kind;
    }

    /// Points the chart at another artifact; a different artifact triggers a re-fetch.
    pub fn set_artifact(&mut self, artifact: ArtifactRef) {
        if artifact == self.artifact {
            return;
        }
        debug!(artifact = %artifact.uuid, "artifact changed, resetting chart data");
        self.artifact = artifact;
        self.reset();
    }

    /// Replaces the dataset sink; a different channel triggers a re-fetch.
    pub fn set_sink(&mut self, sink: Option<DatasetSink>) {
        let same = match (&self.sink, &sink) {
            (None, None) => true,
            (Some(current), Some(next)) => current.same_channel(next),
            _ => false,
        };
        self.sink = sink;
        if !same {
            debug!(artifact = %self.artifact.uuid, "dataset sink changed, resetting chart data");
            self.reset();
        }
    }

    /// Starts a fetch if none has been issued for the current inputs.
    pub fn poll_fetch(&mut self) -> Option<FetchRequest> {
        if self.state != FetchState::Unfetched {
            return None;
        }
        let id = self.next_request_id;
        self.next_request_id += 1;
        self.state = FetchState::Fetching(id);
        debug!(request_id = id, artifact = %self.artifact.uuid, "fetching chart artifact");
        Some(FetchRequest {
            id,
            artifact: self.artifact.clone(),
        })
    }

    /// Resolves the outstanding fetch `id` with the artifact body.
    ///
    /// Returns `false` when `id` is not the outstanding request.
    pub fn complete_fetch(&mut self, id: RequestId, body: DashboardResult<String>) -> bool {
        if self.state != FetchState::Fetching(id) {
            trace!(request_id = id, "dropping stale artifact response");
            return false;
        }

        match body.and_then(|text| self.parser.parse(&text)) {
            Ok(parsed) => {
                let dataset = Arc::new(parsed.dataset);
                debug!(
                    request_id = id,
                    rows = dataset.len(),
                    columns = parsed.metadata.len(),
                    "chart artifact ready"
                );
                if let Some(sink) = &self.sink {
                    if sink.send(Arc::clone(&dataset)).is_err() {
                        warn!(request_id = id, "dataset sink disconnected");
                    }
                }
                self.state = FetchState::Ready(ChartData {
                    dataset,
                    metadata: parsed.metadata,
                });
            }
            Err(err) => {
                warn!(request_id = id, error = %err, "chart artifact fetch failed");
                self.state = FetchState::Failed {
                    request_id: id,
                    message: err.to_string(),
                };
            }
        }
        true
    }

    /// Clears a failed fetch so the next poll issues a new request.
    pub fn retry(&mut self) -> bool {
        if matches!(self.state, FetchState::Failed { .. }) {
            self.state = FetchState::Unfetched;
            true
        } else {
            false
        }
    }

    /// Runs one poll/fetch/complete cycle synchronously through `fetcher`.
    ///
    /// Returns `false` when no fetch was due.
    pub fn load_with<F: ArtifactFetcher + ?Sized>(&mut self, fetcher: &F) -> bool {
        let Some(request) = self.poll_fetch() else {
            return false;
        };
        let body = fetcher.fetch(&request.artifact);
        self.complete_fetch(request.id, body)
    }

    /// Assembles the chart for the current state.
    ///
    /// Until data is ready the description carries no axes, series or rows.
    #[must_use]
    pub fn describe(&self, axis_config: &AxisConfig) -> ChartDescription<'_> {
        let (status, layout, data) = match &self.state {
            FetchState::Ready(data) => (
                ChartStatus::Ready,
                assemble_chart(&self.kind, axis_config, &data.metadata),
                Some(data.dataset.as_ref()),
            ),
            FetchState::Failed { message, .. } => (
                ChartStatus::Failed {
                    message: message.clone(),
                },
                ChartLayout::default(),
                None,
            ),
            FetchState::Unfetched | FetchState::Fetching(_) => {
                (ChartStatus::Loading, ChartLayout::default(), None)
            }
        };
        ChartDescription::new(status, self.height, layout, self.formatter, data)
    }

    fn reset(&mut self) {
        self.state = FetchState::Unfetched;
    }
}
