use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::SeriesKind;

/// Chart flavour requested by the caller.
///
/// Unknown names are preserved in `Unsupported`; such charts still get axes
/// but no series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChartKind {
    LineChart,
    BarChart,
    Unsupported(String),
}

impl ChartKind {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::LineChart => "LINE_CHART",
            Self::BarChart => "BAR_CHART",
            Self::Unsupported(name) => name,
        }
    }

    /// Series widget drawn for every Y column of this chart kind.
    #[must_use]
    pub fn series_kind(&self) -> Option<SeriesKind> {
        match self {
            Self::LineChart => Some(SeriesKind::Area),
            Self::BarChart => Some(SeriesKind::Bar),
            Self::Unsupported(_) => None,
        }
    }
}

impl From<&str> for ChartKind {
    fn from(value: &str) -> Self {
        match value {
            "LINE_CHART" => Self::LineChart,
            "BAR_CHART" => Self::BarChart,
            other => Self::Unsupported(other.to_owned()),
        }
    }
}

impl From<String> for ChartKind {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<ChartKind> for String {
    fn from(value: ChartKind) -> Self {
        match value {
            ChartKind::Unsupported(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

impl FromStr for ChartKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
