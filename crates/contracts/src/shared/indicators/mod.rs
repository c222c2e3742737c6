use serde::{Deserialize, Serialize};

/// Unique indicator identifier, e.g. "total_sales".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorId(pub String);

impl IndicatorId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// How a client should format the numeric value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Percent { decimals: u8 },
    Integer,
}

/// How the change compares with the previous value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Relative change in percent
    Percent,
    /// Absolute difference (percentage points for ratios)
    Absolute,
}

/// Visual status of the indicator (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
}

/// One KPI card of the overview dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorValue {
    pub id: IndicatorId,
    pub label: String,
    pub format: ValueFormat,
    pub value: f64,
    /// Value for the previous comparable period.
    pub previous_value: f64,
    /// `None` when the previous value is too close to zero to compare.
    pub change: Option<f64>,
    pub change_kind: ChangeKind,
    pub status: IndicatorStatus,
}
