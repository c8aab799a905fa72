use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use super::errors::ServiceError;
use super::shift_swap::{NewShiftSwap, ShiftSwapRecord};
use super::time_adjustment::{NewTimeAdjustment, TimeAdjustmentRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    TimeAdjustment,
    ShiftSwap,
}

impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::TimeAdjustment => "time-adjustment",
            RecordKind::ShiftSwap => "shift-swap",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = ServiceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "time-adjustment" => Ok(RecordKind::TimeAdjustment),
            "shift-swap" => Ok(RecordKind::ShiftSwap),
            other => Err(ServiceError::ValidationError(format!(
                "Unknown record kind '{}', expected 'time-adjustment' or 'shift-swap'",
                other
            ))),
        }
    }
}

/// A new record of either kind, ready for the submission service.
#[derive(Debug, Clone)]
pub enum Submission {
    TimeAdjustment(NewTimeAdjustment),
    ShiftSwap(NewShiftSwap),
}

impl Submission {
    pub fn kind(&self) -> RecordKind {
        match self {
            Submission::TimeAdjustment(_) => RecordKind::TimeAdjustment,
            Submission::ShiftSwap(_) => RecordKind::ShiftSwap,
        }
    }
}

/// Query results, tagged with the kind they were read from.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "records", rename_all = "kebab-case")]
pub enum RecordList {
    TimeAdjustment(Vec<TimeAdjustmentRecord>),
    ShiftSwap(Vec<ShiftSwapRecord>),
}

impl RecordList {
    pub fn len(&self) -> usize {
        match self {
            RecordList::TimeAdjustment(records) => records.len(),
            RecordList::ShiftSwap(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_path_segment() {
        assert_eq!("shift-swap".parse::<RecordKind>().unwrap(), RecordKind::ShiftSwap);
        assert_eq!(
            "time-adjustment".parse::<RecordKind>().unwrap(),
            RecordKind::TimeAdjustment
        );
        assert!(matches!(
            "late-coming".parse::<RecordKind>(),
            Err(ServiceError::ValidationError(_))
        ));
    }

    #[test]
    fn empty_list_serializes_with_kind() {
        let list = RecordList::ShiftSwap(Vec::new());
        let value = serde_json::to_value(&list).unwrap();
        assert_eq!(value["kind"], "shift-swap");
        assert_eq!(value["records"], serde_json::json!([]));
        assert!(list.is_empty());
    }
}
