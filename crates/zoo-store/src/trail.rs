//! JSONL change trail.
//!
//! Every committed change is appended to `.zoo/trail.jsonl` as one
//! [`TrailRecord`] per line, after the snapshot itself has been replaced.
//! The trail is an audit log; the snapshot file stays the source of truth.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

const fn default_trail_version() -> u32 {
    1
}

/// What kind of change a trail record describes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrailOp {
    /// Reset mode cleared every placement.
    Reset,
    CreateEnclosure,
    RemoveEnclosure,
    /// An animal moved into an enclosure or out of any enclosure.
    Reassign,
    /// The whole snapshot was replaced from a file.
    Import,
}

/// A single change recorded in the trail.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TrailRecord {
    /// Schema version. Defaults to 1 when absent.
    #[serde(default = "default_trail_version")]
    pub v: u32,

    pub ts: DateTime<Utc>,

    pub op: TrailOp,

    /// Id of the affected entity, empty for zoo-wide changes.
    pub id: String,

    /// Operation payload: the full enclosure for creations, the target for moves.
    pub data: serde_json::Value,
}

impl TrailRecord {
    #[must_use]
    pub fn new(ts: DateTime<Utc>, op: TrailOp, id: impl ToString, data: serde_json::Value) -> Self {
        Self {
            v: default_trail_version(),
            ts,
            op,
            id: id.to_string(),
            data,
        }
    }
}

/// Appends trail records to a single JSONL file.
pub struct TrailWriter {
    path: PathBuf,
    enabled: bool,
}

impl TrailWriter {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self {
            path,
            enabled: true,
        }
    }

    /// A writer that drops every record.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            path: PathBuf::new(),
            enabled: false,
        }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `records` in order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file write fails.
    pub fn append(&self, records: &[TrailRecord]) -> Result<(), StoreError> {
        if !self.enabled || records.is_empty() {
            return Ok(());
        }
        serde_jsonlines::append_json_lines(&self.path, records)?;
        Ok(())
    }

    /// Every record written so far. Empty if the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file exists but cannot be parsed.
    pub fn read_all(&self) -> Result<Vec<TrailRecord>, StoreError> {
        if !self.enabled || !self.path.exists() {
            return Ok(Vec::new());
        }
        Ok(serde_jsonlines::json_lines::<TrailRecord, _>(&self.path)?.collect::<std::io::Result<Vec<_>>>()?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn old_records_default_to_version_one() {
        let json = r#"{"ts":"2026-01-01T00:00:00Z","op":"reassign","id":"3","data":{"enclosure_id":null}}"#;
        let record: TrailRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.v, 1);
        assert_eq!(record.op, TrailOp::Reassign);
    }

    #[test]
    fn disabled_writer_is_a_no_op() {
        let writer = TrailWriter::disabled();
        let record = TrailRecord::new(Utc::now(), TrailOp::Reset, "", serde_json::Value::Null);
        assert!(writer.append(&[record]).is_ok());
        assert!(writer.read_all().unwrap().is_empty());
    }

    #[test]
    fn appends_accumulate_in_order() {
        let dir = tempfile::TempDir::new().unwrap();
        let writer = TrailWriter::new(dir.path().join("trail.jsonl"));
        let ts = Utc::now();

        writer
            .append(&[TrailRecord::new(ts, TrailOp::Reset, "", serde_json::Value::Null)])
            .unwrap();
        writer
            .append(&[
                TrailRecord::new(ts, TrailOp::Reassign, 1, serde_json::json!({"enclosure_id": 2})),
                TrailRecord::new(ts, TrailOp::Reassign, 2, serde_json::json!({"enclosure_id": null})),
            ])
            .unwrap();

        let ops = writer
            .read_all()
            .unwrap()
            .into_iter()
            .map(|r| (r.op, r.id))
            .collect::<Vec<_>>();
        assert_eq!(
            ops,
            vec![
                (TrailOp::Reset, String::new()),
                (TrailOp::Reassign, "1".to_string()),
                (TrailOp::Reassign, "2".to_string()),
            ]
        );
    }
}
