//! Snapshot file access with atomic commits.
//!
//! Every mutation follows the same protocol:
//! 1. Load and validate the current snapshot
//! 2. Apply the change in memory
//! 3. Write the new snapshot to a temp file and rename it over the old one
//! 4. Append trail records for the change
//!
//! A reader therefore sees either the old snapshot or the new one, never a
//! partial write. Serializing concurrent writers is the caller's job.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde_json::json;
use zoo_config::{PROJECT_DIR, StoreConfig};
use zoo_core::enums::AssignMode;
use zoo_core::errors::CoreError;
use zoo_engine::{AssignmentPlan, Reassignment, ZooSnapshot};

use crate::error::StoreError;
use crate::trail::{TrailOp, TrailRecord, TrailWriter};

/// Trail file name inside the project directory.
pub const TRAIL_FILE: &str = "trail.jsonl";

/// Handle on one project's `.zoo/` directory.
pub struct ZooStore {
    dir: PathBuf,
    data_path: PathBuf,
    trail: TrailWriter,
}

impl ZooStore {
    fn paths(project_root: &Path, config: &StoreConfig) -> Self {
        let dir = project_root.join(PROJECT_DIR);
        let data_path = dir.join(&config.data_file);
        let trail = if config.trail {
            TrailWriter::new(dir.join(TRAIL_FILE))
        } else {
            TrailWriter::disabled()
        };
        Self {
            dir,
            data_path,
            trail,
        }
    }

    /// Whether a snapshot file already exists for this project.
    #[must_use]
    pub fn is_initialized(project_root: &Path, config: &StoreConfig) -> bool {
        Self::paths(project_root, config).data_path.exists()
    }

    /// Create the project directory and an empty snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidState` if a snapshot already exists, or
    /// `StoreError::Io` if the directory or file cannot be written.
    pub async fn init(project_root: &Path, config: &StoreConfig) -> Result<Self, StoreError> {
        let store = Self::paths(project_root, config);
        if store.data_path.exists() {
            return Err(StoreError::InvalidState(format!(
                "{} already exists",
                store.data_path.display()
            )));
        }
        tokio::fs::create_dir_all(&store.dir).await?;
        store.write_atomically(&ZooSnapshot::default()).await?;
        tracing::info!(path = %store.data_path.display(), "initialized zoo");
        Ok(store)
    }

    /// Open an initialized project.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotInitialized` if the snapshot file is missing.
    pub fn open(project_root: &Path, config: &StoreConfig) -> Result<Self, StoreError> {
        let store = Self::paths(project_root, config);
        if !store.data_path.exists() {
            return Err(StoreError::NotInitialized(store.data_path));
        }
        Ok(store)
    }

    #[must_use]
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    #[must_use]
    pub const fn trail(&self) -> &TrailWriter {
        &self.trail
    }

    /// Read and validate the current snapshot.
    ///
    /// Dangling references are tolerated; duplicate ids and non-positive areas are not.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Json` for malformed files and
    /// `StoreError::InvalidState` for duplicate ids or invalid areas.
    pub async fn load(&self) -> Result<ZooSnapshot, StoreError> {
        let raw = tokio::fs::read_to_string(&self.data_path).await?;
        let snapshot: ZooSnapshot = serde_json::from_str(&raw)?;
        snapshot.validate().map_err(|err| match err {
            CoreError::Validation(reason) => StoreError::InvalidState(reason),
            other => StoreError::Core(other),
        })?;
        tracing::debug!(
            animals = snapshot.animals.len(),
            enclosures = snapshot.enclosures.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Apply an assignment plan as one unit. Returns the committed snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the snapshot cannot be loaded or written.
    pub async fn commit_plan(&self, plan: &AssignmentPlan) -> Result<ZooSnapshot, StoreError> {
        let mut snapshot = self.load().await?;
        snapshot.apply_plan(plan);
        self.write_atomically(&snapshot).await?;

        let ts = Utc::now();
        let mut records = Vec::new();
        if plan.mode == AssignMode::Reset {
            records.push(TrailRecord::new(ts, TrailOp::Reset, "", serde_json::Value::Null));
        }
        for id in &plan.removed_enclosures {
            records.push(TrailRecord::new(
                ts,
                TrailOp::RemoveEnclosure,
                id,
                serde_json::Value::Null,
            ));
        }
        for enclosure in &plan.created_enclosures {
            records.push(TrailRecord::new(
                ts,
                TrailOp::CreateEnclosure,
                enclosure.id,
                serde_json::to_value(enclosure)?,
            ));
        }
        for reassignment in &plan.reassignments {
            records.push(reassign_record(ts, reassignment));
        }
        self.trail.append(&records)?;

        tracing::info!(
            mode = %plan.mode,
            created = plan.created_enclosures.len(),
            moved = plan.reassignments.len(),
            "committed assignment plan"
        );
        Ok(snapshot)
    }

    /// Apply one manual move. Returns the committed snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core` if the animal or target enclosure is gone,
    /// or `StoreError` if the snapshot cannot be loaded or written.
    pub async fn commit_reassignment(
        &self,
        reassignment: &Reassignment,
    ) -> Result<ZooSnapshot, StoreError> {
        let mut snapshot = self.load().await?;
        if let Some(id) = reassignment.enclosure_id {
            snapshot.require_enclosure(id)?;
        }
        if !snapshot.apply_reassignment(reassignment) {
            return Err(CoreError::not_found("animal", reassignment.animal_id).into());
        }
        self.write_atomically(&snapshot).await?;
        self.trail.append(&[reassign_record(Utc::now(), reassignment)])?;

        tracing::info!(
            animal = %reassignment.animal_id,
            enclosure = ?reassignment.enclosure_id.map(|id| id.get()),
            "committed reassignment"
        );
        Ok(snapshot)
    }

    /// Replace the whole snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidState` if `snapshot` has duplicate ids, or
    /// `StoreError` if the file cannot be written.
    pub async fn replace(&self, snapshot: &ZooSnapshot) -> Result<(), StoreError> {
        snapshot
            .validate()
            .map_err(|err| StoreError::InvalidState(err.to_string()))?;
        self.write_atomically(snapshot).await?;
        self.trail.append(&[TrailRecord::new(
            Utc::now(),
            TrailOp::Import,
            "",
            serde_json::to_value(snapshot.status())?,
        )])?;
        Ok(())
    }

    async fn write_atomically(&self, snapshot: &ZooSnapshot) -> Result<(), StoreError> {
        let body = serde_json::to_string_pretty(snapshot)?;
        let tmp_path = self.tmp_path();
        tokio::fs::write(&tmp_path, body).await?;
        if let Err(err) = tokio::fs::rename(&tmp_path, &self.data_path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(err.into());
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .data_path
            .file_name()
            .map_or_else(|| "zoo.json".into(), |n| n.to_string_lossy().into_owned());
        self.dir.join(format!(".{name}.tmp"))
    }
}

fn reassign_record(ts: chrono::DateTime<Utc>, reassignment: &Reassignment) -> TrailRecord {
    TrailRecord::new(
        ts,
        TrailOp::Reassign,
        reassignment.animal_id,
        json!({ "enclosure_id": reassignment.enclosure_id }),
    )
}
