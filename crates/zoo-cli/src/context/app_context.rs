use std::path::PathBuf;

use anyhow::Context;
use zoo_config::ZooConfig;
use zoo_engine::ZooSnapshot;
use zoo_store::ZooStore;

/// Shared resources for one command run.
pub struct AppContext {
    pub store: ZooStore,
    pub config: ZooConfig,
    pub project_root: PathBuf,
}

impl AppContext {
    /// Open the store for an initialized project.
    pub fn open(project_root: PathBuf, config: ZooConfig) -> anyhow::Result<Self> {
        let store = ZooStore::open(&project_root, &config.store)?;
        Ok(Self {
            store,
            config,
            project_root,
        })
    }

    /// Load the current snapshot.
    pub async fn snapshot(&self) -> anyhow::Result<ZooSnapshot> {
        self.store.load().await.with_context(|| {
            format!(
                "failed to load zoo from {}",
                self.store.data_path().display()
            )
        })
    }
}
