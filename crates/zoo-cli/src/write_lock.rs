//! Single-writer guard for commands that rewrite the zoo snapshot.
//!
//! `zoo assign`, `zoo animal move`, and `zoo import` each load `.zoo/zoo.json`,
//! change it, and write it back. Only one may run per project at a time; the
//! others wait on `.zoo/write.lock`, which holds a JSON [`LockOwner`].

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lock file name inside the project directory.
pub const LOCK_FILE: &str = "write.lock";

const WAIT_LIMIT: Duration = Duration::from_secs(60);
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Contents of the lock file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockOwner {
    pub pid: u32,
    /// The `zoo` subcommand holding the lock, e.g. `assign`.
    pub command: String,
    pub since: DateTime<Utc>,
}

impl LockOwner {
    fn current(command: &str) -> Self {
        Self {
            pid: std::process::id(),
            command: command.to_string(),
            since: Utc::now(),
        }
    }
}

/// Exclusive right to rewrite the snapshot. Deletes the lock file on drop.
#[derive(Debug)]
pub struct SnapshotLock {
    path: PathBuf,
}

impl Drop for SnapshotLock {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

enum Claim {
    Won(SnapshotLock),
    HeldBy(LockOwner),
    /// The file exists but does not parse, usually because its owner is
    /// still writing it.
    Unreadable,
}

/// Path of the lock file for a project.
#[must_use]
pub fn lock_path(project_root: &Path) -> PathBuf {
    project_root.join(zoo_config::PROJECT_DIR).join(LOCK_FILE)
}

/// Take the snapshot lock for `command`, waiting up to a minute for a
/// running command to finish. Locks owned by exited processes are cleared.
pub async fn acquire(project_root: &Path, command: &str) -> anyhow::Result<SnapshotLock> {
    let path = lock_path(project_root);
    let owner = LockOwner::current(command);
    let deadline = Instant::now() + WAIT_LIMIT;

    loop {
        match claim(&path, &owner)? {
            Claim::Won(lock) => {
                tracing::debug!(command, path = %path.display(), "took snapshot lock");
                return Ok(lock);
            }
            Claim::HeldBy(holder) if !process_alive(holder.pid) => {
                tracing::warn!(
                    pid = holder.pid,
                    command = %holder.command,
                    "clearing snapshot lock left by an exited zoo command"
                );
                let _ = std::fs::remove_file(&path);
                continue;
            }
            Claim::HeldBy(holder) => {
                if Instant::now() >= deadline {
                    anyhow::bail!(
                        "`zoo {}` (pid {}) has been changing this zoo since {}; retry when it finishes",
                        holder.command,
                        holder.pid,
                        holder.since.format("%H:%M:%S")
                    );
                }
            }
            Claim::Unreadable => {
                if Instant::now() >= deadline {
                    anyhow::bail!(
                        "{} does not name its owner; delete it if no zoo command is running",
                        path.display()
                    );
                }
            }
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

fn claim(path: &Path, owner: &LockOwner) -> anyhow::Result<Claim> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    match OpenOptions::new().create_new(true).write(true).open(path) {
        Ok(mut file) => {
            file.write_all(serde_json::to_string(owner)?.as_bytes())?;
            Ok(Claim::Won(SnapshotLock {
                path: path.to_path_buf(),
            }))
        }
        Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
            let holder = std::fs::read_to_string(path)
                .ok()
                .and_then(|raw| serde_json::from_str::<LockOwner>(&raw).ok());
            Ok(holder.map_or(Claim::Unreadable, Claim::HeldBy))
        }
        Err(err) => Err(err.into()),
    }
}

fn process_alive(pid: u32) -> bool {
    if pid == std::process::id() {
        return true;
    }
    // 0 and values above i32::MAX address process groups, not one process.
    if pid == 0 || i32::try_from(pid).is_err() {
        return false;
    }
    std::process::Command::new("kill")
        .args(["-0", &pid.to_string()])
        .stderr(std::process::Stdio::null())
        .status()
        .is_ok_and(|status| status.success())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use super::{LockOwner, acquire, lock_path};

    #[tokio::test]
    async fn lock_names_its_command_and_is_removed_on_drop() {
        let temp = tempfile::tempdir().expect("tempdir should create");
        let path = lock_path(temp.path());

        let lock = acquire(temp.path(), "assign").await.expect("lock should be taken");
        let owner: LockOwner =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("lock should read"))
                .expect("lock should parse");
        assert_eq!(owner.command, "assign");
        assert_eq!(owner.pid, std::process::id());

        drop(lock);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn lock_of_an_exited_command_is_cleared() {
        let temp = tempfile::tempdir().expect("tempdir should create");
        let path = lock_path(temp.path());
        std::fs::create_dir_all(path.parent().expect("parent")).expect(".zoo should create");
        let abandoned = LockOwner {
            pid: i32::MAX.unsigned_abs(),
            command: String::from("import"),
            since: Utc::now(),
        };
        std::fs::write(&path, serde_json::to_string(&abandoned).expect("serialize"))
            .expect("lock should write");

        let lock = acquire(temp.path(), "animal move")
            .await
            .expect("abandoned lock should be cleared");
        let owner: LockOwner =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("lock should read"))
                .expect("lock should parse");
        assert_eq!(owner.command, "animal move");
        drop(lock);
    }
}
