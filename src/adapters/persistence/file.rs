//! File Store - Atomic JSON Snapshot per Collection
//!
//! Each collection lives in `<data_dir>/{departments,employees}.json`
//! as a single snapshot `{next_id, records}`. Every mutation rewrites
//! the snapshot using atomic writes (write to tmp file, then rename),
//! so the file is always either the old or the new version, never a
//! partial write.
//!
//! Reads are served from an in-memory table loaded at startup; the
//! files exist only so records survive a restart.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::info;

use super::memory::MemTable;
use crate::domain::{Department, Employee, Entity};
use crate::ports::{DepartmentStore, EmployeeStore};

/// On-disk shape of one collection.
#[derive(serde::Serialize, serde::Deserialize)]
struct Snapshot<T> {
    /// Next identifier to assign; kept so ids stay monotonic across
    /// restarts even when the highest record was deleted.
    next_id: i64,
    records: Vec<T>,
}

/// One collection backed by a snapshot file.
struct FileTable<T> {
    table: MemTable<T>,
    path: PathBuf,
    tmp_path: PathBuf,
    /// Serializes snapshot writes; both share one tmp path.
    io_lock: Mutex<()>,
}

impl<T> FileTable<T>
where
    T: Entity + Serialize + DeserializeOwned,
{
    /// Load the snapshot if one exists, otherwise start fresh.
    async fn open(dir: &Path, file_name: &str) -> Result<Self> {
        let path = dir.join(file_name);
        let tmp_path = dir.join(format!("{file_name}.tmp"));

        let table = if path.exists() {
            let json = fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
            let snapshot: Snapshot<T> = serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse snapshot {}", path.display()))?;

            info!(
                path = %path.display(),
                count = snapshot.records.len(),
                "Snapshot loaded"
            );
            MemTable::with_rows(snapshot.next_id, snapshot.records)
        } else {
            info!(path = %path.display(), "No snapshot found, starting fresh");
            MemTable::new()
        };

        Ok(Self {
            table,
            path,
            tmp_path,
            io_lock: Mutex::new(()),
        })
    }

    /// Rewrite the snapshot atomically (tmp write, then rename).
    async fn persist(&self) -> Result<()> {
        let _guard = self.io_lock.lock().await;

        let (next_id, records) = self.table.dump().await;
        let json = serde_json::to_string_pretty(&Snapshot { next_id, records })
            .context("Failed to serialize snapshot")?;

        fs::write(&self.tmp_path, &json)
            .await
            .context("Failed to write tmp snapshot file")?;
        fs::rename(&self.tmp_path, &self.path)
            .await
            .context("Failed to rename snapshot file")?;

        Ok(())
    }

    async fn save(&self, record: T) -> Result<T> {
        let stored = self.table.save(record).await;
        self.persist().await?;
        Ok(stored)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let removed = self.table.delete(id).await;
        if removed {
            self.persist().await?;
        }
        Ok(removed)
    }

    async fn is_healthy(&self) -> bool {
        if !self.path.exists() {
            return true; // Nothing written yet is OK
        }
        fs::metadata(&self.path).await.is_ok()
    }
}

/// Both collections snapshotted under one data directory.
pub struct FileStore {
    departments: FileTable<Department>,
    employees: FileTable<Employee>,
}

impl FileStore {
    /// Open (or initialize) the data directory and load both snapshots.
    pub async fn open(data_dir: &str) -> Result<Self> {
        let dir = Path::new(data_dir);
        fs::create_dir_all(dir)
            .await
            .context("Failed to create data directory")?;

        Ok(Self {
            departments: FileTable::open(dir, "departments.json").await?,
            employees: FileTable::open(dir, "employees.json").await?,
        })
    }
}

#[async_trait]
impl DepartmentStore for FileStore {
    async fn list(&self) -> Result<Vec<Department>> {
        Ok(self.departments.table.list().await)
    }

    async fn get(&self, id: i64) -> Result<Option<Department>> {
        Ok(self.departments.table.get(id).await)
    }

    async fn save(&self, record: Department) -> Result<Department> {
        self.departments.save(record).await
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        self.departments.delete(id).await
    }

    async fn is_healthy(&self) -> bool {
        self.departments.is_healthy().await
    }
}

#[async_trait]
impl EmployeeStore for FileStore {
    async fn list(&self) -> Result<Vec<Employee>> {
        Ok(self.employees.table.list().await)
    }

    async fn get(&self, id: i64) -> Result<Option<Employee>> {
        Ok(self.employees.table.get(id).await)
    }

    async fn save(&self, record: Employee) -> Result<Employee> {
        self.employees.save(record).await
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        self.employees.delete(id).await
    }

    async fn is_healthy(&self) -> bool {
        self.employees.is_healthy().await
    }
}
