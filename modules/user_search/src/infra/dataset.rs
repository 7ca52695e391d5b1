use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::contract::model::UserRecord;
use crate::domain::repo::UserRecords;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid dataset {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate user id {id} in dataset")]
    DuplicateId { id: i64 },
}

/// Immutable, cheaply cloneable user record set. Built once and shared by
/// every search; nothing can mutate it after construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[UserRecord]>,
}

/// On-disk row shape.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RecordRow {
    id: i64,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    age: u32,
    #[serde(default)]
    about: String,
    #[serde(default)]
    gender: String,
}

impl From<RecordRow> for UserRecord {
    fn from(row: RecordRow) -> Self {
        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            age: row.age,
            about: row.about,
            gender: row.gender,
        }
    }
}

impl Dataset {
    /// Freeze `records` in their given order. Ids must be unique.
    pub fn from_records(records: Vec<UserRecord>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::with_capacity(records.len());
        if let Some(dup) = records.iter().find(|r| !seen.insert(r.id)) {
            return Err(DatasetError::DuplicateId { id: dup.id });
        }
        Ok(Self {
            records: records.into(),
        })
    }

    pub fn empty() -> Self {
        Self {
            records: Arc::from(Vec::new()),
        }
    }

    /// Parse a JSON array of records.
    pub fn from_json_str(raw: &str, origin: &str) -> Result<Self, DatasetError> {
        let rows: Vec<RecordRow> =
            serde_json::from_str(raw).map_err(|source| DatasetError::Parse {
                path: origin.to_string(),
                source,
            })?;
        Self::from_records(rows.into_iter().map(UserRecord::from).collect())
    }

    /// Load a JSON array of records from `path`.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let raw = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: origin.clone(),
            source,
        })?;
        let dataset = Self::from_json_str(&raw, &origin)?;
        info!("Loaded {} user records from {}", dataset.len(), origin);
        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl UserRecords for Dataset {
    fn records(&self) -> &[UserRecord] {
        &self.records
    }
}
