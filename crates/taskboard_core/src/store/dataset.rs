//! JSON record source.
//!
//! # Invariants
//! - Unknown enumeration values are rejected here, so every record that
//!   reaches a store maps to exactly one board column.
//! - Malformed dates are accepted and logged; they only make a record
//!   unscheduled.
//! - Every record's project reference names a project of the same dataset.

use super::record_store::{InMemoryRecordStore, StoreError};
use crate::model::project::{Project, ProjectValidationError};
use crate::model::record::Record;
use crate::service::activity::ActivityEntry;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum DatasetError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    Store(StoreError),
    Project(ProjectValidationError),
    DuplicateProjectId(String),
    UnknownProject {
        record_id: String,
        project_id: String,
    },
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read dataset `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid dataset json: {err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Project(err) => write!(f, "{err}"),
            Self::DuplicateProjectId(id) => write!(f, "project id already exists: {id}"),
            Self::UnknownProject {
                record_id,
                project_id,
            } => write!(
                f,
                "record `{record_id}` references unknown project `{project_id}`"
            ),
        }
    }
}

impl Error for DatasetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Project(err) => Some(err),
            Self::DuplicateProjectId(_) | Self::UnknownProject { .. } => None,
        }
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<StoreError> for DatasetError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<ProjectValidationError> for DatasetError {
    fn from(value: ProjectValidationError) -> Self {
        Self::Project(value)
    }
}

/// Projects, records and the activity feed, as supplied by a record source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub records: Vec<Record>,
    #[serde(default)]
    pub activity: Vec<ActivityEntry>,
}

impl Dataset {
    /// Validates projects and moves records into an in-memory store.
    ///
    /// The activity feed is not part of the store; take it out first when
    /// it is needed.
    pub fn into_store(self) -> Result<(Vec<Project>, InMemoryRecordStore), DatasetError> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            project.validate()?;
            if !seen.insert(project.id.as_str()) {
                return Err(DatasetError::DuplicateProjectId(project.id.clone()));
            }
        }

        for record in &self.records {
            if let Some(project_id) = record.project_id() {
                if !seen.contains(project_id) {
                    return Err(DatasetError::UnknownProject {
                        record_id: record.id.clone(),
                        project_id: project_id.to_string(),
                    });
                }
            }
        }

        for record in self.records.iter().filter(|record| record.has_malformed_date()) {
            warn!(
                "event=dataset_load module=store status=warn record_id={} reason=malformed_due_date",
                record.id
            );
        }

        let record_count = self.records.len();
        let store = InMemoryRecordStore::from_records(self.records)?;
        info!(
            "event=dataset_load module=store status=ok projects={} records={}",
            self.projects.len(),
            record_count
        );
        Ok((self.projects, store))
    }
}

pub fn parse_dataset(json: &str) -> Result<Dataset, DatasetError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_dataset(path: &Path) -> Result<Dataset, DatasetError> {
    let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_dataset(&text)
}
