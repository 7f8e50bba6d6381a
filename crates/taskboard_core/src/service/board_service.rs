//! Board use-case service.
//!
//! # Responsibility
//! - Render view projections over a record store.
//! - Create and edit issues from dialog input and toggle completion.
//! - Create projects and keep the recent-activity feed.
//!
//! # Invariants
//! - Writes go through `RecordStore`, which validates before storing.
//! - Record ids are never changed by edits.
//! - `updated_at` is stamped from the service clock on every write.
//! - Every successful write appends exactly one activity entry.
//! - Project ids are unique within the service.

use crate::clock::{Clock, SystemClock};
use crate::config::BoardConfig;
use crate::model::project::{Project, ProjectValidationError};
use crate::model::record::{Priority, ProjectRef, Record, RecordId, RecordKind, Status};
use crate::projection::agenda::upcoming_agenda;
use crate::service::activity::{recent_activity, ActivityEntry, ActivityKind};
use crate::service::dashboard::DashboardSummary;
use crate::store::record_store::{RecordStore, StoreError};
use crate::view_state::{ViewProjection, ViewState};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardServiceError {
    /// Summary is blank after trim.
    BlankSummary,
    RecordNotFound(RecordId),
    Store(StoreError),
    InvalidProject(ProjectValidationError),
    DuplicateProjectId(String),
}

impl Display for BoardServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankSummary => write!(f, "issue summary must not be blank"),
            Self::RecordNotFound(id) => write!(f, "record not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::InvalidProject(err) => write!(f, "{err}"),
            Self::DuplicateProjectId(id) => write!(f, "project id already exists: {id}"),
        }
    }
}

impl Error for BoardServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::InvalidProject(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for BoardServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(id) => Self::RecordNotFound(id),
            other => Self::Store(other),
        }
    }
}

impl From<ProjectValidationError> for BoardServiceError {
    fn from(value: ProjectValidationError) -> Self {
        Self::InvalidProject(value)
    }
}

/// Input of the "Create Issue" dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueDraft {
    pub summary: String,
    pub description: String,
    pub kind: RecordKind,
    pub priority: Priority,
    pub project: Option<ProjectRef>,
    pub assignee: Option<String>,
    /// Empty strings are treated as "no due date".
    pub due_date: Option<String>,
}

impl IssueDraft {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            description: String::new(),
            kind: RecordKind::Task,
            priority: Priority::Medium,
            project: None,
            assignee: None,
            due_date: None,
        }
    }
}

/// Partial update from the "Edit Issue" dialog; `None` keeps the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueEdit {
    pub summary: Option<String>,
    pub description: Option<String>,
    pub kind: Option<RecordKind>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub assignee: Option<String>,
    pub due_date: Option<String>,
}

/// Input of the "Create Project" dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub lead: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ProjectDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            lead: None,
            start_date: None,
            end_date: None,
        }
    }
}

pub struct BoardService<S: RecordStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
    config: BoardConfig,
    projects: Vec<Project>,
    activity: Vec<ActivityEntry>,
}

impl<S: RecordStore> BoardService<S, SystemClock> {
    /// Creates a service on the UTC wall clock.
    pub fn new(store: S, config: BoardConfig) -> Self {
        Self::with_clock(store, SystemClock, config)
    }
}

impl<S: RecordStore, C: Clock> BoardService<S, C> {
    pub fn with_clock(store: S, clock: C, config: BoardConfig) -> Self {
        Self {
            store,
            clock,
            config,
            projects: Vec::new(),
            activity: Vec::new(),
        }
    }

    /// Seeds projects that were already validated by a record source.
    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = projects;
        self
    }

    /// Seeds the feed with entries recorded before this service existed.
    pub fn with_activity(mut self, activity: Vec<ActivityEntry>) -> Self {
        self.activity = activity;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Feed entries in the order they were appended.
    pub fn activity(&self) -> &[ActivityEntry] {
        &self.activity
    }

    /// Newest `limit` feed entries.
    pub fn recent_activity(&self, limit: usize) -> Vec<&ActivityEntry> {
        recent_activity(&self.activity, limit)
    }

    /// Projects the store through `view` using the service clock's today.
    pub fn render(&self, view: &ViewState) -> ViewProjection<'_> {
        view.project(self.store.list(), self.clock.today(), &self.config)
    }

    /// Upcoming agenda panel over the whole store.
    pub fn agenda(&self) -> Vec<&Record> {
        upcoming_agenda(self.store.list(), self.clock.today(), self.config.agenda_limit)
    }

    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary::compute(self.store.list(), &self.projects)
    }

    /// Creates an active project with a generated id.
    pub fn create_project(&mut self, draft: ProjectDraft) -> Result<Project, BoardServiceError> {
        let mut project = Project::new(generate_id(), draft.name.trim());
        project.description = draft.description;
        project.lead = draft.lead.filter(|value| !value.trim().is_empty());
        project.members = u32::from(project.lead.is_some());
        project.start_date = draft.start_date.filter(|value| !value.trim().is_empty());
        project.end_date = draft.end_date.filter(|value| !value.trim().is_empty());

        self.add_project(project.clone())?;
        Ok(project)
    }

    /// Registers `project` after validation; ids must be unused.
    pub fn add_project(&mut self, project: Project) -> Result<(), BoardServiceError> {
        project.validate()?;
        if self.projects.iter().any(|existing| existing.id == project.id) {
            return Err(BoardServiceError::DuplicateProjectId(project.id));
        }

        self.activity.push(ActivityEntry {
            kind: ActivityKind::ProjectCreated,
            target_id: project.id.clone(),
            target: project.name.clone(),
            project: Some(project.name.clone()),
            from: None,
            to: None,
            at: self.clock.now(),
        });
        info!(
            "event=project_create module=service status=ok project_id={}",
            project.id
        );
        self.projects.push(project);
        Ok(())
    }

    /// Creates an open issue with a generated id.
    pub fn create_issue(&mut self, draft: IssueDraft) -> Result<Record, BoardServiceError> {
        let summary = draft.summary.trim();
        if summary.is_empty() {
            return Err(BoardServiceError::BlankSummary);
        }

        let now = self.clock.now();
        let mut record = Record::new(generate_id(), summary)
            .with_kind(draft.kind)
            .with_priority(draft.priority);
        record.description = draft.description;
        record.project = draft.project;
        record.assignee = draft.assignee.filter(|value| !value.trim().is_empty());
        record.due_date = draft.due_date.filter(|value| !value.trim().is_empty());
        record.created_at = Some(now);
        record.updated_at = Some(now);

        self.store.insert(record.clone())?;
        self.activity
            .push(ActivityEntry::for_record(ActivityKind::IssueCreated, &record, now));
        info!(
            "event=issue_create module=service status=ok record_id={} kind={}",
            record.id, record.kind
        );
        Ok(record)
    }

    /// Applies the provided fields and returns the stored record.
    pub fn edit_issue(&mut self, id: &str, edit: IssueEdit) -> Result<Record, BoardServiceError> {
        let mut record = self.existing(id)?;
        let previous_status = record.status;

        if let Some(summary) = edit.summary {
            let summary = summary.trim();
            if summary.is_empty() {
                return Err(BoardServiceError::BlankSummary);
            }
            record.title = summary.to_string();
        }
        if let Some(description) = edit.description {
            record.description = description;
        }
        if let Some(kind) = edit.kind {
            record.kind = kind;
        }
        if let Some(status) = edit.status {
            record.status = status;
        }
        if let Some(priority) = edit.priority {
            record.priority = priority;
        }
        if let Some(assignee) = edit.assignee {
            record.assignee = Some(assignee).filter(|value| !value.trim().is_empty());
        }
        if let Some(due_date) = edit.due_date {
            record.due_date = Some(due_date).filter(|value| !value.trim().is_empty());
        }
        let now = self.clock.now();
        record.updated_at = Some(now);

        self.store.update(record.clone())?;
        self.activity.push(if record.status == previous_status {
            ActivityEntry::for_record(ActivityKind::IssueUpdated, &record, now)
        } else {
            ActivityEntry::status_change(&record, previous_status, now)
        });
        info!(
            "event=issue_update module=service status=ok record_id={}",
            record.id
        );
        Ok(record)
    }

    /// Flips completion (`Done` <-> `To Do`) and returns the new state.
    pub fn toggle_completion(&mut self, id: &str) -> Result<bool, BoardServiceError> {
        let mut record = self.existing(id)?;
        let previous_status = record.status;
        let completed = !record.is_completed();
        record.set_completed(completed);
        let now = self.clock.now();
        record.updated_at = Some(now);
        self.store.update(record.clone())?;
        self.activity
            .push(ActivityEntry::status_change(&record, previous_status, now));
        info!(
            "event=task_toggle module=service status=ok record_id={id} completed={completed}"
        );
        Ok(completed)
    }

    fn existing(&self, id: &str) -> Result<Record, BoardServiceError> {
        self.store
            .get(id)
            .cloned()
            .ok_or_else(|| BoardServiceError::RecordNotFound(id.to_string()))
    }
}

/// Short, collision-resistant id for records and projects created locally.
fn generate_id() -> RecordId {
    Uuid::new_v4().simple().to_string()[..12].to_string()
}
