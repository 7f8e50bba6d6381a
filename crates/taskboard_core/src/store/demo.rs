//! Built-in demo dataset: four projects, the task backlog and calendar
//! meetings from the March 2025 sprint, plus a short activity feed.

use super::dataset::Dataset;
use crate::model::project::{Project, ProjectStatus};
use crate::model::record::{Priority, ProjectRef, Record, RecordKind, Status};
use crate::service::activity::{ActivityEntry, ActivityKind};
use chrono::{DateTime, TimeZone, Utc};

pub fn demo_dataset() -> Dataset {
    let records = demo_records();
    let activity = demo_activity(&records);
    Dataset {
        projects: demo_projects(),
        records,
        activity,
    }
}

fn project(
    id: &str,
    name: &str,
    description: &str,
    status: ProjectStatus,
    lead: &str,
    members: u32,
    progress: u8,
) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        status,
        lead: Some(lead.to_string()),
        members,
        progress,
        start_date: None,
        end_date: None,
    }
}

fn demo_projects() -> Vec<Project> {
    vec![
        project(
            "1",
            "Website Redesign",
            "Redesign the company website with a modern look and feel",
            ProjectStatus::Active,
            "Alex Johnson",
            5,
            65,
        ),
        project(
            "2",
            "Mobile App Development",
            "Develop a new mobile app for iOS and Android platforms",
            ProjectStatus::Active,
            "Sarah Chen",
            8,
            30,
        ),
        project(
            "3",
            "CRM Integration",
            "Integrate our product with popular CRM solutions",
            ProjectStatus::OnHold,
            "Michael Brown",
            3,
            10,
        ),
        project(
            "4",
            "Marketing Campaign",
            "Q3 marketing campaign for product launch",
            ProjectStatus::Completed,
            "Emily Davis",
            4,
            100,
        ),
    ]
}

fn record(
    id: &str,
    title: &str,
    project: Option<(&str, &str)>,
    kind: RecordKind,
    status: Status,
    priority: Priority,
    due: &str,
) -> Record {
    let mut record = Record::new(id, title)
        .with_kind(kind)
        .with_status(status)
        .with_priority(priority)
        .with_due_date(due);
    record.project = project.map(|(id, name)| ProjectRef::new(id, name));
    record
}

fn demo_records() -> Vec<Record> {
    const WEB: Option<(&str, &str)> = Some(("1", "Website Redesign"));
    const MOBILE: Option<(&str, &str)> = Some(("2", "Mobile App Development"));
    const CRM: Option<(&str, &str)> = Some(("3", "CRM Integration"));

    use Priority::{High, Low, Medium};
    use RecordKind::{Bug, Meeting, Story, Task};
    use Status::{Done, InProgress, Review, ToDo};

    vec![
        record("101", "Implement responsive design for homepage", WEB, Task, ToDo, Medium, "2025-03-15"),
        record("102", "Add dark mode support", WEB, Task, ToDo, Low, "2025-03-22"),
        record("103", "Fix navigation menu on mobile", WEB, Bug, ToDo, High, "2025-03-10"),
        record("104", "Implement user authentication", MOBILE, Story, InProgress, High, "2025-03-20"),
        record("105", "Create contact form", MOBILE, Task, InProgress, Medium, "2025-03-25"),
        record("106", "Optimize image loading", WEB, Task, Review, Medium, "2025-03-18"),
        record("107", "Set up project repository", WEB, Task, Done, High, "2025-02-28"),
        record("108", "Create initial wireframes", WEB, Task, Done, Medium, "2025-03-05"),
        record("e2", "Team meeting", None, Meeting, ToDo, Medium, "2025-03-15"),
        record("e5", "Weekly sprint review", None, Meeting, ToDo, Medium, "2025-03-17"),
        record("e7", "Project kickoff", CRM, Meeting, ToDo, High, "2025-03-12"),
    ]
}

fn at(month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn demo_activity(records: &[Record]) -> Vec<ActivityEntry> {
    let find = |id: &str| records.iter().find(|record| record.id == id);
    let mut activity = Vec::new();
    if let Some(repository) = find("107") {
        activity.push(ActivityEntry::status_change(
            repository,
            Status::InProgress,
            at(3, 8, 16, 20),
        ));
    }
    if let Some(homepage) = find("101") {
        activity.push(ActivityEntry::for_record(
            ActivityKind::IssueCreated,
            homepage,
            at(3, 10, 14, 30),
        ));
    }
    activity
}

#[cfg(test)]
mod tests {
    use super::demo_dataset;

    #[test]
    fn demo_dataset_loads_into_store() {
        let (projects, store) = demo_dataset().into_store().unwrap();
        assert_eq!(projects.len(), 4);
        assert_eq!(crate::store::record_store::RecordStore::len(&store), 11);
    }

    #[test]
    fn demo_activity_points_at_demo_records() {
        let dataset = demo_dataset();
        assert_eq!(dataset.activity.len(), 2);
        for entry in &dataset.activity {
            assert!(dataset.records.iter().any(|record| record.id == entry.target_id));
        }
    }
}
