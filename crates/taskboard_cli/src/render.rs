//! Plain-text rendering of core projections.

use chrono::{DateTime, NaiveDate, Utc};
use std::fmt::Write;
use taskboard_core::{
    ActivityEntry, ActivityKind, BoardProjection, CalendarCell, CalendarProjection,
    DashboardSummary, Project, Record,
};

const WEEKDAY_HEADER: &str = "Sun Mon Tue Wed Thu Fri Sat";

fn record_line(out: &mut String, record: &Record) {
    let check = if record.is_completed() { "x" } else { " " };
    let _ = write!(
        out,
        "[{check}] {:<6} {:<8} {:<6} {}",
        record.id,
        record.kind.as_str(),
        record.priority.as_str(),
        record.title
    );
    if let Some(project) = &record.project {
        let _ = write!(out, " ({})", project.name);
    }
    match (&record.due_date, record.scheduled_on()) {
        (_, Some(date)) => {
            let _ = write!(out, " due {date}");
        }
        (Some(raw), None) => {
            let _ = write!(out, " due ?{raw}");
        }
        (None, None) => {}
    }
    out.push('\n');
}

pub fn list(records: &[&Record]) -> String {
    if records.is_empty() {
        return "No tasks found matching your filters.\n".to_string();
    }
    let mut out = String::new();
    for record in records {
        record_line(&mut out, record);
    }
    out
}

pub fn board(board: &BoardProjection<'_>) -> String {
    let mut out = String::new();
    for column in &board.columns {
        let _ = writeln!(out, "== {} ({})", column.status, column.records.len());
        for record in &column.records {
            out.push_str("  ");
            record_line(&mut out, record);
        }
    }
    out
}

pub fn calendar(calendar: &CalendarProjection<'_>, today: NaiveDate, cap: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", calendar.month);
    let _ = writeln!(out, "{WEEKDAY_HEADER}");

    let cells = calendar.cells(today);
    for week in cells.chunks(7) {
        let row: Vec<String> = week
            .iter()
            .map(|cell| match cell {
                CalendarCell::Blank => "   ".to_string(),
                CalendarCell::Day {
                    date,
                    is_today,
                    bucket,
                } => {
                    let marker = match (*is_today, bucket.is_some()) {
                        (true, _) => '<',
                        (false, true) => '*',
                        (false, false) => ' ',
                    };
                    format!("{:>2}{marker}", chrono::Datelike::day(date))
                }
            })
            .collect();
        let _ = writeln!(out, "{}", row.join(" ").trim_end());
    }

    for bucket in calendar.buckets.values() {
        let _ = writeln!(out, "{} ({})", bucket.key(), bucket.count());
        for record in bucket.visible(cap) {
            let _ = writeln!(out, "  - [{}] {}", record.kind, record.title);
        }
        let hidden = bucket.overflow(cap);
        if hidden > 0 {
            let _ = writeln!(out, "  +{hidden} more");
        }
    }
    out
}

pub fn agenda(records: &[&Record]) -> String {
    if records.is_empty() {
        return "No upcoming events.\n".to_string();
    }
    let mut out = String::new();
    for record in records {
        let project = record
            .project
            .as_ref()
            .map(|project| project.name.as_str())
            .unwrap_or("General");
        let date = record
            .scheduled_on()
            .map(|date| date.to_string())
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{date}  {} - {project} [{} / {}]",
            record.title, record.kind, record.priority
        );
    }
    out
}

pub fn dashboard(
    summary: &DashboardSummary,
    activity: &[&ActivityEntry],
    now: DateTime<Utc>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total records:   {}", summary.total_records);
    let _ = writeln!(out, "Open:            {}", summary.open_records);
    let _ = writeln!(out, "Completed:       {}", summary.completed_records);
    let _ = writeln!(out, "Projects:        {}", summary.total_projects);
    let _ = writeln!(out, "Completion rate: {}%", summary.completion_rate);
    out.push_str("By status:\n");
    for (status, count) in &summary.by_status {
        let _ = writeln!(out, "  {:<12} {count}", status.as_str());
    }
    out.push_str("Projects:\n");
    for project in &summary.projects {
        let _ = writeln!(
            out,
            "  {:<24} {}/{} ({}%)",
            project.name, project.completed, project.total, project.percent
        );
    }
    out.push_str("Recent activity:\n");
    if activity.is_empty() {
        out.push_str("  No recent activity.\n");
    }
    for entry in activity {
        let _ = write!(out, "  {} {}", entry.kind.action(), entry.target);
        if let Some(project) = entry.project.as_deref() {
            if entry.kind != ActivityKind::ProjectCreated {
                let _ = write!(out, " in {project}");
            }
        }
        if let (Some(from), Some(to)) = (entry.from, entry.to) {
            let _ = write!(out, " ({from} -> {to})");
        }
        let _ = writeln!(out, ", {}", entry.relative_time(now));
    }
    out
}

pub fn projects(projects: &[&Project]) -> String {
    if projects.is_empty() {
        return "No projects found.\n".to_string();
    }
    let mut out = String::new();
    for project in projects {
        let _ = writeln!(
            out,
            "{:<4} {:<24} {:<10} {:>3}%  members={} lead={}",
            project.id,
            project.name,
            project.status.as_str(),
            project.progress,
            project.members,
            project.lead.as_deref().unwrap_or("-")
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{board, calendar, dashboard, list};
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use taskboard_core::{
        project_board, project_calendar, ActivityEntry, ActivityKind, CalendarMonth,
        DashboardSummary, ProjectRef, Record, RecordKind, Status,
    };

    #[test]
    fn empty_list_shows_empty_state() {
        assert_eq!(list(&[]), "No tasks found matching your filters.\n");
    }

    #[test]
    fn list_marks_completion_and_malformed_dates() {
        let done = Record::new("1", "shipped").with_status(Status::Done);
        let odd = Record::new("2", "odd").with_due_date("soon");
        let text = list(&[&done, &odd]);
        assert!(text.starts_with("[x] 1"));
        assert!(text.contains("due ?soon"));
    }

    #[test]
    fn board_prints_every_column() {
        let records = vec![Record::new("1", "a")];
        let text = board(&project_board(&records));
        for header in ["== To Do (1)", "== In Progress (0)", "== Review (0)", "== Done (0)"] {
            assert!(text.contains(header), "missing {header} in {text}");
        }
    }

    #[test]
    fn calendar_prints_overflow_indicator() {
        let records: Vec<Record> = (0..5)
            .map(|n| {
                Record::new(format!("m{n}"), format!("meeting {n}"))
                    .with_kind(RecordKind::Meeting)
                    .with_due_date("2025-03-15")
            })
            .collect();
        let month = CalendarMonth::new(2025, 3).unwrap();
        let projection = project_calendar(&records, month);
        let today = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();

        let text = calendar(&projection, today, 3);
        assert!(text.starts_with("March 2025\n"));
        assert!(text.contains("2025-03-15 (5)"));
        assert!(text.contains("meeting 2"));
        assert!(!text.contains("meeting 3"));
        assert!(text.contains("+2 more"));
        assert!(text.contains("12<"));
        assert!(text.contains("15*"));
    }

    #[test]
    fn dashboard_lists_activity_with_relative_time() {
        let now = Utc.with_ymd_and_hms(2025, 3, 12, 0, 0, 0).unwrap();
        let mut record = Record::new("107", "Set up project repository").with_status(Status::Done);
        record.project = Some(ProjectRef::new("1", "Website Redesign"));
        let changed = ActivityEntry::status_change(&record, Status::InProgress, now - Duration::days(3));
        let created = ActivityEntry::for_record(ActivityKind::IssueCreated, &record, now - Duration::hours(2));
        let summary = DashboardSummary::compute(&[record], &[]);

        let text = dashboard(&summary, &[&created, &changed], now);
        assert!(text.contains(
            "  created issue Set up project repository in Website Redesign, 2 hours ago\n"
        ));
        assert!(text.contains("(In Progress -> Done), 3 days ago"));

        let empty = dashboard(&summary, &[], now);
        assert!(empty.ends_with("Recent activity:\n  No recent activity.\n"));
    }
}
