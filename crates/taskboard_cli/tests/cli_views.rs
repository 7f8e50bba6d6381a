use std::process::Command;

fn taskboard(args: &[&str]) -> (bool, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_taskboard"))
        .args(["--today", "2025-03-12"])
        .args(args)
        .output()
        .expect("taskboard binary should run");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn ping_reports_core_health() {
    let (ok, stdout, _) = taskboard(&["ping"]);
    assert!(ok);
    assert!(stdout.contains("ping=pong"));
}

#[test]
fn list_applies_filters_and_tab() {
    let (ok, stdout, _) = taskboard(&["list", "--where", "priority=High", "--tab", "upcoming"]);
    assert!(ok);
    assert_eq!(stdout, "No tasks found matching your filters.\n");

    let (ok, stdout, _) = taskboard(&["list", "--where", "priority=High", "--sort", "due"]);
    assert!(ok);
    let ids: Vec<&str> = stdout
        .lines()
        .map(|line| line[4..].split_whitespace().next().unwrap_or(""))
        .collect();
    assert_eq!(ids, vec!["107", "103", "e7", "104"]);
}

#[test]
fn board_lists_all_columns() {
    let (ok, stdout, _) = taskboard(&["board", "--where", "project=2"]);
    assert!(ok);
    assert!(stdout.contains("== To Do (0)"));
    assert!(stdout.contains("== In Progress (2)"));
}

#[test]
fn calendar_navigates_months() {
    let (ok, stdout, _) = taskboard(&["calendar", "--prev", "1"]);
    assert!(ok);
    assert!(stdout.starts_with("February 2025"));
    assert!(stdout.contains("2025-02-28 (1)"));
}

#[test]
fn bad_filter_is_a_usage_error() {
    let (ok, _, stderr) = taskboard(&["list", "--where", "status=Blocked"]);
    assert!(!ok);
    assert!(stderr.contains("Blocked"));
}

#[test]
fn calendar_steps_many_months_in_one_jump() {
    let (ok, stdout, _) = taskboard(&["calendar", "--next", "22", "--prev", "1"]);
    assert!(ok);
    assert!(stdout.starts_with("December 2026"));

    let (ok, _, stderr) = taskboard(&["calendar", "--next", "4000000000"]);
    assert!(!ok);
    assert!(stderr.contains("out of range"));
}

#[test]
fn dashboard_shows_recent_activity() {
    let (ok, stdout, _) = taskboard(&["dashboard"]);
    assert!(ok);
    assert!(stdout.contains("Completion rate: 18%"));
    let feed: Vec<&str> = stdout
        .lines()
        .skip_while(|line| *line != "Recent activity:")
        .skip(1)
        .collect();
    assert_eq!(
        feed,
        vec![
            "  created issue Implement responsive design for homepage in Website Redesign, 1 day ago",
            "  updated status of Set up project repository in Website Redesign (In Progress -> Done), 3 days ago",
        ]
    );
}

#[test]
fn projects_filter_by_query_and_status() {
    let (ok, stdout, _) = taskboard(&["projects", "--status", "on-hold"]);
    assert!(ok);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("3 "));

    let (ok, stdout, _) = taskboard(&["projects", "--query", "mobile"]);
    assert!(ok);
    assert!(stdout.contains("Mobile App Development"));
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn where_help_lists_accepted_values() {
    let (ok, stdout, _) = taskboard(&["list", "--help"]);
    assert!(ok);
    assert!(stdout.contains("priority: High, Medium, Low"));
    assert!(stdout.contains("type: Task, Bug, Story, Meeting"));
}
