//! `taskboard` command-line entry point.
//!
//! # Responsibility
//! - Load a dataset (file or built-in demo) and print one view of it.
//! - Map command-line flags onto `ViewState` mutations.

mod render;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use log::info;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use taskboard_core::{
    default_log_level, demo_dataset, filter_projects, init_logging, load_dataset,
    parse_filter_assignment, BoardConfig, BoardService, CalendarMonth, CategoryFilter, Clock,
    DateTab, FilterDimension, FixedClock, InMemoryRecordStore, ProjectStatus, SortKey,
    SystemClock, ViewMode, ViewProjection, ViewState, DEFAULT_ACTIVITY_LIMIT,
};

#[derive(Debug, Parser)]
#[command(name = "taskboard", version, about = "Filter and project dashboard records")]
struct Cli {
    /// JSON dataset with `projects` and `records`; the demo dataset when omitted.
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    /// JSON board config (display cap, upcoming window, agenda limit).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Reference day as YYYY-MM-DD; defaults to the current UTC date.
    #[arg(long, global = true)]
    today: Option<NaiveDate>,
    /// Absolute directory for rolling log files; logging is off when omitted.
    #[arg(long, global = true)]
    log_dir: Option<String>,
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print core health and version.
    Ping,
    /// Filtered, optionally sorted list.
    List(ViewArgs),
    /// Kanban columns by status.
    Board(ViewArgs),
    /// Month grid with per-day buckets.
    Calendar(CalendarArgs),
    /// Next scheduled records.
    Agenda,
    /// Summary counters, project progress and recent activity.
    Dashboard,
    /// Project cards matching a search query.
    Projects {
        #[arg(long, default_value = "")]
        query: String,
        /// active | on-hold | completed
        #[arg(long)]
        status: Option<ProjectStatus>,
    },
}

#[derive(Debug, Args)]
struct ViewArgs {
    /// Case-insensitive title search.
    #[arg(long, default_value = "")]
    query: String,
    /// Categorical filter such as `status=Done` or `priority=high`; repeatable.
    #[arg(long = "where", value_parser = parse_filter_assignment, long_help = where_help())]
    filters: Vec<CategoryFilter>,
    /// all | today | upcoming | overdue | completed
    #[arg(long, default_value = "all")]
    tab: DateTab,
    /// insertion | title | due | priority
    #[arg(long, default_value = "insertion")]
    sort: SortKey,
}

#[derive(Debug, Args)]
struct CalendarArgs {
    #[command(flatten)]
    view: ViewArgs,
    /// Displayed month as YYYY-MM; defaults to the month of `--today`.
    #[arg(long)]
    month: Option<CalendarMonth>,
    /// Step back this many months from the displayed month.
    #[arg(long, default_value_t = 0)]
    prev: u32,
    /// Step forward this many months from the displayed month.
    #[arg(long, default_value_t = 0)]
    next: u32,
}

fn where_help() -> String {
    let mut help = String::from("Categorical filter `dimension=value`; repeatable. `all` clears a dimension.");
    for dimension in [
        FilterDimension::Status,
        FilterDimension::Priority,
        FilterDimension::Kind,
    ] {
        help.push_str(&format!(
            "\n  {}: {}",
            dimension.as_str(),
            dimension.allowed_values().join(", ")
        ));
    }
    help.push_str("\n  project: a project id");
    help
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, Box<dyn Error>> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    let today = match cli.today {
        Some(date) => date,
        None => SystemClock.today(),
    };
    let config = match cli.config.as_deref() {
        Some(path) => BoardConfig::load(path)?,
        None => BoardConfig::default(),
    };
    let mut dataset = match cli.data.as_deref() {
        Some(path) => load_dataset(path)?,
        None => demo_dataset(),
    };
    let activity = std::mem::take(&mut dataset.activity);
    let (projects, store) = dataset.into_store()?;
    let service = BoardService::with_clock(store, FixedClock::on_date(today), config)
        .with_projects(projects)
        .with_activity(activity);
    info!(
        "event=cli_run module=cli status=ok command={} today={today}",
        command_name(&cli.command)
    );

    Ok(match cli.command {
        Command::Ping => format!(
            "taskboard_core ping={}\ntaskboard_core version={}\n",
            taskboard_core::ping(),
            taskboard_core::core_version()
        ),
        Command::List(args) => render_view(&service, &args, ViewMode::List, None, today),
        Command::Board(args) => render_view(&service, &args, ViewMode::Board, None, today),
        Command::Calendar(args) => {
            let month = args
                .month
                .unwrap_or_else(|| CalendarMonth::containing(today))
                .shifted(i64::from(args.next) - i64::from(args.prev))
                .ok_or("calendar month is out of range")?;
            render_view(&service, &args.view, ViewMode::Calendar, Some(month), today)
        }
        Command::Agenda => render::agenda(&service.agenda()),
        Command::Dashboard => render::dashboard(
            &service.summary(),
            &service.recent_activity(DEFAULT_ACTIVITY_LIMIT),
            service.clock().now(),
        ),
        Command::Projects { query, status } => {
            let mut matches = filter_projects(service.projects(), &query);
            if let Some(status) = status {
                matches.retain(|project| project.status == status);
            }
            render::projects(&matches)
        }
    })
}

fn render_view(
    service: &BoardService<InMemoryRecordStore, FixedClock>,
    args: &ViewArgs,
    mode: ViewMode,
    month: Option<CalendarMonth>,
    today: NaiveDate,
) -> String {
    let mut view = ViewState::new(today);
    view.set_text_query(args.query.clone());
    for filter in &args.filters {
        view.set_category_filter(filter.clone());
    }
    view.set_active_tab(args.tab);
    view.set_sort_key(args.sort);
    view.set_view_mode(mode);
    if let Some(month) = month {
        view.set_month(month);
    }

    match service.render(&view) {
        ViewProjection::List(records) => render::list(&records),
        ViewProjection::Board(board) => render::board(&board),
        ViewProjection::Calendar(calendar) => {
            render::calendar(&calendar, today, service.config().calendar_display_cap)
        }
    }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Ping => "ping",
        Command::List(_) => "list",
        Command::Board(_) => "board",
        Command::Calendar(_) => "calendar",
        Command::Agenda => "agenda",
        Command::Dashboard => "dashboard",
        Command::Projects { .. } => "projects",
    }
}
