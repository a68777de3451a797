use crate::application::{CalendarApp, CalendarController, Locale, ViewRequest};
use crate::entities::{DateKey, YearMonth};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "monthgrid")]
#[command(about = "Month calendar grid and navigation state, emitted as JSON")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the month view snapshot (defaults to the current month)
    Show(ShowArgs),
    /// Manage the stored event days
    Events {
        #[command(subcommand)]
        action: EventsAction,
    },
}

#[derive(Subcommand)]
pub enum EventsAction {
    /// List stored event days in date order
    List,
    /// Mark days as having events (YYYY-MM-DD)
    Add {
        #[arg(required = true)]
        dates: Vec<DateKey>,
    },
    /// Unmark event days (YYYY-MM-DD)
    Remove {
        #[arg(required = true)]
        dates: Vec<DateKey>,
    },
}

#[derive(Args, Default)]
pub struct ShowArgs {
    /// Month to display (YYYY-MM, defaults to the month of --today)
    #[arg(short, long)]
    pub month: Option<YearMonth>,

    /// Day highlighted as today (YYYY-MM-DD, defaults to the local date)
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Initially selected day; ignored unless it has an event
    #[arg(short, long)]
    pub select: Option<NaiveDate>,

    /// Earliest navigable month, given as any day in it
    #[arg(long)]
    pub min: Option<NaiveDate>,

    /// Latest navigable month, given as any day in it
    #[arg(long)]
    pub max: Option<NaiveDate>,

    /// First column of the week, 0 = Sunday ..= 6 = Saturday
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=6))]
    pub week_start: Option<u8>,

    /// Always lay out six rows
    #[arg(long, conflicts_with = "no_six_rows")]
    pub six_rows: bool,

    /// Only lay out the rows the month needs, even if the config asks for six
    #[arg(long)]
    pub no_six_rows: bool,

    /// Additional event day, on top of the event file (repeatable)
    #[arg(short, long = "event")]
    pub events: Vec<DateKey>,

    /// Label language
    #[arg(short, long, value_enum)]
    pub locale: Option<Locale>,

    /// Command applied before printing: prev, next or toggle:YYYY-MM-DD (repeatable, in order)
    #[arg(long = "step")]
    pub steps: Vec<Step>,
}

impl From<ShowArgs> for ViewRequest {
    fn from(args: ShowArgs) -> Self {
        Self {
            month: args.month,
            today: args.today,
            selected: args.select,
            min_date: args.min,
            max_date: args.max,
            week_start: args.week_start,
            force_six_rows: match (args.six_rows, args.no_six_rows) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
            extra_events: args.events,
            locale: args.locale,
            steps: args.steps,
        }
    }
}

/// One controller command, as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
    Toggle(NaiveDate),
}

impl Step {
    pub fn apply(self, controller: &mut CalendarController) {
        match self {
            Step::Previous => controller.go_to_previous_month(),
            Step::Next => controller.go_to_next_month(),
            Step::Toggle(date) => controller.toggle_select(date),
        }
    }
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prev" | "previous" => Ok(Step::Previous),
            "next" => Ok(Step::Next),
            _ => {
                let date = s
                    .strip_prefix("toggle:")
                    .ok_or_else(|| format!("unknown step '{s}' (expected prev, next or toggle:YYYY-MM-DD)"))?;
                let key: DateKey = date.parse().map_err(|e| format!("{e}"))?;
                Ok(Step::Toggle(key.date()))
            }
        }
    }
}

impl Cli {
    pub fn run() -> anyhow::Result<()> {
        let cli = Self::parse();
        let app = CalendarApp::new();

        match cli.command {
            Some(Commands::Show(args)) => {
                Self::print_snapshot(&app, args)?;
            }
            Some(Commands::Events { action }) => match action {
                EventsAction::List => {
                    for key in app.list_events()? {
                        println!("{key}");
                    }
                }
                EventsAction::Add { dates } => {
                    let added = app.add_events(&dates)?;
                    println!("Added {added} event day(s)");
                }
                EventsAction::Remove { dates } => {
                    let removed = app.remove_events(&dates)?;
                    println!("Removed {removed} event day(s)");
                }
            },
            None => {
                // Default: current month
                Self::print_snapshot(&app, ShowArgs::default())?;
            }
        }

        Ok(())
    }

    fn print_snapshot(app: &CalendarApp, args: ShowArgs) -> anyhow::Result<()> {
        let snapshot = app.snapshot(&ViewRequest::from(args))?;
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        Ok(())
    }
}
