use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "mission")]
#[command(about = "Command-line client for the mission board API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Server root URL (falls back to the config file, then http://127.0.0.1:7118)
    #[arg(long, global = true, env = "MISSION_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Board operations
    Board(BoardCommand),
    /// Mission operations
    Mission(MissionCommand),
    /// Derived views over all missions
    View(ViewCommand),
}

// Board commands
#[derive(Args)]
pub struct BoardCommand {
    #[command(subcommand)]
    pub action: BoardAction,
}

#[derive(Subcommand)]
pub enum BoardAction {
    /// List all boards in order
    List,
    /// Get a specific board
    Get {
        #[arg(long)]
        id: Uuid,
    },
    /// Create a new board
    Create {
        #[arg(long)]
        name: String,
    },
    /// Rename a board
    Rename {
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        name: String,
    },
    /// Delete a board and its missions
    Delete {
        #[arg(long)]
        id: Uuid,
    },
    /// Rewrite the board order; boards left out are deleted
    Reorder {
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<Uuid>,
    },
}

// Mission commands
#[derive(Args)]
pub struct MissionCommand {
    #[command(subcommand)]
    pub action: MissionAction,
}

#[derive(Subcommand)]
pub enum MissionAction {
    /// List missions
    List {
        /// Only missions on this board
        #[arg(long)]
        board_id: Option<Uuid>,
        /// Only missions with this status (todo, inProgress, done)
        #[arg(long)]
        status: Option<String>,
    },
    /// Get a specific mission
    Get {
        #[arg(long)]
        id: Uuid,
    },
    /// Create a new mission
    Create(MissionCreateArgs),
    /// Move a mission to another board
    Move {
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        board_id: Uuid,
    },
    /// Update mission fields
    Update(MissionUpdateArgs),
    /// Move a mission along the timeline, keeping its duration
    Shift(MissionDragArgs),
    /// Lengthen or shorten a mission; it never drops below one day
    Resize(MissionDragArgs),
    /// Delete a mission
    Delete {
        #[arg(long)]
        id: Uuid,
    },
}

#[derive(Args)]
pub struct MissionCreateArgs {
    #[arg(long)]
    pub board_id: Uuid,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub category: Option<String>,
    /// 1 (low) to 4 (critical)
    #[arg(long)]
    pub urgency: Option<i32>,
    #[arg(long)]
    pub content: Option<String>,
    /// Estimated duration in days
    #[arg(long)]
    pub time_need: Option<i64>,
    /// RFC 3339 timestamp
    #[arg(long)]
    pub due_date: Option<DateTime<Utc>>,
    /// todo, inProgress or done
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Args)]
pub struct MissionUpdateArgs {
    #[arg(long)]
    pub id: Uuid,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub board_id: Option<Uuid>,
    #[arg(long)]
    pub urgency: Option<i32>,
    #[arg(long)]
    pub content: Option<String>,
    #[arg(long)]
    pub time_need: Option<i64>,
    #[arg(long)]
    pub created_date: Option<DateTime<Utc>>,
    #[arg(long)]
    pub due_date: Option<DateTime<Utc>>,
    #[arg(long)]
    pub status: Option<String>,
}

/// Offset for a timeline drag: whole days, or a pointer movement in pixels.
#[derive(Args)]
pub struct MissionDragArgs {
    #[arg(long)]
    pub id: Uuid,
    /// Whole days; negative values move earlier
    #[arg(long, allow_hyphen_values = true, conflicts_with = "pixels")]
    pub days: Option<i64>,
    /// Pointer movement, converted to days with --track-width and --window-days
    #[arg(long, allow_hyphen_values = true)]
    pub pixels: Option<f64>,
    /// Width of the Gantt track in pixels
    #[arg(long)]
    pub track_width: Option<f64>,
    /// Days shown across the track
    #[arg(long)]
    pub window_days: Option<i64>,
}

// View commands
#[derive(Args)]
pub struct ViewCommand {
    #[command(subcommand)]
    pub action: ViewAction,
}

#[derive(Subcommand)]
pub enum ViewAction {
    /// Filtered, sorted mission table
    List {
        /// Case-insensitive match on title or category
        #[arg(long)]
        filter: Option<String>,
        /// title, category, urgency or dueDate
        #[arg(long)]
        sort: Option<String>,
        /// asc or desc
        #[arg(long)]
        direction: Option<String>,
    },
    /// Month grid of missions by due date
    Calendar {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        month: Option<u32>,
    },
    /// Gantt bars for a time window
    Gantt {
        /// day, week, month, quarter or year
        #[arg(long)]
        scale: Option<String>,
        /// Date the window is built around (YYYY-MM-DD)
        #[arg(long)]
        anchor: Option<NaiveDate>,
        /// Move the anchor by this many weeks; negative goes back
        #[arg(long, allow_hyphen_values = true)]
        step: Option<i64>,
    },
    /// Progress and health summary
    Dashboard {
        /// explicit or inferred
        #[arg(long)]
        policy: Option<String>,
    },
}
