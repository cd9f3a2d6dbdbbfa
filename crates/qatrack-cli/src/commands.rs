//! Main commands enum and its subcommand groups.

use std::path::PathBuf;

use clap::Subcommand;
use qatrack_axum::bootstrap::DEFAULT_PORT;
use qatrack_core::Role;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Web {
        /// Port to listen on
        #[arg(short, long, env = "QATRACK_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Allowed CORS origins (comma separated; all origins when empty)
        #[arg(long = "cors-origins", env = "QATRACK_CORS_ORIGINS", value_delimiter = ',')]
        cors_origins: Vec<String>,
        /// Directory with a built dashboard to serve
        #[arg(long)]
        static_dir: Option<PathBuf>,
        /// Serve the API only, even if a dashboard build is found
        #[arg(long)]
        api_only: bool,
        /// Use a throwaway in-memory database
        #[arg(long)]
        in_memory: bool,
    },

    /// Manage user profiles
    Users {
        #[command(subcommand)]
        command: UsersCommand,
    },

    /// Manage test cases, claims and the disabled flag
    Tests {
        #[command(subcommand)]
        command: TestsCommand,
    },

    /// Record and inspect progress
    Progress {
        #[command(subcommand)]
        command: ProgressCommand,
    },

    /// Manage cached tracker cards
    Cards {
        #[command(subcommand)]
        command: CardsCommand,
    },

    /// Show resolved paths for the data directory and database
    Paths,
}

/// User profile commands.
#[derive(Subcommand)]
pub enum UsersCommand {
    /// List all profiles
    List,
    /// Provision a profile
    Add {
        /// Identifier issued by the identity service
        id: String,
        /// Display name
        #[arg(long)]
        name: String,
        /// Role: admin or tester
        #[arg(long, default_value = "tester")]
        role: Role,
    },
}

/// Test case commands. Mutations act as `--as <USER>`.
#[derive(Subcommand)]
pub enum TestsCommand {
    /// List all test cases
    List,
    /// Create a test case (admin)
    Add {
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Claim a test
    Assign { test_id: String },
    /// Release a test you hold
    Unassign { test_id: String },
    /// Flip the disabled flag (admin)
    Toggle { test_id: String },
    /// Disable a test (admin)
    Disable { test_id: String },
    /// Enable a test (admin)
    Enable { test_id: String },
}

/// Progress commands.
#[derive(Subcommand)]
pub enum ProgressCommand {
    /// List records, most recently updated first
    List {
        /// Only this user's records
        #[arg(long)]
        user: Option<String>,
    },
    /// Record progress on a test for `--as <USER>`
    Set {
        test_id: String,
        /// Whether the test is completed
        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        completed: bool,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Completion summary for a user
    Summary { user_id: String },
}

/// Tracker card commands.
#[derive(Subcommand)]
pub enum CardsCommand {
    /// Cards linked to a test
    List { test_id: String },
    /// Link or refresh a card
    Link {
        test_id: String,
        card_id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        url: String,
    },
    /// Remove a linked card
    Unlink { test_id: String, card_id: String },
}
