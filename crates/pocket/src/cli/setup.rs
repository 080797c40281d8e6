use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pocket",
    bin_name = "pocket",
    version,
    disable_help_subcommand = true,
    after_help = "Sessions read one command per line from stdin. Nothing is saved.\nTry:  printf 'add Buy milk\\nlist\\n' | pocket todo"
)]
#[command(about = "A todo list and profile editor that forgets everything when you quit", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Read configuration from this file
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start a todo list session
    #[command(alias = "t", display_order = 1)]
    Todo,

    /// Start a profile editing session
    #[command(alias = "p", display_order = 2)]
    Profile,

    /// Show the resolved configuration
    #[command(display_order = 3)]
    Config,
}

/// One line typed into a todo session.
#[derive(Parser, Debug)]
#[command(
    name = "todo",
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
pub struct TodoLine {
    #[command(subcommand)]
    pub command: TodoCommand,
}

#[derive(Subcommand, Debug)]
pub enum TodoCommand {
    /// Add a todo to the top of the list
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Todo text, stored as typed apart from surrounding spaces
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Mark a todo done, or not done again
    #[command(alias = "t", display_order = 2)]
    Toggle {
        /// Index of the todo (e.g. 1)
        index: String,
    },

    /// Delete a todo (asks first)
    #[command(alias = "rm", display_order = 3)]
    Delete {
        /// Index of the todo (e.g. 1)
        index: String,
    },

    /// Delete all completed todos (asks first)
    #[command(display_order = 4)]
    Clear,

    /// List todos, newest first
    #[command(alias = "ls", display_order = 5)]
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show this help
    #[command(display_order = 6)]
    Help,

    /// End the session
    #[command(alias = "q", alias = "exit", display_order = 7)]
    Quit,
}

/// One line typed into a profile session.
#[derive(Parser, Debug)]
#[command(
    name = "profile",
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
pub struct ProfileLine {
    #[command(subcommand)]
    pub command: ProfileCommand,
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Set a field: name, email, bio, location or phone
    #[command(display_order = 1)]
    Set {
        field: String,

        /// New value, stored exactly as typed (omit to clear)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },

    /// Check required fields and switch to view mode
    #[command(display_order = 2)]
    Save,

    /// Switch to edit mode
    #[command(display_order = 3)]
    Edit,

    /// Switch between edit and view mode without saving
    #[command(display_order = 4)]
    Toggle,

    /// Show the profile
    #[command(alias = "ls", display_order = 5)]
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set the profile picture from the camera or the photo library
    #[command(display_order = 6)]
    Photo {
        /// camera or library
        source: String,
    },

    /// Show camera and photo library permission status
    #[command(display_order = 7)]
    Permissions,

    /// Show this help
    #[command(display_order = 8)]
    Help,

    /// End the session
    #[command(alias = "q", alias = "exit", display_order = 9)]
    Quit,
}

pub fn todo_help() -> String {
    TodoLine::command().render_help().to_string()
}

pub fn profile_help() -> String {
    ProfileLine::command().render_help().to_string()
}

/// Splits a session line into words. Blank lines and `//` comments yield
/// nothing.
pub fn split_line(line: &str) -> Vec<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with("//") {
        return Vec::new();
    }
    trimmed.split_whitespace().collect()
}

/// The raw text after the first `words` words of `line` and the single
/// separator that follows them. Spacing inside the rest is kept as typed.
pub fn rest_of_line(line: &str, words: usize) -> &str {
    let mut rest = line;
    for _ in 0..words {
        rest = rest.trim_start();
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        rest = &rest[end..];
    }
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => chars.as_str(),
        _ => rest,
    }
}
