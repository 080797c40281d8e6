//! # Pocket CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, and this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/pocket/src/cli/)                         │
//! │  - clap parsing of arguments and session lines (setup.rs)   │
//! │  - Session loops + dispatch (commands.rs)                   │
//! │  - Prompts, confirmer, media picker (terminal.rs)           │
//! │  - Colored output (render.rs)                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/pocketapp/src/api.rs)                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Sessions
//!
//! `pocket todo` and `pocket profile` each start a session that reads one
//! command per line from stdin until `quit` or end of input. The session's
//! state lives only as long as the process. Piping a script works the same
//! as typing: confirmation answers are simply the next line.
//!
//! ## Testing Approach
//!
//! - Library behavior is tested in `pocketapp`.
//! - Rendering is tested here on canned values (`render.rs`).
//! - End-to-end sessions are driven through `assert_cmd` in `tests/`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
