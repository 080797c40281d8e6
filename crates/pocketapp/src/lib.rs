//! # Pocket Architecture
//!
//! Pocket is a **UI-agnostic library** for two small session-scoped tools: a
//! todo list and a user profile form. The terminal client in `crates/pocket`
//! is one possible UI; the same core could sit behind a mobile view or a web
//! page.
//!
//! Nothing is persisted. A session starts with empty state and everything is
//! gone when it ends.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI (crates/pocket)                                         │
//! │  - Reads input, renders output, asks yes/no questions       │
//! │  - Implements Confirmer and MediaPicker                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - One PocketApi per session, owns the state                │
//! │  - Normalizes inputs (display index → TodoId)               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation and state transitions                         │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session State (store/)                                     │
//! │  - TodoStore, ProfileForm                                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust values and returns Rust values. It
//! never writes to stdout/stderr, never exits the process, and never blocks
//! waiting on a user. Questions to the user go out as
//! [`confirm::PendingAction`] values; pictures come in through
//! [`media::MediaPicker`].
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`commands`]: Business logic per operation
//! - [`store`]: In-memory session state
//! - [`model`]: `TodoItem`, `UserProfile` and friends
//! - [`index`]: 1-based display indexes for todos
//! - [`confirm`]: Two-step confirmation for destructive operations
//! - [`media`]: The media picker seam
//! - [`config`]: Layered configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod confirm;
pub mod error;
pub mod index;
pub mod media;
pub mod model;
pub mod store;
