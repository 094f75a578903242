//! # UsersApp Architecture
//!
//! UsersApp keeps an in-memory list of users and lets an operator manage it from an
//! interactive prompt. The core is a small library; the prompt loop is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, renders, runs the loop        │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - list / add / remove logic, returns `CmdResult`           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `UserStore` trait, `InMemoryStore`                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in Core
//!
//! From `api.rs` inward, code takes plain arguments and returns `Result<CmdResult>`.
//! Outcomes are carried as leveled [`commands::CmdMessage`]s; styling them is the
//! renderer's job, not the store's.
//!
//! ## Module Overview
//!
//! - [`action`]: Top-level prompt actions (list, add, remove, help, quit)
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each action
//! - [`config`]: Configuration file handling
//! - [`error`]: Error types
//! - [`model`]: `User`, `UserCandidate` and validation
//! - [`store`]: Storage abstraction and the in-memory implementation

pub mod action;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
