//! # API Facade
//!
//! A **thin facade** over the command layer and the single entry point the prompt loop
//! talks to. It dispatches to `commands/*.rs` and returns their `Result<CmdResult>`
//! untouched; no business logic and no I/O live here.
//!
//! `UsersApi<S: UserStore>` is generic over the storage backend so the session can be
//! exercised against any store.

use crate::commands;
use crate::error::Result;
use crate::model::UserCandidate;
use crate::store::UserStore;

pub struct UsersApi<S: UserStore> {
    store: S,
}

impl<S: UserStore> UsersApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_users(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn add_user(&mut self, candidate: &UserCandidate) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, candidate)
    }

    pub fn remove_user(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, name)
    }

    pub fn user_count(&self) -> usize {
        self.store.len()
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
