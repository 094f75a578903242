//! # Storage Layer
//!
//! The [`UserStore`] trait is the seam between the command layer and wherever the
//! users live. The only implementation is [`memory::InMemoryStore`]: users are kept
//! for the lifetime of the process and discarded on quit.
//!
//! Implementations must keep insertion order and accept duplicate names.

use crate::error::Result;
use crate::model::User;

pub mod memory;

/// Abstract interface for user storage.
pub trait UserStore {
    /// Append a user at the end of the sequence
    fn insert(&mut self, user: User) -> Result<()>;

    /// Remove the first user whose name equals `name` exactly
    fn remove_first(&mut self, name: &str) -> Result<User>;

    /// All users, in insertion order
    fn list(&self) -> Result<Vec<User>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
