use super::UserStore;
use crate::error::{Result, UsersError};
use crate::model::User;

/// Ordered in-memory storage. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: Vec<User>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryStore {
    fn insert(&mut self, user: User) -> Result<()> {
        log::debug!("store: inserting {:?} at position {}", user.name, self.users.len());
        self.users.push(user);
        Ok(())
    }

    fn remove_first(&mut self, name: &str) -> Result<User> {
        let position = self
            .users
            .iter()
            .position(|u| u.name == name)
            .ok_or_else(|| UsersError::UserNotFound(name.to_string()))?;
        log::debug!("store: removing {:?} from position {}", name, position);
        Ok(self.users.remove(position))
    }

    fn list(&self) -> Result<Vec<User>> {
        Ok(self.users.clone())
    }

    fn len(&self) -> usize {
        self.users.len()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_user(mut self, name: &str, age: u32) -> Self {
            self.store
                .insert(User {
                    name: name.to_string(),
                    age: f64::from(age),
                })
                .unwrap();
            self
        }

        pub fn with_users(mut self, count: usize) -> Self {
            for i in 0..count {
                self = self.with_user(&format!("User {}", i + 1), 20 + i as u32);
            }
            self
        }
    }
}
