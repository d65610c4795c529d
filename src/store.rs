use parking_lot::Mutex;

use crate::{error::DirectoryError, models::User};

const SEED_NAMES: [&str; 3] = ["Alice", "Bob", "Raj"];

struct Users {
    list: Vec<User>,
    next_id: u64,
}

/// Owns the in-memory user collection. Each operation holds the lock for its
/// whole step, so concurrent requests are serialized.
pub struct UserStore {
    users: Mutex<Users>,
}

impl UserStore {
    pub fn new(names: &[&str]) -> Self {
        let list: Vec<User> = names
            .iter()
            .zip(1..)
            .map(|(name, id)| User::new(id, *name))
            .collect();
        let next_id = list.len() as u64 + 1;
        Self {
            users: Mutex::new(Users { list, next_id }),
        }
    }

    /// The collection as it exists at process start.
    pub fn seeded() -> Self {
        Self::new(&SEED_NAMES)
    }

    pub fn list(&self) -> Vec<User> {
        self.users.lock().list.clone()
    }

    /// Ids come from a counter that survives deletions, so they are never reused.
    pub fn create(&self, name: String) -> User {
        let mut users = self.users.lock();
        let user = User::new(users.next_id, name);
        users.next_id += 1;
        users.list.push(user.clone());
        user
    }

    pub fn find(&self, id: u64) -> Result<User, DirectoryError> {
        self.users
            .lock()
            .list
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound(id.to_string()))
    }

    pub fn update(&self, id: u64, name: String) -> Result<User, DirectoryError> {
        let mut users = self.users.lock();
        let user = users
            .list
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| DirectoryError::NotFound(id.to_string()))?;
        user.name = name;
        Ok(user.clone())
    }

    pub fn delete(&self, id: u64) -> Result<User, DirectoryError> {
        let mut users = self.users.lock();
        let index = users
            .list
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| DirectoryError::NotFound(id.to_string()))?;
        Ok(users.list.remove(index))
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::seeded()
    }
}
