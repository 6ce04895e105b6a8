use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, User, UserFilter};

/// Repository trait for the user directory
///
/// Each method is a single atomic step: implementations must not let a
/// concurrent call observe or interleave with a half-finished `create`
/// or `delete`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List users matching the filter, in insertion order
    async fn list(&self, filter: UserFilter) -> UserResult<Vec<User>>;

    /// Get a user by ID
    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>>;

    /// Create a user, assigning `max(id) + 1` (or 1 when empty).
    /// Fails with `Conflict` when the name is already taken.
    async fn create(&self, input: CreateUser) -> UserResult<User>;

    /// Remove a user, returning it if it existed
    async fn delete(&self, id: i64) -> UserResult<Option<User>>;
}

/// In-memory user directory
///
/// Ids are assigned strictly above every existing id and entries are never
/// updated, so ascending key order of the map equals insertion order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<i64, String>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self, filter: UserFilter) -> UserResult<Vec<User>> {
        let users = self.users.read().await;

        let result = users
            .iter()
            .filter(|(_, name)| filter.matches(name))
            .map(|(id, name)| User::new(*id, name.clone()))
            .collect();

        Ok(result)
    }

    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).map(|name| User::new(id, name.clone())))
    }

    async fn create(&self, input: CreateUser) -> UserResult<User> {
        // Held across the duplicate check, id assignment and insert
        let mut users = self.users.write().await;

        // Exact comparison, no case folding or trimming
        if users.values().any(|name| *name == input.name) {
            return Err(UserError::Conflict(input.name));
        }

        let id = users.last_key_value().map_or(0, |(max_id, _)| *max_id) + 1;
        users.insert(id, input.name.clone());

        tracing::info!(user_id = id, name = %input.name, "Created user");
        Ok(User::new(id, input.name))
    }

    async fn delete(&self, id: i64) -> UserResult<Option<User>> {
        let mut users = self.users.write().await;

        let removed = users.remove(&id).map(|name| User::new(id, name));
        if removed.is_some() {
            tracing::info!(user_id = id, "Deleted user");
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get_user() {
        let repo = InMemoryUserRepository::new();

        let created = repo.create(CreateUser::new("Alice")).await.unwrap();
        assert_eq!(created, User::new(1, "Alice"));

        let fetched = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(User::new(1, "Alice")));
    }

    #[tokio::test]
    async fn test_duplicate_name_error() {
        let repo = InMemoryUserRepository::new();
        repo.create(CreateUser::new("Alice")).await.unwrap();

        let result = repo.create(CreateUser::new("Alice")).await;
        assert!(matches!(result, Err(UserError::Conflict(ref name)) if name == "Alice"));

        // Nothing was inserted by the failed attempt
        assert_eq!(repo.list(UserFilter::default()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_check_is_exact() {
        let repo = InMemoryUserRepository::new();
        repo.create(CreateUser::new("Alice")).await.unwrap();

        assert_eq!(repo.create(CreateUser::new("alice")).await.unwrap().id, 2);
        assert_eq!(repo.create(CreateUser::new("Alice ")).await.unwrap().id, 3);
    }

    #[tokio::test]
    async fn test_ids_skip_deleted_gaps() {
        let repo = InMemoryUserRepository::new();
        for name in ["a", "b", "c"] {
            repo.create(CreateUser::new(name)).await.unwrap();
        }

        repo.delete(2).await.unwrap();
        assert_eq!(repo.create(CreateUser::new("d")).await.unwrap().id, 4);

        repo.delete(4).await.unwrap();
        assert_eq!(repo.create(CreateUser::new("e")).await.unwrap().id, 4);
    }

    #[tokio::test]
    async fn test_ids_restart_at_one_when_emptied() {
        let repo = InMemoryUserRepository::new();
        repo.create(CreateUser::new("a")).await.unwrap();
        repo.create(CreateUser::new("b")).await.unwrap();
        repo.delete(1).await.unwrap();
        repo.delete(2).await.unwrap();

        assert_eq!(repo.create(CreateUser::new("c")).await.unwrap().id, 1);
    }

    #[tokio::test]
    async fn test_delete_missing_returns_none() {
        let repo = InMemoryUserRepository::new();
        assert_eq!(repo.delete(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order_and_filters() {
        let repo = InMemoryUserRepository::new();
        for name in ["Alice", "Bob", "Charlie"] {
            repo.create(CreateUser::new(name)).await.unwrap();
        }

        let all = repo.list(UserFilter::default()).await.unwrap();
        let names: Vec<_> = all.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Alice", "Bob", "Charlie"]);

        let filtered = repo.list(UserFilter::by_name("li")).await.unwrap();
        assert_eq!(filtered, vec![User::new(1, "Alice"), User::new(3, "Charlie")]);

        let none = repo.list(UserFilter::by_name("zed")).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let repo = InMemoryUserRepository::new();

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create(CreateUser::new(format!("user-{i}"))).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=32).collect::<Vec<i64>>());
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_creates_admit_one() {
        let repo = InMemoryUserRepository::new();

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create(CreateUser::new("Alice")).await })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                created += 1;
            }
        }

        assert_eq!(created, 1);
    }
}
