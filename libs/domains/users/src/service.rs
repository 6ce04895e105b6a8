use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, User, UserFilter};
use crate::repository::UserRepository;

/// Service layer for the user directory
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List users, optionally restricted to names containing `filter_name`
    pub async fn list_users(&self, filter: UserFilter) -> UserResult<Vec<User>> {
        self.repository.list(filter).await
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: i64) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Create a user with the next free id
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        self.repository.create(input).await
    }

    /// Delete a user, returning the removed entry
    pub async fn delete_user(&self, id: i64) -> UserResult<User> {
        self.repository
            .delete(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryUserRepository, MockUserRepository};
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_get_user_maps_missing_to_not_found() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(42))
            .returning(|_| Ok(None));

        let service = UserService::new(mock_repo);
        let result = service.get_user(42).await;

        assert!(matches!(result, Err(UserError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_delete_user_maps_missing_to_not_found() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_delete()
            .with(eq(7))
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(mock_repo);
        let result = service.delete_user(7).await;

        assert!(matches!(result, Err(UserError::NotFound(7))));
    }

    #[tokio::test]
    async fn test_delete_user_returns_removed_entry() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_delete()
            .with(eq(1))
            .returning(|id| Ok(Some(User::new(id, "Alice"))));

        let service = UserService::new(mock_repo);
        let user = service.delete_user(1).await.unwrap();

        assert_eq!(user, User::new(1, "Alice"));
    }

    #[tokio::test]
    async fn test_create_user_propagates_conflict() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_create()
            .with(eq(CreateUser::new("Alice")))
            .returning(|input| Err(UserError::Conflict(input.name)));

        let service = UserService::new(mock_repo);
        let result = service.create_user(CreateUser::new("Alice")).await;

        assert!(matches!(result, Err(UserError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_list_users_passes_filter_through() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_list()
            .with(eq(UserFilter::by_name("Al")))
            .returning(|_| Ok(vec![User::new(1, "Alice")]));

        let service = UserService::new(mock_repo);
        let users = service.list_users(UserFilter::by_name("Al")).await.unwrap();

        assert_eq!(users, vec![User::new(1, "Alice")]);
    }

    #[tokio::test]
    async fn test_directory_scenario() {
        let service = UserService::new(InMemoryUserRepository::new());

        let alice = service.create_user(CreateUser::new("Alice")).await.unwrap();
        assert_eq!(alice, User::new(1, "Alice"));

        let duplicate = service.create_user(CreateUser::new("Alice")).await;
        assert!(matches!(duplicate, Err(UserError::Conflict(_))));

        let bob = service.create_user(CreateUser::new("Bob")).await.unwrap();
        assert_eq!(bob, User::new(2, "Bob"));

        let removed = service.delete_user(1).await.unwrap();
        assert_eq!(removed, User::new(1, "Alice"));
        assert!(matches!(service.get_user(1).await, Err(UserError::NotFound(1))));

        let carol = service.create_user(CreateUser::new("Carol")).await.unwrap();
        assert_eq!(carol, User::new(3, "Carol"));

        assert_eq!(service.get_user(2).await.unwrap().name, "Bob");
    }
}
