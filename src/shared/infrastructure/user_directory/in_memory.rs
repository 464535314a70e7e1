use crate::modules::time_entries::core::entry::UserRef;
use crate::shared::infrastructure::user_directory::{UserDirectory, UserDirectoryError};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Users keyed by lower-cased email.
#[derive(Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<String, UserRef>>,
    is_offline: bool,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = UserRef>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.email.to_lowercase(), user))
            .collect();
        Self {
            users: RwLock::new(users),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn insert(&self, user: UserRef) {
        self.users
            .write()
            .await
            .insert(user.email.to_lowercase(), user);
    }

    fn ensure_online(&self) -> Result<(), UserDirectoryError> {
        if self.is_offline {
            return Err(UserDirectoryError::Backend("User directory offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRef>, UserDirectoryError> {
        self.ensure_online()?;
        Ok(self
            .users
            .read()
            .await
            .get(&email.trim().to_lowercase())
            .cloned())
    }

    async fn find_user_ids_by_emails(
        &self,
        emails: &[String],
    ) -> Result<Vec<i64>, UserDirectoryError> {
        self.ensure_online()?;
        let guard = self.users.read().await;
        let mut ids: Vec<i64> = Vec::new();
        for user in emails
            .iter()
            .filter_map(|email| guard.get(&email.trim().to_lowercase()))
        {
            if !ids.contains(&user.user_id) {
                ids.push(user.user_id);
            }
        }
        Ok(ids)
    }
}

#[cfg(test)]
mod in_memory_user_directory_tests {
    use super::*;
    use crate::tests::fixtures::entries::make_user;
    use rstest::{fixture, rstest};

    #[fixture]
    fn before_each() -> InMemoryUserDirectory {
        InMemoryUserDirectory::with_users([make_user()])
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_resolve_users_case_insensitively(before_each: InMemoryUserDirectory) {
        let user = before_each
            .find_by_email(" Jane.Doe@Example.com ")
            .await
            .unwrap();
        assert_eq!(user, Some(make_user()));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_skip_unknown_and_duplicate_emails(before_each: InMemoryUserDirectory) {
        before_each
            .insert(UserRef {
                user_id: 2,
                email: "john@example.com".into(),
                first_name: "John".into(),
                last_name: "Roe".into(),
            })
            .await;

        let ids = before_each
            .find_user_ids_by_emails(&[
                "john@example.com".into(),
                "nobody@example.com".into(),
                "jane.doe@example.com".into(),
                "JOHN@example.com".into(),
            ])
            .await
            .unwrap();
        assert_eq!(ids, vec![2, 1]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_directory_is_offline(mut before_each: InMemoryUserDirectory) {
        before_each.toggle_offline();
        let result = before_each.find_by_email("jane.doe@example.com").await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("User directory offline")
        );
    }
}
