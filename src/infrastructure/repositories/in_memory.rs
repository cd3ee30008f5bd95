use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    errors::EmailTaken,
    models::{User, UserStats},
    repositories::UserRepository,
    value_objects::UserQuery,
};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn get(&self, id: &Uuid) -> anyhow::Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(EmailTaken(user.email.clone()).into());
        }
        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> anyhow::Result<()> {
        let mut users = self.users.write().await;
        if users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(EmailTaken(user.email.clone()).into());
        }
        match users.get_mut(&user.id) {
            Some(existing) => *existing = user.clone(),
            None => anyhow::bail!("user {} does not exist", user.id),
        }
        Ok(())
    }

    async fn delete(&self, id: &Uuid) -> anyhow::Result<bool> {
        let mut users = self.users.write().await;
        Ok(users.remove(id).is_some())
    }

    async fn list(&self, query: &UserQuery) -> anyhow::Result<(Vec<User>, u64)> {
        let users = self.users.read().await;
        let needle = query.search_term().map(str::to_lowercase);

        let mut matches: Vec<&User> = users
            .values()
            .filter(|u| match &needle {
                Some(needle) => {
                    u.name.to_lowercase().contains(needle.as_str())
                        || u.email.to_lowercase().contains(needle.as_str())
                }
                None => true,
            })
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let total = matches.len() as u64;
        let page = matches
            .into_iter()
            .skip(usize::try_from(query.page.offset()).unwrap_or(usize::MAX))
            .take(query.page.limit as usize)
            .cloned()
            .collect();

        Ok((page, total))
    }

    async fn stats(&self, active_since: DateTime<Utc>) -> anyhow::Result<UserStats> {
        let users = self.users.read().await;
        let total_users = users.len() as u64;
        let active_users = users
            .values()
            .filter(|u| u.is_active && u.last_login.is_some_and(|at| at >= active_since))
            .count() as u64;

        Ok(UserStats {
            total_users,
            active_users,
            inactive_users: total_users - active_users,
        })
    }
}
