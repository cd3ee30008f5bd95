use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    models::{User, UserStats},
    value_objects::UserQuery,
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;
    async fn get(&self, id: &Uuid) -> anyhow::Result<Option<User>>;
    /// Fails with [`EmailTaken`](crate::domain::errors::EmailTaken) when the
    /// email belongs to another user; `update` does the same.
    async fn insert(&self, user: &User) -> anyhow::Result<()>;
    async fn update(&self, user: &User) -> anyhow::Result<()>;
    /// Returns `false` when no record had that id.
    async fn delete(&self, id: &Uuid) -> anyhow::Result<bool>;
    /// One page of matching users, newest first, plus the total match count.
    async fn list(&self, query: &UserQuery) -> anyhow::Result<(Vec<User>, u64)>;
    async fn stats(&self, active_since: DateTime<Utc>) -> anyhow::Result<UserStats>;
}
