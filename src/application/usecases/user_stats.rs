use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domain::{errors::DomainError, models::UserStats, repositories::UserRepository};

/// Users who logged in within this many days count as active.
pub const ACTIVE_WINDOW_DAYS: i64 = 30;

pub struct UserStatsUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl UserStatsUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self) -> Result<UserStats, DomainError> {
        let active_since = Utc::now() - Duration::days(ACTIVE_WINDOW_DAYS);
        Ok(self.user_repo.stats(active_since).await?)
    }
}
