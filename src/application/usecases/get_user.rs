use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{errors::DomainError, models::User, repositories::UserRepository};

pub struct GetUserUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl GetUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, user_id: &Uuid) -> Result<User, DomainError> {
        self.user_repo
            .get(user_id)
            .await?
            .ok_or_else(DomainError::user_not_found)
    }
}
