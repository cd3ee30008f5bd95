use std::sync::Arc;

use uuid::Uuid;

use crate::{
    application::services::policy::ensure_self_or_admin,
    domain::{errors::DomainError, models::User, repositories::UserRepository},
};

pub struct DeleteUserUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, principal: &User, target_id: &Uuid) -> Result<(), DomainError> {
        if self.user_repo.get(target_id).await?.is_none() {
            return Err(DomainError::user_not_found());
        }

        ensure_self_or_admin(principal, target_id, "delete")?;

        // Lost a race with a concurrent delete.
        if !self.user_repo.delete(target_id).await? {
            return Err(DomainError::user_not_found());
        }

        tracing::info!(user_id = %target_id, deleted_by = %principal.id, "user deleted");
        Ok(())
    }
}
