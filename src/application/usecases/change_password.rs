use std::sync::Arc;

use chrono::Utc;

use crate::{
    application::{
        services::password::PasswordService, usecases::register_user::validate_password,
    },
    domain::{errors::DomainError, models::User, repositories::UserRepository},
};

pub struct ChangePasswordUseCase {
    user_repo: Arc<dyn UserRepository>,
    passwords: PasswordService,
}

pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

impl ChangePasswordUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>, passwords: PasswordService) -> Self {
        Self {
            user_repo,
            passwords,
        }
    }

    pub async fn execute(
        &self,
        principal: &User,
        request: ChangePasswordRequest,
    ) -> Result<(), DomainError> {
        let mut user = self
            .user_repo
            .get(&principal.id)
            .await?
            .ok_or_else(|| DomainError::Unauthenticated("User not found".to_string()))?;

        if !self
            .passwords
            .verify(&request.current_password, &user.password_hash)
            .await?
        {
            tracing::warn!(user_id = %user.id, "password change with wrong current password");
            return Err(DomainError::Unauthenticated(
                "Current password is incorrect".to_string(),
            ));
        }

        validate_password(&request.new_password)?;

        user.password_hash = self.passwords.hash(&request.new_password).await?;
        user.updated_at = Utc::now();
        self.user_repo.update(&user).await?;
        tracing::info!(user_id = %user.id, "password changed");
        Ok(())
    }
}
