use std::sync::Arc;

use crate::{
    application::{
        services::password::PasswordService,
        usecases::register_user::{NewAccount, create_account},
    },
    domain::{
        errors::DomainError,
        models::{Role, User, normalize_email},
        repositories::UserRepository,
    },
};

/// Makes sure a configured administrator exists on startup.
pub struct BootstrapAdminUseCase {
    user_repo: Arc<dyn UserRepository>,
    passwords: PasswordService,
}

pub struct BootstrapAdminRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl BootstrapAdminUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>, passwords: PasswordService) -> Self {
        Self {
            user_repo,
            passwords,
        }
    }

    pub async fn execute(&self, request: BootstrapAdminRequest) -> Result<User, DomainError> {
        if let Some(existing) = self
            .user_repo
            .find_by_email(&normalize_email(&request.email))
            .await?
        {
            tracing::info!(user_id = %existing.id, "bootstrap admin already present");
            return Ok(existing);
        }

        let user = create_account(
            self.user_repo.as_ref(),
            &self.passwords,
            NewAccount {
                name: request.name,
                email: request.email,
                password: request.password,
                role: Role::Admin,
                is_active: true,
            },
        )
        .await?;
        tracing::info!(user_id = %user.id, email = %user.email, "bootstrap admin created");
        Ok(user)
    }
}
