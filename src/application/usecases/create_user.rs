use std::sync::Arc;

use crate::{
    application::{
        services::{password::PasswordService, policy::require_role},
        usecases::register_user::{NewAccount, create_account},
    },
    domain::{
        errors::DomainError,
        models::{Role, User},
        repositories::UserRepository,
    },
};

pub struct CreateUserUseCase {
    user_repo: Arc<dyn UserRepository>,
    passwords: PasswordService,
}

pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
}

impl CreateUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>, passwords: PasswordService) -> Self {
        Self {
            user_repo,
            passwords,
        }
    }

    pub async fn execute(
        &self,
        principal: &User,
        request: CreateUserRequest,
    ) -> Result<User, DomainError> {
        require_role(principal, &[Role::Admin])?;

        let user = create_account(
            self.user_repo.as_ref(),
            &self.passwords,
            NewAccount {
                name: request.name,
                email: request.email,
                password: request.password,
                role: request.role.unwrap_or_default(),
                is_active: request.is_active.unwrap_or(true),
            },
        )
        .await?;

        tracing::info!(user_id = %user.id, created_by = %principal.id, "user created");
        Ok(user)
    }
}
