use std::sync::Arc;

use chrono::Utc;

use crate::{
    application::services::{
        jwt::{JwtService, JwtServiceConfig},
        password::PasswordService,
    },
    domain::{
        errors::DomainError,
        models::{User, normalize_email},
        repositories::UserRepository,
    },
};

pub struct LoginUseCase {
    user_repo: Arc<dyn UserRepository>,
    passwords: PasswordService,
    jwt: JwtService,
}

pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

impl LoginUseCase {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        passwords: PasswordService,
        jwt_config: JwtServiceConfig,
    ) -> Self {
        let jwt = JwtService::new(jwt_config);
        Self {
            user_repo,
            passwords,
            jwt,
        }
    }

    pub async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, DomainError> {
        let email = normalize_email(&request.email);
        let Some(mut user) = self.user_repo.find_by_email(&email).await? else {
            self.passwords.verify_dummy(&request.password).await?;
            tracing::warn!(%email, "login for unknown email");
            return Err(invalid_credentials());
        };

        if !self
            .passwords
            .verify(&request.password, &user.password_hash)
            .await?
        {
            tracing::warn!(user_id = %user.id, "login with wrong password");
            return Err(invalid_credentials());
        }

        if !user.is_active {
            return Err(DomainError::Forbidden("Account is deactivated".to_string()));
        }

        user.last_login = Some(Utc::now());
        self.user_repo.update(&user).await?;

        let token = self.jwt.issue(&user)?;
        tracing::info!(user_id = %user.id, "user logged in");
        Ok(LoginResponse { token, user })
    }
}

fn invalid_credentials() -> DomainError {
    DomainError::Unauthenticated("Invalid credentials".to_string())
}
