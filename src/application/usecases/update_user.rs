use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    application::services::policy::ensure_self_or_admin,
    domain::{
        errors::DomainError,
        models::{Role, User, normalize_email},
        repositories::UserRepository,
    },
};

pub struct UpdateUserUseCase {
    user_repo: Arc<dyn UserRepository>,
}

/// Absent or blank `name`/`email` leave the stored value as is.
#[derive(Default)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
}

impl UpdateUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(
        &self,
        principal: &User,
        target_id: &Uuid,
        request: UpdateUserRequest,
    ) -> Result<User, DomainError> {
        let mut user = self
            .user_repo
            .get(target_id)
            .await?
            .ok_or_else(DomainError::user_not_found)?;

        ensure_self_or_admin(principal, target_id, "update")?;

        if !principal.is_admin() && (request.role.is_some() || request.is_active.is_some()) {
            return Err(DomainError::Forbidden(
                "Only administrators can change role or status".to_string(),
            ));
        }

        if let Some(name) = non_blank(request.name) {
            user.name = name;
        }

        if let Some(email) = non_blank(request.email).map(|e| normalize_email(&e)) {
            if !email.contains('@') {
                return Err(DomainError::Validation(
                    "A valid email is required".to_string(),
                ));
            }
            if email != user.email {
                if let Some(owner) = self.user_repo.find_by_email(&email).await? {
                    if owner.id != user.id {
                        return Err(email_in_use());
                    }
                }
                user.email = email;
            }
        }

        if let Some(role) = request.role {
            user.role = role;
        }
        if let Some(is_active) = request.is_active {
            user.is_active = is_active;
        }

        user.updated_at = Utc::now();
        self.user_repo
            .update(&user)
            .await
            .map_err(|err| DomainError::from_write(err, email_in_use))?;
        Ok(user)
    }
}

fn email_in_use() -> DomainError {
    DomainError::AlreadyExists("Email is already in use".to_string())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
