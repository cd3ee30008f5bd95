use uuid::Uuid;

use crate::domain::{
    errors::DomainError,
    models::{Role, User},
};

/// Admits the principal only when its role is one of `permitted`.
pub fn require_role(principal: &User, permitted: &[Role]) -> Result<(), DomainError> {
    if permitted.contains(&principal.role) {
        Ok(())
    } else {
        Err(DomainError::Forbidden(
            "You do not have permission to perform this action".to_string(),
        ))
    }
}

/// Admits admins, or the principal acting on its own record.
pub fn ensure_self_or_admin(
    principal: &User,
    target_id: &Uuid,
    action: &str,
) -> Result<(), DomainError> {
    if principal.is_admin() || principal.id == *target_id {
        Ok(())
    } else {
        Err(DomainError::Forbidden(format!(
            "Not authorized to {action} this user"
        )))
    }
}
