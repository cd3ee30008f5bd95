use poem_openapi::Enum;

use crate::domain::models::Role;

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum RoleKind {
    #[oai(rename = "user")]
    User,
    #[oai(rename = "admin")]
    Admin,
    #[oai(rename = "manager")]
    Manager,
}

impl From<RoleKind> for Role {
    fn from(value: RoleKind) -> Self {
        match value {
            RoleKind::User => Role::User,
            RoleKind::Admin => Role::Admin,
            RoleKind::Manager => Role::Manager,
        }
    }
}

impl From<Role> for RoleKind {
    fn from(value: Role) -> Self {
        match value {
            Role::User => RoleKind::User,
            Role::Admin => RoleKind::Admin,
            Role::Manager => RoleKind::Manager,
        }
    }
}
