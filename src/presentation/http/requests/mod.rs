use poem_openapi::{Object, types::Email};

use crate::presentation::models::RoleKind;

#[derive(Object, Debug)]
pub struct RegisterRequestDto {
    #[oai(validator(min_length = 1, max_length = 100))]
    pub name: String,
    pub email: Email,
    pub password: String,
}

#[derive(Object, Debug)]
pub struct LoginRequestDto {
    pub email: String,
    pub password: String,
}

#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct CreateUserRequestDto {
    #[oai(validator(min_length = 1, max_length = 100))]
    pub name: String,
    pub email: Email,
    pub password: String,
    pub role: Option<RoleKind>,
    pub is_active: Option<bool>,
}

/// Blank strings are accepted and ignored.
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct UpdateUserRequestDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<RoleKind>,
    pub is_active: Option<bool>,
}

#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct ChangePasswordRequestDto {
    pub current_password: String,
    pub new_password: String,
}
