use poem_openapi::{ApiResponse, Object, payload::Json};
use uuid::Uuid;

use crate::presentation::models::RoleKind;

#[derive(Object)]
#[oai(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: RoleKind,
    pub is_active: bool,
    pub last_login: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Object)]
#[oai(rename_all = "camelCase")]
pub struct UserListDto {
    pub users: Vec<UserDto>,
    pub current_page: u32,
    pub total_pages: u64,
    pub total_users: u64,
}

#[derive(Object)]
pub struct LoginResponseDto {
    pub token: String,
    pub user: UserDto,
}

#[derive(Object)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Object)]
#[oai(rename_all = "camelCase")]
pub struct UserStatsDto {
    pub total_users: u64,
    pub active_users: u64,
    pub inactive_users: u64,
}

#[derive(ApiResponse)]
pub enum CreatedUserResponse {
    #[oai(status = 201)]
    Created(Json<UserDto>),
}
