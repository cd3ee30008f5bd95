use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use crate::{
    application::usecases::{
        change_password::ChangePasswordRequest, create_user::CreateUserRequest,
        update_user::UpdateUserRequest,
    },
    domain::{
        errors::DomainError,
        value_objects::{PageRequest, UserQuery},
    },
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        errors::domain_error,
        mappers::{map_page, map_user},
        requests::{ChangePasswordRequestDto, CreateUserRequestDto, UpdateUserRequestDto},
        responses::{CreatedUserResponse, MessageDto, UserDto, UserListDto},
        security::JwtAuth,
    },
};

#[derive(Clone)]
pub struct UsersEndpoints {
    state: Arc<ApiState>,
}

impl UsersEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl UsersEndpoints {
    /// Current user
    #[oai(path = "/users/me", method = "get", tag = EndpointsTags::Users)]
    pub async fn me(&self, JwtAuth(principal): JwtAuth) -> Json<UserDto> {
        Json(map_user(&principal))
    }

    /// Delete own account
    #[oai(path = "/users/me", method = "delete", tag = EndpointsTags::Users)]
    pub async fn delete_me(
        &self,
        JwtAuth(principal): JwtAuth,
    ) -> poem::Result<Json<MessageDto>> {
        self.state
            .delete_user_usecase
            .execute(&principal, &principal.id)
            .await
            .map_err(domain_error)?;

        Ok(Json(MessageDto::new("Account deleted successfully")))
    }

    #[oai(path = "/users", method = "get", tag = EndpointsTags::Users)]
    pub async fn list_users(
        &self,
        _auth: JwtAuth,
        page: Query<Option<String>>,
        limit: Query<Option<String>>,
        search: Query<Option<String>>,
    ) -> poem::Result<Json<UserListDto>> {
        let query = UserQuery {
            page: PageRequest::parse(page.0.as_deref(), limit.0.as_deref()),
            search: search.0,
        };
        let page = self
            .state
            .list_users_usecase
            .execute(query)
            .await
            .map_err(domain_error)?;

        Ok(Json(map_page(&page)))
    }

    /// Admin only
    #[oai(path = "/users", method = "post", tag = EndpointsTags::Users)]
    pub async fn create_user(
        &self,
        JwtAuth(principal): JwtAuth,
        request: Json<CreateUserRequestDto>,
    ) -> poem::Result<CreatedUserResponse> {
        let Json(request) = request;

        let user = self
            .state
            .create_user_usecase
            .execute(
                &principal,
                CreateUserRequest {
                    name: request.name,
                    email: request.email.0,
                    password: request.password,
                    role: request.role.map(Into::into),
                    is_active: request.is_active,
                },
            )
            .await
            .map_err(domain_error)?;

        Ok(CreatedUserResponse::Created(Json(map_user(&user))))
    }

    #[oai(path = "/users/password", method = "put", tag = EndpointsTags::Users)]
    pub async fn change_password(
        &self,
        JwtAuth(principal): JwtAuth,
        request: Json<ChangePasswordRequestDto>,
    ) -> poem::Result<Json<MessageDto>> {
        let Json(request) = request;

        self.state
            .change_password_usecase
            .execute(
                &principal,
                ChangePasswordRequest {
                    current_password: request.current_password,
                    new_password: request.new_password,
                },
            )
            .await
            .map_err(domain_error)?;

        Ok(Json(MessageDto::new("Password updated successfully")))
    }

    #[oai(path = "/users/:id", method = "get", tag = EndpointsTags::Users)]
    pub async fn get_user(&self, _auth: JwtAuth, id: Path<String>) -> poem::Result<Json<UserDto>> {
        let user_id = parse_user_id(&id.0)?;

        let user = self
            .state
            .get_user_usecase
            .execute(&user_id)
            .await
            .map_err(domain_error)?;

        Ok(Json(map_user(&user)))
    }

    #[oai(path = "/users/:id", method = "put", tag = EndpointsTags::Users)]
    pub async fn update_user(
        &self,
        JwtAuth(principal): JwtAuth,
        id: Path<String>,
        request: Json<UpdateUserRequestDto>,
    ) -> poem::Result<Json<UserDto>> {
        let user_id = parse_user_id(&id.0)?;
        let Json(request) = request;

        let user = self
            .state
            .update_user_usecase
            .execute(
                &principal,
                &user_id,
                UpdateUserRequest {
                    name: request.name,
                    email: request.email,
                    role: request.role.map(Into::into),
                    is_active: request.is_active,
                },
            )
            .await
            .map_err(domain_error)?;

        Ok(Json(map_user(&user)))
    }

    #[oai(path = "/users/:id", method = "delete", tag = EndpointsTags::Users)]
    pub async fn delete_user(
        &self,
        JwtAuth(principal): JwtAuth,
        id: Path<String>,
    ) -> poem::Result<Json<MessageDto>> {
        let user_id = parse_user_id(&id.0)?;

        self.state
            .delete_user_usecase
            .execute(&principal, &user_id)
            .await
            .map_err(domain_error)?;

        Ok(Json(MessageDto::new("User deleted successfully")))
    }
}

/// Ids that are not UUIDs cannot name a stored user.
fn parse_user_id(raw: &str) -> poem::Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| domain_error(DomainError::user_not_found()))
}
