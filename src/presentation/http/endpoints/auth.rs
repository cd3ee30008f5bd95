use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use crate::{
    application::usecases::{login::LoginRequest, register_user::RegisterUserRequest},
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        errors::domain_error,
        mappers::map_user,
        requests::{LoginRequestDto, RegisterRequestDto},
        responses::{CreatedUserResponse, LoginResponseDto},
    },
};

#[derive(Clone)]
pub struct AuthEndpoints {
    state: Arc<ApiState>,
}

impl AuthEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl AuthEndpoints {
    #[oai(path = "/auth/register", method = "post", tag = EndpointsTags::Auth)]
    pub async fn register(
        &self,
        request: Json<RegisterRequestDto>,
    ) -> poem::Result<CreatedUserResponse> {
        let Json(request) = request;
        let user = self
            .state
            .register_usecase
            .execute(RegisterUserRequest {
                name: request.name,
                email: request.email.0,
                password: request.password,
            })
            .await
            .map_err(domain_error)?;

        Ok(CreatedUserResponse::Created(Json(map_user(&user))))
    }

    #[oai(path = "/auth/login", method = "post", tag = EndpointsTags::Auth)]
    pub async fn login(
        &self,
        request: Json<LoginRequestDto>,
    ) -> poem::Result<Json<LoginResponseDto>> {
        let Json(request) = request;
        let response = self
            .state
            .login_usecase
            .execute(LoginRequest {
                email: request.email,
                password: request.password,
            })
            .await
            .map_err(domain_error)?;

        Ok(Json(LoginResponseDto {
            token: response.token,
            user: map_user(&response.user),
        }))
    }
}
