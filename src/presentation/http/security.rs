use std::sync::Arc;

use poem::{Request, Result as PoemResult, http::StatusCode};
use poem_openapi::SecurityScheme;
use poem_openapi::auth::Bearer;

use crate::{
    domain::models::User,
    presentation::http::{endpoints::root::ApiState, errors::domain_error},
};

/// `Authorization: Bearer <jwt>`, resolved to the calling user.
///
/// Declared as the first argument of an operation, it is extracted before
/// any path, query or body parameter, so a bad token is always a 401.
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "authenticate")]
pub struct JwtAuth(pub User);

async fn authenticate(req: &Request, bearer: Bearer) -> PoemResult<User> {
    let state = req.data::<Arc<ApiState>>().ok_or_else(|| {
        poem::Error::from_string("api state is not attached", StatusCode::INTERNAL_SERVER_ERROR)
    })?;

    state
        .authenticate_usecase
        .execute(&bearer.token)
        .await
        .map_err(domain_error)
}
