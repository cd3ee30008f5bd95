use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use crate::presentation::http::{
    endpoints::root::{ApiState, EndpointsTags},
    errors::domain_error,
    mappers::map_stats,
    responses::UserStatsDto,
    security::JwtAuth,
};

#[derive(Clone)]
pub struct StatsEndpoints {
    state: Arc<ApiState>,
}

impl StatsEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl StatsEndpoints {
    /// Dashboard counters
    #[oai(path = "/stats", method = "get", tag = EndpointsTags::Stats)]
    pub async fn stats(&self, _auth: JwtAuth) -> poem::Result<Json<UserStatsDto>> {
        let stats = self
            .state
            .user_stats_usecase
            .execute()
            .await
            .map_err(domain_error)?;

        Ok(Json(map_stats(&stats)))
    }
}
