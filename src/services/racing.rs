//! Racing service

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::RepositoryError;
use crate::models::Race;
use crate::query::CatalogFilter;
use crate::repositories::RaceRepository;

/// Filter applied when listing races
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ListRacesRequestFilter {
    /// Only races from these meetings; empty means every meeting
    #[serde(alias = "meeting_ids")]
    pub meeting_ids: Vec<i64>,
    /// Only visible races
    #[serde(alias = "show_visible_only")]
    pub show_visible_only: bool,
}

impl From<&ListRacesRequestFilter> for CatalogFilter {
    fn from(filter: &ListRacesRequestFilter) -> Self {
        Self {
            grouping_ids: filter.meeting_ids.clone(),
            visible_only: filter.show_visible_only,
        }
    }
}

/// Request for a list of races
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ListRacesRequest {
    pub filter: Option<ListRacesRequestFilter>,
    /// Comma-separated `column [ASC|DESC]` list, e.g. `meeting_id, name DESC`
    #[serde(alias = "order_by")]
    pub order_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListRacesResponse {
    pub races: Vec<Race>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GetRaceRequest {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GetRaceResponse {
    pub race: Race,
}

/// Racing service facade
#[async_trait]
pub trait Racing: Send + Sync {
    /// Lists races matching the request filter
    async fn list_races(&self, request: ListRacesRequest)
    -> Result<ListRacesResponse, RepositoryError>;

    /// Fetches a single race by id
    async fn get_race(&self, request: GetRaceRequest) -> Result<GetRaceResponse, RepositoryError>;
}

/// [`Racing`] backed by a [`RaceRepository`]
#[derive(Debug, Clone)]
pub struct RacingService {
    repo: Arc<RaceRepository>,
}

impl RacingService {
    pub fn new(repo: Arc<RaceRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl Racing for RacingService {
    async fn list_races(
        &self,
        request: ListRacesRequest,
    ) -> Result<ListRacesResponse, RepositoryError> {
        let filter = request.filter.as_ref().map(CatalogFilter::from);
        let races = self.repo.list(filter.as_ref(), &request.order_by).await?;
        Ok(ListRacesResponse { races })
    }

    async fn get_race(&self, request: GetRaceRequest) -> Result<GetRaceResponse, RepositoryError> {
        let race = self.repo.get(request.id).await?;
        Ok(GetRaceResponse { race })
    }
}
