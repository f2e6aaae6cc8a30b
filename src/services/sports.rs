//! Sports service

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::RepositoryError;
use crate::models::Event;
use crate::query::CatalogFilter;
use crate::repositories::EventRepository;

/// Filter applied when listing sporting events
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ListEventsRequestFilter {
    /// Only events in these categories; empty means every category
    #[serde(alias = "category_ids")]
    pub category_ids: Vec<i64>,
    /// Only visible events
    #[serde(alias = "show_visible_only")]
    pub show_visible_only: bool,
}

impl From<&ListEventsRequestFilter> for CatalogFilter {
    fn from(filter: &ListEventsRequestFilter) -> Self {
        Self {
            grouping_ids: filter.category_ids.clone(),
            visible_only: filter.show_visible_only,
        }
    }
}

/// Request for a list of sporting events
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ListEventsRequest {
    pub filter: Option<ListEventsRequestFilter>,
    /// Comma-separated `column [ASC|DESC]` list, e.g. `category_id, name`
    #[serde(alias = "order_by")]
    pub order_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListEventsResponse {
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GetEventRequest {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GetEventResponse {
    pub event: Event,
}

/// Sports service facade
#[async_trait]
pub trait Sports: Send + Sync {
    async fn list_events(
        &self,
        request: ListEventsRequest,
    ) -> Result<ListEventsResponse, RepositoryError>;

    async fn get_event(&self, request: GetEventRequest)
    -> Result<GetEventResponse, RepositoryError>;
}

/// [`Sports`] backed by an [`EventRepository`]
#[derive(Debug, Clone)]
pub struct SportsService {
    repo: Arc<EventRepository>,
}

impl SportsService {
    pub fn new(repo: Arc<EventRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl Sports for SportsService {
    async fn list_events(
        &self,
        request: ListEventsRequest,
    ) -> Result<ListEventsResponse, RepositoryError> {
        let filter = request.filter.as_ref().map(CatalogFilter::from);
        let events = self.repo.list(filter.as_ref(), &request.order_by).await?;
        Ok(ListEventsResponse { events })
    }

    async fn get_event(
        &self,
        request: GetEventRequest,
    ) -> Result<GetEventResponse, RepositoryError> {
        let event = self.repo.get(request.id).await?;
        Ok(GetEventResponse { event })
    }
}
