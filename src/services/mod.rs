//! # Service Facades
//!
//! Request/response shapes for the racing and sports services and the thin
//! facades that map them onto the catalog repositories. Wire names are
//! camel-case; snake-case spellings are accepted on input as aliases.

pub mod racing;
pub mod sports;

pub use racing::{
    GetRaceRequest, GetRaceResponse, ListRacesRequest, ListRacesRequestFilter, ListRacesResponse,
    Racing, RacingService,
};
pub use sports::{
    GetEventRequest, GetEventResponse, ListEventsRequest, ListEventsRequestFilter,
    ListEventsResponse, Sports, SportsService,
};
