//! # Ship Routes
//!
//! - `GET    /ships`        one page of ships
//! - `GET    /ships/count`  number of matching ships
//! - `GET    /ships/:id`    one ship
//! - `POST   /ships`        create
//! - `POST   /ships/:id`    edit
//! - `DELETE /ships/:id`    delete

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::errors::RestResult;
use super::parser::{parse_filters, ListQuery};
use crate::model::{Ship, ShipPayload};
use crate::service::{parse_id, ShipService};
use crate::storage::ShipStore;

/// State shared by the ship handlers
pub struct ShipState<S: ShipStore> {
    pub service: ShipService<S>,
    pub default_page_size: NonZeroUsize,
}

impl<S: ShipStore> ShipState<S> {
    pub fn new(service: ShipService<S>, default_page_size: NonZeroUsize) -> Self {
        Self {
            service,
            default_page_size,
        }
    }
}

type SharedState<S> = Arc<ShipState<S>>;

/// Build the ship router
pub fn ship_routes<S: ShipStore + 'static>(state: SharedState<S>) -> Router {
    Router::new()
        .route("/ships", get(list_ships::<S>).post(create_ship::<S>))
        .route("/ships/count", get(count_ships::<S>))
        .route(
            "/ships/:id",
            get(get_ship::<S>).post(edit_ship::<S>).delete(delete_ship::<S>),
        )
        .with_state(state)
}

async fn list_ships<S: ShipStore + 'static>(
    State(state): State<SharedState<S>>,
    params: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> RestResult<Json<Vec<Ship>>> {
    let Query(params) = params?;
    let query = ListQuery::parse(&params, state.default_page_size)?;
    let page = state.service.list(&query.filters, &query.page)?;
    Ok(Json(page.into_content()))
}

async fn count_ships<S: ShipStore + 'static>(
    State(state): State<SharedState<S>>,
    params: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> RestResult<Json<usize>> {
    let Query(params) = params?;
    let filters = parse_filters(&params)?;
    Ok(Json(state.service.count(&filters)?))
}

async fn get_ship<S: ShipStore + 'static>(
    State(state): State<SharedState<S>>,
    Path(id): Path<String>,
) -> RestResult<Json<Ship>> {
    let id = parse_id(&id)?;
    Ok(Json(state.service.get(id)?))
}

async fn create_ship<S: ShipStore + 'static>(
    State(state): State<SharedState<S>>,
    payload: Result<Json<ShipPayload>, JsonRejection>,
) -> RestResult<Json<Ship>> {
    let Json(payload) = payload?;
    Ok(Json(state.service.create(&payload)?))
}

async fn edit_ship<S: ShipStore + 'static>(
    State(state): State<SharedState<S>>,
    Path(id): Path<String>,
    payload: Result<Json<ShipPayload>, JsonRejection>,
) -> RestResult<Json<Ship>> {
    let id = parse_id(&id)?;
    let Json(payload) = payload?;
    Ok(Json(state.service.edit(id, &payload)?))
}

async fn delete_ship<S: ShipStore + 'static>(
    State(state): State<SharedState<S>>,
    Path(id): Path<String>,
) -> RestResult<StatusCode> {
    let id = parse_id(&id)?;
    state.service.delete(id)?;
    Ok(StatusCode::OK)
}
