//! Expense API endpoints.
//!
//! Extractor rejections are reported through [`ServerError::Generic`] so
//! every error body has the same shape.

use api_types::gasto::{Gasto, GastoCount, GastoListResponse, GastoNew, GastoQuery, GastoUpdate};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use engine::GastoPatch;

use crate::{ServerError, server::ServerState};

const DEFAULT_LIMIT: u64 = 50;

fn map_gasto(gasto: engine::Gasto) -> Gasto {
    Gasto {
        id: gasto.id,
        descripcion: gasto.descripcion,
        monto: gasto.monto,
        fecha: gasto.fecha,
        categoria: gasto.categoria,
        tipo_pago: gasto.tipo_pago,
        comercio: gasto.comercio,
    }
}

fn map_new(payload: GastoNew) -> engine::Gasto {
    engine::Gasto {
        id: 0,
        descripcion: payload.descripcion,
        monto: payload.monto,
        fecha: payload.fecha,
        categoria: payload.categoria,
        tipo_pago: payload.tipo_pago,
        comercio: payload.comercio,
    }
}

fn map_update(payload: GastoUpdate) -> GastoPatch {
    GastoPatch {
        descripcion: payload.descripcion,
        monto: payload.monto,
        fecha: payload.fecha,
        categoria: payload.categoria,
        comercio: payload.comercio,
        tipo_pago: payload.tipo_pago,
    }
}

fn path_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ServerError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| ServerError::Generic(rejection.body_text()))
}

pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Gasto>, ServerError> {
    let id = path_id(id)?;
    let gasto = state.engine.get(id).await?;
    Ok(Json(map_gasto(gasto)))
}

pub async fn count(State(state): State<ServerState>) -> Result<Json<GastoCount>, ServerError> {
    let count = state.engine.count().await?;
    Ok(Json(GastoCount { count }))
}

/// Every expense, or one page of them when `offset` or `limit` is given.
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<GastoQuery>, QueryRejection>,
) -> Result<Json<GastoListResponse>, ServerError> {
    let Query(query) = query.map_err(|rejection| ServerError::Generic(rejection.body_text()))?;

    for (name, value) in [("offset", query.offset), ("limit", query.limit)] {
        if value.is_some_and(|value| i64::try_from(value).is_err()) {
            return Err(ServerError::Generic(format!(
                "{name} must not exceed {}",
                i64::MAX
            )));
        }
    }

    let gastos = match (query.offset, query.limit) {
        (None, None) => state.engine.get_all().await?,
        (offset, limit) => {
            state
                .engine
                .query(offset.unwrap_or(0), limit.unwrap_or(DEFAULT_LIMIT))
                .await?
        }
    };

    Ok(Json(GastoListResponse {
        gastos: gastos.into_iter().map(map_gasto).collect(),
    }))
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<GastoNew>, JsonRejection>,
) -> Result<(StatusCode, Json<Gasto>), ServerError> {
    let Json(payload) = payload.map_err(|rejection| ServerError::Generic(rejection.body_text()))?;

    let gasto = state.engine.create(map_new(payload)).await?;
    tracing::info!(id = gasto.id, "gasto created");

    Ok((StatusCode::CREATED, Json(map_gasto(gasto))))
}

pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<GastoUpdate>, JsonRejection>,
) -> Result<Json<Gasto>, ServerError> {
    let id = path_id(id)?;
    let Json(payload) = payload.map_err(|rejection| ServerError::Generic(rejection.body_text()))?;

    let gasto = state.engine.update(id, map_update(payload)).await?;
    Ok(Json(map_gasto(gasto)))
}

pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ServerError> {
    let id = path_id(id)?;
    state.engine.delete(id).await?;
    tracing::info!(id, "gasto deleted");

    Ok(StatusCode::NO_CONTENT)
}
