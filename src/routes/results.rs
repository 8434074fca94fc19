use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::result_dto::{
        CreateResultPayload, CreatedResponse, DashboardQuery, DashboardResponse,
        MutationResponse, UpdateResultPayload,
    },
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/results",
    responses(
        (status = 200, description = "All exam results, unfiltered", body = [crate::models::exam_result::ExamRecord]),
        (status = 500, description = "Database error")
    )
)]
#[axum::debug_handler]
pub async fn list_results(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let records = state.result_service.list_all().await?;
    Ok(Json(records))
}

#[utoipa::path(
    post,
    path = "/api/results",
    request_body = CreateResultPayload,
    responses(
        (status = 200, description = "Exam result stored", body = CreatedResponse),
        (status = 500, description = "Database error")
    )
)]
#[axum::debug_handler]
pub async fn create_result(
    State(state): State<AppState>,
    Json(payload): Json<CreateResultPayload>,
) -> Result<impl IntoResponse> {
    let id = state.result_service.create(payload).await?;
    Ok(Json(CreatedResponse { id }))
}

#[utoipa::path(
    put,
    path = "/api/results/{id}",
    params(
        ("id" = i64, Path, description = "Exam result ID")
    ),
    request_body = UpdateResultPayload,
    responses(
        (status = 200, description = "Update applied; zero rows when the id is unknown", body = MutationResponse),
        (status = 500, description = "Database error")
    )
)]
#[axum::debug_handler]
pub async fn update_result(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateResultPayload>,
) -> Result<impl IntoResponse> {
    let affected_rows = state.result_service.update(id, payload).await?;
    Ok(Json(MutationResponse { affected_rows }))
}

#[utoipa::path(
    delete,
    path = "/api/results/{id}",
    params(
        ("id" = i64, Path, description = "Exam result ID")
    ),
    responses(
        (status = 200, description = "Delete applied; zero rows when the id is unknown", body = MutationResponse),
        (status = 500, description = "Database error")
    )
)]
#[axum::debug_handler]
pub async fn delete_result(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let affected_rows = state.result_service.delete(id).await?;
    Ok(Json(MutationResponse { affected_rows }))
}

#[utoipa::path(
    get,
    path = "/api/results/stats",
    responses(
        (status = 200, description = "Passed/failed counts per calendar date"),
        (status = 500, description = "Database error")
    )
)]
#[axum::debug_handler]
pub async fn daily_stats(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let stats = state.result_service.daily_stats().await?;
    Ok(Json(stats))
}

#[utoipa::path(
    get,
    path = "/api/results/dashboard",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive first/last name filter")
    ),
    responses(
        (status = 200, description = "Table rows and daily stats", body = DashboardResponse),
        (status = 500, description = "Database error")
    )
)]
#[axum::debug_handler]
pub async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<impl IntoResponse> {
    let search = query.search.unwrap_or_default();
    let view = state.result_service.dashboard(&search).await?;
    Ok(Json(DashboardResponse::from(view)))
}
