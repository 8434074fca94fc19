use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::dto::result_dto::{
    CreateResultPayload, CreatedResponse, DashboardResponse, MutationResponse,
    UpdateResultPayload,
};
use crate::models::exam_result::ExamRecord;
use crate::services::grading_service::ExamStatus;
use crate::services::stats_service::DailyTally;
use crate::views::dashboard::ResultRow;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::results::list_results,
        crate::routes::results::create_result,
        crate::routes::results::update_result,
        crate::routes::results::delete_result,
        crate::routes::results::daily_stats,
        crate::routes::results::dashboard,
    ),
    components(schemas(
        ExamRecord,
        CreateResultPayload,
        UpdateResultPayload,
        CreatedResponse,
        MutationResponse,
        DashboardResponse,
        ResultRow,
        ExamStatus,
        DailyTally,
    )),
    tags((name = "results", description = "Driving-license exam results"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
