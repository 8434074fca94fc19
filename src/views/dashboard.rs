use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::result_dto::{DailyStats, DashboardResponse};
use crate::models::exam_result::ExamRecord;
use crate::services::grading_service::{gate_label, ExamStatus, GradingService};
use crate::services::search_service::SearchService;
use crate::services::stats_service::StatsService;
use crate::utils::time::display_time;

/// One line of the results table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResultRow {
    pub id: i64,
    pub status: ExamStatus,
    pub status_label: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub theory_passed: bool,
    pub theory_label: String,
    pub practical_passed: bool,
    pub practical_label: String,
    pub body_passed: bool,
    pub body_label: String,
    pub created_at: DateTime<Utc>,
    pub created_at_display: String,
}

impl ResultRow {
    pub fn from_record(record: &ExamRecord, offset: Option<FixedOffset>) -> Self {
        let status = GradingService::classify(record);
        let gates = GradingService::gates(record);
        Self {
            id: record.id,
            status,
            status_label: status.label().to_string(),
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            theory_passed: gates.theory_passed,
            theory_label: gate_label(gates.theory_passed).to_string(),
            practical_passed: gates.practical_passed,
            practical_label: gate_label(gates.practical_passed).to_string(),
            body_passed: gates.body_passed,
            body_label: gate_label(gates.body_passed).to_string(),
            created_at: record.created_at,
            created_at_display: display_time(record.created_at, offset),
        }
    }
}

/// Everything the results page shows, derived from a fresh record set.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub rows: Vec<ResultRow>,
    pub daily_stats: DailyStats,
}

impl DashboardView {
    /// Stats cover every record; only the table is narrowed by `search`.
    pub fn build(records: &[ExamRecord], search: &str, offset: Option<FixedOffset>) -> Self {
        let rows = SearchService::filter_by_name(records, search)
            .into_iter()
            .map(|r| ResultRow::from_record(r, offset))
            .collect();

        Self {
            rows,
            daily_stats: StatsService::daily_stats(records, offset),
        }
    }
}

impl From<DashboardView> for DashboardResponse {
    fn from(value: DashboardView) -> Self {
        Self {
            rows: value.rows,
            daily_stats: value.daily_stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::grading_service::fixtures::passing_record;
    use chrono::NaiveDate;

    fn utc() -> Option<FixedOffset> {
        FixedOffset::east_opt(0)
    }

    #[test]
    fn search_narrows_rows_but_not_stats() {
        let records = vec![
            ExamRecord {
                id: 1,
                first_name: Some("Somchai".into()),
                ..passing_record()
            },
            ExamRecord {
                id: 2,
                first_name: Some("Malee".into()),
                practical_test_result: 0,
                ..passing_record()
            },
        ];
        let view = DashboardView::build(&records, "mal", utc());

        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].id, 2);
        assert_eq!(view.rows[0].status, ExamStatus::Failed);
        assert_eq!(view.rows[0].practical_label, "ไม่ผ่าน");

        let day = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(view.daily_stats[&day].passed, 1);
        assert_eq!(view.daily_stats[&day].failed, 1);
    }

    #[test]
    fn pending_row_still_shows_gates() {
        let record = ExamRecord {
            last_name: None,
            ..passing_record()
        };
        let row = ResultRow::from_record(&record, utc());

        assert_eq!(row.status, ExamStatus::Pending);
        assert_eq!(row.status_label, "รอพิจารณา");
        assert!(row.theory_passed && row.body_passed && row.practical_passed);
        assert_eq!(row.created_at_display, "2025-03-14 09:30:00");
    }
}
