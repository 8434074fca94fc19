use std::sync::Arc;

use chrono::FixedOffset;
use tracing::{debug, info};

use crate::dto::result_dto::{CreateResultPayload, DailyStats, UpdateResultPayload};
use crate::error::Result;
use crate::models::exam_result::ExamRecord;
use crate::services::result_store::ResultStore;
use crate::services::stats_service::StatsService;
use crate::views::dashboard::DashboardView;

#[derive(Clone)]
pub struct ResultService {
    store: Arc<dyn ResultStore>,
    stats_offset: Option<FixedOffset>,
}

impl ResultService {
    pub fn new(store: Arc<dyn ResultStore>, stats_offset: Option<FixedOffset>) -> Self {
        Self {
            store,
            stats_offset,
        }
    }

    pub async fn list_all(&self) -> Result<Vec<ExamRecord>> {
        let records = self.store.list_all().await?;
        debug!(count = records.len(), "listed exam results");
        Ok(records)
    }

    pub async fn create(&self, payload: CreateResultPayload) -> Result<i64> {
        let id = self.store.create(&payload.normalized()).await?;
        info!(id, "exam result created");
        Ok(id)
    }

    pub async fn update(&self, id: i64, payload: UpdateResultPayload) -> Result<u64> {
        let affected = self.store.update(id, &payload.normalized()).await?;
        info!(id, affected, "exam result updated");
        Ok(affected)
    }

    pub async fn delete(&self, id: i64) -> Result<u64> {
        let affected = self.store.delete(id).await?;
        info!(id, affected, "exam result deleted");
        Ok(affected)
    }

    pub async fn daily_stats(&self) -> Result<DailyStats> {
        let records = self.list_all().await?;
        Ok(StatsService::daily_stats(&records, self.stats_offset))
    }

    pub async fn dashboard(&self, search: &str) -> Result<DashboardView> {
        let records = self.list_all().await?;
        Ok(DashboardView::build(&records, search, self.stats_offset))
    }
}
