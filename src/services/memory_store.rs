use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::dto::result_dto::{CreateResultPayload, UpdateResultPayload};
use crate::error::{Error, Result};
use crate::models::exam_result::ExamRecord;
use crate::services::result_store::ResultStore;
use crate::utils::time::now;

#[derive(Debug, Default)]
struct Table {
    rows: Vec<ExamRecord>,
    last_id: i64,
}

/// Process-local store with the same semantics as the `test_results` table.
/// Ids increase monotonically and are not reused after a delete.
#[derive(Debug, Default)]
pub struct InMemoryResultStore {
    table: Mutex<Table>,
}

impl InMemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Table>> {
        self.table
            .lock()
            .map_err(|_| Error::Internal("result store mutex poisoned".to_string()))
    }
}

#[async_trait]
impl ResultStore for InMemoryResultStore {
    async fn list_all(&self) -> Result<Vec<ExamRecord>> {
        Ok(self.lock()?.rows.clone())
    }

    async fn create(&self, payload: &CreateResultPayload) -> Result<i64> {
        let mut table = self.lock()?;
        table.last_id += 1;
        let fields = payload.fields.clone();
        let record = ExamRecord {
            id: table.last_id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            color_blindness_test: fields.color_blindness_test,
            long_sightedness_test: fields.long_sightedness_test,
            astigmatism_test: fields.astigmatism_test,
            body_reaction_test: fields.body_reaction_test,
            traffic_signs_score: fields.traffic_signs_score,
            road_lines_score: fields.road_lines_score,
            right_of_way_score: fields.right_of_way_score,
            practical_test_result: fields.practical_test_result,
            vision_test_result: payload.vision_test_result,
            created_at: now(),
        };
        let id = record.id;
        table.rows.push(record);
        Ok(id)
    }

    async fn update(&self, id: i64, payload: &UpdateResultPayload) -> Result<u64> {
        let mut table = self.lock()?;
        let Some(record) = table.rows.iter_mut().find(|r| r.id == id) else {
            return Ok(0);
        };
        let fields = payload.clone();
        record.first_name = fields.first_name;
        record.last_name = fields.last_name;
        record.color_blindness_test = fields.color_blindness_test;
        record.long_sightedness_test = fields.long_sightedness_test;
        record.astigmatism_test = fields.astigmatism_test;
        record.body_reaction_test = fields.body_reaction_test;
        record.traffic_signs_score = fields.traffic_signs_score;
        record.road_lines_score = fields.road_lines_score;
        record.right_of_way_score = fields.right_of_way_score;
        record.practical_test_result = fields.practical_test_result;
        record.created_at = now();
        Ok(1)
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let mut table = self.lock()?;
        let before = table.rows.len();
        table.rows.retain(|r| r.id != id);
        Ok((before - table.rows.len()) as u64)
    }
}
