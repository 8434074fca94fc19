use async_trait::async_trait;
use sqlx::PgPool;

use crate::dto::result_dto::{CreateResultPayload, UpdateResultPayload};
use crate::error::Result;
use crate::models::exam_result::ExamRecord;

const SELECT_COLUMNS: &str = "id, first_name, last_name, color_blindness_test, long_sightedness_test, astigmatism_test, body_reaction_test, traffic_signs_score, road_lines_score, right_of_way_score, practical_test_result, vision_test_result, created_at";

/// Persistence of exam records. Every call touches a single row, so no
/// transactions are involved.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResultStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<ExamRecord>>;

    /// Returns the id assigned to the new row.
    async fn create(&self, payload: &CreateResultPayload) -> Result<i64>;

    /// Overwrites every field except `vision_test_result` and resets
    /// `created_at`. Returns the number of rows touched.
    async fn update(&self, id: i64, payload: &UpdateResultPayload) -> Result<u64>;

    async fn delete(&self, id: i64) -> Result<u64>;
}

#[derive(Clone)]
pub struct PgResultStore {
    pool: PgPool,
}

impl PgResultStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResultStore for PgResultStore {
    async fn list_all(&self) -> Result<Vec<ExamRecord>> {
        let query = format!("SELECT {} FROM test_results", SELECT_COLUMNS);
        let items = sqlx::query_as::<_, ExamRecord>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    async fn create(&self, payload: &CreateResultPayload) -> Result<i64> {
        let fields = &payload.fields;
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO test_results (
                first_name, last_name,
                color_blindness_test, long_sightedness_test, astigmatism_test, body_reaction_test,
                traffic_signs_score, road_lines_score, right_of_way_score,
                practical_test_result, vision_test_result
            ) VALUES (
                $1,$2,
                $3,$4,$5,$6,
                $7,$8,$9,
                $10,$11
            )
            RETURNING id
            "#,
        )
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(fields.color_blindness_test)
        .bind(fields.long_sightedness_test)
        .bind(fields.astigmatism_test)
        .bind(fields.body_reaction_test)
        .bind(fields.traffic_signs_score)
        .bind(fields.road_lines_score)
        .bind(fields.right_of_way_score)
        .bind(fields.practical_test_result)
        .bind(payload.vision_test_result)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update(&self, id: i64, payload: &UpdateResultPayload) -> Result<u64> {
        let res = sqlx::query(
            r#"
            UPDATE test_results
            SET
                first_name = $2,
                last_name = $3,
                color_blindness_test = $4,
                long_sightedness_test = $5,
                astigmatism_test = $6,
                body_reaction_test = $7,
                traffic_signs_score = $8,
                road_lines_score = $9,
                right_of_way_score = $10,
                practical_test_result = $11,
                created_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&payload.first_name)
        .bind(&payload.last_name)
        .bind(payload.color_blindness_test)
        .bind(payload.long_sightedness_test)
        .bind(payload.astigmatism_test)
        .bind(payload.body_reaction_test)
        .bind(payload.traffic_signs_score)
        .bind(payload.road_lines_score)
        .bind(payload.right_of_way_score)
        .bind(payload.practical_test_result)
        .execute(&self.pool)
        .await?;

        Ok(res.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let res = sqlx::query("DELETE FROM test_results WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(res.rows_affected())
    }
}
