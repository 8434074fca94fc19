use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One candidate attempt as stored in `test_results`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ExamRecord {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub color_blindness_test: i16,
    pub long_sightedness_test: i16,
    pub astigmatism_test: i16,
    pub body_reaction_test: i16,
    pub traffic_signs_score: Option<i32>,
    pub road_lines_score: Option<i32>,
    pub right_of_way_score: Option<i32>,
    pub practical_test_result: i16,
    pub vision_test_result: Option<i16>,
    pub created_at: DateTime<Utc>,
}

impl ExamRecord {
    pub fn body_flags(&self) -> [i16; 4] {
        [
            self.color_blindness_test,
            self.long_sightedness_test,
            self.astigmatism_test,
            self.body_reaction_test,
        ]
    }

    pub fn theory_scores(&self) -> [Option<i32>; 3] {
        [
            self.traffic_signs_score,
            self.road_lines_score,
            self.right_of_way_score,
        ]
    }
}
