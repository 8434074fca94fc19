use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::stats_service::DailyTally;
use crate::views::dashboard::ResultRow;

pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 50;

/// Body of `PUT /api/results/:id`. Also the shared part of the create body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UpdateResultPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default)]
    pub color_blindness_test: i16,
    #[serde(default)]
    pub long_sightedness_test: i16,
    #[serde(default)]
    pub astigmatism_test: i16,
    #[serde(default)]
    pub body_reaction_test: i16,
    pub traffic_signs_score: Option<i32>,
    pub road_lines_score: Option<i32>,
    pub right_of_way_score: Option<i32>,
    #[serde(default)]
    pub practical_test_result: i16,
}

/// Body of `POST /api/results`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateResultPayload {
    #[serde(flatten)]
    pub fields: UpdateResultPayload,
    pub vision_test_result: Option<i16>,
}

impl UpdateResultPayload {
    /// Coerces out-of-range input instead of rejecting it: scores are clamped
    /// to [0,50], flags to {0,1}. Names pass through as sent; an empty name
    /// is still a present name.
    pub fn normalized(self) -> Self {
        Self {
            first_name: self.first_name,
            last_name: self.last_name,
            color_blindness_test: clamp_flag(self.color_blindness_test),
            long_sightedness_test: clamp_flag(self.long_sightedness_test),
            astigmatism_test: clamp_flag(self.astigmatism_test),
            body_reaction_test: clamp_flag(self.body_reaction_test),
            traffic_signs_score: self.traffic_signs_score.map(clamp_score),
            road_lines_score: self.road_lines_score.map(clamp_score),
            right_of_way_score: self.right_of_way_score.map(clamp_score),
            practical_test_result: clamp_flag(self.practical_test_result),
        }
    }
}

impl CreateResultPayload {
    pub fn normalized(self) -> Self {
        Self {
            fields: self.fields.normalized(),
            vision_test_result: self.vision_test_result.map(clamp_flag),
        }
    }
}

pub fn clamp_score(score: i32) -> i32 {
    score.clamp(MIN_SCORE, MAX_SCORE)
}

pub fn clamp_flag(flag: i16) -> i16 {
    flag.clamp(0, 1)
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub id: i64,
}

/// Row count of an update or delete. Zero when the id did not exist.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MutationResponse {
    pub affected_rows: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DashboardQuery {
    pub search: Option<String>,
}

pub type DailyStats = BTreeMap<NaiveDate, DailyTally>;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardResponse {
    pub rows: Vec<ResultRow>,
    #[schema(value_type = Object)]
    pub daily_stats: DailyStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalized_clamps_ranges_and_keeps_names() {
        let payload = UpdateResultPayload {
            first_name: Some(String::new()),
            last_name: None,
            color_blindness_test: 7,
            long_sightedness_test: -1,
            traffic_signs_score: Some(75),
            road_lines_score: Some(-3),
            right_of_way_score: None,
            ..Default::default()
        }
        .normalized();

        assert_eq!(payload.first_name.as_deref(), Some(""));
        assert_eq!(payload.last_name, None);
        assert_eq!(payload.color_blindness_test, 1);
        assert_eq!(payload.long_sightedness_test, 0);
        assert_eq!(payload.traffic_signs_score, Some(50));
        assert_eq!(payload.road_lines_score, Some(0));
        assert_eq!(payload.right_of_way_score, None);
    }

    #[test]
    fn create_body_is_flat() {
        let body = json!({
            "first_name": "A",
            "last_name": null,
            "color_blindness_test": 1,
            "long_sightedness_test": 1,
            "astigmatism_test": 0,
            "body_reaction_test": 1,
            "traffic_signs_score": 40,
            "road_lines_score": null,
            "right_of_way_score": 45,
            "practical_test_result": 1,
            "vision_test_result": 1
        });
        let payload: CreateResultPayload = serde_json::from_value(body).unwrap();
        assert_eq!(payload.fields.first_name.as_deref(), Some("A"));
        assert_eq!(payload.fields.last_name, None);
        assert_eq!(payload.fields.road_lines_score, None);
        assert_eq!(payload.vision_test_result, Some(1));
    }

    #[test]
    fn missing_optional_fields_become_null() {
        let payload: CreateResultPayload = serde_json::from_value(json!({})).unwrap();
        assert_eq!(payload, CreateResultPayload::default());
    }
}
