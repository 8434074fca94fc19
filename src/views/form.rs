use crate::dto::result_dto::{clamp_score, CreateResultPayload, UpdateResultPayload};
use crate::models::exam_result::ExamRecord;

/// Which score input a raw value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreField {
    TrafficSigns,
    RoadLines,
    RightOfWay,
}

/// Where a submitted form goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(CreateResultPayload),
    Update(i64, UpdateResultPayload),
}

/// Entry form state: blank for a new candidate, or loaded from a record
/// while editing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultForm {
    pub first_name: String,
    pub last_name: String,
    pub color_blindness: bool,
    pub far_vision: bool,
    pub astigmatism: bool,
    pub reaction: bool,
    pub traffic_signs_score: Option<i32>,
    pub road_lines_score: Option<i32>,
    pub right_of_way_score: Option<i32>,
    pub practical_passed: bool,
    pub editing_id: Option<i64>,
}

impl ResultForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(record: &ExamRecord) -> Self {
        Self {
            first_name: record.first_name.clone().unwrap_or_default(),
            last_name: record.last_name.clone().unwrap_or_default(),
            color_blindness: record.color_blindness_test == 1,
            far_vision: record.long_sightedness_test == 1,
            astigmatism: record.astigmatism_test == 1,
            reaction: record.body_reaction_test == 1,
            traffic_signs_score: record.traffic_signs_score,
            road_lines_score: record.road_lines_score,
            right_of_way_score: record.right_of_way_score,
            practical_passed: record.practical_test_result == 1,
            editing_id: Some(record.id),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Applies text typed into a score box. Blank clears the score,
    /// non-numbers count as zero, numbers are clamped to [0,50].
    pub fn set_score(&mut self, field: ScoreField, raw: &str) {
        let raw = raw.trim();
        let value = if raw.is_empty() {
            None
        } else {
            Some(clamp_score(raw.parse::<i32>().unwrap_or(0)))
        };
        match field {
            ScoreField::TrafficSigns => self.traffic_signs_score = value,
            ScoreField::RoadLines => self.road_lines_score = value,
            ScoreField::RightOfWay => self.right_of_way_score = value,
        }
    }

    pub fn fields(&self) -> UpdateResultPayload {
        UpdateResultPayload {
            first_name: non_empty(&self.first_name),
            last_name: non_empty(&self.last_name),
            color_blindness_test: self.color_blindness as i16,
            long_sightedness_test: self.far_vision as i16,
            astigmatism_test: self.astigmatism as i16,
            body_reaction_test: self.reaction as i16,
            traffic_signs_score: self.traffic_signs_score,
            road_lines_score: self.road_lines_score,
            right_of_way_score: self.right_of_way_score,
            practical_test_result: self.practical_passed as i16,
        }
    }

    /// Builds the request for the current state and resets the form, as a
    /// submit does.
    pub fn submit(&mut self) -> Submission {
        let fields = self.fields();
        let submission = match self.editing_id {
            Some(id) => Submission::Update(id, fields),
            None => Submission::Create(CreateResultPayload {
                fields,
                vision_test_result: None,
            }),
        };
        *self = Self::default();
        submission
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
