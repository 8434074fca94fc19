use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::exam_result::ExamRecord;

/// Minimum number of passed physical sub-tests (out of four).
pub const BODY_PASS_MIN: usize = 3;
/// Minimum theory total (out of 150), the fixed ">80%" threshold.
pub const THEORY_PASS_MIN: i64 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExamStatus {
    Pending,
    Failed,
    Passed,
}

impl ExamStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ExamStatus::Passed => "ผ่านการทดสอบ",
            ExamStatus::Failed => "ไม่ผ่านการทดสอบ",
            ExamStatus::Pending => "รอพิจารณา",
        }
    }
}

/// Outcome of each gate on its own, regardless of completeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GateBreakdown {
    pub body_passed: bool,
    pub theory_passed: bool,
    pub practical_passed: bool,
}

impl GateBreakdown {
    pub fn all_passed(&self) -> bool {
        self.body_passed && self.theory_passed && self.practical_passed
    }
}

pub fn gate_label(passed: bool) -> &'static str {
    if passed {
        "ผ่าน"
    } else {
        "ไม่ผ่าน"
    }
}

pub struct GradingService;

impl GradingService {
    pub fn classify(record: &ExamRecord) -> ExamStatus {
        if !Self::is_complete(record) {
            return ExamStatus::Pending;
        }

        if Self::gates(record).all_passed() {
            ExamStatus::Passed
        } else {
            ExamStatus::Failed
        }
    }

    /// Names and all three theory scores present. Flags are never missing.
    pub fn is_complete(record: &ExamRecord) -> bool {
        record.first_name.is_some()
            && record.last_name.is_some()
            && record.theory_scores().iter().all(Option::is_some)
    }

    pub fn gates(record: &ExamRecord) -> GateBreakdown {
        let body_count = record.body_flags().iter().filter(|&&f| f == 1).count();
        GateBreakdown {
            body_passed: body_count >= BODY_PASS_MIN,
            theory_passed: Self::theory_total(record) >= THEORY_PASS_MIN,
            practical_passed: record.practical_test_result == 1,
        }
    }

    /// Sum of theory scores, unscored parts counting as zero. Widened to
    /// `i64` since stored rows are not range-checked.
    pub fn theory_total(record: &ExamRecord) -> i64 {
        record
            .theory_scores()
            .iter()
            .map(|s| i64::from(s.unwrap_or(0)))
            .sum()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{TimeZone, Utc};

    use crate::models::exam_result::ExamRecord;

    /// A complete record that passes every gate with exactly the minimums.
    pub fn passing_record() -> ExamRecord {
        ExamRecord {
            id: 1,
            first_name: Some("A".into()),
            last_name: Some("B".into()),
            color_blindness_test: 1,
            long_sightedness_test: 1,
            astigmatism_test: 1,
            body_reaction_test: 0,
            traffic_signs_score: Some(50),
            road_lines_score: Some(40),
            right_of_way_score: Some(30),
            practical_test_result: 1,
            vision_test_result: None,
            created_at: Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap(),
        }
    }
}
