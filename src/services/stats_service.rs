use std::collections::BTreeMap;

use chrono::{FixedOffset, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::exam_result::ExamRecord;
use crate::services::grading_service::{ExamStatus, GradingService};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DailyTally {
    pub passed: u32,
    pub failed: u32,
}

impl DailyTally {
    pub fn total(&self) -> u32 {
        self.passed + self.failed
    }
}

pub struct StatsService;

impl StatsService {
    /// Tallies records per calendar date of `created_at` in `tz`.
    ///
    /// Anything not `Passed` lands in `failed`, pending records included.
    /// Days without records have no entry.
    pub fn aggregate_by_day<Tz: TimeZone>(
        records: &[ExamRecord],
        tz: &Tz,
    ) -> BTreeMap<NaiveDate, DailyTally> {
        let mut stats: BTreeMap<NaiveDate, DailyTally> = BTreeMap::new();
        for record in records {
            let date = record.created_at.with_timezone(tz).date_naive();
            let tally = stats.entry(date).or_default();
            match GradingService::classify(record) {
                ExamStatus::Passed => tally.passed += 1,
                ExamStatus::Failed | ExamStatus::Pending => tally.failed += 1,
            }
        }
        stats
    }

    /// Uses the fixed offset when one is configured, the server's local zone otherwise.
    pub fn daily_stats(
        records: &[ExamRecord],
        offset: Option<FixedOffset>,
    ) -> BTreeMap<NaiveDate, DailyTally> {
        match offset {
            Some(offset) => Self::aggregate_by_day(records, &offset),
            None => Self::aggregate_by_day(records, &Local),
        }
    }
}
