use crate::models::exam_result::ExamRecord;

pub struct SearchService;

impl SearchService {
    /// Keeps records whose first or last name contains `query`, ignoring case.
    /// An empty query keeps everything; a missing name never matches.
    pub fn filter_by_name<'a>(records: &'a [ExamRecord], query: &str) -> Vec<&'a ExamRecord> {
        if query.is_empty() {
            return records.iter().collect();
        }

        let needle = query.to_lowercase();
        records
            .iter()
            .filter(|r| {
                name_contains(r.first_name.as_deref(), &needle)
                    || name_contains(r.last_name.as_deref(), &needle)
            })
            .collect()
    }
}

fn name_contains(name: Option<&str>, needle: &str) -> bool {
    name.map(|n| n.to_lowercase().contains(needle))
        .unwrap_or(false)
}
