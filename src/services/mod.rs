pub mod grading_service;
pub mod memory_store;
pub mod result_service;
pub mod result_store;
pub mod search_service;
pub mod stats_service;
