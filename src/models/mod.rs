pub mod exam_result;
