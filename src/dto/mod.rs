pub mod result_dto;
