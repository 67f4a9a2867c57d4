pub mod student_models;
pub mod student_dto;
pub mod student_repository;
pub mod student_service;
pub mod student_handlers;

pub use student_models::{Student, StudentResponse};
pub use student_dto::{CreateStudentRequest, UpdateStudentRequest};
