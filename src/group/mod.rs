pub mod group_models;
pub mod group_dto;
pub mod group_repository;
pub mod group_service;
pub mod group_handlers;

pub use group_models::StudentGroup;
pub use group_dto::{CreateStudentGroupRequest, UpdateStudentGroupRequest};
