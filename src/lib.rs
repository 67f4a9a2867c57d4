pub mod db;
pub mod error;
pub mod extract;
pub mod fields;
pub mod group;
pub mod list_query;
pub mod pagination;
pub mod routes;
pub mod state;
pub mod student;
