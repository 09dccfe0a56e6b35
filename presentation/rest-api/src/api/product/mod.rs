pub mod dto;
pub mod error_mapper;
pub mod payload;
pub mod routes;
