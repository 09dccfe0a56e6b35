pub mod access_log;
pub mod error;
pub mod product;
pub mod root;
pub mod security;
pub mod tags;
