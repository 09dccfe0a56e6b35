pub mod db;
pub mod seed;
pub mod product {
    pub mod document;
    pub mod memory;
    pub mod repository;
}
