pub mod error;
pub mod evaluator;
pub mod params;
pub mod repo;
pub mod service;
