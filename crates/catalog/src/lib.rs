pub mod coordinator;
pub mod error;
pub mod metrics;
pub mod repository;
pub mod settings;
pub mod strategy;
