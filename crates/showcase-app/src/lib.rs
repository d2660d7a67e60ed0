//! Application service layer - comparison list, config, queries, export

pub mod app;
pub mod config;
pub mod export;
pub mod logging;
pub mod repository;
