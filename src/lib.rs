pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod generator;
pub mod logging;
pub mod session;
pub mod ui;
