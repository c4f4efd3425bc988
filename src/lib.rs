//! Backend for viewing extracurricular activities and signing students up
//! for them.

pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod web;

pub use config::Config;
pub use error::AppError;
