pub mod app_state;
pub mod config;
pub mod curriculum;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod progression;
pub mod quiz;
pub mod repositories;
pub mod services;
