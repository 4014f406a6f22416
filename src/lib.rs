pub mod config;
pub mod constants;
pub mod models;
pub mod routes;
pub mod state;
pub mod utils;
