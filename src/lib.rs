pub mod analytics;
pub mod auth;
pub mod cache;
pub mod db;
pub mod events;
pub mod gallery;
pub mod handlers;
pub mod models;

pub use db::create_pool;
