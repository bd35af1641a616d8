//! HTTP Layer - JSON API 与前端托管

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig, StaticMount, BLOB_ROUTE};
pub use state::AppState;
