//! HTTP REST API interfaces
//!
//! - `middleware`: JWT bearer authentication
//! - `common`: shared extractors
//! - `modules`: per-resource handlers and DTOs
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod middleware;
pub mod modules;
pub mod router;

pub use router::create_api_router;
