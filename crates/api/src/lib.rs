//! HTTP API: router, request/response mapping, auth gate and runtime config.

pub mod app;
pub mod config;
pub mod middleware;
