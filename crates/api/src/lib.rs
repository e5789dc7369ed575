//! HTTP API: server, routing, and request/response mapping.
//!
//! This is a thin adapter: it turns JSON bodies into purchase requests and
//! relays the confirmation or rejection. All decisions are made by
//! `boxoffice-tickets`.

pub mod app;
pub mod middleware;
