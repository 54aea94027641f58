//! HTTP API: admin catalog endpoints over the model factories.

pub mod app;
pub mod config;
