//! Command-line client for the Cinegraph catalog
//!
//! Talks to a running `cinegraph-server` over `POST /graphql`.

pub mod client;
pub mod commands;
pub mod config;
pub mod queries;

pub use client::{CinegraphClient, ClientError};
pub use config::Config;
