//! Cinegraph Core - movie/director catalog engine
//!
//! This crate provides everything below the GraphQL layer:
//! - Entity model (movies, directors, identifiers)
//! - Document store abstraction with memory and LMDB backends
//! - Catalog service implementing the reads, writes and relationship
//!   lookups the resolvers need
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 Catalog                      │
//! │  (add/get/list, movie→director, director→   │
//! │   movies)                                    │
//! └──────────────┬──────────────────────────────┘
//!                │  Arc<dyn DocumentStore>
//! ┌──────────────┴──────────────────────────────┐
//! │             Document Store                   │
//! │   (insert, find_by_id, find_where)          │
//! ├──────────────────────┬──────────────────────┤
//! │     MemoryStore      │      LmdbStore       │
//! └──────────────────────┴──────────────────────┘
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod error;
pub mod model;
pub mod store;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use model::{Director, EntityId, Movie, NewDirector, NewMovie};
