//! # Blogful Database Crate
//!
//! This crate is the persistence adapter of the application. It owns every
//! SQL statement issued against the `blogful_articles` relation.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** Callers only see the [`ArticleStore`] trait and plain row
//!   structs; SQL and driver details stay here.
//! - **Injected, not ambient:** A store instance is built once at startup and
//!   handed to the HTTP layer as `Arc<dyn ArticleStore>`.
//! - **Asynchronous & Pooled:** The PostgreSQL store uses a `PgPool`; the
//!   in-memory store guards its rows with an async `RwLock`.
//!
//! ## Public API
//!
//! - `connect`: Opens the PostgreSQL connection pool.
//! - `ArticleStore`: The select/insert/update primitives over articles.
//! - `DbRepository`: The PostgreSQL implementation.
//! - `MemoryRepository`: A process-local implementation for development and tests.
//! - `DbError`: The error type returned from this crate.

pub mod connection;
pub mod error;
pub mod memory;
pub mod repository;

pub use connection::{connect, PoolConfig};
pub use error::DbError;
pub use memory::MemoryRepository;
pub use repository::{ArticleStore, DbArticle, DbRepository};
