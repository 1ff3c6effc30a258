//! PostgreSQL-backed follow repository

mod postgres;

pub use postgres::PostgresFollowRepository;
