//! PostgreSQL-backed user repository

mod postgres;

pub use postgres::PostgresUserRepository;
