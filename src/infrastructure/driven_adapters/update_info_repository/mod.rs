//! PostgreSQL-backed update info repository

mod postgres;

pub use postgres::PostgresUpdateInfoRepository;
