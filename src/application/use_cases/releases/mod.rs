//! Release Use Cases

mod check_update;

pub use check_update::CheckUpdateUseCase;
