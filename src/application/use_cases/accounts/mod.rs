//! Account Use Cases
//!
//! Login, registration and self-service profile changes.

mod change_password;
mod change_user_info;
mod login;
mod register;

pub use change_password::{ChangePasswordUseCase, OLD_PASSWORD_INCORRECT};
pub use change_user_info::ChangeUserInfoUseCase;
pub use login::{LoginUseCase, INVALID_CREDENTIALS};
pub use register::{RegisterUseCase, USERNAME_TAKEN};
