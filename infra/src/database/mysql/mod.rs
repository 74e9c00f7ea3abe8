//! MySQL repository implementations

mod credential_repository_impl;
mod one_time_secret_repository_impl;
mod session_repository_impl;
mod user_repository_impl;

pub use credential_repository_impl::MySqlCredentialRepository;
pub use one_time_secret_repository_impl::MySqlOneTimeSecretRepository;
pub use session_repository_impl::MySqlSessionRepository;
pub use user_repository_impl::MySqlUserRepository;
