//! Typed client for the users REST API.
//!
//! A backend is selected by name and namespaces its collection under
//! `/api/{backend}/users` on a configurable base URL. [`UsersApi`] performs
//! the five operations the backend serves (list, single read, create,
//! update, delete); [`ApiConfig`] carries the base URL; every failure
//! collapses into [`ApiError`].

mod client;
mod config;
mod error;

pub use client::UsersApi;
pub use config::ApiConfig;
pub use error::ApiError;

pub use store::{User, UserFields};
