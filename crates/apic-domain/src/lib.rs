//! # API Clients - Domain Layer
//!
//! Core types shared by every client flavour: the immutable credential set,
//! the authentication scheme and strategy values, URL joining and the error
//! taxonomy. Nothing in this crate performs I/O.

/// Domain constants (credential keys, header names, sentinel values)
pub mod constants;

/// Error handling types
pub mod error;

/// Immutable credential set and required-key validation
pub mod credentials;

/// Authentication schemes and the per-request decoration they imply
pub mod auth;

/// Base URL and path joining
pub mod url;

pub use auth::{AuthScheme, AuthStrategy};
pub use credentials::Credentials;
pub use error::{Error, Result};
pub use url::build_url;
