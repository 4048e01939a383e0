//! Typed error handling for restful-rs
//!
//! Every fallible operation in the crate returns [`RestfulResult`], so callers can
//! match on the exact failure instead of inspecting an opaque error.
//!
//! # Error Categories
//!
//! - [`RestfulError::InvalidMethod`]: a blueprint names an unsupported HTTP method
//! - [`RestfulError::InvalidResource`] / [`RestfulError::InvalidController`]: bad input names
//! - [`RegistrationError`]: raised by a [`RouteRegistrar`](crate::server::RouteRegistrar)
//! - [`ConfigError`]: configuration references that cannot be resolved
//!
//! # Example
//!
//! ```rust
//! use restful::prelude::*;
//!
//! let template = Template::new(vec![RouteBlueprint::new("patch", "/{id}", ":singular", "")]);
//! let mut table = RouteTable::new();
//!
//! match resource_routes("posts", "Posts", Some(template), &mut table) {
//!     Err(RestfulError::InvalidMethod { method }) => assert_eq!(method, "patch"),
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

use thiserror::Error;

/// The main error type for restful-rs
#[derive(Debug, Error)]
pub enum RestfulError {
    /// A blueprint uses a method outside get/post/put/delete
    #[error("Invalid method specified: {method}")]
    InvalidMethod { method: String },

    /// The resource identifier is empty, slash-wrapped or has an empty segment
    #[error("Invalid resource '{resource}': {message}")]
    InvalidResource { resource: String, message: String },

    /// The controller identifier is empty or slash-wrapped
    #[error("Invalid controller '{controller}'")]
    InvalidController { controller: String },

    /// The registrar refused a route
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    /// Configuration could not be resolved
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl RestfulError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            RestfulError::InvalidMethod { .. } => "INVALID_METHOD",
            RestfulError::InvalidResource { .. } => "INVALID_RESOURCE",
            RestfulError::InvalidController { .. } => "INVALID_CONTROLLER",
            RestfulError::Registration(e) => e.error_code(),
            RestfulError::Config(e) => e.error_code(),
        }
    }
}

// =============================================================================
// Registration Errors
// =============================================================================

/// Errors raised by route registrars
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// Another route already uses this name
    #[error("Route name '{name}' is already registered for '{existing_path}'")]
    DuplicateName { name: String, existing_path: String },

    /// The same method and path were registered twice
    #[error("Route {method} {path} is already registered")]
    DuplicateRoute { method: String, path: String },

    /// The route carries no handler reference, so nothing can serve it
    #[error("Route {method} {path} has no handler")]
    MissingHandler { method: String, path: String },

    /// No action is bound to the handler reference
    #[error("No action registered for handler '{handler}'")]
    UnknownHandler { handler: String },

    /// The router cannot parse the path
    #[error("Invalid route path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },
}

impl RegistrationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            RegistrationError::DuplicateName { .. } => "DUPLICATE_ROUTE_NAME",
            RegistrationError::DuplicateRoute { .. } => "DUPLICATE_ROUTE",
            RegistrationError::MissingHandler { .. } => "MISSING_HANDLER",
            RegistrationError::UnknownHandler { .. } => "UNKNOWN_HANDLER",
            RegistrationError::InvalidPath { .. } => "INVALID_PATH",
        }
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors related to route configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A resource refers to a template name that was never declared
    #[error("Unknown template: {name}")]
    UnknownTemplate { name: String },
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::UnknownTemplate { .. } => "UNKNOWN_TEMPLATE",
        }
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for restful-rs operations
pub type RestfulResult<T> = Result<T, RestfulError>;
