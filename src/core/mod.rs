//! Core module: singularization, templates and route expansion

pub mod error;
pub mod expander;
pub mod method;
pub mod resource;
pub mod route;
pub mod singularize;
pub mod template;

pub use error::{ConfigError, RegistrationError, RestfulError, RestfulResult};
pub use expander::{RouteExpander, resource_routes};
pub use method::HttpMethod;
pub use resource::ResourceSpec;
pub use route::{RouteHandle, RouteOptions, RouteRegistration};
pub use singularize::{Singularizer, capitalize};
pub use template::{RouteBlueprint, Template};
