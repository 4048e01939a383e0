//! Resolved routes, as handed to a registrar

use super::method::HttpMethod;
use serde::Serialize;

/// A fully resolved route: the output unit of an expansion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRegistration {
    pub method: HttpMethod,

    /// Path without a leading slash (e.g. "blog/{blog_id}/posts/{id}")
    pub path: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Handler reference in `Controller@action` form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,
}

impl RouteRegistration {
    /// The options part of the registration
    pub fn options(&self) -> RouteOptions {
        RouteOptions {
            name: self.name.clone(),
            handler: self.handler.clone(),
        }
    }
}

/// Options passed next to the path to a registrar's per-method function
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteOptions {
    pub name: Option<String>,
    pub handler: Option<String>,
}

/// Receipt for a route accepted by a registrar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteHandle {
    /// Position of the route in the registrar, in registration order
    pub index: usize,
    pub method: HttpMethod,
    pub path: String,
}
