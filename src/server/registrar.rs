//! The router interface routes are registered with
//!
//! A registrar owns dispatch: this crate only tells it which routes exist.
//! [`RouteTable`] records routes in memory; [`AxumRegistrar`](super::AxumRegistrar)
//! mounts them on an axum router.

use crate::core::error::{RegistrationError, RestfulResult};
use crate::core::method::HttpMethod;
use crate::core::route::{RouteHandle, RouteOptions, RouteRegistration};
use serde::Serialize;
use std::collections::HashMap;

/// Per-method registration functions of a host router
pub trait RouteRegistrar {
    fn get(&mut self, path: &str, options: RouteOptions) -> RestfulResult<RouteHandle>;

    fn post(&mut self, path: &str, options: RouteOptions) -> RestfulResult<RouteHandle>;

    fn put(&mut self, path: &str, options: RouteOptions) -> RestfulResult<RouteHandle>;

    fn delete(&mut self, path: &str, options: RouteOptions) -> RestfulResult<RouteHandle>;

    /// Dispatch a resolved route to the matching per-method function
    fn register(&mut self, route: &RouteRegistration) -> RestfulResult<RouteHandle> {
        let options = route.options();
        match route.method {
            HttpMethod::Get => self.get(&route.path, options),
            HttpMethod::Post => self.post(&route.path, options),
            HttpMethod::Put => self.put(&route.path, options),
            HttpMethod::Delete => self.delete(&route.path, options),
        }
    }
}

/// In-memory registrar that keeps routes in registration order
///
/// Route names must be unique, and so must each (method, path) pair.
#[derive(Debug, Default, Clone, Serialize)]
pub struct RouteTable {
    routes: Vec<RouteRegistration>,
    #[serde(skip)]
    names: HashMap<String, usize>,
}

impl RouteTable {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the duplicate checks of [`insert`](Self::insert) without recording
    pub fn check(
        &self,
        method: HttpMethod,
        path: &str,
        options: &RouteOptions,
    ) -> RestfulResult<()> {
        if self.find(method, path).is_some() {
            return Err(RegistrationError::DuplicateRoute {
                method: method.to_string(),
                path: path.to_string(),
            }
            .into());
        }

        if let Some(existing) = options.name.as_deref().and_then(|n| self.route_named(n)) {
            return Err(RegistrationError::DuplicateName {
                name: options.name.clone().unwrap_or_default(),
                existing_path: existing.path.clone(),
            }
            .into());
        }

        Ok(())
    }

    /// Validate and record a route
    pub fn insert(
        &mut self,
        method: HttpMethod,
        path: &str,
        options: RouteOptions,
    ) -> RestfulResult<RouteHandle> {
        self.check(method, path, &options)?;

        let index = self.routes.len();
        if let Some(name) = &options.name {
            self.names.insert(name.clone(), index);
        }
        self.routes.push(RouteRegistration {
            method,
            path: path.to_string(),
            name: options.name,
            handler: options.handler,
        });

        Ok(RouteHandle {
            index,
            method,
            path: path.to_string(),
        })
    }

    /// All routes, in registration order
    pub fn routes(&self) -> &[RouteRegistration] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Look up a route by method and path
    pub fn find(&self, method: HttpMethod, path: &str) -> Option<&RouteRegistration> {
        self.routes
            .iter()
            .find(|route| route.method == method && route.path == path)
    }

    /// Look up a route by name
    pub fn route_named(&self, name: &str) -> Option<&RouteRegistration> {
        self.names.get(name).map(|&index| &self.routes[index])
    }

    /// Path of a named route
    pub fn path_for(&self, name: &str) -> Option<&str> {
        self.route_named(name).map(|route| route.path.as_str())
    }

    /// Routes as JSON, for introspection endpoints
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "routes": self.routes })
    }
}

impl RouteRegistrar for RouteTable {
    fn get(&mut self, path: &str, options: RouteOptions) -> RestfulResult<RouteHandle> {
        self.insert(HttpMethod::Get, path, options)
    }

    fn post(&mut self, path: &str, options: RouteOptions) -> RestfulResult<RouteHandle> {
        self.insert(HttpMethod::Post, path, options)
    }

    fn put(&mut self, path: &str, options: RouteOptions) -> RestfulResult<RouteHandle> {
        self.insert(HttpMethod::Put, path, options)
    }

    fn delete(&mut self, path: &str, options: RouteOptions) -> RestfulResult<RouteHandle> {
        self.insert(HttpMethod::Delete, path, options)
    }
}
