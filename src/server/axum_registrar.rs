//! Registrar that mounts routes on an axum `Router`
//!
//! Controller actions are bound up front under their `Controller@action`
//! reference. Each registered route then looks up its handler reference and
//! mounts that action on `"/" + path` for its method only. Path placeholders
//! such as `{id}` or `{blog_id}` become ordinary axum path parameters.

use super::registrar::{RouteRegistrar, RouteTable};
use crate::core::error::{RegistrationError, RestfulResult};
use crate::core::method::HttpMethod;
use crate::core::route::{RouteHandle, RouteOptions};
use axum::Router;
use axum::handler::Handler;
use axum::routing::{MethodFilter, MethodRouter, on};
use std::collections::HashMap;
use std::sync::Arc;

/// Builds a method router for one action, restricted to the given method
type ActionFactory<S> = Arc<dyn Fn(MethodFilter) -> MethodRouter<S> + Send + Sync>;

/// Registrar backed by an axum router
///
/// Route names and (method, path) pairs are checked the same way as in
/// [`RouteTable`]. axum itself has no route names, so they are kept in the
/// table returned by [`table`](Self::table).
///
/// axum panics on a path it cannot parse, so every path is checked first and a
/// malformed one (`posts/{id`, `posts/{}`) is reported as
/// [`RegistrationError::InvalidPath`]. A route only lands in the table once it
/// is mounted.
///
/// # Example
///
/// ```rust,ignore
/// let mut registrar = AxumRegistrar::new()
///     .action("Posts@index", list_posts)
///     .action("Posts@show", show_post);
///
/// resource_routes("posts", "Posts", Some(read_only), &mut registrar)?;
/// let app: Router = registrar.into_router();
/// ```
pub struct AxumRegistrar<S = ()> {
    actions: HashMap<String, ActionFactory<S>>,
    table: RouteTable,
    router: Router<S>,
}

impl<S> AxumRegistrar<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Create a registrar with no actions and an empty router
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
            table: RouteTable::new(),
            router: Router::new(),
        }
    }

    /// Bind a handler to a `Controller@action` reference
    pub fn action<H, T>(mut self, handler_ref: impl Into<String>, handler: H) -> Self
    where
        H: Handler<T, S> + Sync,
        T: 'static,
    {
        let factory: ActionFactory<S> =
            Arc::new(move |filter: MethodFilter| on::<H, T, S>(filter, handler.clone()));
        self.actions.insert(handler_ref.into(), factory);
        self
    }

    /// Whether an action is bound to this reference
    pub fn has_action(&self, handler_ref: &str) -> bool {
        self.actions.contains_key(handler_ref)
    }

    /// Routes mounted so far, with their names
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Finish registration and return the router
    pub fn into_router(self) -> Router<S> {
        self.router
    }

    fn mount(
        &mut self,
        method: HttpMethod,
        path: &str,
        options: RouteOptions,
    ) -> RestfulResult<RouteHandle> {
        let handler_ref =
            options
                .handler
                .as_deref()
                .ok_or_else(|| RegistrationError::MissingHandler {
                    method: method.to_string(),
                    path: path.to_string(),
                })?;

        let factory = self.actions.get(handler_ref).cloned().ok_or_else(|| {
            RegistrationError::UnknownHandler {
                handler: handler_ref.to_string(),
            }
        })?;

        validate_path(path).map_err(|reason| RegistrationError::InvalidPath {
            path: path.to_string(),
            reason,
        })?;
        self.table.check(method, path, &options)?;

        let router = std::mem::replace(&mut self.router, Router::new());
        self.router = router.route(&format!("/{}", path), factory(method.method_filter()));

        tracing::debug!(method = %method, path = %path, "Mounted route on axum router");

        self.table.insert(method, path, options)
    }
}

/// Check a path against axum's route syntax
///
/// `{name}` and `{*name}` are parameters and `{{`/`}}` are literal braces. A
/// catch-all must close the path, and a parameter name may appear only once.
fn validate_path(path: &str) -> Result<(), String> {
    let segments: Vec<&str> = path.split('/').collect();
    let mut seen: Vec<&str> = Vec::new();

    for (position, segment) in segments.iter().enumerate() {
        let mut rest = *segment;

        while let Some(offset) = rest.find(['{', '}']) {
            let brace = &rest[offset..offset + 1];
            let tail = &rest[offset + 1..];

            if let Some(escaped) = tail.strip_prefix(brace) {
                rest = escaped;
                continue;
            }
            if brace == "}" {
                return Err(format!("unmatched '}}' in segment '{}'", segment));
            }

            let close = tail
                .find('}')
                .ok_or_else(|| format!("unclosed '{{' in segment '{}'", segment))?;
            let param = &tail[..close];
            rest = &tail[close + 1..];

            let (name, catch_all) = match param.strip_prefix('*') {
                Some(name) => (name, true),
                None => (param, false),
            };
            if name.is_empty() || name.contains('{') {
                return Err(format!("invalid parameter '{{{}}}'", param));
            }
            if catch_all && (position + 1 < segments.len() || !rest.is_empty()) {
                return Err(format!("catch-all '{{{}}}' must end the path", param));
            }
            if seen.contains(&name) {
                return Err(format!("parameter '{}' appears more than once", name));
            }
            seen.push(name);
        }
    }

    Ok(())
}

impl<S> Default for AxumRegistrar<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> RouteRegistrar for AxumRegistrar<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn get(&mut self, path: &str, options: RouteOptions) -> RestfulResult<RouteHandle> {
        self.mount(HttpMethod::Get, path, options)
    }

    fn post(&mut self, path: &str, options: RouteOptions) -> RestfulResult<RouteHandle> {
        self.mount(HttpMethod::Post, path, options)
    }

    fn put(&mut self, path: &str, options: RouteOptions) -> RestfulResult<RouteHandle> {
        self.mount(HttpMethod::Put, path, options)
    }

    fn delete(&mut self, path: &str, options: RouteOptions) -> RestfulResult<RouteHandle> {
        self.mount(HttpMethod::Delete, path, options)
    }
}
