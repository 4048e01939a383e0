//! Route blueprints and the conventional RESTful template

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// One entry of a template: a single route before tag resolution
///
/// `name` and `handler` may contain the `:resource` and `:singular` tags. The
/// method stays a raw string until expansion so that a template can be loaded
/// from configuration without being rejected up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteBlueprint {
    /// HTTP method name (get, post, put, delete; any case)
    pub method: Cow<'static, str>,

    /// Suffix appended after the resource path (e.g. "/{id}/edit")
    #[serde(default, alias = "route")]
    pub path: Cow<'static, str>,

    /// Route name template (e.g. ":singularEdit")
    #[serde(default, alias = "as")]
    pub name: Cow<'static, str>,

    /// Handler template (e.g. ":resource@edit")
    #[serde(default, alias = "uses")]
    pub handler: Cow<'static, str>,
}

impl RouteBlueprint {
    pub fn new(
        method: impl Into<Cow<'static, str>>,
        path: impl Into<Cow<'static, str>>,
        name: impl Into<Cow<'static, str>>,
        handler: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            name: name.into(),
            handler: handler.into(),
        }
    }

    const fn fixed(
        method: &'static str,
        path: &'static str,
        name: &'static str,
        handler: &'static str,
    ) -> Self {
        Self {
            method: Cow::Borrowed(method),
            path: Cow::Borrowed(path),
            name: Cow::Borrowed(name),
            handler: Cow::Borrowed(handler),
        }
    }
}

/// The seven conventional routes
///
/// Literal segments (`/{id}/edit`, `/add`) are listed before the bare `/{id}`
/// so routers that match in registration order never read them as an id.
static DEFAULT_BLUEPRINTS: [RouteBlueprint; 7] = [
    RouteBlueprint::fixed("get", "/{id}/edit", ":singularEdit", ":resource@edit"),
    RouteBlueprint::fixed("get", "/add", ":singularCreate", ":resource@create"),
    RouteBlueprint::fixed("get", "/{id}", ":singular", ":resource@show"),
    RouteBlueprint::fixed("get", "", ":resource", ":resource@index"),
    RouteBlueprint::fixed("post", "", ":singularStore", ":resource@store"),
    RouteBlueprint::fixed("put", "/{id}", ":singularUpdate", ":resource@update"),
    RouteBlueprint::fixed("delete", "/{id}", ":singularDelete", ":resource@destroy"),
];

/// An ordered list of blueprints; order is registration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Template {
    blueprints: Cow<'static, [RouteBlueprint]>,
}

impl Template {
    /// Build a custom template
    pub fn new(blueprints: Vec<RouteBlueprint>) -> Self {
        Self {
            blueprints: Cow::Owned(blueprints),
        }
    }

    /// The conventional edit/create/show/index/store/update/destroy template
    pub fn restful() -> Self {
        Self {
            blueprints: Cow::Borrowed(&DEFAULT_BLUEPRINTS),
        }
    }

    pub fn blueprints(&self) -> &[RouteBlueprint] {
        &self.blueprints
    }

    pub fn len(&self) -> usize {
        self.blueprints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blueprints.is_empty()
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::restful()
    }
}

impl From<Vec<RouteBlueprint>> for Template {
    fn from(blueprints: Vec<RouteBlueprint>) -> Self {
        Self::new(blueprints)
    }
}
