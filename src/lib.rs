//! # Restful-RS
//!
//! Conventional RESTful route generation for Rust web frameworks.
//!
//! ## Features
//!
//! - **One Call, Seven Routes**: edit, create, show, index, store, update and destroy
//! - **Nested Resources**: `"blogs.posts"` yields `blogs/{blog_id}/posts/...`
//! - **Singularization**: English plural nouns reduced to their singular form (posts → post)
//! - **Custom Templates**: replace the default routes with your own blueprints
//! - **Configuration-Based**: declare resources and templates in YAML
//! - **Router-Agnostic**: routes go through the `RouteRegistrar` trait, with an axum adapter included
//!
//! ## Quick Start
//!
//! ```rust
//! use restful::prelude::*;
//!
//! let mut table = RouteTable::new();
//! resource_routes("blogs.posts", "Posts", None, &mut table).unwrap();
//!
//! let show = table.route_named("BlogPost").unwrap();
//! assert_eq!(show.method, HttpMethod::Get);
//! assert_eq!(show.path, "blogs/{blog_id}/posts/{id}");
//! assert_eq!(show.handler.as_deref(), Some("Posts@show"));
//! ```
//!
//! ## Default Template
//!
//! | Method | Path | Name | Handler |
//! |--------|------|------|---------|
//! | GET | `posts/{id}/edit` | `PostEdit` | `Posts@edit` |
//! | GET | `posts/add` | `PostCreate` | `Posts@create` |
//! | GET | `posts/{id}` | `Post` | `Posts@show` |
//! | GET | `posts` | `Posts` | `Posts@index` |
//! | POST | `posts` | `PostStore` | `Posts@store` |
//! | PUT | `posts/{id}` | `PostUpdate` | `Posts@update` |
//! | DELETE | `posts/{id}` | `PostDelete` | `Posts@destroy` |

pub mod config;
pub mod core;
pub mod server;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ConfigError, RegistrationError, RestfulError, RestfulResult},
        expander::{RouteExpander, resource_routes},
        method::HttpMethod,
        resource::ResourceSpec,
        route::{RouteHandle, RouteOptions, RouteRegistration},
        singularize::{Singularizer, capitalize},
        template::{RouteBlueprint, Template},
    };

    // === Config ===
    pub use crate::config::{RESTFUL_TEMPLATE, ResourceConfig, RoutesConfig, TemplateRef};

    // === Server ===
    pub use crate::server::{AxumRegistrar, RestfulBuilder, RouteRegistrar, RouteTable};
}
