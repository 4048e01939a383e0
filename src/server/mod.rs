//! Server module: registrars that receive expanded routes
//!
//! This module provides:
//! - The `RouteRegistrar` interface every host router implements
//! - `RouteTable`, an in-memory registrar for introspection and tests
//! - `AxumRegistrar`, which mounts routes on an axum `Router`
//! - `RestfulBuilder`, which expands many resources in one pass

pub mod axum_registrar;
pub mod builder;
pub mod registrar;

pub use axum_registrar::AxumRegistrar;
pub use builder::RestfulBuilder;
pub use registrar::{RouteRegistrar, RouteTable};
