//! HTTP-level tests: expanded routes served by axum
//!
//! Every generated route is mounted through `AxumRegistrar` and exercised
//! with a real request.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{Method, Request, StatusCode};
use axum::{Json, Router};
use axum_test::TestServer;
use restful::prelude::*;
use serde_json::{Value, json};
use tower::ServiceExt;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

async fn edit(Path(id): Path<String>) -> String {
    format!("edit {}", id)
}

async fn create() -> &'static str {
    "create"
}

async fn show(Path(id): Path<String>) -> String {
    format!("show {}", id)
}

async fn index() -> &'static str {
    "index"
}

async fn store() -> (StatusCode, &'static str) {
    (StatusCode::CREATED, "store")
}

async fn update(Path(id): Path<String>) -> String {
    format!("update {}", id)
}

async fn destroy(Path(_id): Path<String>) -> StatusCode {
    StatusCode::NO_CONTENT
}

fn posts_registrar() -> AxumRegistrar {
    AxumRegistrar::new()
        .action("Posts@edit", edit)
        .action("Posts@create", create)
        .action("Posts@show", show)
        .action("Posts@index", index)
        .action("Posts@store", store)
        .action("Posts@update", update)
        .action("Posts@destroy", destroy)
}

fn posts_router() -> Router {
    init_tracing();
    let mut registrar = posts_registrar();
    resource_routes("posts", "Posts", None, &mut registrar).unwrap();
    registrar.into_router()
}

#[tokio::test]
async fn test_all_default_routes_are_served() {
    let server = TestServer::try_new(posts_router()).unwrap();

    let response = server.get("/posts").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "index");

    let response = server.get("/posts/add").await;
    assert_eq!(response.text(), "create");

    let response = server.get("/posts/42").await;
    assert_eq!(response.text(), "show 42");

    let response = server.get("/posts/42/edit").await;
    assert_eq!(response.text(), "edit 42");

    let response = server.post("/posts").await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.text(), "store");

    let response = server.put("/posts/42").await;
    assert_eq!(response.text(), "update 42");

    let response = server.delete("/posts/42").await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_literal_add_segment_is_not_an_id() {
    let server = TestServer::try_new(posts_router()).unwrap();

    let response = server.get("/posts/add").await;
    assert_eq!(response.text(), "create");
    assert_ne!(response.text(), "show add");
}

#[tokio::test]
async fn test_unregistered_method_is_rejected() {
    let server = TestServer::try_new(posts_router()).unwrap();

    let response = server.patch("/posts/42").await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);

    let response = server.get("/comments").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

async fn nested_show(Path((blog_id, id)): Path<(String, String)>) -> Json<Value> {
    Json(json!({ "blog": blog_id, "post": id }))
}

async fn nested_index(Path(blog_id): Path<String>) -> Json<Value> {
    Json(json!({ "blog": blog_id }))
}

#[tokio::test]
async fn test_nested_routes_expose_parent_ids() {
    let read_only = Template::new(vec![
        RouteBlueprint::new("get", "", ":resource", ":resource@index"),
        RouteBlueprint::new("get", "/{id}", ":singular", ":resource@show"),
    ]);
    let mut registrar: AxumRegistrar = AxumRegistrar::new()
        .action("Posts@index", nested_index)
        .action("Posts@show", nested_show);

    resource_routes("blogs.posts", "Posts", Some(read_only), &mut registrar).unwrap();

    assert_eq!(
        registrar.table().path_for("BlogPost"),
        Some("blogs/{blog_id}/posts/{id}")
    );

    let server = TestServer::try_new(registrar.into_router()).unwrap();

    let body: Value = server.get("/blogs/7/posts/99").await.json();
    assert_eq!(body, json!({ "blog": "7", "post": "99" }));

    let body: Value = server.get("/blogs/7/posts").await.json();
    assert_eq!(body, json!({ "blog": "7" }));
}

#[derive(Clone)]
struct AppState {
    service: &'static str,
}

async fn stateful_index(State(state): State<AppState>) -> String {
    format!("{} index", state.service)
}

#[tokio::test]
async fn test_stateful_actions() {
    let template = Template::new(vec![RouteBlueprint::new(
        "get",
        "",
        ":resource",
        ":resource@index",
    )]);
    let mut registrar: AxumRegistrar<AppState> =
        AxumRegistrar::new().action("Tags@index", stateful_index);

    resource_routes("tags", "Tags", Some(template), &mut registrar).unwrap();

    let app = registrar
        .into_router()
        .with_state(AppState { service: "blog" });

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/tags")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_builder_with_axum_registrar() {
    let mut registrar = posts_registrar()
        .action("Tags@index", index)
        .action("Tags@show", show);

    let read_only = Template::new(vec![
        RouteBlueprint::new("get", "", ":resource", ":resource@index"),
        RouteBlueprint::new("get", "/{id}", ":singular", ":resource@show"),
    ]);

    let handles = RestfulBuilder::new()
        .resource("posts", "Posts")
        .resource_with_template("tags", "Tags", read_only)
        .register(&mut registrar)
        .unwrap();
    assert_eq!(handles.len(), 9);

    let server = TestServer::try_new(registrar.into_router()).unwrap();
    assert_eq!(server.get("/tags/rust").await.text(), "show rust");
    assert_eq!(server.get("/posts").await.text(), "index");
}

async fn comment_index(Path(post_id): Path<String>) -> String {
    format!("comments of {}", post_id)
}

#[tokio::test]
async fn test_parent_and_nested_resource_share_a_router() {
    let mut registrar = posts_registrar().action("Comments@index", comment_index);
    let comments_only = Template::new(vec![RouteBlueprint::new(
        "get",
        "",
        ":resource",
        ":resource@index",
    )]);

    RestfulBuilder::new()
        .resource("posts", "Posts")
        .resource_with_template("posts.comments", "Comments", comments_only)
        .register(&mut registrar)
        .unwrap();

    let server = TestServer::try_new(registrar.into_router()).unwrap();
    assert_eq!(server.get("/posts/1").await.text(), "show 1");
    assert_eq!(server.get("/posts/1/comments").await.text(), "comments of 1");
}
