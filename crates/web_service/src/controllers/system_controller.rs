use actix_web::{http::header::ContentType, web, HttpResponse};
use serde_json::json;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

/// The whole chat frontend: one static page talking to the JSON API.
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}
