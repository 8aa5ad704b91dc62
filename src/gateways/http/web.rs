use axum::http::header;
use axum::response::{Html, IntoResponse};

const INDEX_HTML: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/web/static/index.html"));
const INDEX_JS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/web/static/js/index.js"));

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn index_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        INDEX_JS,
    )
}
