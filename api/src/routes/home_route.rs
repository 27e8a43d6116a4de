//! GET / — serves the static chat page.

use axum::response::Html;

pub async fn home() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
