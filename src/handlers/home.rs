use axum::response::Html;

/// The embedded landing page with the user and exercise forms.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../public/index.html"))
}
