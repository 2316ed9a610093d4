use axum::{
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
    Form, Json, RequestExt,
};
use serde::de::DeserializeOwned;

/// Body extractor accepting either a urlencoded form or a JSON object,
/// dispatching on the request content type. Write routes take both
/// encodings.
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send + 'static,
{
    type Rejection = Response;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        if content_type.starts_with("application/json") {
            let Json(body) = req
                .extract::<Json<T>, _>()
                .await
                .map_err(IntoResponse::into_response)?;
            return Ok(Self(body));
        }

        let Form(body) = req
            .extract::<Form<T>, _>()
            .await
            .map_err(IntoResponse::into_response)?;
        Ok(Self(body))
    }
}
