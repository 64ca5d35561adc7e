use axum::{
    extract::{Query, Request},
    http::Method,
    middleware::Next,
    response::Response,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct OverrideParams {
    #[serde(rename = "_method")]
    method: Option<String>,
}

/// Browser forms can only GET or POST. A `_method` query field on a POST
/// rewrites the method to PUT or DELETE before routing. No current route
/// uses it, but the surface is part of the app's contract.
pub async fn method_override(mut req: Request, next: Next) -> Response {
    if req.method() == Method::POST {
        if let Ok(Query(params)) = Query::<OverrideParams>::try_from_uri(req.uri()) {
            match params.method.as_deref().map(str::to_ascii_uppercase).as_deref() {
                Some("PUT") => *req.method_mut() = Method::PUT,
                Some("DELETE") => *req.method_mut() = Method::DELETE,
                _ => {}
            }
        }
    }

    next.run(req).await
}
