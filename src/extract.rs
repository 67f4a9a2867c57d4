use std::collections::HashMap;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query},
    http::request::Parts,
};

use crate::error::AppError;

/// `Json` whose rejections render as `AppError::BadRequest`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `Path` whose rejections render as not-found.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// Raw query string of a list request, matched by name against a
/// `ResourceConfig` later on.
#[derive(Debug, Default)]
pub struct ListParams(pub HashMap<String, String>);

#[async_trait]
impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state).await?;
        Ok(ListParams(params))
    }
}
