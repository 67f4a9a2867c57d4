use std::collections::HashMap;
use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequestParts, Host, OriginalUri},
    http::request::Parts,
};
use serde::Serialize;
use sqlx::{Postgres, QueryBuilder};
use utoipa::ToSchema;

use crate::error::{AppError, Result};
use crate::group::group_models::StudentGroup;
use crate::student::student_models::StudentResponse;

pub const PAGE_PARAM: &str = "page";

/// 1-based page request resolved against the configured page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn from_params(params: &HashMap<String, String>, page_size: u32) -> Result<Self> {
        let page = match params.get(PAGE_PARAM).map(|raw| raw.trim()) {
            None | Some("") => 1,
            Some(raw) => match raw.parse::<u32>() {
                Ok(page) if page >= 1 => page,
                _ => return Err(invalid_page()),
            },
        };

        Ok(Self { page, page_size })
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.page_size)
    }

    pub fn push_limit_offset(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        qb.push(" LIMIT ")
            .push_bind(i64::from(self.page_size))
            .push(" OFFSET ")
            .push_bind(self.offset());
    }

    /// The first page always exists, even for an empty collection.
    pub fn ensure_in_range(&self, count: i64) -> Result<()> {
        if self.page > 1 && self.offset() >= count {
            return Err(invalid_page());
        }
        Ok(())
    }

    fn has_next(&self, count: i64) -> bool {
        i64::from(self.page) * i64::from(self.page_size) < count
    }
}

fn invalid_page() -> AppError {
    AppError::NotFound("Invalid page.".to_string())
}

#[derive(Debug, Serialize, ToSchema)]
#[aliases(StudentGroupPage = Page<StudentGroup>, StudentPage = Page<StudentResponse>)]
pub struct Page<T> {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(results: Vec<T>, count: i64, request: PageRequest, links: &PageLinks) -> Self {
        let next = request
            .has_next(count)
            .then(|| links.url_for(Some(request.page + 1)));

        let previous = match request.page {
            1 => None,
            2 => Some(links.url_for(None)),
            page => Some(links.url_for(Some(page - 1))),
        };

        Self {
            count,
            next,
            previous,
            results,
        }
    }
}

/// Absolute URL of the current list request, used to build `next`/`previous`.
#[derive(Debug, Clone)]
pub struct PageLinks {
    base: String,
    params: Vec<String>,
}

impl PageLinks {
    pub fn new(base: impl Into<String>, query: Option<&str>) -> Self {
        let params = query
            .unwrap_or_default()
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter(|pair| pair.split('=').next() != Some(PAGE_PARAM))
            .map(str::to_string)
            .collect();

        Self {
            base: base.into(),
            params,
        }
    }

    pub fn url_for(&self, page: Option<u32>) -> String {
        let mut params = self.params.clone();
        if let Some(page) = page {
            params.push(format!("{PAGE_PARAM}={page}"));
        }

        if params.is_empty() {
            self.base.clone()
        } else {
            format!("{}?{}", self.base, params.join("&"))
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PageLinks
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> std::result::Result<Self, Self::Rejection> {
        let host = Host::from_request_parts(parts, state)
            .await
            .map(|Host(host)| host)
            .unwrap_or_else(|_| "localhost".to_string());

        let uri = parts
            .extensions
            .get::<OriginalUri>()
            .map(|OriginalUri(uri)| uri.clone())
            .unwrap_or_else(|| parts.uri.clone());

        let scheme = parts
            .headers
            .get("x-forwarded-proto")
            .and_then(|value| value.to_str().ok())
            .unwrap_or("http");

        Ok(PageLinks::new(
            format!("{scheme}://{host}{}", uri.path()),
            uri.query(),
        ))
    }
}
