//! Generic list handling shared by the resources: exact-match filters,
//! free-text search and ordering, each driven by a static per-resource
//! [`ResourceConfig`] and rendered into a `sqlx::QueryBuilder`.

use std::collections::HashMap;

use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use crate::error::{AppError, FieldErrors, Result};
use crate::fields::NULL_CHARACTERS_MESSAGE;

pub const SEARCH_PARAM: &str = "search";
pub const ORDERING_PARAM: &str = "ordering";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Uuid,
}

/// A query parameter accepted as an exact-match filter.
#[derive(Debug)]
pub struct FilterField {
    pub name: &'static str,
    pub column: &'static str,
    pub kind: FieldKind,
}

/// A public ordering key and the column it sorts on.
#[derive(Debug)]
pub struct OrderingField {
    pub name: &'static str,
    pub column: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTerm {
    pub column: &'static str,
    pub descending: bool,
}

impl OrderTerm {
    pub const fn asc(column: &'static str) -> Self {
        Self { column, descending: false }
    }

    pub const fn desc(column: &'static str) -> Self {
        Self { column, descending: true }
    }
}

#[derive(Debug)]
pub struct ResourceConfig {
    pub filter_fields: &'static [FilterField],
    pub search_columns: &'static [&'static str],
    pub ordering_fields: &'static [OrderingField],
    pub default_ordering: &'static [OrderTerm],
    /// Appended to every ORDER BY so pages are stable.
    pub primary_key: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
enum FilterValue {
    Text(String),
    Uuid(Uuid),
}

#[derive(Debug, Clone)]
pub struct ListQuery {
    config: &'static ResourceConfig,
    filters: Vec<(&'static str, FilterValue)>,
    search_terms: Vec<String>,
    ordering: Vec<OrderTerm>,
}

impl ListQuery {
    pub fn from_params(config: &'static ResourceConfig, params: &HashMap<String, String>) -> Result<Self> {
        let mut filters = Vec::new();
        let mut errors = FieldErrors::new();

        for field in config.filter_fields {
            let Some(raw) = params.get(field.name).map(|v| v.trim()) else {
                continue;
            };
            if raw.is_empty() {
                continue;
            }

            match field.kind {
                FieldKind::Text if raw.contains('\0') => {
                    errors
                        .entry(field.name.to_string())
                        .or_default()
                        .push(NULL_CHARACTERS_MESSAGE.to_string());
                }
                FieldKind::Text => filters.push((field.column, FilterValue::Text(raw.to_string()))),
                FieldKind::Uuid => match Uuid::parse_str(raw) {
                    Ok(id) => filters.push((field.column, FilterValue::Uuid(id))),
                    Err(_) => {
                        errors
                            .entry(field.name.to_string())
                            .or_default()
                            .push(format!("\"{raw}\" is not a valid UUID."));
                    }
                },
            }
        }

        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let search_terms = params
            .get(SEARCH_PARAM)
            .map(|raw| split_search_terms(raw))
            .unwrap_or_default();

        let ordering = params
            .get(ORDERING_PARAM)
            .map(|raw| parse_ordering(config, raw))
            .filter(|terms| !terms.is_empty())
            .unwrap_or_else(|| config.default_ordering.to_vec());

        Ok(Self {
            config,
            filters,
            search_terms,
            ordering,
        })
    }

    pub fn ordering(&self) -> &[OrderTerm] {
        &self.ordering
    }

    pub fn search_terms(&self) -> &[String] {
        &self.search_terms
    }

    /// Push the WHERE clause for filters and search terms, if any.
    pub fn push_conditions(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        let mut has_where = false;

        for (column, value) in &self.filters {
            push_connector(qb, &mut has_where);
            qb.push(*column).push(" = ");
            match value {
                FilterValue::Text(text) => qb.push_bind(text.clone()),
                FilterValue::Uuid(id) => qb.push_bind(*id),
            };
        }

        if self.config.search_columns.is_empty() {
            return;
        }

        // Every term has to hit at least one searchable column.
        for term in &self.search_terms {
            push_connector(qb, &mut has_where);
            let pattern = format!("%{}%", escape_like(term));
            qb.push("(");
            for (i, column) in self.config.search_columns.iter().enumerate() {
                if i > 0 {
                    qb.push(" OR ");
                }
                qb.push(*column).push(" ILIKE ").push_bind(pattern.clone());
            }
            qb.push(")");
        }
    }

    pub fn push_order_by(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        qb.push(" ORDER BY ");
        for (i, term) in self.ordering.iter().enumerate() {
            if i > 0 {
                qb.push(", ");
            }
            qb.push(term.column)
                .push(if term.descending { " DESC" } else { " ASC" });
        }

        let pk = self.config.primary_key;
        if !self.ordering.iter().any(|term| term.column == pk) {
            qb.push(", ").push(pk).push(" ASC");
        }
    }
}

fn push_connector(qb: &mut QueryBuilder<'_, Postgres>, has_where: &mut bool) {
    if *has_where {
        qb.push(" AND ");
    } else {
        qb.push(" WHERE ");
        *has_where = true;
    }
}

fn split_search_terms(raw: &str) -> Vec<String> {
    raw.replace('\0', "")
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

/// Unknown fields are dropped rather than rejected.
fn parse_ordering(config: &ResourceConfig, raw: &str) -> Vec<OrderTerm> {
    let mut terms: Vec<OrderTerm> = Vec::new();

    for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (name, descending) = match part.strip_prefix('-') {
            Some(name) => (name, true),
            None => (part, false),
        };

        let Some(field) = config.ordering_fields.iter().find(|f| f.name == name) else {
            continue;
        };
        if terms.iter().any(|t| t.column == field.column) {
            continue;
        }

        terms.push(OrderTerm {
            column: field.column,
            descending,
        });
    }

    terms
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
