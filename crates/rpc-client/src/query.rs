//! Provides a fluent builder for search queries on one model.

use crate::{
    error::Result,
    repository::{Record, Repository, SearchOptions},
};
use domain::{DomainBuilder, Expression, normalize_domains};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Asc => write!(f, "asc"),
            Direction::Desc => write!(f, "desc"),
        }
    }
}

#[derive(Clone)]
pub struct QueryBuilder {
    repository: Repository,
    fields: Vec<String>,
    filter: Option<Expression>,
    order: Vec<(String, Direction)>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl QueryBuilder {
    pub fn new(repository: Repository) -> Self {
        Self {
            repository,
            fields: Vec::new(),
            filter: None,
            order: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    /// Restricts the fields returned by `get`/`first`. Empty means all fields.
    pub fn select<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the current filter.
    pub fn filter(mut self, expr: Expression) -> Self {
        self.filter = Some(expr);
        self
    }

    /// `current AND expr`
    pub fn and_filter(mut self, expr: Expression) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(current) => DomainBuilder::and_x([current, expr]),
            None => expr,
        });
        self
    }

    /// `current OR expr`
    pub fn or_filter(mut self, expr: Expression) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(current) => DomainBuilder::or_x([current, expr]),
            None => expr,
        });
        self
    }

    pub fn order_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order.push((field.into(), direction));
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// The domain this query sends, without any remote call.
    pub fn build_domain(&self) -> Vec<Value> {
        normalize_domains(self.filter.clone())
    }

    pub fn options(&self) -> SearchOptions {
        let order = (!self.order.is_empty()).then(|| {
            self.order
                .iter()
                .map(|(field, direction)| format!("{field} {direction}"))
                .collect::<Vec<_>>()
                .join(", ")
        });

        SearchOptions {
            offset: self.offset,
            limit: self.limit,
            order,
        }
    }

    pub async fn get(&self) -> Result<Vec<Record>> {
        let fields: Vec<&str> = self.fields.iter().map(String::as_str).collect();
        self.repository
            .search_read(self.filter.clone(), &fields, &self.options())
            .await
    }

    pub async fn first(&self) -> Result<Option<Record>> {
        Ok(self.clone().limit(1).get().await?.into_iter().next())
    }

    pub async fn ids(&self) -> Result<Vec<i64>> {
        self.repository
            .search(self.filter.clone(), &self.options())
            .await
    }

    pub async fn count(&self) -> Result<u64> {
        self.repository.search_count(self.filter.clone()).await
    }
}
