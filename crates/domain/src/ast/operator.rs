use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Comparison operators understood by the remote search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    #[serde(rename = "=?")]
    UnsetOrEqual,
    #[serde(rename = "=")]
    Equal,
    #[serde(rename = "!=")]
    NotEqual,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "<=")]
    LessOrEqual,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = ">=")]
    GreaterOrEqual,
    #[serde(rename = "=like")]
    EqLike,
    #[serde(rename = "=ilike")]
    EqILike,
    #[serde(rename = "like")]
    Like,
    #[serde(rename = "ilike")]
    ILike,
    #[serde(rename = "not like")]
    NotLike,
    #[serde(rename = "not ilike")]
    NotILike,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "not in")]
    NotIn,
}

impl ComparisonOperator {
    pub const ALL: [ComparisonOperator; 15] = [
        ComparisonOperator::UnsetOrEqual,
        ComparisonOperator::Equal,
        ComparisonOperator::NotEqual,
        ComparisonOperator::LessThan,
        ComparisonOperator::LessOrEqual,
        ComparisonOperator::GreaterThan,
        ComparisonOperator::GreaterOrEqual,
        ComparisonOperator::EqLike,
        ComparisonOperator::EqILike,
        ComparisonOperator::Like,
        ComparisonOperator::ILike,
        ComparisonOperator::NotLike,
        ComparisonOperator::NotILike,
        ComparisonOperator::In,
        ComparisonOperator::NotIn,
    ];

    /// The wire symbol, e.g. `=` or `not ilike`.
    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOperator::UnsetOrEqual => "=?",
            ComparisonOperator::Equal => "=",
            ComparisonOperator::NotEqual => "!=",
            ComparisonOperator::LessThan => "<",
            ComparisonOperator::LessOrEqual => "<=",
            ComparisonOperator::GreaterThan => ">",
            ComparisonOperator::GreaterOrEqual => ">=",
            ComparisonOperator::EqLike => "=like",
            ComparisonOperator::EqILike => "=ilike",
            ComparisonOperator::Like => "like",
            ComparisonOperator::ILike => "ilike",
            ComparisonOperator::NotLike => "not like",
            ComparisonOperator::NotILike => "not ilike",
            ComparisonOperator::In => "in",
            ComparisonOperator::NotIn => "not in",
        }
    }

    /// Selects one of the four pattern-matching operators.
    pub fn like(strict: bool, case_sensitive: bool) -> Self {
        match (strict, case_sensitive) {
            (true, true) => ComparisonOperator::EqLike,
            (true, false) => ComparisonOperator::EqILike,
            (false, true) => ComparisonOperator::Like,
            (false, false) => ComparisonOperator::ILike,
        }
    }

    pub fn not_like(case_sensitive: bool) -> Self {
        if case_sensitive {
            ComparisonOperator::NotLike
        } else {
            ComparisonOperator::NotILike
        }
    }

    /// Operators whose value must be a sequence.
    pub fn expects_sequence(&self) -> bool {
        matches!(self, ComparisonOperator::In | ComparisonOperator::NotIn)
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for ComparisonOperator {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComparisonOperator::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| DomainError::InvalidExpression(format!("unknown operator {s}")))
    }
}

/// Logical combinators of the prefix notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalOperator {
    #[serde(rename = "&")]
    And,
    #[serde(rename = "|")]
    Or,
    #[serde(rename = "!")]
    Not,
}

impl LogicalOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            LogicalOperator::And => "&",
            LogicalOperator::Or => "|",
            LogicalOperator::Not => "!",
        }
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LogicalOperator {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "&" => Ok(LogicalOperator::And),
            "|" => Ok(LogicalOperator::Or),
            "!" => Ok(LogicalOperator::Not),
            other => Err(DomainError::InvalidExpression(format!(
                "unknown operator {other}"
            ))),
        }
    }
}
