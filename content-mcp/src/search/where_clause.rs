//! Building repository SQL `where` clauses
//!
//! Property names must be identifiers defined on the searched class. String
//! values are quoted with single quotes doubled; numeric, boolean and date
//! values are written bare after a syntax check so a value can never break
//! out of its literal.

use crate::error::{ContentMcpError, Result};
use crate::metadata::{Cardinality, ClassDescriptor, DataType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operator of a search condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOperator {
    /// `=`
    #[serde(rename = "=")]
    Equals,
    /// `>`
    #[serde(rename = ">")]
    GreaterThan,
    /// `<`
    #[serde(rename = "<")]
    LessThan,
    /// `>=`
    #[serde(rename = ">=")]
    GreaterEqual,
    /// `<=`
    #[serde(rename = "<=")]
    LessEqual,
    /// `!=`
    #[serde(rename = "!=")]
    NotEqual,
    /// Substring match on strings
    #[serde(rename = "CONTAINS", alias = "contains")]
    Contains,
    /// Prefix match on strings
    #[serde(rename = "STARTS", alias = "starts")]
    StartsWith,
    /// Suffix match on strings
    #[serde(rename = "ENDS", alias = "ends")]
    EndsWith,
}

impl SearchOperator {
    /// The operator as sent to the caller
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchOperator::Equals => "=",
            SearchOperator::GreaterThan => ">",
            SearchOperator::LessThan => "<",
            SearchOperator::GreaterEqual => ">=",
            SearchOperator::LessEqual => "<=",
            SearchOperator::NotEqual => "!=",
            SearchOperator::Contains => "CONTAINS",
            SearchOperator::StartsWith => "STARTS",
            SearchOperator::EndsWith => "ENDS",
        }
    }

    /// Whether this operator becomes a `LIKE` pattern
    pub fn is_pattern(&self) -> bool {
        matches!(
            self,
            SearchOperator::Contains | SearchOperator::StartsWith | SearchOperator::EndsWith
        )
    }

    fn like_pattern(&self, value: &str) -> String {
        match self {
            SearchOperator::Contains => format!("%{value}%"),
            SearchOperator::StartsWith => format!("{value}%"),
            SearchOperator::EndsWith => format!("%{value}"),
            _ => value.to_string(),
        }
    }
}

impl fmt::Display for SearchOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One condition of a repository search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchProperty {
    /// Property symbolic name
    pub property_name: String,
    /// Value to compare against, formatted for the property's data type
    pub property_value: String,
    /// Comparison operator
    pub operator: SearchOperator,
}

/// Class plus the conditions to search it with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchParameters {
    /// Class symbolic name to search
    pub search_class: String,
    /// Conditions, combined with AND; empty returns every object of the class
    #[serde(default)]
    pub search_properties: Vec<SearchProperty>,
}

/// Quote a string literal, doubling embedded single quotes
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn bare_literal(property: &str, value: &str, data_type: DataType) -> Result<String> {
    let valid = match data_type {
        DataType::Boolean => matches!(value.to_ascii_lowercase().as_str(), "true" | "false"),
        DataType::Long => value.parse::<i64>().is_ok(),
        DataType::Double => value.parse::<f64>().is_ok(),
        DataType::Date => value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | ':' | '.' | '+')),
        _ => true,
    };
    if valid {
        Ok(value.to_string())
    } else {
        Err(ContentMcpError::validation(format!(
            "Value '{value}' is not a valid {data_type:?} literal for property {property}"
        )))
    }
}

/// Whether `name` can be written into a clause as a bare property name
pub fn is_property_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Render one condition, or `None` when it has an empty name or value
///
/// `*` wildcards are stripped from the value. Pattern operators are only
/// valid on string properties.
pub fn format_condition(property: &SearchProperty, data_type: DataType) -> Result<Option<String>> {
    let value = property.property_value.replace('*', "");
    if property.property_name.trim().is_empty() || value.is_empty() {
        tracing::debug!("Skipping empty search condition {:?}", property);
        return Ok(None);
    }
    let name = property.property_name.trim();
    if !is_property_identifier(name) {
        return Err(ContentMcpError::validation(format!(
            "'{name}' is not a valid property name"
        )));
    }

    if property.operator.is_pattern() {
        if data_type != DataType::String {
            return Err(ContentMcpError::validation(format!(
                "Operator {} only applies to string properties; {} is {:?}",
                property.operator, name, data_type
            )));
        }
        let pattern = property.operator.like_pattern(&value);
        return Ok(Some(format!("{name} LIKE {}", quote_literal(&pattern))));
    }

    let literal = if data_type.is_unquoted_literal() {
        bare_literal(name, &value, data_type)?
    } else {
        quote_literal(&value)
    };
    Ok(Some(format!("{name} {} {literal}", property.operator)))
}

/// Join the conditions of a search with AND
///
/// Every named property must be defined on `class`.
pub fn build_where_clause(properties: &[SearchProperty], class: &ClassDescriptor) -> Result<String> {
    let mut conditions = Vec::with_capacity(properties.len());
    for property in properties {
        let name = property.property_name.trim();
        if name.is_empty() {
            continue;
        }
        let data_type = match class.property(name) {
            Some(descriptor) => descriptor.data_type,
            None => {
                return Err(ContentMcpError::validation(format!(
                    "Property {name} is not defined on class {}",
                    class.symbolic_name
                )))
            }
        };
        if let Some(condition) = format_condition(property, data_type)? {
            conditions.push(condition);
        }
    }
    Ok(conditions.join(" AND "))
}

/// Properties worth returning from a search: single valued and not object
/// references
pub fn return_properties(class: &ClassDescriptor) -> Vec<String> {
    class
        .property_descriptions
        .iter()
        .filter(|p| p.cardinality != Cardinality::List && p.data_type != DataType::Object)
        .map(|p| p.symbolic_name.clone())
        .collect()
}

/// `LOWER(column) LIKE '%kw%'` for every keyword, joined with OR
pub fn keyword_conditions(column: &str, keywords: &[impl AsRef<str>]) -> String {
    keywords
        .iter()
        .map(|keyword| {
            let pattern = format!("%{}%", keyword.as_ref().to_lowercase());
            format!("LOWER({column}) LIKE {}", quote_literal(&pattern))
        })
        .collect::<Vec<_>>()
        .join(" OR ")
}

/// Version filter for name lookups
///
/// Keeps released versions, the initial in-process version and the initial
/// reservation, which together cover the versions users usually mean.
pub fn current_version_filter() -> String {
    use super::{
        INITIAL_MAJOR_VERSION, INITIAL_MINOR_VERSION, VERSION_STATUS_IN_PROCESS,
        VERSION_STATUS_RELEASED, VERSION_STATUS_RESERVATION,
    };
    format!(
        "(VersionStatus = {VERSION_STATUS_RELEASED} \
         OR (VersionStatus = {VERSION_STATUS_IN_PROCESS} AND MajorVersionNumber = {INITIAL_MAJOR_VERSION}) \
         OR (VersionStatus = {VERSION_STATUS_RESERVATION} AND MajorVersionNumber = {INITIAL_MAJOR_VERSION} \
         AND MinorVersionNumber = {INITIAL_MINOR_VERSION}))"
    )
}
