//! # Request Validation
//!
//! Validation rules are data: each endpoint declares a slice of [`FieldRule`]s
//! and [`validate`] interprets them against the sanitized body and query
//! records. Violations come back in rule order, one per failed rule.

use serde_json::Value;
use shared::{FieldLocation, FieldViolation};

use crate::domain::sanitizer::Record;

const DEFAULT_MESSAGE: &str = "Invalid value";

/// Requirement placed on a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Present and not an empty string
    NonEmpty,
    /// Present, a string, and not empty
    RequiredString,
    /// Absent, or a non-empty string
    NonEmptyWhenPresent,
}

/// A field, where to find it, and what it must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub location: FieldLocation,
    pub rule: Rule,
    pub message: &'static str,
}

impl FieldRule {
    pub const fn body(field: &'static str, rule: Rule) -> Self {
        Self {
            field,
            location: FieldLocation::Body,
            rule,
            message: DEFAULT_MESSAGE,
        }
    }

    pub const fn query(field: &'static str, rule: Rule) -> Self {
        Self {
            field,
            location: FieldLocation::Query,
            rule,
            message: DEFAULT_MESSAGE,
        }
    }

    pub const fn with_message(mut self, message: &'static str) -> Self {
        self.message = message;
        self
    }

    fn check(&self, value: Option<&Value>) -> bool {
        match (self.rule, value) {
            (Rule::NonEmpty, None) | (Rule::RequiredString, None) => false,
            (Rule::NonEmpty, Some(value)) => !is_empty(value),
            (Rule::RequiredString, Some(value)) => value.as_str().is_some_and(|s| !s.is_empty()),
            (Rule::NonEmptyWhenPresent, None) => true,
            (Rule::NonEmptyWhenPresent, Some(value)) => value.as_str().is_some_and(|s| !s.is_empty()),
        }
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Check every rule, collecting all violations
pub fn validate(body: &Record, query: &Record, rules: &[FieldRule]) -> Result<(), Vec<FieldViolation>> {
    let violations: Vec<FieldViolation> = rules
        .iter()
        .filter_map(|rule| {
            let source = match rule.location {
                FieldLocation::Body => body,
                FieldLocation::Query => query,
            };
            let value = source.get(rule.field);

            if rule.check(value) {
                None
            } else {
                Some(FieldViolation::new(rule.field, rule.location, value.cloned(), rule.message))
            }
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
