//! Variable Assignments
//!
//! Truth values the console loop can collect alongside a formula.
//! The validator never reads them.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

/// Accepted shape of one entry: a variable, a separator, a truth value
const ENTRY_PATTERN: &str = r"^\s*([A-Za-z0-9])\s*(?:[=:]\s*|\s+)(\S+)\s*$";

static ENTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ENTRY_PATTERN).expect("assignment entry pattern is valid"));

/// Errors when reading an assignment entry
#[derive(Debug, thiserror::Error)]
pub enum AssignmentError {
    #[error("expected '<variable> <value>', got '{0}'")]
    Malformed(String),

    #[error("'{value}' is not a truth value for '{variable}' (use 1/0, true/false, t/f, yes/no)")]
    InvalidValue { variable: char, value: String },
}

/// Mapping from single-character variables to truth values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableAssignments {
    values: BTreeMap<char, bool>,
}

impl VariableAssignments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a value, returning the previous one if the variable was already set
    pub fn assign(&mut self, variable: char, value: bool) -> Option<bool> {
        self.values.insert(variable, value)
    }

    pub fn get(&self, variable: char) -> Option<bool> {
        self.values.get(&variable).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Assignments in variable order
    pub fn iter(&self) -> impl Iterator<Item = (char, bool)> + '_ {
        self.values.iter().map(|(&variable, &value)| (variable, value))
    }

    /// Parse and record an entry like `A 1`, `p=true` or `q: f`
    pub fn assign_entry(&mut self, line: &str) -> Result<(char, bool), AssignmentError> {
        let (variable, value) = parse_entry(line)?;
        self.assign(variable, value);
        Ok((variable, value))
    }
}

/// Parse one assignment entry without recording it
pub fn parse_entry(line: &str) -> Result<(char, bool), AssignmentError> {
    let captures = ENTRY_RE
        .captures(line)
        .ok_or_else(|| AssignmentError::Malformed(line.trim().to_string()))?;

    let variable = captures
        .get(1)
        .and_then(|m| m.as_str().chars().next())
        .ok_or_else(|| AssignmentError::Malformed(line.trim().to_string()))?;
    let raw_value = captures.get(2).map(|m| m.as_str()).unwrap_or_default();

    let value = parse_truth_value(raw_value).ok_or_else(|| AssignmentError::InvalidValue {
        variable,
        value: raw_value.to_string(),
    })?;

    Ok((variable, value))
}

fn parse_truth_value(text: &str) -> Option<bool> {
    match text.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" | "y" | "yes" => Some(true),
        "0" | "f" | "false" | "n" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry_separators() {
        assert_eq!(parse_entry("A 1").unwrap(), ('A', true));
        assert_eq!(parse_entry("p=false").unwrap(), ('p', false));
        assert_eq!(parse_entry("  q :  T ").unwrap(), ('q', true));
        assert_eq!(parse_entry("7\tno").unwrap(), ('7', false));
    }

    #[test]
    fn test_parse_entry_rejects_multi_char_variable() {
        let err = parse_entry("AB 1").unwrap_err();
        assert!(matches!(err, AssignmentError::Malformed(ref text) if text == "AB 1"));
    }

    #[test]
    fn test_parse_entry_rejects_missing_value() {
        assert!(matches!(
            parse_entry("A").unwrap_err(),
            AssignmentError::Malformed(_)
        ));
    }

    #[test]
    fn test_parse_entry_rejects_bad_value() {
        let err = parse_entry("A maybe").unwrap_err();
        assert!(matches!(
            err,
            AssignmentError::InvalidValue { variable: 'A', ref value } if value == "maybe"
        ));
    }

    #[test]
    fn test_entry_pattern_is_shared_across_entries() {
        assert!(Regex::new(ENTRY_PATTERN).is_ok());

        let mut assignments = VariableAssignments::new();
        for (i, variable) in ('a'..='z').enumerate() {
            let value = if i % 2 == 0 { "1" } else { "0" };
            assignments.assign_entry(&format!("{variable} {value}")).unwrap();
        }
        assert_eq!(assignments.len(), 26);
        assert_eq!(assignments.get('a'), Some(true));
        assert_eq!(assignments.get('b'), Some(false));
    }

    #[test]
    fn test_assignments_overwrite_and_order() {
        let mut assignments = VariableAssignments::new();
        assert!(assignments.is_empty());

        assignments.assign_entry("B 0").unwrap();
        assignments.assign_entry("A 1").unwrap();
        assert_eq!(assignments.assign('B', true), Some(false));

        assert_eq!(assignments.len(), 2);
        assert_eq!(assignments.get('B'), Some(true));
        assert_eq!(assignments.get('C'), None);
        assert_eq!(
            assignments.iter().collect::<Vec<_>>(),
            vec![('A', true), ('B', true)]
        );
    }
}
