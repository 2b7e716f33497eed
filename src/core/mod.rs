//! Core Types
//!
//! Diagnostics produced by validation and the variable assignments the
//! console loop collects.

pub mod assignments;
pub mod diagnostics;

pub use assignments::{AssignmentError, VariableAssignments};
pub use diagnostics::{Diagnostic, ErrorKind, FormulaError, Verdict};
