//! Error types for rule loading and tree loading
//!
//! Evaluation itself never fails: malformed rules degrade to a non-match.
//! These errors cover the edges around it, where rule lists and trees are
//! read from configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a rule list.
#[derive(Error, Debug)]
pub enum RuleError {
    /// A `missing` rule carries nested rules.
    #[error("{path}: a `missing` rule for `{kind}` cannot carry nested rules")]
    MissingWithChildren {
        /// Location of the rule, e.g. `rules[2].children[0]`
        path: String,
        /// The rule's target kind
        kind: String,
    },

    /// The rule's criteria is neither `contains` nor `missing`.
    #[error("{path}: unrecognized criteria `{criteria}` for `{kind}`")]
    UnrecognizedPolarity {
        /// Location of the rule
        path: String,
        /// The rule's target kind
        kind: String,
        /// The criteria string as written
        criteria: String,
    },

    /// The rule list could not be deserialized.
    #[error("invalid rule list: {0}")]
    Parse(#[from] serde_json::Error),

    /// The rule file could not be read.
    #[error("failed to read rule file {}: {}", .path.display(), .source)]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by a [`TreeFrontend`](crate::frontend::TreeFrontend).
#[derive(Error, Debug)]
pub enum LoadError {
    /// The input is not valid JSON.
    #[error("invalid tree document: {0}")]
    Json(#[from] serde_json::Error),

    /// The input is JSON but not a tree the frontend understands.
    #[error("unexpected tree shape: expected {expected}, found {found}")]
    Shape {
        /// What the frontend was looking for
        expected: &'static str,
        /// What it found instead
        found: String,
    },
}

/// Result type alias for rule operations
pub type Result<T> = std::result::Result<T, RuleError>;
