//! Error types and error handling for the tokenizer.
//!
//! This module defines the error types raised while scanning source text
//! and while converting literal tokens into values. It includes:
//!
//! - Error structures carrying file, line and offset information
//! - One error variant per malformed construct
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
