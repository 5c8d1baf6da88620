//! # tbl-scan
//!
//! Scanner library for whitespace-delimited table files.
//!
//! A table file is an ordered sequence of text lines. Lines whose first
//! character is `#` are comments; every other non-blank line is a data row of
//! whitespace-separated fields. A row is invalid when one of its fields is
//! exactly the sentinel marker (`BAD_DATA` by default):
//!
//! ```text
//! # sand mouse phenotype counts
//! wt     412  388
//! mut1   BAD_DATA  97
//! ```
//!
//! The scan walks lines in file order and stops on the first invalid row, so
//! callers get either a clean summary or the first offending line.
//!
//! Layout follows the usual split between the raw field lexer and the
//! line-level logic built on top of it:
//!
//! - [`tbl::token`]   field tokenization (logos lexer)
//! - [`tbl::record`]  line records and comment/blank classification
//! - [`tbl::scanner`] the sentinel scan itself
//! - [`tbl::loader`]  loading sources from files or strings
//! - [`tbl::report`]  rendering scan outcomes for people and machines

pub mod tbl;
