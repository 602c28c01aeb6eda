/*!
 * # srtlint - SRT subtitle timing checker
 *
 * A Rust library and CLI for validating the chronological ordering of
 * timestamp pairs in SRT-style subtitle files.
 *
 * ## Features
 *
 * - Extract `start --> end` timing pairs from raw subtitle text
 * - Check consecutive pairs for a strictly increasing timestamp chain
 * - Classify violations (inverted cue, overlap, inverted predecessor)
 * - Map each violation back to a line number and offset in the source
 * - Check single files or whole directories, gated by file extension
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `timing`: the core checker
 *   - `timing::extractor`: timing-pair extraction
 *   - `timing::validator`: pairwise ordering validation
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller and reporting policy
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod timing;

// Re-export main types for easier usage
pub use app_config::{Config, LogLevel};
pub use app_controller::{Controller, ValidationSummary};
pub use errors::AppError;
pub use timing::{TimingError, TimingErrorKind, TimingMatch, extract_timings, validate};
