//! i18n-audit - hardcoded UI string finder for react-i18next screens
//!
//! Scans an explicit list of source files for double-quoted literals that look
//! like user-visible text, reports whether each file already pulls in the
//! translation hook, and suggests `t('...')` replacements for literals found in
//! a mapping table. Files are only ever read.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, report printing)
//! - `config`: Configuration file loading and parsing
//! - `mapping`: Literal-to-translation-key lookup table
//! - `scan`: Per-file extraction and analysis pipeline

pub mod cli;
pub mod config;
pub mod mapping;
pub mod scan;
