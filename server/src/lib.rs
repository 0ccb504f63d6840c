//! # VS Code Themes Library
//!
//! Core library for the VS Code themes crawler. It derives UI colors from
//! theme colors, encodes color search queries, talks to the Visual Studio
//! Marketplace and reshapes rendered themes into key-value records.
//!
//! ## Modules
//!
//! - [`color`] - Color parsing, HSL/Lab conversion and mixing
//! - [`color_query`] - `type|color` search query codec
//! - [`theme`] - Derived UI colors and theme validation
//! - [`marketplace`] - Visual Studio Marketplace extension queries
//! - [`kv`] - Per-language key-value records for rendered themes
//! - [`model`] - Extension and theme data models
//! - [`validation`] - Generic validator trait
//! - [`common`] - Error types shared across modules

pub mod color;
pub mod color_query;
pub mod common;
pub mod kv;
pub mod marketplace;
pub mod model;
pub mod theme;
pub mod validation;
