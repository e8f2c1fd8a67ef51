//! Core library for cdaylink
//!
//! This crate implements the **Functional Core** of the cdaylink application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The cdaylink project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`cdaylink_core`** (this crate): Pure transformation functions with zero process I/O
//! - **`cdaylink`**: Clipboard, browser, terminal and MCP server plumbing (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: The only file access is the preference store in [`config`],
//!   and it always receives its directory from the caller
//! - **Language agnostic**: The display language never changes what a transform returns
//!
//! # Module Organization
//!
//! - [`slug`]: Transliteration and slug normalization
//! - [`convert`]: Rewriting `cday.kambria.io` redirect URLs into their `cday.global` form
//! - [`result`]: The editable result field and its "copied" indicator
//! - [`labels`]: The two static label sets (English and Vietnamese) and the example lists
//! - [`config`]: Loading and saving the display language preference
//! - [`error`]: The two recoverable user-facing errors
//!
//! # Example Usage
//!
//! ```rust
//! use cdaylink_core::convert::convert_url;
//! use cdaylink_core::slug::slugify;
//!
//! assert_eq!(slugify("Xin chào!"), "xin-chao");
//!
//! let conversion = convert_url("https://cday.kambria.io/knth-tin-tuc").unwrap();
//! assert_eq!(conversion.destination, "https://knth.cday.global/tin-tuc");
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod labels;
pub mod result;
pub mod slug;

pub use error::Error;
