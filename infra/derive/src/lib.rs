#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the Insecta workspace.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! insecta-derive = { path = "../../infra/derive" }
//! thiserror = "2"
//! ```
//!
//! The example below is `ignore`d because proc-macro crates cannot run their own
//! expansion in doctests; the `tests/ui` cases cover it instead.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants holding a source field,
///   so upstream errors propagate with `?`.
/// * **Internal Fallback**: Implements `From<&'static str>` and `From<String>` when an
///   `Internal { message, context }` variant exists.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants only.
/// 2. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 3. Variants with a `source` field (or a field marked `#[source]`/`#[from]`) must also
///    carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use insecta_derive::insecta_error;
/// use std::borrow::Cow;
///
/// #[insecta_error]
/// pub enum TaxonomyError {
///     #[error("I/O error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal taxonomy error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn emit(out: &mut impl std::io::Write) -> Result<(), TaxonomyError> {
///     writeln!(out, "------").context("Writing separator")
/// }
/// ```
#[proc_macro_attribute]
pub fn insecta_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
