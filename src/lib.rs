//! Box-document text format tools.
//!
//! A document is a tree with two independent namespaces per level: named
//! *boxes* (nested trees) and named *items* (size-tagged primitive values).
//! The text form uses `[name]...[/name]` for boxes and `(name)literal` lines
//! for items, with per-format literal syntaxes for hex, real, boolean, and
//! text values. [`doc::Tree::parse`] and [`doc::Tree::render`] convert
//! between the two representations.

/// Core value, tree, and codec types.
pub mod doc;
