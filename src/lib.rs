//! tscat - Qt Linguist translation catalogs
//!
//! tscat loads Qt Linguist `.ts` catalogs, looks up translations with
//! context/comment fallback and plural forms, substitutes `%1`/`%s`/`{name}`
//! placeholders, and lints catalogs for unfinished, vanished and
//! inconsistent entries.
//!
//! ## Module Structure
//!
//! - `catalog`: `.ts` document model, parser, writer and in-place editor
//! - `lookup`: Translator built from a catalog, locale-based loading and the
//!   process-wide translator list
//! - `placeholder`: Placeholder tokenizing and argument substitution
//! - `plural`: Plural rules per language
//! - `cli`: Command-line interface layer (user-facing commands and actions)
//! - `config`: Configuration file loading and parsing
//! - `context`: Loaded catalogs shared by the lint rules
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Lint rules run by `tscat check`
//! - `scanner`: Catalog discovery on disk
//! - `utils`: Shared utility functions

pub mod catalog;
pub mod cli;
pub mod config;
pub mod context;
pub mod issues;
pub mod lookup;
pub mod placeholder;
pub mod plural;
pub mod rules;
pub mod scanner;
pub mod utils;

pub use catalog::{
    CatalogError, Message, Translation, TranslationCatalog, TranslationStatus, parse_catalog,
    write_catalog,
};
pub use lookup::{LookupOptions, Translator};
pub use placeholder::{Arg, format};
