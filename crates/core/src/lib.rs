//! Domain primitives for the folio backend.
//!
//! Holds the shared error type and the résumé file store. Everything
//! HTTP- or database-shaped lives in `folio-api` and `folio-db`.

pub mod error;
pub mod resume;
