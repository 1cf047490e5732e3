//! # Loaders for the two NEO data sources
//!
//! Ingestion entry points keyed by source format, in the same spirit as a
//! trajectory reader layer: each submodule owns one on-disk shape and hands
//! plain entity vectors to the caller.
//!
//! - [`neo_csv_reader`] — keyed/tabular NEO records from an SBDB
//!   orbital-database CSV export.
//! - [`cad_json_reader`] — positional close-approach rows from an SBDB
//!   close-approach API JSON document.
//!
//! A record failing a required-field coercion aborts the whole load; there
//! is no skip-and-continue. Callers wanting per-record recovery must guard
//! each factory call themselves.

pub mod cad_json_reader;
pub mod neo_csv_reader;

pub use cad_json_reader::load_approaches;
pub use neo_csv_reader::load_neos;
