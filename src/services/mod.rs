//! Service layer containing the conversion pipeline.
//!
//! ## Service map
//! - `tables.rs` — ones/teens/tens and scale-name lookup data.
//! - `sanitize.rs` — separator stripping, leading-zero removal, validation.
//! - `buckets.rs` — 3-digit grouping and per-bucket word translation.
//! - `assemble.rs` — word and word-and-digit output assembly.
//! - `speller.rs` — sanitize → bucketize → assemble orchestration.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Services are pure functions over immutable inputs; no I/O.
//! - Only `sanitize` can fail; translation and assembly are total.

pub mod assemble;
pub mod buckets;
pub mod output;
pub mod sanitize;
pub mod speller;
pub mod tables;
