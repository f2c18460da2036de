//! Record types shared across the data-entry pipeline.
//!
//! Every worksheet row in this system is six integers wide, one value per
//! item type, and position `i` refers to the same item type in every table.
//! The newtypes here exist so the pipeline cannot confuse a sales row with a
//! stock row even though both are `[i64; 6]` underneath.

pub mod macros;
pub mod records;

pub use records::*;

#[cfg(test)]
#[path = "records_tests.rs"]
mod records_tests;
