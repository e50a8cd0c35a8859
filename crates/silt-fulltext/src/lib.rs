//! MySQL full-text search for schema-mapped entities.
//!
//! Entities opt in by declaring a full-text column set; registration
//! provisions one `ALTER TABLE … ADD FULLTEXT` statement per concrete
//! type, and [`FullTextSearch`] compiles to a `MATCH … AGAINST` fragment
//! under the MySQL dialect.

pub mod compiler;
pub mod index;
pub mod modes;
pub mod provision;
pub mod search;

#[cfg(test)]
mod tests;

pub use index::{FullText, FullTextIndex, fulltext_index};
pub use modes::MatchMode;
pub use provision::DeclarationError;
pub use search::FullTextSearch;

// Startup installation: the registration listener that provisions index
// DDL, and the MySQL compiler rule. Both are idempotent, so linking this
// crate more than once into a process is harmless.
#[ctor::ctor(unsafe)]
fn install() {
    compiler::install();
    provision::install();
}
