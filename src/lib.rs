//! Single-process library-catalog manager.
//!
//! This crate tracks books and members, records borrow/return actions, and
//! persists both collections to flat comma-delimited files (`books.csv` and
//! `members.csv`). Fields are not escaped, so a comma inside a title or name
//! corrupts the record on the next load; callers must live with that.

pub mod book;
pub mod catalog;
pub mod member;
mod persistence;

pub use book::Book;
pub use catalog::{Catalog, CatalogError};
pub use member::Member;
