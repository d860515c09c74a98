//! The catalog: in-memory owner of all book and member records plus their
//! persistence, and the only place with cross-entity logic.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::{book::Book, member::Member, persistence};

/// File name of the persisted book records inside the data directory.
const BOOKS_FILE: &str = "books.csv";

/// File name of the persisted member records inside the data directory.
const MEMBERS_FILE: &str = "members.csv";

/// Errors raised by catalog persistence.
///
/// Lookup misses in borrow/return are deliberately not errors: those
/// operations silently do nothing when the member or book is not found.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading or writing a record file failed.
    #[error("catalog file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A year field in the books file is not a base-10 integer. This aborts
    /// the load; no records from the file are kept.
    #[error("invalid year {value:?} in {}: {source}", .path.display())]
    InvalidYear {
        /// File the offending line was read from.
        path: PathBuf,
        /// The field text that failed to parse.
        value: String,
        /// The underlying parse failure.
        source: std::num::ParseIntError,
    },
}

/// In-memory catalog of books and members, backed by two flat files.
///
/// Both sequences are append-only: there is no delete operation for either.
/// A book's availability is false exactly while its title sits in some
/// member's borrowed list, maintained solely by [`Self::borrow_book`] and
/// [`Self::return_book`].
#[derive(Debug)]
pub struct Catalog {
    /// All books, in insertion order.
    books: Vec<Book>,
    /// All members, in insertion order.
    members: Vec<Member>,
    /// Path of the books file.
    books_path: PathBuf,
    /// Path of the members file.
    members_path: PathBuf,
}

impl Catalog {
    /// Open the catalog backed by `books.csv` and `members.csv` inside
    /// `data_dir`, loading whatever records are present. A missing file is
    /// not an error; the corresponding sequence starts empty.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if a file exists but cannot be read, or
    /// `CatalogError::InvalidYear` if a book line carries a non-numeric year.
    pub fn open(data_dir: &Path) -> Result<Self, CatalogError> {
        let books_path = data_dir.join(BOOKS_FILE);
        let members_path = data_dir.join(MEMBERS_FILE);

        let books = persistence::load_books(&books_path)?;
        let members = persistence::load_members(&members_path)?;

        Ok(Self { books, members, books_path, members_path })
    }

    /// Append a book and persist the book file. No duplicate check: two books
    /// with the same title can coexist, and title lookups resolve to the
    /// first match in sequence order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the book file cannot be rewritten.
    pub fn add_book(&mut self, book: Book) -> Result<(), CatalogError> {
        self.books.push(book);
        persistence::save_books(&self.books_path, &self.books)
    }

    /// Append a member and persist the member file. Member ids are not
    /// checked for uniqueness.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the member file cannot be rewritten.
    pub fn add_member(&mut self, member: Member) -> Result<(), CatalogError> {
        self.members.push(member);
        persistence::save_members(&self.members_path, &self.members)
    }

    /// Lend the first available book with `title` to the member with
    /// `member_id`, then persist the book file. If the member is unknown, the
    /// title is unknown, or no copy is available, nothing happens and nothing
    /// is reported to the caller.
    ///
    /// The member file is not rewritten: borrowed lists are volatile.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the book file cannot be rewritten.
    pub fn borrow_book(&mut self, member_id: &str, title: &str) -> Result<(), CatalogError> {
        let Some(member) = self.members.iter_mut().find(|m| m.member_id() == member_id) else {
            debug!(member_id, "borrow ignored, unknown member id");
            return Ok(());
        };
        let Some(book) = self.books.iter_mut().find(|b| b.title() == title && b.is_available())
        else {
            debug!(title, "borrow ignored, no available copy");
            return Ok(());
        };

        book.mark_borrowed();
        member.add_borrowed(title);
        persistence::save_books(&self.books_path, &self.books)
    }

    /// Take back the first book with `title` from the member with
    /// `member_id`, then persist the book file. Availability is not required:
    /// a book that was never lent out can still be "returned". Unknown member
    /// or title is a silent no-op, as in [`Self::borrow_book`].
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the book file cannot be rewritten.
    pub fn return_book(&mut self, member_id: &str, title: &str) -> Result<(), CatalogError> {
        let Some(member) = self.members.iter_mut().find(|m| m.member_id() == member_id) else {
            debug!(member_id, "return ignored, unknown member id");
            return Ok(());
        };
        let Some(book) = self.books.iter_mut().find(|b| b.title() == title) else {
            debug!(title, "return ignored, unknown title");
            return Ok(());
        };

        book.mark_returned();
        member.remove_borrowed(title);
        persistence::save_books(&self.books_path, &self.books)
    }

    /// Encoded line for every book, in catalog order.
    #[must_use]
    pub fn list_books(&self) -> Vec<String> {
        self.books.iter().map(Book::encode).collect()
    }

    /// Encoded line for every member, in catalog order.
    #[must_use]
    pub fn list_members(&self) -> Vec<String> {
        self.members.iter().map(Member::encode).collect()
    }

    /// Rewrite both record files from the current in-memory state.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if either file cannot be rewritten.
    pub fn save(&self) -> Result<(), CatalogError> {
        persistence::save_books(&self.books_path, &self.books)?;
        persistence::save_members(&self.members_path, &self.members)
    }

    /// All books, in insertion order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// All members, in insertion order.
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }
}
