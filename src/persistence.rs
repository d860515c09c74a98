//! Flat-file persistence for the two catalog record files.
//!
//! Each file holds one comma-joined record per line with a fixed field count
//! and order, no header and no quoting. Saving rewrites the whole file from
//! the in-memory sequence; loading a missing file yields an empty sequence.

use std::{fs, io, path::Path};

use tracing::debug;

use crate::{book::Book, catalog::CatalogError, member::Member};

/// Rewrite the books file with one encoded line per book, in sequence order.
///
/// # Errors
///
/// Returns `CatalogError::Io` if the file cannot be written.
pub(crate) fn save_books(path: &Path, books: &[Book]) -> Result<(), CatalogError> {
    write_lines(path, books.iter().map(Book::encode))?;
    debug!(path = %path.display(), count = books.len(), "saved books");
    Ok(())
}

/// Rewrite the members file with one encoded line per member, in sequence
/// order. Borrowed-title lists are not part of the member encoding and are
/// therefore never written.
///
/// # Errors
///
/// Returns `CatalogError::Io` if the file cannot be written.
pub(crate) fn save_members(path: &Path, members: &[Member]) -> Result<(), CatalogError> {
    write_lines(path, members.iter().map(Member::encode))?;
    debug!(path = %path.display(), count = members.len(), "saved members");
    Ok(())
}

/// Load the books file. Every reconstructed book is available: availability is
/// not part of the encoding.
///
/// # Errors
///
/// Returns `CatalogError::InvalidYear` if a year field is not a base-10
/// integer, or `CatalogError::Io` if the file exists but cannot be read.
pub(crate) fn load_books(path: &Path) -> Result<Vec<Book>, CatalogError> {
    let Some(contents) = read_if_present(path)? else {
        debug!(path = %path.display(), "no books file, starting empty");
        return Ok(Vec::new());
    };

    let mut books = Vec::new();
    for line in contents.lines() {
        let mut fields = line.splitn(4, ',');
        let (Some(title), Some(author), Some(isbn), Some(year)) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            // A line with too few fields ends the parse; it and anything
            // after it are dropped.
            break;
        };

        let year = year.parse::<i32>().map_err(|source| CatalogError::InvalidYear {
            path: path.to_path_buf(),
            value: year.to_string(),
            source,
        })?;

        books.push(Book::new(title, author, isbn, year));
    }

    debug!(path = %path.display(), count = books.len(), "loaded books");
    Ok(books)
}

/// Load the members file. Every reconstructed member starts with an empty
/// borrowed-title list.
///
/// # Errors
///
/// Returns `CatalogError::Io` if the file exists but cannot be read.
pub(crate) fn load_members(path: &Path) -> Result<Vec<Member>, CatalogError> {
    let Some(contents) = read_if_present(path)? else {
        debug!(path = %path.display(), "no members file, starting empty");
        return Ok(Vec::new());
    };

    let mut members = Vec::new();
    for line in contents.lines() {
        let mut fields = line.splitn(3, ',');
        let (Some(name), Some(member_id), Some(contact)) =
            (fields.next(), fields.next(), fields.next())
        else {
            break;
        };

        members.push(Member::new(name, member_id, contact));
    }

    debug!(path = %path.display(), count = members.len(), "loaded members");
    Ok(members)
}

/// Read a whole record file, mapping a missing file to `None`.
fn read_if_present(path: &Path) -> Result<Option<String>, CatalogError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(CatalogError::Io(err)),
    }
}

/// Overwrite `path` with the given lines, each newline-terminated.
fn write_lines<I>(path: &Path, lines: I) -> Result<(), CatalogError>
where
    I: Iterator<Item = String>,
{
    let mut buf = String::new();
    for line in lines {
        buf.push_str(&line);
        buf.push('\n');
    }
    fs::write(path, buf)?;
    Ok(())
}
