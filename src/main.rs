//! Interactive front end for the library catalog.
//!
//! Collects raw field values from stdin and drives the catalog's operation
//! surface with already-typed arguments; the catalog itself performs no input
//! validation. The data directory is taken from the first CLI argument and
//! defaults to the current directory.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use library_catalog::{Book, Catalog, CatalogError, Member};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a compact stdout logger, filtered by `RUST_LOG` when set.
fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("library_catalog=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

/// Print `label`, then read one line from stdin with the trailing newline
/// stripped. Returns `None` on end of input.
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Prompt for the four book fields and add the book to the catalog. The year
/// must parse as an integer here; a bad value cancels the action.
fn add_book(catalog: &mut Catalog) -> Result<(), CatalogError> {
    let (Some(title), Some(author), Some(isbn), Some(year)) = (
        prompt("Enter title: ")?,
        prompt("Enter author: ")?,
        prompt("Enter ISBN: ")?,
        prompt("Enter year: ")?,
    ) else {
        return Ok(());
    };

    let Ok(year) = year.parse::<i32>() else {
        println!("Invalid year; book not added.");
        return Ok(());
    };

    catalog.add_book(Book::new(&title, &author, &isbn, year))
}

/// Prompt for the three member fields and register the member.
fn add_member(catalog: &mut Catalog) -> Result<(), CatalogError> {
    let (Some(name), Some(member_id), Some(contact)) =
        (prompt("Enter name: ")?, prompt("Enter ID: ")?, prompt("Enter contact: ")?)
    else {
        return Ok(());
    };

    catalog.add_member(Member::new(&name, &member_id, &contact))
}

/// Prompt for a member id and title, then attempt the borrow.
fn borrow_book(catalog: &mut Catalog) -> Result<(), CatalogError> {
    let (Some(member_id), Some(title)) = (prompt("Enter member ID: ")?, prompt("Enter title: ")?)
    else {
        return Ok(());
    };

    catalog.borrow_book(&member_id, &title)
}

/// Prompt for a member id and title, then attempt the return.
fn return_book(catalog: &mut Catalog) -> Result<(), CatalogError> {
    let (Some(member_id), Some(title)) = (prompt("Enter member ID: ")?, prompt("Enter title: ")?)
    else {
        return Ok(());
    };

    catalog.return_book(&member_id, &title)
}

/// Run the menu loop until the user exits or input ends, then flush the
/// catalog to disk.
fn main() -> Result<(), CatalogError> {
    init_logger();

    let data_dir = std::env::args_os().nth(1).map_or_else(|| PathBuf::from("."), PathBuf::from);
    let mut catalog = Catalog::open(&data_dir)?;

    loop {
        println!();
        println!("Library Catalog");
        println!("1. Add book");
        println!("2. Add member");
        println!("3. List books");
        println!("4. List members");
        println!("5. Borrow book");
        println!("6. Return book");
        println!("7. Exit");

        let Some(choice) = prompt("Choose an option: ")? else {
            break;
        };

        match choice.trim() {
            "1" => add_book(&mut catalog)?,
            "2" => add_member(&mut catalog)?,
            "3" => {
                for line in catalog.list_books() {
                    println!("{line}");
                }
            }
            "4" => {
                for line in catalog.list_members() {
                    println!("{line}");
                }
            }
            "5" => borrow_book(&mut catalog)?,
            "6" => return_book(&mut catalog)?,
            "7" => break,
            _ => println!("Invalid choice. Try again."),
        }
    }

    catalog.save()?;
    Ok(())
}
