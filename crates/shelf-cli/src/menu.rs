//! The interactive menu loop.
//!
//! Generic over the input/output streams so tests can drive a whole
//! session through in-memory buffers. Every store error that is not fatal
//! is printed and the loop continues; only save failures propagate.

use std::io::{BufRead, Write};

use shelf_core::{CatalogStore, ListFilter, Status};

use crate::ui::{self, UiContext};

/// Run the menu loop until the user saves and exits (or input ends).
///
/// End-of-input is treated as leaving without saving; state is only
/// flushed to disk through the explicit save-and-exit choice.
pub fn run<R, W>(
    store: &mut CatalogStore,
    mut input: R,
    mut out: W,
    ctx: &UiContext,
    quiet: bool,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    if !quiet {
        writeln!(
            out,
            "Shelf v{} - library: {}",
            shelf_core::VERSION,
            store.path().display()
        )?;
    }

    loop {
        print_menu(&mut out)?;
        let Some(choice) = prompt(&mut input, &mut out, "\nPlease choose: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => add_book(store, &mut input, &mut out)?,
            "2" => search_books(store, &mut input, &mut out, ctx)?,
            "3" => borrow_book(store, &mut input, &mut out)?,
            "4" => return_book(store, &mut input, &mut out)?,
            "5" => list_books(store, &mut out, ListFilter::All, ctx)?,
            "6" => list_books(store, &mut out, ListFilter::AvailableOnly, ctx)?,
            "7" => {
                store.save()?;
                writeln!(out, "\nLibrary data saved. Exiting...")?;
                break;
            }
            _ => writeln!(out, "\nInvalid choice. Please try again.")?,
        }
    }

    Ok(())
}

fn print_menu<W: Write>(out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "\n=== Shelf ===")?;
    writeln!(out, "1. Add Book")?;
    writeln!(out, "2. Search Book")?;
    writeln!(out, "3. Borrow Book")?;
    writeln!(out, "4. Return Book")?;
    writeln!(out, "5. List All Books")?;
    writeln!(out, "6. List Available Books")?;
    writeln!(out, "7. Save and exit")?;
    Ok(())
}

/// Print a prompt and read one trimmed line; `None` on end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> anyhow::Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn book_row(
    index: u32,
    author: &str,
    title: &str,
    year: i32,
    status: Status,
    ctx: &UiContext,
) -> String {
    format!(
        "Index: {}, {}, {}, {} {}",
        index,
        author,
        title,
        year,
        ui::status_badge(status, ctx.color)
    )
}

fn add_book<R: BufRead, W: Write>(
    store: &mut CatalogStore,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    let Some(author) = prompt(input, out, "\nEnter author name: ")? else {
        return Ok(());
    };
    let Some(title) = prompt(input, out, "Enter book title: ")? else {
        return Ok(());
    };
    let Some(raw_year) = prompt(input, out, "Enter publication year: ")? else {
        return Ok(());
    };

    let year = match CatalogStore::parse_year(&raw_year) {
        Ok(year) => year,
        Err(err) => {
            writeln!(out, "\n{}", err)?;
            return Ok(());
        }
    };

    match store.add_book(&author, &title, year) {
        Ok(index) => writeln!(out, "\nBook added with index {}.", index)?,
        Err(err) => writeln!(out, "\n{}", err)?,
    }
    Ok(())
}

fn search_books<R: BufRead, W: Write>(
    store: &CatalogStore,
    input: &mut R,
    out: &mut W,
    ctx: &UiContext,
) -> anyhow::Result<()> {
    let Some(keyword) = prompt(
        input,
        out,
        "\nEnter keyword to search (author/title, * matches any sequence): ",
    )?
    else {
        return Ok(());
    };

    let matches = match store.search(&keyword) {
        Ok(matches) => matches,
        Err(err) => {
            writeln!(out, "\n{}", err)?;
            return Ok(());
        }
    };

    if matches.is_empty() {
        writeln!(out, "\nNo books found.")?;
        return Ok(());
    }

    writeln!(out, "\nSearch Results:")?;
    for hit in matches {
        writeln!(
            out,
            "{}",
            book_row(
                hit.book.index,
                &hit.author,
                &hit.book.title,
                hit.book.year,
                hit.status,
                ctx
            )
        )?;
    }
    Ok(())
}

fn borrow_book<R: BufRead, W: Write>(
    store: &mut CatalogStore,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    let Some(raw) = prompt(input, out, "\nEnter book index to borrow: ")? else {
        return Ok(());
    };
    let Ok(index) = raw.parse::<u32>() else {
        writeln!(out, "\nInvalid input. Please enter a valid index.")?;
        return Ok(());
    };

    match store.borrow_book(index) {
        Ok(()) => writeln!(out, "Book with index {} borrowed.", index)?,
        Err(err) => writeln!(out, "{}", err)?,
    }
    Ok(())
}

fn return_book<R: BufRead, W: Write>(
    store: &mut CatalogStore,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    let Some(raw) = prompt(input, out, "\nEnter book index to return: ")? else {
        return Ok(());
    };
    let Ok(index) = raw.parse::<u32>() else {
        writeln!(out, "\nInvalid input. Please enter a valid index.")?;
        return Ok(());
    };

    match store.return_book(index) {
        Ok(()) => writeln!(out, "Book with index {} returned.", index)?,
        Err(err) => writeln!(out, "{}", err)?,
    }
    Ok(())
}

fn list_books<W: Write>(
    store: &CatalogStore,
    out: &mut W,
    filter: ListFilter,
    ctx: &UiContext,
) -> anyhow::Result<()> {
    writeln!(out, "\nLibrary Books:")?;
    for row in store.list(filter) {
        writeln!(
            out,
            "{}",
            book_row(row.index, &row.author, &row.title, row.year, row.status, ctx)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn store_at(dir: &tempfile::TempDir) -> CatalogStore {
        CatalogStore::load(dir.path().join("library.json")).expect("load empty store")
    }

    fn run_script(store: &mut CatalogStore, script: &str) -> String {
        let mut out = Vec::new();
        run(
            store,
            Cursor::new(script.as_bytes()),
            &mut out,
            &UiContext::plain(),
            true,
        )
        .expect("menu session");
        String::from_utf8(out).expect("utf8 output")
    }

    #[test]
    fn test_add_then_list_session() {
        let dir = tempdir().unwrap();
        let mut store = store_at(&dir);

        let output = run_script(&mut store, "1\nOrwell\n1984\n1949\n5\n7\n");

        assert!(output.contains("Book added with index 1."));
        assert!(output.contains("Library Books:"));
        assert!(output.contains("Index: 1, Orwell, 1984, 1949 (Available)"));
        assert!(output.contains("Library data saved. Exiting..."));
        assert!(dir.path().join("library.json").exists());
    }

    #[test]
    fn test_invalid_year_leaves_store_untouched() {
        let dir = tempdir().unwrap();
        let mut store = store_at(&dir);

        let output = run_script(&mut store, "1\nOrwell\n1984\nabc\n7\n");

        assert!(output.contains("Invalid publication year"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_borrow_rejects_non_numeric_index() {
        let dir = tempdir().unwrap();
        let mut store = store_at(&dir);
        store.add_book("Orwell", "1984", 1949).unwrap();

        let output = run_script(&mut store, "3\nfirst\n7\n");

        assert!(output.contains("Invalid input. Please enter a valid index."));
        assert_eq!(store.status_of(1), Status::Available);
    }

    #[test]
    fn test_borrow_and_return_messages() {
        let dir = tempdir().unwrap();
        let mut store = store_at(&dir);
        store.add_book("Tolkien", "The Hobbit", 1937).unwrap();

        let output = run_script(&mut store, "3\n1\n3\n1\n4\n1\n4\n1\n7\n");

        assert!(output.contains("Book with index 1 borrowed."));
        assert!(output.contains("Book with index 1 is not available for borrowing"));
        assert!(output.contains("Book with index 1 returned."));
        assert!(output.contains("Book with index 1 is not borrowed"));
    }

    #[test]
    fn test_search_reports_no_hits() {
        let dir = tempdir().unwrap();
        let mut store = store_at(&dir);
        store.add_book("Orwell", "1984", 1949).unwrap();

        let output = run_script(&mut store, "2\nzzz\n7\n");

        assert!(output.contains("No books found."));
    }

    #[test]
    fn test_wildcard_search_session() {
        let dir = tempdir().unwrap();
        let mut store = store_at(&dir);
        store.add_book("Orwell", "1984", 1949).unwrap();
        store.add_book("Orwell", "Animal Farm", 1945).unwrap();

        let output = run_script(&mut store, "2\n*Farm\n7\n");

        assert!(output.contains("Search Results:"));
        assert!(output.contains("Index: 2, Orwell, Animal Farm, 1945 (Available)"));
        assert!(!output.contains("Index: 1, Orwell, 1984"));
    }

    #[test]
    fn test_available_only_listing_filters() {
        let dir = tempdir().unwrap();
        let mut store = store_at(&dir);
        store.add_book("Orwell", "1984", 1949).unwrap();
        store.add_book("Orwell", "Animal Farm", 1945).unwrap();
        store.borrow_book(1).unwrap();

        let output = run_script(&mut store, "6\n7\n");

        assert!(output.contains("Index: 2, Orwell, Animal Farm, 1945 (Available)"));
        assert!(!output.contains("Index: 1, Orwell, 1984"));
    }

    #[test]
    fn test_invalid_choice_reprints_menu() {
        let dir = tempdir().unwrap();
        let mut store = store_at(&dir);

        let output = run_script(&mut store, "9\n7\n");

        assert!(output.contains("Invalid choice. Please try again."));
        // The menu shows up again after the error.
        assert!(output.matches("=== Shelf ===").count() >= 2);
    }

    #[test]
    fn test_end_of_input_exits_without_saving() {
        let dir = tempdir().unwrap();
        let mut store = store_at(&dir);
        store.add_book("Orwell", "1984", 1949).unwrap();

        let output = run_script(&mut store, "");

        assert!(!output.contains("Library data saved"));
        assert!(!dir.path().join("library.json").exists());
    }
}
