/// A single catalog item and its availability flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Title of the book; also its lookup identity within the catalog.
    title: String,
    /// Author of the book.
    author: String,
    /// ISBN, carried as free text and never validated.
    isbn: String,
    /// Publication year.
    year: i32,
    /// Whether the book is currently on the shelf.
    available: bool,
}

impl Book {
    /// Create a new book, available by default.
    #[must_use]
    pub fn new(title: &str, author: &str, isbn: &str, year: i32) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            year,
            available: true,
        }
    }

    /// Get the book's title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the book's author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Get the book's ISBN.
    #[must_use]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Get the book's publication year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Whether the book is currently available for borrowing.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Mark the book as lent out.
    pub fn mark_borrowed(&mut self) {
        self.available = false;
    }

    /// Mark the book as back on the shelf.
    pub fn mark_returned(&mut self) {
        self.available = true;
    }

    /// Encode the book as one `title,author,isbn,year` line.
    ///
    /// Fields are not escaped: a comma inside any field corrupts the record on
    /// the next load. Availability is not part of the encoding.
    #[must_use]
    pub fn encode(&self) -> String {
        let Self { title, author, isbn, year, .. } = self;
        format!("{title},{author},{isbn},{year}")
    }
}
