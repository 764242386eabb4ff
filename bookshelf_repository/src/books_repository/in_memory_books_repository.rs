use indexmap::IndexMap;

use crate::api::{Book, BookId, BookPayload, BookSummary};
use crate::book::{generate_book_id, stamp};
use crate::books_repository::{validate, BookRepository, BookRepositoryError};

/// Books kept in process memory in insertion order, lost when the process exits
#[derive(Default)]
pub struct InMemoryBookRepository {
    books: parking_lot::RwLock<IndexMap<BookId, Book>>,
}

#[async_trait::async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn add_book(&self, payload: BookPayload) -> Result<BookId, BookRepositoryError> {
        let fields = validate(payload)?;
        let mut locked_books = self.books.write();

        let book_id = loop {
            let candidate = generate_book_id();
            if !locked_books.contains_key(&candidate) {
                break candidate;
            }
        };
        locked_books.insert(
            book_id.clone(),
            Book::create(book_id.clone(), fields, stamp()),
        );
        tracing::info!("Added book {}", book_id);
        Ok(book_id)
    }

    async fn list_books(&self) -> Vec<BookSummary> {
        self.books.read().values().map(Book::to_summary).collect()
    }

    async fn get_book(&self, book_id: &str) -> Result<Book, BookRepositoryError> {
        self.books
            .read()
            .get(book_id)
            .cloned()
            .ok_or_else(|| BookRepositoryError::NotFound(book_id.to_string()))
    }

    async fn update_book(
        &self,
        book_id: &str,
        payload: BookPayload,
    ) -> Result<(), BookRepositoryError> {
        let mut locked_books = self.books.write();
        let book = locked_books
            .get_mut(book_id)
            .ok_or_else(|| BookRepositoryError::NotFound(book_id.to_string()))?;

        let fields = validate(payload)?;
        book.overwrite(fields, stamp());
        tracing::info!("Updated book {}", book_id);
        Ok(())
    }

    async fn delete_book(&self, book_id: &str) -> Result<(), BookRepositoryError> {
        self.books
            .write()
            .shift_remove(book_id)
            .ok_or_else(|| BookRepositoryError::NotFound(book_id.to_string()))?;
        tracing::info!("Deleted book {}", book_id);
        Ok(())
    }
}
