pub use in_memory_books_repository::InMemoryBookRepository;

use crate::api::{Book, BookId, BookPayload, BookSummary};
use crate::book::BookFields;

mod in_memory_books_repository;

/// Rejections of a write payload. Messages are the user facing suffixes sent over the wire.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Mohon isi nama buku")]
    MissingName,

    #[error("Mohon isi pageCount dan readPage")]
    MissingPageCount,

    #[error("readPage tidak boleh lebih besar dari pageCount")]
    ReadPageExceedsPageCount,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum BookRepositoryError {
    #[error("Book {0} not found")]
    NotFound(BookId),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Checks shared by create and update, evaluated in order so the first failing rule wins
pub fn validate(payload: BookPayload) -> Result<BookFields, ValidationError> {
    let name = match payload.name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ValidationError::MissingName),
    };
    let (Some(page_count), Some(read_page)) = (payload.page_count, payload.read_page) else {
        return Err(ValidationError::MissingPageCount);
    };
    if read_page > page_count {
        return Err(ValidationError::ReadPageExceedsPageCount);
    }

    Ok(BookFields {
        name,
        year: payload.year,
        author: payload.author,
        summary: payload.summary,
        publisher: payload.publisher,
        page_count,
        read_page,
        reading: payload.reading.unwrap_or_default(),
    })
}

#[async_trait::async_trait]
pub trait BookRepository: Send + Sync {
    /// Validates and adds book to repository, returns an id assigned to the book
    async fn add_book(&self, payload: BookPayload) -> Result<BookId, BookRepositoryError>;
    /// Summaries of all books in insertion order
    async fn list_books(&self) -> Vec<BookSummary>;
    /// Retrieves the full record of the book
    async fn get_book(&self, book_id: &str) -> Result<Book, BookRepositoryError>;
    /// Replaces all writable fields of the book.
    /// Not found is reported before the payload is validated.
    async fn update_book(
        &self,
        book_id: &str,
        payload: BookPayload,
    ) -> Result<(), BookRepositoryError>;
    /// Removes the book, keeping the order of the remaining ones
    async fn delete_book(&self, book_id: &str) -> Result<(), BookRepositoryError>;
}

#[cfg(test)]
mod validation_tests {
    use proptest::prelude::*;

    use super::*;

    fn payload(
        name: Option<&str>,
        page_count: Option<i64>,
        read_page: Option<i64>,
    ) -> BookPayload {
        BookPayload {
            name: name.map(str::to_string),
            page_count,
            read_page,
            ..BookPayload::default()
        }
    }

    #[test]
    fn test_missing_name_is_reported_first() {
        assert_eq!(
            validate(payload(None, Some(10), Some(20))),
            Err(ValidationError::MissingName)
        );
        assert_eq!(
            validate(payload(Some(""), Some(10), Some(20))),
            Err(ValidationError::MissingName)
        );
        assert_eq!(
            validate(payload(None, None, None)),
            Err(ValidationError::MissingName)
        );
    }

    #[test]
    fn test_missing_page_numbers_are_rejected() {
        assert_eq!(
            validate(payload(Some("A"), None, Some(1))),
            Err(ValidationError::MissingPageCount)
        );
        assert_eq!(
            validate(payload(Some("A"), Some(1), None)),
            Err(ValidationError::MissingPageCount)
        );
    }

    #[test]
    fn test_valid_payload_is_converted() {
        let fields = validate(BookPayload {
            name: Some("A".to_string()),
            year: Some(2010),
            author: Some("Author".to_string()),
            summary: Some("Summary".to_string()),
            publisher: Some("Publisher".to_string()),
            page_count: Some(100),
            read_page: Some(100),
            reading: None,
        })
        .expect("Payload should be valid");

        assert_eq!(fields.name, "A");
        assert_eq!(fields.year, Some(2010));
        assert_eq!(fields.page_count, 100);
        assert_eq!(fields.read_page, 100);
        assert!(!fields.reading);
    }

    proptest! {
        #[test]
        fn page_overflow_rule(page_count in -10_000i64..10_000, read_page in -10_000i64..10_000) {
            let result = validate(payload(Some("A"), Some(page_count), Some(read_page)));
            if read_page > page_count {
                prop_assert_eq!(result, Err(ValidationError::ReadPageExceedsPageCount));
            } else {
                prop_assert!(result.is_ok());
            }
        }
    }
}
