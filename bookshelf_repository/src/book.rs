use chrono::{SecondsFormat, Utc};

use crate::api::{Book, BookId, BookSummary, Timestamp};

/// Book attributes that passed validation, ready to be written into a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFields {
    pub name: String,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: i64,
    pub read_page: i64,
    pub reading: bool,
}

pub fn compute_finished(page_count: i64, read_page: i64) -> bool {
    page_count == read_page
}

/// Current instant in ISO-8601, sortable as text
pub fn stamp() -> Timestamp {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn generate_book_id() -> BookId {
    uuid::Uuid::new_v4().to_string()
}

impl Book {
    pub(crate) fn create(id: BookId, fields: BookFields, now: Timestamp) -> Self {
        Self {
            id,
            finished: compute_finished(fields.page_count, fields.read_page),
            name: fields.name,
            year: fields.year,
            author: fields.author,
            summary: fields.summary,
            publisher: fields.publisher,
            page_count: fields.page_count,
            read_page: fields.read_page,
            reading: fields.reading,
            inserted_at: now.clone(),
            updated_at: now,
        }
    }

    /// Replaces everything except `id` and `inserted_at`
    pub(crate) fn overwrite(&mut self, fields: BookFields, now: Timestamp) {
        self.finished = compute_finished(fields.page_count, fields.read_page);
        self.name = fields.name;
        self.year = fields.year;
        self.author = fields.author;
        self.summary = fields.summary;
        self.publisher = fields.publisher;
        self.page_count = fields.page_count;
        self.read_page = fields.read_page;
        self.reading = fields.reading;
        self.updated_at = now;
    }

    pub fn to_summary(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            publisher: self.publisher.clone(),
        }
    }
}
