use anyhow::{bail, Context};
use reqwest::StatusCode;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

use crate::api::{
    AddBookResponse, Book, BookId, BookPayload, BookSummary, GetAllBooksResponse,
    GetBookResponse, MessageResponse,
};

pub struct BookshelfClient {
    url: String,
    client: ClientWithMiddleware,
}

/// Message carried by a failure envelope, empty when the body is not one
async fn failure_message(response: reqwest::Response) -> String {
    response
        .json::<MessageResponse>()
        .await
        .map(|body| body.message)
        .unwrap_or_default()
}

impl BookshelfClient {
    pub fn new(url: &str) -> anyhow::Result<Self> {
        let reqwest_client = reqwest::Client::builder()
            .build()
            .context("Failed to build reqwest client")?;
        let client = ClientBuilder::new(reqwest_client)
            // Insert the tracing middleware
            .with(TracingMiddleware::default())
            .build();

        Ok(Self {
            url: url.to_string(),
            client,
        })
    }

    /// Calls POST /books endpoint
    /// Returns id assigned to the book
    pub async fn add_book(&self, payload: &BookPayload) -> anyhow::Result<BookId> {
        let response = self
            .client
            .post(format!("{}/books", self.url))
            .json(payload)
            .send()
            .await?;

        if !response.status().is_success() {
            bail!("Failed to add book {}", failure_message(response).await)
        }

        let body: AddBookResponse = response
            .json()
            .await
            .context("Failed to parse add book response")?;
        Ok(body.data.book_id)
    }

    /// Calls GET /books endpoint
    pub async fn list_books(&self) -> anyhow::Result<Vec<BookSummary>> {
        let response = self
            .client
            .get(format!("{}/books", self.url))
            .send()
            .await?;
        if response.status().is_success() {
            let body: GetAllBooksResponse = response.json().await?;
            Ok(body.data.books)
        } else {
            bail!("Failed to list books {}", failure_message(response).await)
        }
    }

    /// Calls GET /books/{book_id} endpoint
    /// Returns None if the book is not in the repository
    pub async fn get_book(&self, book_id: &str) -> anyhow::Result<Option<Book>> {
        let response = self
            .client
            .get(format!("{}/books/{}", self.url, book_id))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            Ok(None)
        } else if response.status().is_success() {
            let body: GetBookResponse = response.json().await?;
            Ok(Some(body.data.book))
        } else {
            bail!("Failed to get book {}", failure_message(response).await)
        }
    }

    /// Calls PUT /books/{book_id} endpoint
    /// Returns false if the book is not in the repository
    pub async fn update_book(
        &self,
        book_id: &str,
        payload: &BookPayload,
    ) -> anyhow::Result<bool> {
        let response = self
            .client
            .put(format!("{}/books/{}", self.url, book_id))
            .json(payload)
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            Ok(false)
        } else if response.status().is_success() {
            Ok(true)
        } else {
            bail!("Failed to update book {}", failure_message(response).await)
        }
    }

    /// Calls DELETE /books/{book_id} endpoint
    /// Returns false if the book is not in the repository
    pub async fn delete_book(&self, book_id: &str) -> anyhow::Result<bool> {
        let response = self
            .client
            .delete(format!("{}/books/{}", self.url, book_id))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            Ok(false)
        } else if response.status().is_success() {
            Ok(true)
        } else {
            bail!("Failed to delete book {}", failure_message(response).await)
        }
    }
}
