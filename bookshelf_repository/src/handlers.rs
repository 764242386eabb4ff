use std::sync::Arc;

use actix_web::http::header::LOCATION;
use actix_web::web::Data;
use actix_web::{Error, HttpResponse};
use paperclip::actix::{
    api_v2_operation,
    web::{self},
};

use crate::api::{
    AddBookResponse, BookData, BookId, BookIdData, BookPayload, BooksData, GetAllBooksResponse,
    GetBookResponse, MessageResponse, ResponseStatus,
};
use crate::books_repository::{BookRepository, BookRepositoryError};

const ADD_BOOK_FAILED: &str = "Gagal menambahkan buku.";
const UPDATE_BOOK_FAILED: &str = "Gagal memperbarui buku.";
const BOOK_NOT_FOUND: &str = "Buku tidak ditemukan";
const UPDATE_NOT_FOUND: &str = "Gagal memperbarui buku. Id tidak ditemukan";
const DELETE_NOT_FOUND: &str = "Buku gagal dihapus. Id tidak ditemukan";
/// Suffix used when the request body cannot be parsed as a book
pub(crate) const INVALID_BOOK_BODY: &str = "Format data buku tidak valid";

#[api_v2_operation]
pub async fn health() -> Result<HttpResponse, Error> {
    Ok(HttpResponse::Ok().finish())
}

#[api_v2_operation]
pub async fn get_all_books(
    books_repository: Data<Arc<dyn BookRepository>>,
) -> Result<HttpResponse, Error> {
    let books = books_repository.list_books().await;
    Ok(HttpResponse::Ok().json(GetAllBooksResponse {
        status: ResponseStatus::Success,
        data: BooksData { books },
    }))
}

#[api_v2_operation]
pub async fn add_book(
    books_repository: Data<Arc<dyn BookRepository>>,
    payload: web::Json<BookPayload>,
) -> Result<HttpResponse, Error> {
    Ok(
        match books_repository.add_book(payload.into_inner()).await {
            Ok(book_id) => HttpResponse::Created()
                .append_header((LOCATION, format!("/books/{}", book_id)))
                .json(AddBookResponse {
                    status: ResponseStatus::Success,
                    message: "Buku berhasil ditambahkan".to_string(),
                    data: BookIdData { book_id },
                }),
            Err(BookRepositoryError::Validation(err)) => {
                tracing::warn!("Add book rejected {}", err);
                HttpResponse::BadRequest()
                    .json(MessageResponse::fail(format!("{} {}", ADD_BOOK_FAILED, err)))
            }
            Err(err) => {
                tracing::error!("Add book failed {}", err);
                HttpResponse::InternalServerError().finish()
            }
        },
    )
}

#[api_v2_operation]
pub async fn get_book(
    books_repository: Data<Arc<dyn BookRepository>>,
    book_id: web::Path<BookId>,
) -> Result<HttpResponse, Error> {
    Ok(match books_repository.get_book(&book_id).await {
        Ok(book) => HttpResponse::Ok().json(GetBookResponse {
            status: ResponseStatus::Success,
            data: BookData { book },
        }),
        Err(BookRepositoryError::NotFound(_)) => {
            HttpResponse::NotFound().json(MessageResponse::fail(BOOK_NOT_FOUND))
        }
        Err(err) => {
            tracing::error!("Get book failed {}", err);
            HttpResponse::InternalServerError().finish()
        }
    })
}

/// The body is parsed leniently so an unknown id is reported as not found
/// even when the body is not a book.
#[api_v2_operation]
pub async fn update_book(
    books_repository: Data<Arc<dyn BookRepository>>,
    book_id: web::Path<BookId>,
    payload: Result<web::Json<BookPayload>, Error>,
) -> Result<HttpResponse, Error> {
    Ok(match payload {
        Err(err) => match books_repository.get_book(&book_id).await {
            Err(BookRepositoryError::NotFound(_)) => {
                HttpResponse::NotFound().json(MessageResponse::fail(UPDATE_NOT_FOUND))
            }
            _ => {
                tracing::warn!("Update of book {} has unreadable body {}", book_id, err);
                HttpResponse::BadRequest().json(MessageResponse::fail(format!(
                    "{} {}",
                    UPDATE_BOOK_FAILED, INVALID_BOOK_BODY
                )))
            }
        },
        Ok(payload) => match books_repository
            .update_book(&book_id, payload.into_inner())
            .await
        {
            Ok(()) => {
                HttpResponse::Ok().json(MessageResponse::success("Buku berhasil diperbarui"))
            }
            Err(BookRepositoryError::NotFound(_)) => {
                HttpResponse::NotFound().json(MessageResponse::fail(UPDATE_NOT_FOUND))
            }
            Err(BookRepositoryError::Validation(err)) => {
                tracing::warn!("Update of book {} rejected {}", book_id, err);
                HttpResponse::BadRequest().json(MessageResponse::fail(format!(
                    "{} {}",
                    UPDATE_BOOK_FAILED, err
                )))
            }
        },
    })
}

#[api_v2_operation]
pub async fn delete_book(
    books_repository: Data<Arc<dyn BookRepository>>,
    book_id: web::Path<BookId>,
) -> Result<HttpResponse, Error> {
    Ok(match books_repository.delete_book(&book_id).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::success("Buku berhasil dihapus")),
        Err(BookRepositoryError::NotFound(_)) => {
            HttpResponse::NotFound().json(MessageResponse::fail(DELETE_NOT_FOUND))
        }
        Err(err) => {
            tracing::error!("Delete book failed {}", err);
            HttpResponse::InternalServerError().finish()
        }
    })
}
