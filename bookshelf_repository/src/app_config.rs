use actix_web::HttpResponse;
use paperclip::actix::web;

use crate::api::MessageResponse;
use crate::handlers;
use crate::handlers::INVALID_BOOK_BODY;

pub fn config_app(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(handlers::health)))
        .service(
            web::scope("/books")
                .service(
                    web::resource("")
                        .route(web::get().to(handlers::get_all_books))
                        .route(web::post().to(handlers::add_book)),
                )
                .service(
                    web::resource("/{book_id}")
                        .route(web::get().to(handlers::get_book))
                        .route(web::put().to(handlers::update_book))
                        .route(web::delete().to(handlers::delete_book)),
                ),
        );
}

/// Renders unparseable request bodies in the same envelope as validation failures
pub fn json_config() -> actix_web::web::JsonConfig {
    actix_web::web::JsonConfig::default().error_handler(|err, _req| {
        tracing::warn!("Rejected request body {}", err);
        let response = HttpResponse::BadRequest().json(MessageResponse::fail(format!(
            "Gagal memproses permintaan. {}",
            INVALID_BOOK_BODY
        )));
        actix_web::error::InternalError::from_response(err, response).into()
    })
}
