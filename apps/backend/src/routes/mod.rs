use actix_web::{error, web, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::middleware::JwtAuth;

pub mod articles;
pub mod auth;
pub mod health;
pub mod projects;
pub mod skills;
pub mod users;

/// Mount every route; the same wiring serves `main.rs` and the tests.
///
/// `/health` sits outside the API prefix. Under `api_path`, `/auth` is open
/// and every other scope is behind the strict credential gate.
pub fn configure(cfg: &mut web::ServiceConfig, api_path: &str) {
    cfg.configure(health::configure_routes);

    cfg.service(
        web::scope(api_path)
            .app_data(web::QueryConfig::default().error_handler(query_error))
            .app_data(web::PathConfig::default().error_handler(path_error))
            .service(web::scope("/auth").configure(auth::configure_routes))
            .service(
                web::scope("/articles")
                    .wrap(JwtAuth::strict())
                    .configure(articles::configure_routes),
            )
            .service(
                web::scope("/projects")
                    .wrap(JwtAuth::strict())
                    .configure(projects::configure_routes),
            )
            .service(
                web::scope("/skills")
                    .wrap(JwtAuth::strict())
                    .configure(skills::configure_routes),
            )
            .service(
                web::scope("/users")
                    .wrap(JwtAuth::strict())
                    .configure(users::configure_routes),
            ),
    );
}

fn query_error(err: error::QueryPayloadError, _: &HttpRequest) -> actix_web::Error {
    AppError::bad_request(ErrorCode::BadRequest, format!("Invalid query string: {err}")).into()
}

fn path_error(err: error::PathError, _: &HttpRequest) -> actix_web::Error {
    AppError::bad_request(ErrorCode::BadRequest, format!("Invalid path parameter: {err}")).into()
}
