use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use portfolio_backend::config::db::DbProfile;
use portfolio_backend::config::server::{AdminSeed, DEFAULT_API_PATH};
use portfolio_backend::infra::state::build_state;
use portfolio_backend::middleware::request_trace::RequestTrace;
use portfolio_backend::middleware::structured_logger::StructuredLogger;
use portfolio_backend::routes;
use portfolio_backend::state::app_state::AppState;
use portfolio_backend::state::security_config::SecurityConfig;
use portfolio_backend::AppError;

/// Builds the production route tree over a private in-memory database.
pub struct TestAppBuilder {
    security: SecurityConfig,
    with_db: bool,
    admin: Option<AdminSeed>,
    api_path: String,
}

impl TestAppBuilder {
    pub fn new(security: SecurityConfig) -> Self {
        Self {
            security,
            with_db: true,
            admin: None,
            api_path: DEFAULT_API_PATH.to_string(),
        }
    }

    /// No database at all; handlers that need one answer 503.
    pub fn without_db(mut self) -> Self {
        self.with_db = false;
        self
    }

    pub fn with_admin(mut self, email: &str, password: &str) -> Self {
        self.admin = Some(AdminSeed {
            email: email.to_string(),
            password: password.to_string(),
        });
        self
    }

    pub fn with_api_path(mut self, api_path: &str) -> Self {
        self.api_path = api_path.to_string();
        self
    }

    pub async fn build_state(&self) -> Result<AppState, AppError> {
        let mut builder = build_state(self.security.clone()).with_admin(self.admin.clone());
        if self.with_db {
            builder = builder.with_db(DbProfile::InMemory);
        }
        builder.build().await
    }

    pub async fn build(
        self,
    ) -> Result<
        impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error>,
        AppError,
    > {
        let state = self.build_state().await?;
        Ok(init_app(state, self.api_path).await)
    }
}

/// Same middleware order as `main.rs`, minus CORS and compression.
pub async fn init_app(
    state: AppState,
    api_path: String,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(move |cfg| routes::configure(cfg, &api_path)),
    )
    .await
}

pub fn create_test_app(security: SecurityConfig) -> TestAppBuilder {
    TestAppBuilder::new(security)
}
