//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//!
//! # Features
//!
//! - 사용자 CRUD API 엔드포인트 (`/api/v1/users`)
//! - 헬스체크 엔드포인트 (`/health`)
//! - JSON 본문 파싱 실패를 `{"error": ...}` 400 응답으로 통일
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::routes::configure_all_routes;
//!
//! App::new()
//!     .app_data(web::Data::new(container))
//!     .configure(configure_all_routes)
//! ```

use actix_web::{HttpRequest, HttpResponse, error, get, web};
use serde_json::json;

use crate::core::errors::AppError;
use crate::core::registry::AppContainer;
use crate::handlers;

/// 모든 API 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(health_check)
        .configure(configure_user_routes);
}

/// 사용자 관련 라우트를 설정합니다
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Jane Doe","age":30,"email":"jane@example.com"}'
///
/// curl http://localhost:8080/api/v1/users/507f1f77bcf86cd799439011
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

/// 본문 역직렬화 실패도 검증 실패와 같은 형태로 응답합니다.
fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(err.to_string()).into()
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_account_service",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "repository": "mongo"
/// }
/// ```
#[get("/health")]
async fn health_check(container: web::Data<AppContainer>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "repository": container.settings().repository_backend.as_str(),
    }))
}
