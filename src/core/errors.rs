//! # Application Error Handling System
//!
//! 사용자 계정 서비스 전역에서 사용하는 통합 에러 처리 모듈입니다.
//! 도메인 계층의 세분화된 에러(값 객체 검증, 이벤트 핸들러 실패)를
//! 하나의 `AppError`로 모으고, Actix-Web의 `ResponseError`를 구현하여
//! 일관된 JSON 에러 응답으로 변환합니다.
//!
//! ## 에러 분류
//!
//! - **ValidationError**: 값 객체 생성 실패 등 호출자의 잘못된 입력
//! - **NotFound**: 존재하지 않는 식별자 참조
//! - **PersistenceError**: 리포지토리 읽기/쓰기 실패 (재시도하지 않음)
//! - **HandlerError**: 구독된 이벤트 핸들러 실패 (영속화는 이미 완료된 상태)
//! - **InternalError**: 부트스트랩, 설정 등 인프라 수준의 오류
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 이름/나이/이메일 검증 실패, 잘못된 ID 형식 |
//! | `NotFound` | 404 Not Found | 사용자 없음 |
//! | `PersistenceError` | 500 Internal Server Error | MongoDB 쓰기 실패 |
//! | `HandlerError` | 500 Internal Server Error | 이벤트 후처리 실패 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn find(repo: &dyn UserRepository, id: &EntityId) -> AppResult<User> {
//!     repo.get_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound(format!("User with ID {} not found", id)))
//! }
//! ```

use thiserror::Error;

use crate::domain::events::dispatcher::HandlerError;
use crate::domain::value_objects::ValueObjectError;

/// 애플리케이션 전역 에러 타입
///
/// 유스케이스와 HTTP 핸들러가 반환하는 단일 에러 타입입니다.
/// 도메인 에러는 `From` 구현을 통해 `?` 연산자로 자동 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 실패
    ///
    /// 값 객체 생성 실패처럼 호출자의 잘못으로 발생합니다.
    /// 400 Bad Request로 응답됩니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 요청된 사용자가 존재하지 않음
    #[error("Not found: {0}")]
    NotFound(String),

    /// 리포지토리 연산 실패
    ///
    /// 코어는 재시도하지 않으며, 복구는 외부 호출자의 책임입니다.
    #[error("Persistence error: {0}")]
    PersistenceError(String),

    /// 이벤트 핸들러 실패
    ///
    /// 이 에러가 발생한 시점에는 영속화가 이미 커밋되어 있으므로
    /// 롤백되지 않은 부분적 부수 효과 상태가 외부에 드러납니다.
    #[error("Event handler error: {0}")]
    HandlerError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<ValueObjectError> for AppError {
    fn from(error: ValueObjectError) -> Self {
        AppError::ValidationError(error.to_string())
    }
}

impl From<HandlerError> for AppError {
    fn from(error: HandlerError) -> Self {
        AppError::HandlerError(error.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 애플리케이션 결과 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 크레이트 에러에 컨텍스트 메시지를 덧붙여 `InternalError`로 변환합니다.
///
/// ```rust,ignore
/// let options = ClientOptions::parse(&uri).await.context("MongoDB URI 파싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
