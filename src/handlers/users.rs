//! # User Management HTTP Handlers
//!
//! 사용자 CRUD 엔드포인트입니다. 핸들러는 JSON을 명령으로 옮기고,
//! [`AppContainer`]의 유스케이스를 호출한 뒤 결과를 [`UserResponse`]로 변환합니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/users` | 새 사용자 생성 | 201 Created |
//! | `GET` | `/api/v1/users/{user_id}` | 사용자 조회 | 200 OK |
//! | `PATCH` | `/api/v1/users/{user_id}` | 사용자 부분 수정 | 200 OK |
//! | `DELETE` | `/api/v1/users/{user_id}` | 사용자 삭제 | 204 No Content |
//!
//! 에러는 `AppError`의 `ResponseError` 구현이 `{"error": "..."}` 형태로 변환합니다.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use log::debug;

use crate::core::errors::AppError;
use crate::core::registry::AppContainer;
use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};
use crate::domain::dto::users::response::UserResponse;
use crate::services::users::{CreateUserCommand, DeleteUserCommand, GetUserQuery, UpdateUserCommand};

/// 사용자 생성 핸들러
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Jane Doe","age":30,"email":"jane@example.com"}'
/// ```
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "user_id": "507f1f77bcf86cd799439011",
///   "name": "Jane Doe",
///   "age": 30,
///   "email": "jane@example.com",
///   "is_adult": true
/// }
/// ```
///
/// ## 검증 실패 (400 Bad Request)
/// ```json
/// { "error": "Validation error: Name must have at least 2 characters" }
/// ```
#[post("")]
pub async fn create_user(
    container: web::Data<AppContainer>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner();

    let user = container
        .create_user()
        .execute(CreateUserCommand {
            name: request.name,
            age: request.age,
            email: request.email,
        })
        .await?;

    Ok(HttpResponse::Created().json(UserResponse::from(&user)))
}

/// 사용자 조회 핸들러
///
/// 잘못된 형식의 ID는 400, 존재하지 않는 ID는 404를 반환합니다.
#[get("/{user_id}")]
pub async fn get_user(
    container: web::Data<AppContainer>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = container
        .get_user()
        .execute(GetUserQuery { user_id: user_id.into_inner() })
        .await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(&user)))
}

/// 사용자 부분 수정 핸들러
///
/// ```bash
/// curl -X PATCH http://localhost:8080/api/v1/users/507f1f77bcf86cd799439011 \
///   -H "Content-Type: application/json" \
///   -d '{"email":"jane2@example.com"}'
/// ```
#[patch("/{user_id}")]
pub async fn update_user(
    container: web::Data<AppContainer>,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner();
    if request.is_empty() {
        debug!("PATCH without fields for user {}", user_id);
    }

    let user = container
        .update_user()
        .execute(UpdateUserCommand {
            user_id: user_id.into_inner(),
            name: request.name,
            age: request.age,
            email: request.email,
        })
        .await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(&user)))
}

/// 사용자 삭제 핸들러
///
/// 물리 삭제이며 이미 삭제된 ID에 대한 두 번째 요청은 404입니다.
#[delete("/{user_id}")]
pub async fn delete_user(
    container: web::Data<AppContainer>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    container
        .delete_user()
        .execute(DeleteUserCommand { user_id: user_id.into_inner() })
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::{Value, json};

    use super::*;
    use crate::config::Settings;
    use crate::repositories::users::InMemoryUserRepository;
    use crate::routes::configure_all_routes;
    use crate::services::events::create_configured_event_dispatcher;

    fn container() -> web::Data<AppContainer> {
        let settings = Settings::from_lookup(|key| match key {
            "REPOSITORY_BACKEND" => Some("memory".to_string()),
            _ => None,
        });

        web::Data::new(AppContainer::new(
            settings,
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(create_configured_event_dispatcher()),
        ))
    }

    #[actix_web::test]
    async fn test_user_lifecycle_over_http() {
        let app = test::init_service(
            App::new().app_data(container()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({"name": "Jane Doe", "age": 30, "email": "jane@example.com"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: UserResponse = test::read_body_json(resp).await;
        assert!(created.is_adult);
        assert_eq!(created.user_id.len(), 24);

        let uri = format!("/api/v1/users/{}", created.user_id);

        let req = test::TestRequest::get().uri(&uri).to_request();
        let fetched: UserResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, created);

        let req = test::TestRequest::patch()
            .uri(&uri)
            .set_json(json!({"email": "jane2@example.com"}))
            .to_request();
        let updated: UserResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.email, "jane2@example.com");
        assert_eq!(updated.name, "Jane Doe");

        let req = test::TestRequest::delete().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_invalid_payload_is_bad_request() {
        let app = test::init_service(
            App::new().app_data(container()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({"name": "A", "age": 25, "email": "bad-email"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Validation error: Name must have at least 2 characters");
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = test::init_service(
            App::new().app_data(container()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().starts_with("Validation error"));
    }

    #[actix_web::test]
    async fn test_malformed_id_is_bad_request() {
        let app = test::init_service(
            App::new().app_data(container()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/users/not-an-id").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_health_reports_backend() {
        let app = test::init_service(
            App::new().app_data(container()).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["repository"], "memory");
    }
}
