//! 사용자 리포지토리 계약과 구현체
//!
//! | 연산 | 입력 | 출력 | 실패 |
//! |------|------|------|------|
//! | `get_by_id` | 식별자 | `Some(User)` / `None` | I/O 실패 시 `PersistenceError` |
//! | `create` | User | 저장된 User | `PersistenceError` |
//! | `update` | 식별자, User | `Some(User)` / `None` | `PersistenceError` |
//! | `delete` | 식별자 | 없음 | `PersistenceError` |
//!
//! 반환되는 `User`는 저장된 문서에서 복원된 값이므로 도메인 이벤트 버퍼가 비어 있습니다.
//! 같은 식별자에 대한 동시 수정은 직렬화되지 않으며 마지막 쓰기가 이깁니다.

pub mod memory_repo;
pub mod user_repo;

pub use memory_repo::InMemoryUserRepository;
pub use user_repo::MongoUserRepository;

use async_trait::async_trait;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::entity::EntityId;
use crate::domain::entities::users::User;
use crate::domain::models::UserDocument;

/// 사용자 영속화 계약
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 리포지토리 이름 (시작 로그용)
    fn name(&self) -> &str;

    async fn get_by_id(&self, id: &EntityId) -> AppResult<Option<User>>;

    async fn create(&self, user: &User) -> AppResult<User>;

    async fn update(&self, id: &EntityId, user: &User) -> AppResult<Option<User>>;

    async fn delete(&self, id: &EntityId) -> AppResult<()>;
}

/// 저장된 문서를 도메인 객체로 복원합니다.
///
/// 더 이상 검증을 통과하지 못하는 문서는 저장소 데이터 손상으로 간주합니다.
pub(crate) fn restore_document(document: UserDocument) -> AppResult<User> {
    let id = document.id.to_hex();

    User::try_from(document).map_err(|e| {
        AppError::PersistenceError(format!("stored user {} is invalid: {}", id, e))
    })
}
