//! # 사용자 유스케이스
//!
//! 각 유스케이스는 하나의 비즈니스 동작을 조율합니다.
//!
//! ## 변경 유스케이스의 처리 순서
//!
//! 1. 사전 조건 확인 (수정/삭제 대상이 없으면 `NotFound`)
//! 2. 애그리거트 생성 또는 변경
//! 3. 리포지토리에 영속화
//! 4. 버퍼에 쌓인 도메인 이벤트 발행
//! 5. 버퍼 비우기
//!
//! 영속화가 실패하면 이벤트는 발행되지 않습니다. 핸들러가 실패하면 영속화는
//! 이미 커밋된 상태로 `HandlerError`가 반환됩니다.
//!
//! ```rust,ignore
//! let create_user = CreateUserUseCase::new(repo.clone(), dispatcher.clone());
//! let user = create_user.execute(CreateUserCommand {
//!     name: "Jane Doe".to_string(),
//!     age: 30,
//!     email: "jane@example.com".to_string(),
//! }).await?;
//! ```

pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod update_user;

#[cfg(test)]
pub(crate) mod test_support;

pub use create_user::{CreateUserCommand, CreateUserUseCase};
pub use delete_user::{DeleteUserCommand, DeleteUserUseCase};
pub use get_user::{GetUserQuery, GetUserUseCase};
pub use update_user::{UpdateUserCommand, UpdateUserUseCase};

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::entity::{AggregateRoot, EntityId};
use crate::domain::events::EventDispatcher;

/// 영속화 이후 애그리거트의 이벤트를 발행하고 버퍼를 비웁니다.
///
/// 발행이 실패하면 버퍼는 비우지 않은 채 에러를 반환합니다.
pub(crate) fn publish_pending_events<A: AggregateRoot>(
    dispatcher: &EventDispatcher,
    aggregate: &mut A,
) -> AppResult<()> {
    dispatcher.dispatch(&aggregate.domain_events())?;
    aggregate.clear_domain_events();
    Ok(())
}

pub(crate) fn parse_user_id(raw: &str) -> AppResult<EntityId> {
    Ok(EntityId::parse_str(raw)?)
}

pub(crate) fn user_not_found(id: &EntityId) -> AppError {
    AppError::NotFound(format!("User with ID {} not found", id))
}
