//! 사용자 부분 수정 유스케이스

use std::sync::Arc;

use log::info;

use super::{parse_user_id, publish_pending_events, user_not_found};
use crate::core::errors::AppResult;
use crate::domain::entities::users::{User, UserProperties};
use crate::domain::events::EventDispatcher;
use crate::repositories::users::UserRepository;

/// 부분 수정 명령. `None`인 필드는 기존 값을 유지합니다.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserCommand {
    pub user_id: String,
    pub name: Option<String>,
    pub age: Option<i64>,
    pub email: Option<String>,
}

pub struct UpdateUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    event_dispatcher: Arc<EventDispatcher>,
}

impl UpdateUserUseCase {
    pub fn new(user_repository: Arc<dyn UserRepository>, event_dispatcher: Arc<EventDispatcher>) -> Self {
        Self {
            user_repository,
            event_dispatcher,
        }
    }

    /// 기존 사용자를 읽어 주어진 필드만 덮어쓴 뒤 저장합니다.
    ///
    /// 이름/나이는 재구성(restore)으로 반영되어 이벤트가 없고, 이메일이 실제로
    /// 바뀐 경우에만 `UserEmailChanged`가 발행됩니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - ID 형식 오류 또는 필드 검증 실패
    /// * `NotFound` - 대상 사용자가 없는 경우 (읽기 시점 또는 저장 시점)
    /// * `PersistenceError` / `HandlerError`
    pub async fn execute(&self, command: UpdateUserCommand) -> AppResult<User> {
        let id = parse_user_id(&command.user_id)?;

        let existing = self
            .user_repository
            .get_by_id(&id)
            .await?
            .ok_or_else(|| user_not_found(&id))?;

        let current = existing.properties();
        let mut user = User::restore(
            id,
            UserProperties {
                name: command.name.unwrap_or(current.name),
                age: command.age.unwrap_or(current.age),
                email: current.email.clone(),
            },
        )?;

        if let Some(email) = command.email {
            if email != current.email {
                user.change_email(email)?;
            }
        }

        self
            .user_repository
            .update(&id, &user)
            .await?
            .ok_or_else(|| user_not_found(&id))?;

        publish_pending_events(&self.event_dispatcher, &mut user)?;

        info!("✏️ User updated: {}", id);
        Ok(user)
    }
}
