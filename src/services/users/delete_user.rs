//! 사용자 삭제 유스케이스

use std::sync::Arc;

use log::info;

use super::{parse_user_id, publish_pending_events, user_not_found};
use crate::core::errors::AppResult;
use crate::domain::events::EventDispatcher;
use crate::repositories::users::UserRepository;

#[derive(Debug, Clone)]
pub struct DeleteUserCommand {
    pub user_id: String,
}

pub struct DeleteUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    event_dispatcher: Arc<EventDispatcher>,
}

impl DeleteUserUseCase {
    pub fn new(user_repository: Arc<dyn UserRepository>, event_dispatcher: Arc<EventDispatcher>) -> Self {
        Self {
            user_repository,
            event_dispatcher,
        }
    }

    /// 사용자를 삭제합니다. 삭제 전용 이벤트는 정의되어 있지 않으며,
    /// 복원된 애그리거트의 빈 버퍼만 발행 경로를 거칩니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - ID 형식 오류
    /// * `NotFound` - 사용자가 없는 경우
    /// * `PersistenceError`
    pub async fn execute(&self, command: DeleteUserCommand) -> AppResult<()> {
        let id = parse_user_id(&command.user_id)?;

        let mut user = self
            .user_repository
            .get_by_id(&id)
            .await?
            .ok_or_else(|| user_not_found(&id))?;

        self.user_repository.delete(&id).await?;

        publish_pending_events(&self.event_dispatcher, &mut user)?;

        info!("🗑️ User deleted: {}", id);
        Ok(())
    }
}
