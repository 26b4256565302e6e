//! 사용자 생성 유스케이스

use std::sync::Arc;

use log::info;

use super::publish_pending_events;
use crate::core::errors::AppResult;
use crate::domain::entities::entity::Entity;
use crate::domain::entities::users::{User, UserProperties};
use crate::domain::events::EventDispatcher;
use crate::repositories::users::UserRepository;

#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    pub name: String,
    pub age: i64,
    pub email: String,
}

impl From<CreateUserCommand> for UserProperties {
    fn from(command: CreateUserCommand) -> Self {
        Self {
            name: command.name,
            age: command.age,
            email: command.email,
        }
    }
}

pub struct CreateUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    event_dispatcher: Arc<EventDispatcher>,
}

impl CreateUserUseCase {
    pub fn new(user_repository: Arc<dyn UserRepository>, event_dispatcher: Arc<EventDispatcher>) -> Self {
        Self {
            user_repository,
            event_dispatcher,
        }
    }

    /// 새 사용자를 생성하고 `UserCreated`를 발행합니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 이름/나이/이메일 검증 실패 (이름부터 검사, 첫 실패 반환)
    /// * `PersistenceError` - 저장 실패. 이벤트는 발행되지 않음
    /// * `HandlerError` - 저장 후 핸들러 실패
    pub async fn execute(&self, command: CreateUserCommand) -> AppResult<User> {
        let mut user = User::create(command.into())?;

        self.user_repository.create(&user).await?;

        publish_pending_events(&self.event_dispatcher, &mut user)?;

        info!("👤 User created: {}", user.id());
        Ok(user)
    }
}
