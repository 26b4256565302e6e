//! # Application Container - 명시적 컴포지션 루트
//!
//! 시작 시점에 한 번 실행되어 설정 → 리포지토리 → 디스패처 → 유스케이스 순서로
//! 의존성을 조립합니다. 전역 레지스트리나 지연 싱글톤은 없으며, 조립된
//! [`AppContainer`]는 `web::Data`로 핸들러에 전달됩니다.
//!
//! ## 조립 순서
//!
//! ```text
//! Settings
//!    │
//!    ├─▶ Step 1: UserRepository 선택 (mongo | memory)
//!    │
//!    ├─▶ Step 2: EventDispatcher 구성 (단독 소유 상태에서 구독 후 Arc로 고정)
//!    │
//!    └─▶ Step 3: Create / Get / Update / Delete 유스케이스 생성
//! ```
//!
//! 테스트에서는 [`AppContainer::new`]로 원하는 리포지토리와 디스패처를 직접 넣습니다.

use std::sync::Arc;

use log::{info, warn};

use crate::config::{RepositoryBackend, Settings};
use crate::core::errors::AppResult;
use crate::db::Database;
use crate::domain::events::{EventDispatcher, EventKind};
use crate::repositories::users::{InMemoryUserRepository, MongoUserRepository, UserRepository};
use crate::services::events::create_configured_event_dispatcher;
use crate::services::users::{CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, UpdateUserUseCase};
use crate::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task,
};

const USE_CASE_COUNT: usize = 4;

/// 조립이 끝난 애플리케이션 의존성 묶음
pub struct AppContainer {
    settings: Settings,
    user_repository: Arc<dyn UserRepository>,
    event_dispatcher: Arc<EventDispatcher>,
    create_user: CreateUserUseCase,
    get_user: GetUserUseCase,
    update_user: UpdateUserUseCase,
    delete_user: DeleteUserUseCase,
}

impl AppContainer {
    /// 설정에 따라 리포지토리를 선택하고 기본 핸들러가 등록된 디스패처로 조립합니다.
    ///
    /// # Errors
    ///
    /// * `InternalError` - `mongo` 백엔드에서 MongoDB 연결에 실패한 경우
    pub async fn bootstrap(settings: &Settings) -> AppResult<Self> {
        print_boxed_title("User Account Service");

        print_step_start(1, "Selecting user repository");
        let user_repository: Arc<dyn UserRepository> = match settings.repository_backend {
            RepositoryBackend::Mongo => {
                let database = Arc::new(Database::connect(&settings.database).await?);
                let repository = MongoUserRepository::new(database.clone());
                print_sub_task(
                    "MongoDB",
                    &format!("{}.{}", database.database_name(), repository.collection_name()),
                );
                Arc::new(repository)
            }
            RepositoryBackend::Memory => {
                if settings.environment.is_production() {
                    warn!("⚠️ In-memory repository selected in production; data is lost on restart");
                }
                Arc::new(InMemoryUserRepository::new())
            }
        };
        print_sub_task(user_repository.name(), settings.repository_backend.as_str());

        print_step_start(2, "Subscribing event handlers");
        let event_dispatcher = create_configured_event_dispatcher();
        let subscriptions = subscription_count(&event_dispatcher);
        print_step_complete(2, "Event handlers subscribed", subscriptions);

        print_step_start(3, "Wiring use cases");
        let container = Self::new(settings.clone(), user_repository, Arc::new(event_dispatcher));
        print_step_complete(3, "Use cases wired", USE_CASE_COUNT);

        print_final_summary(settings.repository_backend.as_str(), subscriptions, USE_CASE_COUNT);
        info!(
            "✅ AppContainer ready (environment: {:?}, repository: {})",
            settings.environment,
            container.user_repository.name()
        );

        Ok(container)
    }

    /// 이미 준비된 리포지토리와 디스패처로 유스케이스를 생성합니다.
    pub fn new(
        settings: Settings,
        user_repository: Arc<dyn UserRepository>,
        event_dispatcher: Arc<EventDispatcher>,
    ) -> Self {
        Self {
            create_user: CreateUserUseCase::new(user_repository.clone(), event_dispatcher.clone()),
            get_user: GetUserUseCase::new(user_repository.clone()),
            update_user: UpdateUserUseCase::new(user_repository.clone(), event_dispatcher.clone()),
            delete_user: DeleteUserUseCase::new(user_repository.clone(), event_dispatcher.clone()),
            settings,
            user_repository,
            event_dispatcher,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn user_repository(&self) -> &Arc<dyn UserRepository> {
        &self.user_repository
    }

    pub fn event_dispatcher(&self) -> &Arc<EventDispatcher> {
        &self.event_dispatcher
    }

    pub fn create_user(&self) -> &CreateUserUseCase {
        &self.create_user
    }

    pub fn get_user(&self) -> &GetUserUseCase {
        &self.get_user
    }

    pub fn update_user(&self) -> &UpdateUserUseCase {
        &self.update_user
    }

    pub fn delete_user(&self) -> &DeleteUserUseCase {
        &self.delete_user
    }
}

fn subscription_count(dispatcher: &EventDispatcher) -> usize {
    [EventKind::UserCreated, EventKind::UserEmailChanged]
        .into_iter()
        .map(|kind| dispatcher.handler_count(kind))
        .sum()
}
