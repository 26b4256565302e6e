//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 유스케이스는 구체 저장소를 알지 못하고 [`UserRepository`](users::UserRepository)
//! 트레이트 객체에만 의존합니다. 구현체는 시작 시점에 설정에 따라 하나가 선택됩니다.
//!
//! # Features
//!
//! - MongoDB 문서 저장소 구현 (`REPOSITORY_BACKEND=mongo`)
//! - 프로세스 내 메모리 구현 (`REPOSITORY_BACKEND=memory`, 테스트 기본값)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{InMemoryUserRepository, UserRepository};
//!
//! let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! let user = repo.get_by_id(&id).await?;
//! ```

pub mod users;
