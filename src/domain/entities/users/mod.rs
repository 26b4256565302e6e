//! Users Entity Module
//!
//! 사용자 애그리거트 루트를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{User, UserProperties};
//!
//! // 새 사용자 생성 (UserCreated 이벤트 1개가 버퍼에 쌓임)
//! let mut user = User::create(UserProperties {
//!     name: "Jane Doe".to_string(),
//!     age: 30,
//!     email: "jane@example.com".to_string(),
//! })?;
//!
//! // 저장소에서 복원 (이벤트 없음)
//! let restored = User::restore(*user.id(), properties)?;
//! ```

pub mod user;

pub use user::{User, UserProperties};
