//! 사용자 도메인의 값 객체 모듈
//!
//! 생성 시점에만 검증을 수행하는 불변 스칼라 타입들을 제공합니다.
//! 한 번 생성된 값 객체는 수명 동안 항상 유효함이 보장되며,
//! 값을 바꾸는 setter는 존재하지 않습니다.
//!
//! 생성, 복원, 수정 경로가 모두 같은 생성자를 거치므로 검증 규칙은
//! 이 모듈 한 곳에만 존재합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::domain::value_objects::{Age, Email, Name};
//!
//! let name = Name::new("Jane Doe")?;
//! let age = Age::new(30)?;
//! let email = Email::new("jane@example.com")?;
//!
//! assert!(age.is_adult());
//! assert_eq!(email.domain(), "example.com");
//! ```

pub mod age;
pub mod email;
pub mod name;

pub use age::Age;
pub use email::Email;
pub use name::Name;

use thiserror::Error;

/// 값 객체 생성 실패 사유
///
/// 메시지는 API 응답에 그대로 노출됩니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    #[error("Name cannot be empty")]
    NameEmpty,

    #[error("Name must have at least {min} characters")]
    NameTooShort { min: usize },

    #[error("Name cannot exceed {max} characters")]
    NameTooLong { max: usize },

    #[error("Age cannot be negative")]
    AgeNegative,

    #[error("Age cannot exceed {max} years")]
    AgeTooHigh { max: u8 },

    #[error("Email cannot be empty")]
    EmailEmpty,

    #[error("Invalid email format")]
    EmailInvalidFormat,

    #[error("Email cannot exceed {max} characters")]
    EmailTooLong { max: usize },

    #[error("Invalid identifier format: {0}")]
    InvalidIdentifier(String),
}
