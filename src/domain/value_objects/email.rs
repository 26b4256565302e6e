//! 이메일 주소 값 객체

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ValueObjectError;

pub const EMAIL_MAX_CHARS: usize = 254;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// 유효한 이메일 주소
///
/// `local@domain.tld` 형식이어야 하며 최대 254자입니다.
/// 검사 순서는 비어 있음 → 형식 → 길이입니다.
///
/// # Examples
///
/// ```rust,ignore
/// let email = Email::new("jane@example.com")?;
/// assert_eq!(email.local_part(), "jane");
/// assert_eq!(email.domain(), "example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> Result<Self, ValueObjectError> {
        let value = value.into();

        if value.is_empty() {
            return Err(ValueObjectError::EmailEmpty);
        }
        if !EMAIL_PATTERN.is_match(&value) {
            return Err(ValueObjectError::EmailInvalidFormat);
        }
        if value.chars().count() > EMAIL_MAX_CHARS {
            return Err(ValueObjectError::EmailTooLong { max: EMAIL_MAX_CHARS });
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// 첫 번째 `@` 뒤의 도메인 부분
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map(|(_, domain)| domain).unwrap_or_default()
    }

    /// 첫 번째 `@` 앞의 로컬 부분
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map(|(local, _)| local).unwrap_or(&self.0)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}
