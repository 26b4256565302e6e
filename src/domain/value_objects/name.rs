//! 사용자 이름 값 객체

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValueObjectError;

/// 앞뒤 공백을 제외한 최소 글자 수
pub const NAME_MIN_CHARS: usize = 2;
/// 원본 문자열 기준 최대 글자 수
pub const NAME_MAX_CHARS: usize = 100;

/// 유효한 사용자 이름
///
/// 원본 문자열을 그대로 보관합니다. 길이 규칙은 문자(char) 단위로 적용되며,
/// 최소 길이는 공백을 제거한 값, 최대 길이는 원본 값을 기준으로 검사합니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self, ValueObjectError> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(ValueObjectError::NameEmpty);
        }
        if trimmed.chars().count() < NAME_MIN_CHARS {
            return Err(ValueObjectError::NameTooShort { min: NAME_MIN_CHARS });
        }
        if value.chars().count() > NAME_MAX_CHARS {
            return Err(ValueObjectError::NameTooLong { max: NAME_MAX_CHARS });
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}
