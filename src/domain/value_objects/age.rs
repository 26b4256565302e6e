//! 사용자 나이 값 객체

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValueObjectError;

pub const AGE_MAX: u8 = 150;
pub const ADULT_AGE: u8 = 18;

/// 0세 이상 150세 이하의 나이
///
/// 외부 입력은 부호 있는 정수로 받아 음수 입력도 검증 에러로 보고합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Age(u8);

impl Age {
    pub fn new(value: i64) -> Result<Self, ValueObjectError> {
        if value < 0 {
            return Err(ValueObjectError::AgeNegative);
        }
        if value > i64::from(AGE_MAX) {
            return Err(ValueObjectError::AgeTooHigh { max: AGE_MAX });
        }

        Ok(Self(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// 18세 이상이면 성인
    pub fn is_adult(&self) -> bool {
        self.0 >= ADULT_AGE
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Age {
    type Error = ValueObjectError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Age> for u8 {
    fn from(age: Age) -> Self {
        age.0
    }
}
