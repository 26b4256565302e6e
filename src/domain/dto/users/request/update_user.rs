use serde::{Deserialize, Serialize};

/// 사용자 부분 수정 요청
///
/// 생략된 필드는 저장된 값을 유지합니다. 전달된 필드는 값 전체로 다시 검증됩니다.
///
/// ```json
/// { "email": "jane2@example.com" }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UpdateUserRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.email.is_none()
    }
}
