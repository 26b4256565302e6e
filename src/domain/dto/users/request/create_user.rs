use serde::{Deserialize, Serialize};

/// 사용자 생성 요청
///
/// ```json
/// { "name": "Jane Doe", "age": 30, "email": "jane@example.com" }
/// ```
///
/// 나이는 음수 입력도 그대로 받아 도메인 검증에서 거절합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub age: i64,
    pub email: String,
}
