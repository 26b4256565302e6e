//! 실행 환경 및 저장소 백엔드 설정

use std::fmt;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 사용자 리포지토리 구현 선택
///
/// `REPOSITORY_BACKEND` 환경 변수로 지정합니다.
/// 알 수 없는 값은 `Mongo`로 처리합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryBackend {
    /// MongoDB 문서 저장소
    Mongo,
    /// 프로세스 메모리 (재시작 시 데이터 유실)
    Memory,
}

impl RepositoryBackend {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => RepositoryBackend::Memory,
            _ => RepositoryBackend::Mongo,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RepositoryBackend::Mongo => "mongo",
            RepositoryBackend::Memory => "memory",
        }
    }
}

impl fmt::Display for RepositoryBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
