//! # 애플리케이션 설정
//!
//! 환경 변수에서 한 번 읽어 만드는 명시적 설정 구조체입니다.
//!
//! | 변수 | 기본값 | 설명 |
//! |------|--------|------|
//! | `MONGODB_URI` | `mongodb://localhost:27017` | MongoDB 연결 문자열 |
//! | `DATABASE_NAME` | `user_accounts_dev` | 데이터베이스 이름 |
//! | `APP_NAME` | `user_accounts` | 드라이버에 전달되는 앱 이름 |
//! | `HOST` | `127.0.0.1` | 바인드 주소 |
//! | `PORT` | `8080` | 바인드 포트 |
//! | `WORKERS` | `4` | Actix 워커 스레드 수 |
//! | `RATE_LIMIT_PER_SECOND` | `100` | 초당 허용 요청 수 |
//! | `RATE_LIMIT_BURST_SIZE` | `200` | 버스트 허용량 |
//! | `REPOSITORY_BACKEND` | `mongo` | `mongo` 또는 `memory` |
//! | `ENVIRONMENT` | `production` | 실행 환경 |
//!
//! 숫자 값 파싱에 실패하면 에러 로그를 남기고 기본값을 사용합니다.

use std::env;
use std::str::FromStr;

use log::error;

use super::data_config::{Environment, RepositoryBackend};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub uri: String,
    pub database_name: String,
    pub app_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitSettings {
    pub per_second: u64,
    pub burst_size: u32,
}

/// 서비스 전체 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub environment: Environment,
    pub repository_backend: RepositoryBackend,
    pub database: DatabaseSettings,
    pub server: ServerSettings,
    pub rate_limit: RateLimitSettings,
}

impl Settings {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 키 조회 함수로 설정을 구성합니다.
    ///
    /// 테스트에서는 프로세스 환경을 건드리지 않고 `HashMap` 조회를 넘깁니다.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Self {
            environment: Environment::from_str(&text("ENVIRONMENT", "production")),
            repository_backend: RepositoryBackend::from_str(&text("REPOSITORY_BACKEND", "mongo")),
            database: DatabaseSettings {
                uri: text("MONGODB_URI", "mongodb://localhost:27017"),
                database_name: text("DATABASE_NAME", "user_accounts_dev"),
                app_name: text("APP_NAME", "user_accounts"),
            },
            server: ServerSettings {
                host: text("HOST", "127.0.0.1"),
                port: parse_or(&lookup, "PORT", 8080),
                workers: parse_or(&lookup, "WORKERS", 4),
            },
            rate_limit: RateLimitSettings {
                per_second: parse_or(&lookup, "RATE_LIMIT_PER_SECOND", 100),
                burst_size: parse_or(&lookup, "RATE_LIMIT_BURST_SIZE", 200),
            },
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
    }
}
