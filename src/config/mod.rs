//! # Configuration Module
//!
//! 서비스 설정을 담당하는 모듈입니다.
//! 전역 조회 대신, 시작 시점에 [`Settings`]를 한 번 생성하여 컴포지션 루트에
//! 참조로 전달합니다. 이후 어떤 코드도 환경 변수를 직접 읽지 않습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 저장소 백엔드 선택
//! - [`settings`] - 데이터베이스, 서버, Rate Limiting 설정 묶음
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::Settings;
//!
//! dotenv::dotenv().ok();
//! let settings = Settings::from_env();
//! let container = AppContainer::bootstrap(&settings).await?;
//! ```

pub mod data_config;
pub mod settings;

pub use data_config::*;
pub use settings::*;
