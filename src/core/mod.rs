//! # Core Module
//!
//! 애플리케이션 전역에서 쓰이는 에러 타입과 컴포지션 루트를 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현 (400 / 404 / 500)
//! - **자동 변환**: 값 객체 에러와 핸들러 에러를 `?`로 변환
//!
//! ### [`registry`] - 애플리케이션 컨테이너
//! - **AppContainer**: 설정에서 리포지토리, 디스패처, 유스케이스를 한 번에 조립
//! - **명시적 주입**: 모든 의존성은 생성자 인자로 전달됨
//!
//! ```rust,ignore
//! let settings = Settings::from_env();
//! let container = web::Data::new(AppContainer::bootstrap(&settings).await?);
//!
//! HttpServer::new(move || App::new().app_data(container.clone()))
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
