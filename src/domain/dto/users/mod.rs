//! 사용자 API 요청/응답 DTO

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;
