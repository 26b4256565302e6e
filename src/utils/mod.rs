//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`display_terminal`] - 시작 과정 터미널 출력 포맷팅 함수들
//!
//! ```rust,ignore
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! print_boxed_title("User Account Service");
//! ```

pub mod display_terminal;
