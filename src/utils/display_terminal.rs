//! 터미널 출력 포맷팅 유틸리티
//!
//! 컨테이너 조립 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 진행 단계 표시, 완료 요약을 출력합니다.

/// 박스 내부 콘텐츠 너비
const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║               User Account Service               ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(BOX_WIDTH);

    println!("╔{}╗", border);
    println!("║{:^width$}║", title, width = BOX_WIDTH);
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Selecting user repository
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
///
/// ```text
/// ✓ Step 2: Event handlers subscribed (6 items)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 서브 작업의 상태를 표시합니다
///
/// ```text
///    ├─ InMemoryUserRepository: ready
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 컨테이너 조립 완료 요약을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║            🎉 APP CONTAINER ASSEMBLED            ║
/// ╚══════════════════════════════════════════════════╝
///    📦 Repository: memory
///    🔔 Event subscriptions: 6
///    🔧 Use cases: 4
/// ```
pub fn print_final_summary(backend: &str, subscriptions: usize, use_cases: usize) {
    println!();
    print_boxed_title("🎉 APP CONTAINER ASSEMBLED");
    println!("   📦 Repository: {}", backend);
    println!("   🔔 Event subscriptions: {}", subscriptions);
    println!("   🔧 Use cases: {}", use_cases);
    println!();
}
