//! 사용자 이벤트 핸들러 구현

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{info, warn};

use crate::domain::events::{DomainEvent, EventHandler, HandlerError};

/// 환영 메일/변경 알림 발송 지점
///
/// 실제 발송 채널은 없으며 발송 예정 메시지를 로그로 남깁니다.
#[derive(Debug, Default)]
pub struct UserNotificationHandler;

impl EventHandler for UserNotificationHandler {
    fn name(&self) -> &str {
        "UserNotificationHandler"
    }

    fn handle(&self, event: &DomainEvent) -> Result<(), HandlerError> {
        match event {
            DomainEvent::UserCreated(created) => {
                info!("📧 Sending welcome email to {} <{}>", created.name, created.email);
            }
            DomainEvent::UserEmailChanged(changed) => {
                info!(
                    "📧 Notifying email change: {} -> {}",
                    changed.old_email, changed.new_email
                );
            }
        }
        Ok(())
    }
}

/// 감사 로그 기록기
#[derive(Debug, Default)]
pub struct UserAuditHandler;

impl UserAuditHandler {
    /// 이벤트를 감사 레코드(JSON 한 줄)로 직렬화합니다.
    pub fn audit_record(&self, event: &DomainEvent) -> Result<String, HandlerError> {
        serde_json::to_string(event)
            .map_err(|e| HandlerError::new(self.name(), event.kind(), e.to_string()))
    }
}

impl EventHandler for UserAuditHandler {
    fn name(&self) -> &str {
        "UserAuditHandler"
    }

    fn handle(&self, event: &DomainEvent) -> Result<(), HandlerError> {
        let record = self.audit_record(event)?;
        info!("📋 AUDIT {} at {} {}", event.kind(), event.occurred_at().to_rfc3339(), record);
        Ok(())
    }
}

/// 가입 수, 이메일 변경 수, 가입 이메일 도메인별 집계
#[derive(Debug, Default)]
pub struct UserAnalyticsHandler {
    registrations: AtomicU64,
    email_changes: AtomicU64,
    domains: Mutex<HashMap<String, u64>>,
}

impl UserAnalyticsHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registrations(&self) -> u64 {
        self.registrations.load(Ordering::Relaxed)
    }

    pub fn email_changes(&self) -> u64 {
        self.email_changes.load(Ordering::Relaxed)
    }

    pub fn domain_count(&self, domain: &str) -> u64 {
        self.domains
            .lock()
            .map(|domains| domains.get(domain).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    fn track_domain(&self, email: &str) {
        let Some((_, domain)) = email.split_once('@') else {
            warn!("⚠️ Analytics skipped email without domain");
            return;
        };

        if let Ok(mut domains) = self.domains.lock() {
            *domains.entry(domain.to_string()).or_insert(0) += 1;
        }
    }
}

impl EventHandler for UserAnalyticsHandler {
    fn name(&self) -> &str {
        "UserAnalyticsHandler"
    }

    fn handle(&self, event: &DomainEvent) -> Result<(), HandlerError> {
        match event {
            DomainEvent::UserCreated(created) => {
                let total = self.registrations.fetch_add(1, Ordering::Relaxed) + 1;
                self.track_domain(&created.email);
                info!(
                    "📊 Registration tracked (age {}, total {})",
                    created.age, total
                );
            }
            DomainEvent::UserEmailChanged(changed) => {
                let total = self.email_changes.fetch_add(1, Ordering::Relaxed) + 1;
                self.track_domain(&changed.new_email);
                info!("📊 Email change tracked (total {})", total);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::entity::EntityId;
    use crate::domain::events::{UserCreated, UserEmailChanged};

    fn created(email: &str) -> DomainEvent {
        UserCreated::new(EntityId::new_identity(), "Jane Doe".to_string(), email.to_string(), 30).into()
    }

    #[test]
    fn test_notification_handler_accepts_both_kinds() {
        let handler = UserNotificationHandler;
        let changed: DomainEvent = UserEmailChanged::new(
            EntityId::new_identity(),
            "a@example.com".to_string(),
            "b@example.com".to_string(),
        )
        .into();

        assert!(handler.handle(&created("jane@example.com")).is_ok());
        assert!(handler.handle(&changed).is_ok());
    }

    #[test]
    fn test_audit_record_is_tagged_json() {
        let handler = UserAuditHandler;
        let event = created("jane@example.com");

        let record = handler.audit_record(&event).unwrap();
        let value: serde_json::Value = serde_json::from_str(&record).unwrap();

        assert_eq!(value["type"], "UserCreated");
        assert_eq!(value["email"], "jane@example.com");
        assert_eq!(value["aggregate_id"], event.aggregate_id().to_hex());
    }

    #[test]
    fn test_analytics_counts_by_kind_and_domain() {
        let handler = UserAnalyticsHandler::new();
        handler.handle(&created("jane@example.com")).unwrap();
        handler.handle(&created("john@example.com")).unwrap();
        handler.handle(&created("kim@corp.io")).unwrap();
        handler
            .handle(
                &UserEmailChanged::new(
                    EntityId::new_identity(),
                    "kim@corp.io".to_string(),
                    "kim@example.com".to_string(),
                )
                .into(),
            )
            .unwrap();

        assert_eq!(handler.registrations(), 3);
        assert_eq!(handler.email_changes(), 1);
        assert_eq!(handler.domain_count("example.com"), 3);
        assert_eq!(handler.domain_count("corp.io"), 1);
        assert_eq!(handler.domain_count("unknown.org"), 0);
    }
}
