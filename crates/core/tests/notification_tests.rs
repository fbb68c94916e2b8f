// ═══════════════════════════════════════════════════════════════════
// Notification Tests — NotificationCenter queue and auto-dismissal
//
// Timer tests run under tokio's paused clock: sleeping in the test body
// advances virtual time, so auto-dismiss deadlines fire deterministically
// without real waiting.
// ═══════════════════════════════════════════════════════════════════

use std::time::Duration;

use finman_core::models::toast::Severity;
use finman_core::services::notification_service::{
    NotificationCenter, DEFAULT_TOAST_DURATION_MS,
};

// ═══════════════════════════════════════════════════════════════════
// Queue basics
// ═══════════════════════════════════════════════════════════════════

mod queue {
    use super::*;

    #[test]
    fn show_returns_the_id_of_the_appended_toast() {
        let center = NotificationCenter::new();
        let id = center.show("Saved", Severity::Success, 0);

        let toasts = center.active();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].id, id);
        assert_eq!(toasts[0].message, "Saved");
        assert_eq!(toasts[0].severity, Severity::Success);
        assert_eq!(toasts[0].duration_ms, 0);
    }

    #[test]
    fn toasts_keep_insertion_order() {
        let center = NotificationCenter::new();
        let first = center.show("first", Severity::Info, 0);
        let second = center.show("second", Severity::Info, 0);

        let ids: Vec<String> = center.active().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn remove_is_idempotent() {
        let center = NotificationCenter::new();
        let id = center.show("once", Severity::Info, 0);

        center.remove(&id);
        assert!(center.is_empty());
        center.remove(&id);
        assert!(center.is_empty());
    }

    #[test]
    fn remove_only_touches_the_matching_toast() {
        let center = NotificationCenter::new();
        let keep = center.show("keep", Severity::Info, 0);
        let drop = center.show("drop", Severity::Info, 0);

        center.remove(&drop);
        let toasts = center.active();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].id, keep);
    }

    #[test]
    fn clones_share_the_same_queue() {
        let center = NotificationCenter::new();
        let other = center.clone();

        center.show("shared", Severity::Info, 0);
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn wrappers_fix_the_severity_and_default_duration() {
        let center = NotificationCenter::new();
        center.success("ok", None);
        center.error("bad", None);
        center.info("fyi", Some(500));

        let toasts = center.active();
        assert_eq!(toasts[0].severity, Severity::Success);
        assert_eq!(toasts[0].duration_ms, DEFAULT_TOAST_DURATION_MS);
        assert_eq!(toasts[1].severity, Severity::Error);
        assert_eq!(toasts[2].severity, Severity::Info);
        assert_eq!(toasts[2].duration_ms, 500);
    }

    #[test]
    fn without_a_runtime_timed_toasts_simply_stay() {
        let center = NotificationCenter::new();
        center.show("no runtime here", Severity::Info, 50);
        assert_eq!(center.len(), 1);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Auto-dismissal
// ═══════════════════════════════════════════════════════════════════

mod auto_dismiss {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn toast_is_removed_after_its_duration() {
        let center = NotificationCenter::new();
        center.show("bye soon", Severity::Info, 3000);
        assert_eq!(center.len(), 1);

        tokio::time::sleep(Duration::from_millis(3100)).await;
        assert!(center.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn toast_survives_until_the_deadline() {
        let center = NotificationCenter::new();
        center.show("not yet", Severity::Info, 3000);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(center.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_duration_disables_auto_dismissal() {
        let center = NotificationCenter::new();
        center.show("sticky", Severity::Error, 0);

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(center.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn manual_removal_beats_the_timer_harmlessly() {
        let center = NotificationCenter::new();
        let id = center.show("gone early", Severity::Info, 3000);

        center.remove(&id);
        assert!(center.is_empty());

        // The timer still fires later; it must find nothing to do.
        tokio::time::sleep(Duration::from_millis(3100)).await;
        assert!(center.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn each_toast_dismisses_on_its_own_schedule() {
        let center = NotificationCenter::new();
        center.show("short", Severity::Info, 1000);
        let long = center.show("long", Severity::Info, 5000);

        tokio::time::sleep(Duration::from_millis(1100)).await;
        let toasts = center.active();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].id, long);

        tokio::time::sleep(Duration::from_millis(4000)).await;
        assert!(center.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn timer_does_not_remove_a_newer_toast_reusing_the_queue() {
        let center = NotificationCenter::new();
        let first = center.show("first", Severity::Info, 1000);
        center.remove(&first);

        let second = center.show("second", Severity::Info, 5000);
        tokio::time::sleep(Duration::from_millis(1100)).await;

        let toasts = center.active();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].id, second);
    }
}
