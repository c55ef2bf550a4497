//! Notification surface contract. Display requests are fire-and-forget:
//! no acknowledgment or delivery guarantee is expected from the surface.

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Default display duration per severity; errors linger longest.
    pub fn default_timeout_ms(&self) -> u32 {
        match self {
            Severity::Success => 3000,
            Severity::Error => 5000,
            Severity::Warning => 4000,
            Severity::Info => 3000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationOptions {
    pub timeout_ms: Option<u32>,
    pub close_on_click: bool,
    pub pause_on_focus_loss: bool,
    pub pause_on_hover: bool,
    pub draggable: bool,
    pub draggable_percent: f32,
}

impl Default for NotificationOptions {
    fn default() -> Self {
        Self {
            timeout_ms: None,
            close_on_click: true,
            pause_on_focus_loss: true,
            pause_on_hover: true,
            draggable: true,
            draggable_percent: 0.6,
        }
    }
}

impl NotificationOptions {
    pub fn effective_timeout_ms(&self, severity: Severity) -> u32 {
        self.timeout_ms.unwrap_or_else(|| severity.default_timeout_ms())
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, severity: Severity, message: &str, options: &NotificationOptions);

    fn success(&self, message: &str) {
        self.notify(Severity::Success, message, &NotificationOptions::default());
    }

    fn error(&self, message: &str) {
        self.notify(Severity::Error, message, &NotificationOptions::default());
    }

    fn warning(&self, message: &str) {
        self.notify(Severity::Warning, message, &NotificationOptions::default());
    }

    fn info(&self, message: &str) {
        self.notify(Severity::Info, message, &NotificationOptions::default());
    }
}

/// Surface used by the console shell: renders through the log stream.
#[derive(Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, severity: Severity, message: &str, options: &NotificationOptions) {
        let timeout = options.effective_timeout_ms(severity);
        match severity {
            Severity::Success | Severity::Info => {
                info!(target: "notify", timeout_ms = timeout, "{}", message)
            }
            Severity::Warning => warn!(target: "notify", timeout_ms = timeout, "{}", message),
            Severity::Error => error!(target: "notify", timeout_ms = timeout, "{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Capture {
        seen: Mutex<Vec<(Severity, String, u32)>>,
    }

    impl Notifier for Capture {
        fn notify(&self, severity: Severity, message: &str, options: &NotificationOptions) {
            self.seen.lock().push((
                severity,
                message.to_string(),
                options.effective_timeout_ms(severity),
            ));
        }
    }

    #[test]
    fn per_severity_default_timeouts() {
        assert_eq!(Severity::Success.default_timeout_ms(), 3000);
        assert_eq!(Severity::Error.default_timeout_ms(), 5000);
        assert_eq!(Severity::Warning.default_timeout_ms(), 4000);
        assert_eq!(Severity::Info.default_timeout_ms(), 3000);
    }

    #[test]
    fn convenience_methods_apply_defaults() {
        let c = Capture::default();
        c.error("no");
        c.success("ok");
        let seen = c.seen.lock();
        assert_eq!(seen[0], (Severity::Error, "no".into(), 5000));
        assert_eq!(seen[1], (Severity::Success, "ok".into(), 3000));
    }

    #[test]
    fn explicit_timeout_wins() {
        let opts = NotificationOptions { timeout_ms: Some(1500), ..Default::default() };
        assert_eq!(opts.effective_timeout_ms(Severity::Error), 1500);
    }
}
