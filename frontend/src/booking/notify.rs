#[cfg(test)]
use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use yew::Callback;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn class(&self) -> &'static str {
        match self {
            Severity::Info => "toast-info",
            Severity::Success => "toast-success",
            Severity::Error => "toast-error",
        }
    }
}

/// Where the toast should appear on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPosition {
    TopRight,
    TopCenter,
}

impl ToastPosition {
    pub fn class(&self) -> &'static str {
        match self {
            ToastPosition::TopRight => "toast-top-right",
            ToastPosition::TopCenter => "toast-top-center",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub position: ToastPosition,
    pub auto_close_ms: u32,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity, position: ToastPosition) -> Self {
        Self {
            message: message.into(),
            severity,
            position,
            auto_close_ms: config::TOAST_AUTO_CLOSE_MS,
        }
    }

    pub fn otp_sent() -> Self {
        Self::new("OTP sent to your mobile number", Severity::Info, ToastPosition::TopRight)
    }

    pub fn otp_verified() -> Self {
        Self::new("Mobile number verified successfully!", Severity::Success, ToastPosition::TopRight)
    }

    pub fn otp_invalid() -> Self {
        Self::new("Invalid OTP. Please try again.", Severity::Error, ToastPosition::TopRight)
    }

    pub fn submit_success() -> Self {
        Self::new(
            "✅ Test Ride Booked! We'll contact you soon.",
            Severity::Success,
            ToastPosition::TopCenter,
        )
    }

    pub fn submit_error() -> Self {
        Self::new("Something went wrong. Please try again.", Severity::Error, ToastPosition::TopCenter)
    }
}

/// Output port for user-facing messages. Fire and forget.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl Notifier for Callback<Notification> {
    fn notify(&self, notification: Notification) {
        self.emit(notification);
    }
}

/// Hands notifications on to `target` after `delay_ms`.
#[derive(Debug, Clone, PartialEq)]
pub struct DelayedNotifier {
    pub target: Callback<Notification>,
    pub delay_ms: u32,
}

impl Notifier for DelayedNotifier {
    fn notify(&self, notification: Notification) {
        let target = self.target.clone();
        Timeout::new(self.delay_ms, move || target.emit(notification)).forget();
    }
}

/// Keeps every notification it receives, in order.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: RefCell<Vec<Notification>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.borrow().clone()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.sent.borrow_mut().push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn verification_messages_go_top_right() {
        for n in [Notification::otp_sent(), Notification::otp_verified(), Notification::otp_invalid()] {
            assert_eq!(n.position, ToastPosition::TopRight, "{}", n.message);
        }
        assert_eq!(Notification::otp_invalid().severity, Severity::Error);
    }

    #[test]
    fn submission_messages_go_top_center() {
        let success = Notification::submit_success();
        assert_eq!(success.position, ToastPosition::TopCenter);
        assert_eq!(success.severity.class(), "toast-success");
        assert_eq!(success.auto_close_ms, 5000);
        assert_eq!(Notification::submit_error().severity, Severity::Error);
    }

    #[test]
    fn callback_forwards_notifications() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let callback = {
            let seen = seen.clone();
            Callback::from(move |n: Notification| seen.borrow_mut().push(n.message))
        };
        callback.notify(Notification::otp_sent());
        assert_eq!(*seen.borrow(), vec!["OTP sent to your mobile number".to_string()]);
    }
}
