//! Transient notification state.
//!
//! The presenter holds at most one toast. Showing a new one replaces the old
//! one outright, and every timer carries the id of the toast it belongs to so
//! that a timer armed for a replaced toast cannot touch its successor.

use crate::error::{SubmitError, ValidationError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn background(self) -> &'static str {
        match self {
            NotificationKind::Success => "#10b981",
            NotificationKind::Error => "#ef4444",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            NotificationKind::Success => "message message-success",
            NotificationKind::Error => "message message-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NotificationKind::Error,
        }
    }
}

impl From<&ValidationError> for Notification {
    fn from(err: &ValidationError) -> Self {
        Notification::error(err.to_string())
    }
}

impl From<&SubmitError> for Notification {
    fn from(err: &SubmitError) -> Self {
        Notification::error(err.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    /// Inserted off-screen, waiting for the slide-in.
    Entering,
    Shown,
    /// Sliding out, removed when the transition ends.
    Leaving,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastStep {
    Reveal,
    Expire,
    Remove,
}

/// A timer the host has to arm: fire `step` for `id` after `after_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timer {
    pub after_ms: u32,
    pub id: ToastId,
    pub step: ToastStep,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastTimings {
    pub enter_delay_ms: u32,
    pub visible_ms: u32,
    pub leave_ms: u32,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            enter_delay_ms: 100,
            visible_ms: 5_000,
            leave_ms: 300,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub notification: Notification,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn style(&self) -> String {
        let (transform, opacity) = match self.phase {
            ToastPhase::Shown => ("translateX(0)", "1"),
            ToastPhase::Entering | ToastPhase::Leaving => ("translateX(400px)", "0"),
        };
        format!(
            "position: fixed; top: 100px; right: 20px; background: {}; color: white; \
             padding: 1rem 1.5rem; border-radius: 8px; box-shadow: 0 5px 15px rgba(0,0,0,0.2); \
             z-index: 10000; max-width: 300px; cursor: pointer; transform: {}; opacity: {}; \
             transition: all 0.3s ease;",
            self.notification.kind.background(),
            transform,
            opacity,
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Presenter {
    current: Option<Toast>,
    next_id: u64,
    timings: ToastTimings,
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(ToastTimings::default())
    }
}

impl Presenter {
    pub fn new(timings: ToastTimings) -> Self {
        Self {
            current: None,
            next_id: 0,
            timings,
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn timings(&self) -> ToastTimings {
        self.timings
    }

    /// Applies from the next `show`; timers already armed keep their delays.
    pub fn set_timings(&mut self, timings: ToastTimings) {
        self.timings = timings;
    }

    /// Replaces whatever is on screen. Both returned timers count from now.
    pub fn show(&mut self, notification: Notification) -> Vec<Timer> {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.current = Some(Toast {
            id,
            notification,
            phase: ToastPhase::Entering,
        });

        vec![
            Timer {
                after_ms: self.timings.enter_delay_ms,
                id,
                step: ToastStep::Reveal,
            },
            Timer {
                after_ms: self.timings.visible_ms,
                id,
                step: ToastStep::Expire,
            },
        ]
    }

    pub fn advance(&mut self, id: ToastId, step: ToastStep) -> Option<Timer> {
        let toast = self.current.as_mut().filter(|toast| toast.id == id)?;

        match step {
            ToastStep::Reveal => {
                if toast.phase == ToastPhase::Entering {
                    toast.phase = ToastPhase::Shown;
                }
                None
            }
            ToastStep::Expire => {
                if toast.phase == ToastPhase::Leaving {
                    return None;
                }
                toast.phase = ToastPhase::Leaving;
                Some(Timer {
                    after_ms: self.timings.leave_ms,
                    id,
                    step: ToastStep::Remove,
                })
            }
            ToastStep::Remove => {
                self.current = None;
                None
            }
        }
    }

    /// Starts the exit early, e.g. when the visitor clicks the toast.
    pub fn dismiss(&mut self, id: ToastId) -> Option<Timer> {
        self.advance(id, ToastStep::Expire)
    }
}
