//! Per-throw scoring state.
//!
//! A [`ThrowSession`] only remembers which of the two trigger volumes the ball
//! has crossed since the current throw started.  The flags are booleans, so
//! repeated touches of the same trigger are idempotent.

/// Scoring state of the one outstanding throw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThrowSession {
    pub above_hoop_touched: bool,
    pub under_hoop_touched: bool,
    pub is_active: bool,
}

impl ThrowSession {
    /// Reset to a fresh active session, discarding any partial progress.
    pub fn start_new_throw(&mut self) {
        *self = Self {
            above_hoop_touched: false,
            under_hoop_touched: false,
            is_active: true,
        };
    }

    #[inline]
    pub fn mark_above_hoop_touched(&mut self) {
        if self.is_active {
            self.above_hoop_touched = true;
        }
    }

    #[inline]
    pub fn mark_under_hoop_touched(&mut self) {
        if self.is_active {
            self.under_hoop_touched = true;
        }
    }

    /// Both triggers crossed while the session is still open.
    #[inline]
    pub fn is_goal(&self) -> bool {
        self.is_active && self.above_hoop_touched && self.under_hoop_touched
    }

    #[inline]
    pub fn close_session(&mut self) {
        self.is_active = false;
    }
}
