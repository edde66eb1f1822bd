//! Single-slot transient notification state.
//!
//! DESIGN
//! ======
//! There is no queue: showing a toast replaces whatever is visible. The
//! sequence number identifies the currently shown toast so the auto-dismiss
//! timer can tell when it has been superseded and must not hide a newer
//! message.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Severity of a toast, mapped to a CSS modifier class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Warning,
    Error,
}

impl ToastKind {
    /// CSS modifier for the toast container.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Warning => "toast--warning",
            ToastKind::Error => "toast--error",
        }
    }
}

/// A toast message with its severity and icon glyph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub icon: &'static str,
}

impl Toast {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Success, icon: "✅" }
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Warning, icon: "⚠️" }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Error, icon: "❌" }
    }

    /// Same toast with a different glyph (e.g. 🔄 for manual refresh).
    #[must_use]
    pub fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = icon;
        self
    }
}

/// Currently visible toast, if any, plus the show counter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub current: Option<Toast>,
    pub seq: u64,
}

impl ToastState {
    /// Show a toast, replacing any visible one, and return the sequence
    /// number the dismiss timer should carry.
    pub fn show(&mut self, toast: Toast) -> u64 {
        self.seq += 1;
        self.current = Some(toast);
        self.seq
    }

    /// Hide the toast shown as `seq`; a no-op when a newer toast took over.
    pub fn dismiss(&mut self, seq: u64) {
        if self.seq == seq {
            self.current = None;
        }
    }
}
