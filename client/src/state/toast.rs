//! Transient notification queue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetch failures are reported here fire-and-forget; `components::toast_stack`
//! renders the queue and dismisses entries on a timer.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Maximum toasts on screen; the oldest is evicted first.
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Error,
}

impl ToastLevel {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Info => "toast--info",
            Self::Error => "toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        if self.items.len() >= MAX_VISIBLE_TOASTS {
            self.items.remove(0);
        }
        self.items.push(Toast { id, level, message: message.into() });
        id
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Error, message)
    }

    /// Remove a toast; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}
