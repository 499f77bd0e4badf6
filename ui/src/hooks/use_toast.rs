use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::compat;
use crate::components::toast::{Toast, ToastKind};

/// How long a toast stays on screen before dismissing itself.
const TOAST_TTL: Duration = Duration::from_secs(4);

/// Copy handle over the toast stack. Provided once at the app root; any
/// screen or task can push notifications through it.
#[derive(Clone, Copy)]
pub struct Toasts {
    stack: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn new(stack: Signal<Vec<Toast>>, next_id: Signal<u64>) -> Self {
        Self { stack, next_id }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    pub fn dismiss(&mut self, id: u64) {
        self.stack.write().retain(|toast| toast.id != id);
    }

    pub fn active(&self) -> Vec<Toast> {
        self.stack.read().clone()
    }

    fn push(&mut self, kind: ToastKind, message: String) {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.stack.write().push(Toast { id, kind, message });

        // The dismissal task outlives whichever component pushed the toast,
        // so it runs in the root scope rather than the caller's.
        let mut stack = self.stack;
        spawn_forever(async move {
            compat::sleep(TOAST_TTL).await;
            stack.write().retain(|toast| toast.id != id);
        });
    }
}

pub fn use_toast() -> Toasts {
    use_context::<Toasts>()
}
