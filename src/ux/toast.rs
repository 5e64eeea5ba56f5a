#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            Self::Success => "#4CAF50",
            Self::Error => "#f44336",
            Self::Info => "#2196F3",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub leaving: bool,
}

impl Toast {
    pub fn class(&self) -> String {
        format!("notification notification-{}", self.kind.as_str())
    }

    pub fn style(&self) -> String {
        let animation = if self.leaving {
            "slideOutRight 0.3s ease"
        } else {
            "slideInRight 0.3s ease"
        };
        format!(
            "background: {}; color: white; padding: 15px 25px; border-radius: 8px; \
             box-shadow: 0 5px 20px rgba(0,0,0,0.2); animation: {animation};",
            self.kind.background(),
        )
    }
}

/// Container style; toasts stack inside it.
pub const TOAST_STACK_STYLE: &str =
    "position: fixed; top: 100px; right: 20px; z-index: 1001; display: flex; flex-direction: column; gap: 10px;";

/// Live toasts, oldest first. Each has its own lifecycle driven by timers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            leaving: false,
        });
        id
    }

    /// Switches a toast to its exit animation. Unknown ids are ignored.
    pub fn begin_exit(&mut self, id: u64) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.leaving = true;
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_colors() {
        assert_eq!(ToastKind::default(), ToastKind::Info);
        assert_eq!(ToastKind::Success.background(), "#4CAF50");
        assert_eq!(ToastKind::Error.background(), "#f44336");
        assert_eq!(ToastKind::Info.background(), "#2196F3");
    }

    #[test]
    fn test_lifecycle() {
        let mut queue = ToastQueue::default();
        let first = queue.push("Thank you for your message!", ToastKind::Success);
        let second = queue.push("name is required", ToastKind::Error);
        assert_ne!(first, second);
        assert_eq!(queue.toasts().len(), 2);

        queue.begin_exit(first);
        assert!(queue.toasts()[0].leaving);
        assert!(queue.toasts()[0].style().contains("slideOutRight"));
        assert!(queue.toasts()[1].style().contains("slideInRight"));

        queue.remove(first);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, second);

        // timers may fire for toasts that are already gone
        queue.begin_exit(first);
        queue.remove(first);
        queue.remove(second);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_class_names() {
        let mut queue = ToastQueue::default();
        queue.push("hi", ToastKind::Info);
        assert_eq!(queue.toasts()[0].class(), "notification notification-info");
    }
}
