use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// The operation a retry affordance re-invokes.
#[derive(Debug, Clone, PartialEq)]
pub enum RetryAction<E> {
    Load,
    /// Create the record again, with the id it was first proposed under
    Create(E),
    Update(String, E),
    Delete(String),
}

/// A dismissable message for the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification<E> {
    pub level: NotificationLevel,
    pub message: String,
    /// Present only for failures worth retrying
    pub retry: Option<RetryAction<E>>,
}

impl<E> Notification<E> {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
            retry: None,
        }
    }

    /// Error notification for `err`, offering `action` again if the error is retryable.
    pub fn failure(context: &str, err: &Error, action: Option<RetryAction<E>>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: format!("{}: {}", context, err),
            retry: action.filter(|_| err.is_retryable()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}
