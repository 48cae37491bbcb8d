use crate::global_constants::{
    NOTIFICATION_COPY_FAILURE_DESCRIPTION, NOTIFICATION_COPY_FAILURE_TITLE,
    NOTIFICATION_COPY_SUCCESS_DESCRIPTION, NOTIFICATION_COPY_SUCCESS_TITLE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub generation: u64,
}

impl Notification {
    pub fn copy_succeeded(generation: u64) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: NOTIFICATION_COPY_SUCCESS_TITLE.to_string(),
            description: NOTIFICATION_COPY_SUCCESS_DESCRIPTION.to_string(),
            generation,
        }
    }

    pub fn copy_failed(generation: u64) -> Self {
        Self {
            kind: NotificationKind::Failure,
            title: NOTIFICATION_COPY_FAILURE_TITLE.to_string(),
            description: NOTIFICATION_COPY_FAILURE_DESCRIPTION.to_string(),
            generation,
        }
    }

    pub fn from_copy_result(result: &Result<(), String>, generation: u64) -> Self {
        match result {
            Ok(()) => Self::copy_succeeded(generation),
            Err(_) => Self::copy_failed(generation),
        }
    }
}
