use chrono::DateTime;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationLevel {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationLevel {
    /// Background colour of a toast with this level.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            NotificationLevel::Info => (0x34, 0x98, 0xdb),
            NotificationLevel::Success => (0x27, 0xae, 0x60),
            NotificationLevel::Error => (0xe7, 0x4c, 0x3c),
        }
    }
}

impl Display for NotificationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            NotificationLevel::Info => "info",
            NotificationLevel::Success => "success",
            NotificationLevel::Error => "error",
        })
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub created_at: DateTime<Local>,
}

impl Notification {
    pub fn new(message: impl Into<String>, level: NotificationLevel) -> Self {
        Notification {
            message: message.into(),
            level,
            created_at: Local::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Error)
    }
}
