use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{DirectionEntry, Icon};

pub const NAV_CHANNEL_ID: &str = "nav_channel_00";
pub const NAV_CHANNEL_NAME: &str = "Navigation Channel";
pub const NAV_NOTIFICATION_ID: u32 = 10101;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(pub String);

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ChannelId {
    fn from(value: &str) -> Self {
        ChannelId(value.to_string())
    }
}

/// Fixed `(channel, notification id)` pair; updates replace the notification
/// carrying the same identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationIdentity {
    pub channel_id: ChannelId,
    pub notification_id: u32,
}

impl NotificationIdentity {
    pub fn navigation() -> Self {
        Self {
            channel_id: NAV_CHANNEL_ID.into(),
            notification_id: NAV_NOTIFICATION_ID,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Low,
    Default,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationChannel {
    pub id: ChannelId,
    pub name: String,
    pub importance: Importance,
}

impl NotificationChannel {
    /// High importance is what lets the alert show on top of other content.
    pub fn navigation() -> Self {
        Self {
            id: NAV_CHANNEL_ID.into(),
            name: NAV_CHANNEL_NAME.to_string(),
            importance: Importance::High,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Navigation,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Navigation => "navigation",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TapAction {
    /// Bring the host application to the front.
    OpenApp,
}

/// Platform-neutral notification payload handed to a backend for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationNotification {
    pub identity: NotificationIdentity,
    pub title: String,
    pub text: String,
    pub icon: Option<Icon>,
    /// Ongoing notifications cannot be dismissed by the user.
    pub ongoing: bool,
    pub category: Option<Category>,
    pub only_alert_once: bool,
    pub tap_action: Option<TapAction>,
}

impl NavigationNotification {
    pub fn builder(identity: NotificationIdentity) -> NavigationNotificationBuilder {
        NavigationNotificationBuilder::new(identity)
    }

    /// Payload for a direction entry: ongoing, navigation category, tap opens the app.
    pub fn for_entry(identity: &NotificationIdentity, entry: &DirectionEntry) -> Self {
        Self::builder(identity.clone())
            .title(entry.title)
            .text(entry.distance_label())
            .icon(entry.icon)
            .ongoing(true)
            .category(Category::Navigation)
            .only_alert_once(entry.alert_once)
            .tap_action(TapAction::OpenApp)
            .build()
    }
}

#[derive(Debug, Clone)]
pub struct NavigationNotificationBuilder {
    inner: NavigationNotification,
}

impl NavigationNotificationBuilder {
    fn new(identity: NotificationIdentity) -> Self {
        Self {
            inner: NavigationNotification {
                identity,
                title: String::new(),
                text: String::new(),
                icon: None,
                ongoing: false,
                category: None,
                only_alert_once: false,
                tap_action: None,
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.inner.title = title.into();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.inner.text = text.into();
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.inner.icon = Some(icon);
        self
    }

    pub fn ongoing(mut self, ongoing: bool) -> Self {
        self.inner.ongoing = ongoing;
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.inner.category = Some(category);
        self
    }

    pub fn only_alert_once(mut self, only_alert_once: bool) -> Self {
        self.inner.only_alert_once = only_alert_once;
        self
    }

    pub fn tap_action(mut self, action: TapAction) -> Self {
        self.inner.tap_action = Some(action);
        self
    }

    pub fn build(self) -> NavigationNotification {
        self.inner
    }
}
