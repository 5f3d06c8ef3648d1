#![forbid(unsafe_code)]

//! Entity catalog for the fleet console.
//!
//! Timestamps are preformatted display strings ("2 hours ago") because the
//! console renders sample data only; there is no live clock behind them.

use serde::{Deserialize, Serialize};

use super::store::HasId;

/// Authenticated operator session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    /// Local part of the email, shown in the dashboard greeting.
    pub display_name: String,
}

impl Session {
    pub fn new(email: impl Into<String>) -> Self {
        let email = email.into();
        let display_name = email
            .split('@')
            .next()
            .unwrap_or(email.as_str())
            .to_string();
        Self {
            email,
            display_name,
        }
    }
}

/// Geographic point for a pinned cleanup location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationStatus {
    Pending,
    Assigned,
    Completed,
}

impl LocationStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Assigned => "assigned",
            Self::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    Assigned,
    InProgress,
    Completed,
    Paused,
}

impl TaskStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Assigned => "assigned",
            Self::InProgress => "in progress",
            Self::Completed => "completed",
            Self::Paused => "paused",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RobotStatus {
    Idle,
    Working,
    Charging,
    Maintenance,
}

impl RobotStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Working => "working",
            Self::Charging => "charging",
            Self::Maintenance => "maintenance",
        }
    }
}

/// A cleanup location dropped on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinnedLocation {
    pub id: String,
    pub name: String,
    pub coords: Coordinates,
    pub priority: Priority,
    pub notes: String,
    pub estimated_time: String,
    pub status: LocationStatus,
}

impl HasId for PinnedLocation {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A scheduled or running cleaning task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub location: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub assigned_robot: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub deadline: String,
    /// Completion percentage, 0..=100.
    pub progress: u8,
    pub estimated_duration: String,
    pub description: String,
}

impl HasId for Task {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One robot in the fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Robot {
    pub id: String,
    pub name: String,
    pub status: RobotStatus,
    pub current_task: Option<String>,
    /// Battery charge, 0..=100.
    pub battery: u8,
    pub location: String,
}

impl HasId for Robot {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A finished task awaiting (or carrying) an operator review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedTask {
    pub id: String,
    pub location: String,
    pub completed_at: String,
    pub robot_id: String,
    pub duration: String,
    pub has_review: bool,
    pub rating: Option<u8>,
    pub review_text: Option<String>,
}

impl HasId for CompletedTask {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Operator feedback on a completed task. Rating is 1..=5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub task_id: String,
    pub rating: u8,
    pub comment: String,
    pub timestamp: String,
    pub is_public: bool,
}

impl HasId for Review {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Warning,
    Info,
    Error,
}

/// What tapping a notification does. The payload is typed per action so a
/// robot alert cannot be confused with a task alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotificationAction {
    TaskCompleted {
        task_id: String,
        location: String,
    },
    RobotStatus {
        robot_id: String,
        battery_level: Option<u8>,
        issue: Option<String>,
    },
    SystemAlert,
    ReviewReminder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp: String,
    pub is_read: bool,
    pub action: Option<NotificationAction>,
}

impl HasId for Notification {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Notification {
    /// Sample timestamps only say "N minutes/hours ago" for today's items;
    /// older ones say "N days ago".
    pub fn is_from_today(&self) -> bool {
        self.timestamp.contains("minute") || self.timestamp.contains("hour")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementIcon {
    Target,
    Fire,
    Star,
    Trophy,
    Award,
    Zap,
}

impl AchievementIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Target => "🎯",
            Self::Fire => "🔥",
            Self::Star => "⭐",
            Self::Trophy => "🏆",
            Self::Award => "🎖",
            Self::Zap => "⚡",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: AchievementIcon,
    pub unlocked: bool,
    pub unlocked_date: Option<String>,
    pub progress: u32,
    pub target: u32,
}

impl HasId for Achievement {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One cell of the 30-day activity calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayActivity {
    pub date_label: String,
    pub has_activity: bool,
    pub tasks_completed: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_display_name_is_email_local_part() {
        let session = Session::new("admin@ecobot.com");
        assert_eq!(session.display_name, "admin");
        assert_eq!(session.email, "admin@ecobot.com");
    }

    #[test]
    fn session_without_at_sign_keeps_whole_string() {
        let session = Session::new("operator");
        assert_eq!(session.display_name, "operator");
    }

    #[test]
    fn notification_action_serializes_tagged() {
        let action = NotificationAction::RobotStatus {
            robot_id: "EB-003".into(),
            battery_level: Some(15),
            issue: None,
        };
        let json = serde_json::to_string(&action).expect("serialize");
        assert!(json.contains("\"type\":\"robot_status\""));
        assert!(json.contains("\"robot_id\":\"EB-003\""));
    }

    #[test]
    fn today_grouping_follows_timestamp_units() {
        let mut n = Notification {
            id: "1".into(),
            kind: NotificationKind::Info,
            title: "t".into(),
            message: "m".into(),
            timestamp: "15 minutes ago".into(),
            is_read: false,
            action: None,
        };
        assert!(n.is_from_today());
        n.timestamp = "2 days ago".into();
        assert!(!n.is_from_today());
    }
}
