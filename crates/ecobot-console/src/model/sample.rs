#![forbid(unsafe_code)]

//! The hardcoded sample catalog every screen is seeded from.
//!
//! There is no backend; these literals stand in for the fleet service and
//! are kept stable so tests can assert against them.

use super::entities::{
    Achievement, AchievementIcon, CompletedTask, Coordinates, LocationStatus, Notification,
    NotificationAction, NotificationKind, PinnedLocation, Priority, Review, Robot, RobotStatus,
    Task, TaskStatus,
};

/// Map origin the location picker is centered on.
pub const MAP_CENTER: Coordinates = Coordinates {
    lat: 40.7829,
    lng: -73.9654,
};

pub fn pinned_locations() -> Vec<PinnedLocation> {
    vec![
        PinnedLocation {
            id: "1".into(),
            name: "Central Park Entrance".into(),
            coords: Coordinates {
                lat: 40.7829,
                lng: -73.9654,
            },
            priority: Priority::High,
            notes: "Heavy litter accumulation near entrance".into(),
            estimated_time: "2 hours".into(),
            status: LocationStatus::Pending,
        },
        PinnedLocation {
            id: "2".into(),
            name: "Main Street Plaza".into(),
            coords: Coordinates {
                lat: 40.7589,
                lng: -73.9851,
            },
            priority: Priority::Medium,
            notes: "Regular maintenance cleaning".into(),
            estimated_time: "1.5 hours".into(),
            status: LocationStatus::Assigned,
        },
    ]
}

pub fn tasks() -> Vec<Task> {
    vec![
        Task {
            id: "1".into(),
            location: "Central Park Entrance".into(),
            priority: Priority::High,
            status: TaskStatus::InProgress,
            assigned_robot: Some("EB-001".into()),
            start_time: Some("09:30 AM".into()),
            end_time: None,
            deadline: "11:30 AM".into(),
            progress: 65,
            estimated_duration: "2 hours".into(),
            description: "Heavy litter accumulation near entrance".into(),
        },
        Task {
            id: "2".into(),
            location: "Main Street Plaza".into(),
            priority: Priority::Medium,
            status: TaskStatus::Assigned,
            assigned_robot: Some("EB-002".into()),
            start_time: None,
            end_time: None,
            deadline: "02:00 PM".into(),
            progress: 0,
            estimated_duration: "1.5 hours".into(),
            description: "Regular maintenance cleaning".into(),
        },
        Task {
            id: "3".into(),
            location: "Riverside Walk".into(),
            priority: Priority::Low,
            status: TaskStatus::Pending,
            assigned_robot: None,
            start_time: None,
            end_time: None,
            deadline: "04:00 PM".into(),
            progress: 0,
            estimated_duration: "1 hour".into(),
            description: "Weekly scheduled cleaning".into(),
        },
        Task {
            id: "4".into(),
            location: "Shopping District".into(),
            priority: Priority::High,
            status: TaskStatus::Completed,
            assigned_robot: Some("EB-003".into()),
            start_time: Some("08:00 AM".into()),
            end_time: Some("09:45 AM".into()),
            deadline: "10:00 AM".into(),
            progress: 100,
            estimated_duration: "2 hours".into(),
            description: "Emergency cleanup - spill reported".into(),
        },
    ]
}

pub fn robots() -> Vec<Robot> {
    vec![
        Robot {
            id: "EB-001".into(),
            name: "EcoBot Alpha".into(),
            status: RobotStatus::Working,
            current_task: Some("1".into()),
            battery: 75,
            location: "Central Park Entrance".into(),
        },
        Robot {
            id: "EB-002".into(),
            name: "EcoBot Beta".into(),
            status: RobotStatus::Idle,
            current_task: None,
            battery: 90,
            location: "Main Depot".into(),
        },
        Robot {
            id: "EB-003".into(),
            name: "EcoBot Gamma".into(),
            status: RobotStatus::Charging,
            current_task: None,
            battery: 45,
            location: "Charging Station A".into(),
        },
    ]
}

pub fn completed_tasks() -> Vec<CompletedTask> {
    vec![
        CompletedTask {
            id: "1".into(),
            location: "Central Park Entrance".into(),
            completed_at: "2 hours ago".into(),
            robot_id: "EB-001".into(),
            duration: "1h 45m".into(),
            has_review: false,
            rating: None,
            review_text: None,
        },
        CompletedTask {
            id: "2".into(),
            location: "Shopping District".into(),
            completed_at: "4 hours ago".into(),
            robot_id: "EB-003".into(),
            duration: "1h 45m".into(),
            has_review: true,
            rating: Some(5),
            review_text: Some("Excellent cleaning job! The area looks spotless.".into()),
        },
        CompletedTask {
            id: "3".into(),
            location: "Riverside Walk".into(),
            completed_at: "1 day ago".into(),
            robot_id: "EB-002".into(),
            duration: "50m".into(),
            has_review: true,
            rating: Some(4),
            review_text: Some("Good job overall, but missed a few spots near the benches.".into()),
        },
    ]
}

pub fn reviews() -> Vec<Review> {
    vec![
        Review {
            id: "1".into(),
            task_id: "2".into(),
            rating: 5,
            comment: "Excellent cleaning job! The area looks spotless.".into(),
            timestamp: "4 hours ago".into(),
            is_public: true,
        },
        Review {
            id: "2".into(),
            task_id: "3".into(),
            rating: 4,
            comment: "Good job overall, but missed a few spots near the benches.".into(),
            timestamp: "1 day ago".into(),
            is_public: true,
        },
    ]
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "1".into(),
            kind: NotificationKind::Success,
            title: "Task Completed Successfully".into(),
            message: "EcoBot Alpha finished cleaning Central Park Entrance".into(),
            timestamp: "2 minutes ago".into(),
            is_read: false,
            action: Some(NotificationAction::TaskCompleted {
                task_id: "1".into(),
                location: "Central Park Entrance".into(),
            }),
        },
        Notification {
            id: "2".into(),
            kind: NotificationKind::Warning,
            title: "Robot Battery Low".into(),
            message: "EcoBot Gamma battery at 15%, returning to charging station".into(),
            timestamp: "15 minutes ago".into(),
            is_read: false,
            action: Some(NotificationAction::RobotStatus {
                robot_id: "EB-003".into(),
                battery_level: Some(15),
                issue: None,
            }),
        },
        Notification {
            id: "3".into(),
            kind: NotificationKind::Info,
            title: "New Task Assigned".into(),
            message: "Main Street Plaza cleanup scheduled for EcoBot Beta".into(),
            timestamp: "1 hour ago".into(),
            is_read: true,
            action: Some(NotificationAction::TaskCompleted {
                task_id: "2".into(),
                location: "Main Street Plaza".into(),
            }),
        },
        Notification {
            id: "4".into(),
            kind: NotificationKind::Success,
            title: "Streak Milestone Achieved!".into(),
            message: "Congratulations! You've reached a 12-day cleaning streak".into(),
            timestamp: "2 hours ago".into(),
            is_read: true,
            action: Some(NotificationAction::SystemAlert),
        },
        Notification {
            id: "5".into(),
            kind: NotificationKind::Info,
            title: "Weekly Report Available".into(),
            message: "Your fleet performance report for this week is ready".into(),
            timestamp: "1 day ago".into(),
            is_read: true,
            action: Some(NotificationAction::SystemAlert),
        },
        Notification {
            id: "6".into(),
            kind: NotificationKind::Error,
            title: "Robot Maintenance Required".into(),
            message: "EcoBot Alpha requires scheduled maintenance check".into(),
            timestamp: "2 days ago".into(),
            is_read: false,
            action: Some(NotificationAction::RobotStatus {
                robot_id: "EB-001".into(),
                battery_level: None,
                issue: Some("maintenance_required".into()),
            }),
        },
    ]
}

pub fn achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            id: "1".into(),
            title: "Getting Started".into(),
            description: "Complete your first cleaning task".into(),
            icon: AchievementIcon::Target,
            unlocked: true,
            unlocked_date: Some("2024-01-15".into()),
            progress: 1,
            target: 1,
        },
        Achievement {
            id: "2".into(),
            title: "Week Warrior".into(),
            description: "Maintain a 7-day streak".into(),
            icon: AchievementIcon::Fire,
            unlocked: true,
            unlocked_date: Some("2024-01-22".into()),
            progress: 7,
            target: 7,
        },
        Achievement {
            id: "3".into(),
            title: "Eco Champion".into(),
            description: "Complete 50 cleaning tasks".into(),
            icon: AchievementIcon::Star,
            unlocked: true,
            unlocked_date: Some("2024-02-10".into()),
            progress: 50,
            target: 50,
        },
        Achievement {
            id: "4".into(),
            title: "Streak Master".into(),
            description: "Maintain a 30-day streak".into(),
            icon: AchievementIcon::Trophy,
            unlocked: false,
            unlocked_date: None,
            progress: 12,
            target: 30,
        },
        Achievement {
            id: "5".into(),
            title: "Century Club".into(),
            description: "Complete 100 cleaning tasks".into(),
            icon: AchievementIcon::Award,
            unlocked: true,
            unlocked_date: Some("2024-03-01".into()),
            progress: 100,
            target: 100,
        },
        Achievement {
            id: "6".into(),
            title: "Consistency King".into(),
            description: "Maintain a 60-day streak".into(),
            icon: AchievementIcon::Zap,
            unlocked: false,
            unlocked_date: None,
            progress: 12,
            target: 60,
        },
    ]
}

/// Streak totals shown on the streak tracker and home dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakStats {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_tasks: u32,
    pub streak_goal: u32,
    pub weekly_average: u32,
}

pub fn streak_stats() -> StreakStats {
    let total_tasks = 156;
    StreakStats {
        current_streak: 12,
        longest_streak: 28,
        total_tasks,
        streak_goal: 30,
        // 22 working days in the window
        weekly_average: (f64::from(total_tasks) / 22.0).round() as u32,
    }
}

/// Home dashboard headline stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeStats {
    pub active_robots: u32,
    pub completed_tasks: u32,
    pub day_streak: u32,
    pub today_progress: u8,
}

pub fn home_stats() -> HomeStats {
    HomeStats {
        active_robots: 3,
        completed_tasks: 47,
        day_streak: 12,
        today_progress: 85,
    }
}

/// Recent task rows on the home dashboard.
pub fn recent_tasks() -> Vec<(String, TaskStatus, String)> {
    vec![
        ("Park Avenue".into(), TaskStatus::Completed, "2 hours ago".into()),
        ("Main Street".into(), TaskStatus::InProgress, "30 mins ago".into()),
        ("Central Plaza".into(), TaskStatus::Pending, "1 hour ago".into()),
    ]
}
