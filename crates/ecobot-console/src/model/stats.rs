#![forbid(unsafe_code)]

//! Pure derived values shown across the dashboard, task board, and review
//! analytics. Every function tolerates empty input.

use super::entities::{Notification, Review, Task, TaskStatus};

/// Task counts bucketed by status, shown in the task board header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStatusCounts {
    pub pending: usize,
    pub assigned: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub paused: usize,
}

pub fn task_status_counts(tasks: &[Task]) -> TaskStatusCounts {
    let mut counts = TaskStatusCounts::default();
    for task in tasks {
        match task.status {
            TaskStatus::Pending => counts.pending += 1,
            TaskStatus::Assigned => counts.assigned += 1,
            TaskStatus::InProgress => counts.in_progress += 1,
            TaskStatus::Completed => counts.completed += 1,
            TaskStatus::Paused => counts.paused += 1,
        }
    }
    counts
}

/// Mean rating across all reviews, `0.0` when there are none.
pub fn average_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    f64::from(sum) / reviews.len() as f64
}

/// Review counts per star; index 0 holds 1-star reviews, index 4 holds
/// 5-star. Out-of-range ratings are ignored.
pub fn rating_distribution(reviews: &[Review]) -> [usize; 5] {
    let mut dist = [0usize; 5];
    for review in reviews {
        if (1..=5).contains(&review.rating) {
            dist[usize::from(review.rating) - 1] += 1;
        }
    }
    dist
}

/// Integer percentage of `part` in `whole`, `0` when `whole` is zero.
pub fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    ((part * 100) / whole).min(100) as u8
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.is_read).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entities::{NotificationKind, Priority};

    fn review(rating: u8) -> Review {
        Review {
            id: format!("r{rating}"),
            task_id: "t".into(),
            rating,
            comment: String::new(),
            timestamp: "1 hour ago".into(),
            is_public: true,
        }
    }

    #[test]
    fn average_rating_of_empty_is_zero() {
        assert_eq!(average_rating(&[]), 0.0);
    }

    #[test]
    fn average_rating_of_five_and_four_is_four_point_five() {
        let reviews = [review(5), review(4)];
        assert_eq!(average_rating(&reviews), 4.5);
    }

    #[test]
    fn rating_distribution_buckets_by_star() {
        let reviews = [review(5), review(5), review(4), review(1)];
        assert_eq!(rating_distribution(&reviews), [1, 0, 0, 1, 2]);
    }

    #[test]
    fn percentage_handles_zero_whole() {
        assert_eq!(percentage(3, 0), 0);
        assert_eq!(percentage(1, 2), 50);
        assert_eq!(percentage(2, 2), 100);
    }

    #[test]
    fn task_counts_cover_every_status() {
        let mk = |status| Task {
            id: format!("{status:?}"),
            location: "x".into(),
            priority: Priority::Low,
            status,
            assigned_robot: None,
            start_time: None,
            end_time: None,
            deadline: "noon".into(),
            progress: 0,
            estimated_duration: "1 hour".into(),
            description: String::new(),
        };
        let tasks = [
            mk(TaskStatus::Pending),
            mk(TaskStatus::InProgress),
            mk(TaskStatus::Completed),
        ];
        let counts = task_status_counts(&tasks);
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.assigned, 0);
        assert_eq!(counts.in_progress, 1);
        assert_eq!(counts.completed, 1);
    }

    #[test]
    fn unread_count_matches_flags() {
        let mk = |id: &str, is_read| Notification {
            id: id.into(),
            kind: NotificationKind::Info,
            title: "t".into(),
            message: "m".into(),
            timestamp: "1 hour ago".into(),
            is_read,
            action: None,
        };
        let items = [mk("1", false), mk("2", true), mk("3", false)];
        assert_eq!(unread_count(&items), 2);
    }
}
