//! Completion counting for learning plans.

use super::model::WeekPlan;

/// Done and total task counts across a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub done: usize,
    pub total: usize,
}

impl TaskCounts {
    /// Counts completed and total daily tasks over every week.
    pub fn of(plan: &[WeekPlan]) -> Self {
        plan.iter().fold(Self::default(), |acc, week| Self {
            done: acc.done + week.completed_task_count(),
            total: acc.total + week.daily_tasks.len(),
        })
    }

    /// `round(100 * done / total)`, rounding halves up. Zero for an empty plan.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let done = self.done.min(self.total) as u64;
        let total = self.total as u64;
        // (200d + t) / 2t == floor(100d/t + 1/2)
        ((200 * done + total) / (2 * total)) as u8
    }
}

/// Overall completion percentage of a plan.
pub fn overall_progress(plan: &[WeekPlan]) -> u8 {
    TaskCounts::of(plan).percent()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(done: usize, total: usize) -> TaskCounts {
        TaskCounts { done, total }
    }

    #[test]
    fn test_percent_basic() {
        assert_eq!(counts(2, 10).percent(), 20);
        assert_eq!(counts(3, 10).percent(), 30);
        assert_eq!(counts(12, 30).percent(), 40);
        assert_eq!(counts(30, 30).percent(), 100);
    }

    #[test]
    fn test_percent_rounds_half_up() {
        // 1/8 = 12.5%
        assert_eq!(counts(1, 8).percent(), 13);
        // 1/3 = 33.33%
        assert_eq!(counts(1, 3).percent(), 33);
        // 2/3 = 66.67%
        assert_eq!(counts(2, 3).percent(), 67);
    }

    #[test]
    fn test_percent_empty_plan_is_zero() {
        assert_eq!(counts(0, 0).percent(), 0);
        assert_eq!(overall_progress(&[]), 0);
    }
}
