//! Learning path domain models.
//!
//! A plan is an ordered list of weeks; each week owns its daily tasks. Tasks
//! have no identity of their own and are addressed by `(week index, task index)`.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::progress::{TaskCounts, overall_progress};
use crate::error::{Result, SarthiError};

/// Kind of work a daily task asks for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TaskType {
    Concept,
    Code,
    Dsa,
    Project,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTask {
    /// Weekday label, e.g. "Monday"
    pub day: String,
    pub task: String,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    /// Free-text effort estimate, e.g. "2h"
    pub duration: String,
    /// URL or plain reference ("LeetCode")
    pub resource: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekPlan {
    /// 1-based week number as displayed
    pub week: u32,
    pub theme: String,
    pub completed: bool,
    pub topics: Vec<String>,
    pub daily_tasks: Vec<DailyTask>,
    pub dsa_topics: Vec<String>,
    pub weekly_project: String,
}

impl WeekPlan {
    pub fn completed_task_count(&self) -> usize {
        self.daily_tasks.iter().filter(|t| t.completed).count()
    }

    /// True when every daily task is done. Independent of the `completed` flag,
    /// which is only set by an explicit week completion.
    pub fn all_tasks_done(&self) -> bool {
        self.daily_tasks.iter().all(|t| t.completed)
    }
}

/// The generated learning plan and its derived progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPathData {
    pub generated: bool,
    pub total_weeks: u32,
    /// 1-based pointer into `weekly_plan`, at most `total_weeks`
    pub current_week: u32,
    pub weekly_plan: Vec<WeekPlan>,
    /// Always equal to [`overall_progress`] of `weekly_plan` after a task mutation
    pub overall_progress: u8,
}

impl LearningPathData {
    /// Builds a plan with progress and week count derived from `weekly_plan`.
    pub fn from_weeks(weekly_plan: Vec<WeekPlan>, current_week: u32) -> Self {
        let total_weeks = weekly_plan.len() as u32;
        let overall_progress = overall_progress(&weekly_plan);
        Self {
            generated: true,
            total_weeks,
            current_week: current_week.clamp(1, total_weeks.max(1)),
            weekly_plan,
            overall_progress,
        }
    }

    pub fn task_counts(&self) -> TaskCounts {
        TaskCounts::of(&self.weekly_plan)
    }

    pub fn recompute_progress(&mut self) {
        self.overall_progress = overall_progress(&self.weekly_plan);
    }

    pub fn weeks_completed(&self) -> usize {
        self.weekly_plan.iter().filter(|w| w.completed).count()
    }

    /// The week `current_week` points at, if it exists.
    pub fn current(&self) -> Option<&WeekPlan> {
        let index = self.current_week.checked_sub(1)? as usize;
        self.weekly_plan.get(index)
    }

    pub(crate) fn week_mut(&mut self, week_index: usize) -> Result<&mut WeekPlan> {
        let len = self.weekly_plan.len();
        self.weekly_plan
            .get_mut(week_index)
            .ok_or(SarthiError::out_of_range("week", week_index, len))
    }

    /// Flips one task's completion flag and recomputes progress.
    ///
    /// Returns the task's new `completed` value.
    pub(crate) fn toggle_task(&mut self, week_index: usize, task_index: usize) -> Result<bool> {
        let week = self.week_mut(week_index)?;
        let len = week.daily_tasks.len();
        let task = week
            .daily_tasks
            .get_mut(task_index)
            .ok_or(SarthiError::out_of_range("task", task_index, len))?;
        task.completed = !task.completed;
        let completed = task.completed;

        self.recompute_progress();
        Ok(completed)
    }

    /// Completes a week and all of its tasks, then moves `current_week` to the
    /// following week.
    ///
    /// `week_index` is 0-based while `current_week` is 1-based: the completed
    /// week is number `week_index + 1`, so the next one is `week_index + 2`,
    /// clamped to `total_weeks`.
    pub(crate) fn complete_week(&mut self, week_index: usize) -> Result<()> {
        let week = self.week_mut(week_index)?;
        week.completed = true;
        for task in &mut week.daily_tasks {
            task.completed = true;
        }

        self.recompute_progress();
        let next = u32::try_from(week_index + 2).unwrap_or(u32::MAX);
        self.current_week = next.min(self.total_weeks);
        Ok(())
    }
}

/// Partial update for [`LearningPathData`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LearningPathPatch {
    pub generated: Option<bool>,
    pub total_weeks: Option<u32>,
    pub current_week: Option<u32>,
    pub weekly_plan: Option<Vec<WeekPlan>>,
    pub overall_progress: Option<u8>,
}

impl LearningPathPatch {
    /// Merges the patch into `data`.
    ///
    /// A patch that replaces `weekly_plan` without an explicit
    /// `overall_progress` gets its progress recomputed from the new plan, so a
    /// regenerated plan never shows the old percentage. `current_week` stays
    /// within `1..=total_weeks`.
    pub fn apply_to(self, data: &mut LearningPathData) {
        let replaces_plan = self.weekly_plan.is_some();
        let moves_pointer = self.current_week.is_some() || self.total_weeks.is_some();

        if let Some(generated) = self.generated {
            data.generated = generated;
        }
        if let Some(total) = self.total_weeks {
            data.total_weeks = total;
        }
        if let Some(current) = self.current_week {
            data.current_week = current;
        }
        if let Some(plan) = self.weekly_plan {
            data.weekly_plan = plan;
        }
        if moves_pointer {
            data.current_week = data.current_week.clamp(1, data.total_weeks.max(1));
        }
        match self.overall_progress {
            Some(progress) => data.overall_progress = progress.min(100),
            None if replaces_plan => data.recompute_progress(),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(done: bool) -> DailyTask {
        DailyTask {
            day: "Monday".to_string(),
            task: "Read".to_string(),
            task_type: TaskType::Concept,
            duration: "1h".to_string(),
            resource: "docs".to_string(),
            completed: done,
        }
    }

    fn week(number: u32, done: &[bool]) -> WeekPlan {
        WeekPlan {
            week: number,
            theme: format!("Week {number}"),
            completed: false,
            topics: vec![],
            daily_tasks: done.iter().map(|d| task(*d)).collect(),
            dsa_topics: vec![],
            weekly_project: String::new(),
        }
    }

    #[test]
    fn test_from_weeks_derives_totals() {
        let path = LearningPathData::from_weeks(
            vec![week(1, &[true, true, false, false]), week(2, &[false; 4])],
            1,
        );
        assert_eq!(path.total_weeks, 2);
        assert_eq!(path.overall_progress, 25);
        assert_eq!(path.current().map(|w| w.week), Some(1));
    }

    #[test]
    fn test_toggle_task_reports_new_value() {
        let mut path = LearningPathData::from_weeks(vec![week(1, &[false, false])], 1);
        assert!(path.toggle_task(0, 1).unwrap());
        assert_eq!(path.overall_progress, 50);
        assert!(!path.toggle_task(0, 1).unwrap());
        assert_eq!(path.overall_progress, 0);
    }

    #[test]
    fn test_toggle_task_out_of_range() {
        let mut path = LearningPathData::from_weeks(vec![week(1, &[false])], 1);
        assert!(path.toggle_task(3, 0).unwrap_err().is_out_of_range());
        assert!(path.toggle_task(0, 1).unwrap_err().is_out_of_range());
        assert!(!path.weekly_plan[0].daily_tasks[0].completed);
    }

    #[test]
    fn test_complete_week_advances_pointer() {
        let mut path = LearningPathData::from_weeks(
            vec![week(1, &[false]), week(2, &[false]), week(3, &[false])],
            1,
        );
        path.complete_week(0).unwrap();
        assert_eq!(path.current_week, 2);
        assert!(path.weekly_plan[0].all_tasks_done());
        path.complete_week(2).unwrap();
        assert_eq!(path.current_week, 3);
        assert_eq!(path.weeks_completed(), 2);
    }

    #[test]
    fn test_patch_replacing_plan_recomputes_progress() {
        let mut path = LearningPathData::from_weeks(vec![week(1, &[true])], 1);
        assert_eq!(path.overall_progress, 100);

        LearningPathPatch {
            weekly_plan: Some(vec![week(1, &[false, true, false, false])]),
            ..Default::default()
        }
        .apply_to(&mut path);
        assert_eq!(path.overall_progress, 25);
    }

    #[test]
    fn test_patch_with_explicit_progress_is_trusted() {
        let mut path = LearningPathData::from_weeks(vec![week(1, &[true])], 1);
        LearningPathPatch {
            weekly_plan: Some(vec![week(1, &[false])]),
            overall_progress: Some(38),
            ..Default::default()
        }
        .apply_to(&mut path);
        assert_eq!(path.overall_progress, 38);
    }

    #[test]
    fn test_patch_clamps_current_week() {
        let mut path = LearningPathData::from_weeks(vec![week(1, &[false]), week(2, &[false])], 1);
        LearningPathPatch {
            current_week: Some(u32::MAX),
            ..Default::default()
        }
        .apply_to(&mut path);
        assert_eq!(path.current_week, 2);

        LearningPathPatch {
            current_week: Some(0),
            ..Default::default()
        }
        .apply_to(&mut path);
        assert_eq!(path.current_week, 1);

        path.current_week = 2;
        LearningPathPatch {
            total_weeks: Some(1),
            ..Default::default()
        }
        .apply_to(&mut path);
        assert_eq!(path.current_week, 1);
    }

    #[test]
    fn test_task_type_serializes_as_type_key() {
        let json = serde_json::to_value(task(false)).unwrap();
        assert_eq!(json["type"], "concept");
        assert_eq!(json["completed"], false);
    }
}
