//! Terminal formatting helpers.

use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use sarthi_core::notification::NotificationKind;
use sarthi_core::skill_gap::Priority;

const BAR_WIDTH: usize = 20;

/// `[########------------] 40%`
pub fn progress_bar(percent: u8) -> String {
    let percent = percent.min(100);
    let filled = usize::from(percent) * BAR_WIDTH / 100;
    format!(
        "[{}{}] {}%",
        "#".repeat(filled).green(),
        "-".repeat(BAR_WIDTH - filled).dimmed(),
        percent
    )
}

pub fn check(done: bool) -> ColoredString {
    if done { "✓".green() } else { "·".dimmed() }
}

pub fn heading(text: &str) -> ColoredString {
    text.bright_magenta().bold()
}

pub fn kind_badge(kind: NotificationKind) -> ColoredString {
    let label = format!("{:<7}", kind.to_string());
    match kind {
        NotificationKind::Success => label.green(),
        NotificationKind::Warning => label.yellow(),
        NotificationKind::Info => label.cyan(),
    }
}

pub fn priority_badge(priority: Priority) -> ColoredString {
    let label = format!("{:<6}", priority.to_string().to_uppercase());
    match priority {
        Priority::High => label.red(),
        Priority::Medium => label.yellow(),
        Priority::Low => label.green(),
    }
}

/// "just now", "5m ago", "2h ago", "3d ago"
pub fn time_ago(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let mins = (now - at).num_minutes();
    if mins < 1 {
        return "just now".to_string();
    }
    if mins < 60 {
        return format!("{mins}m ago");
    }
    let hours = mins / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    format!("{}d ago", hours / 24)
}
