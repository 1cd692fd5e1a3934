use anyhow::{Context as _, Result};
use colored::Colorize;
use sarthi_core::state::repository::StateRepository;
use sarthi_infrastructure::FileStateRepository;
use sarthi_infrastructure::dto::import_legacy_snapshot;
use std::fs;
use std::path::{Path, PathBuf};

use super::context::{Context, close};
use super::render::{check, heading, progress_bar};

pub async fn show(ctx: &Context) -> Result<()> {
    let session = ctx.open_session().await?;
    let state = session.state();
    let stats = session.stats();

    println!(
        "{} {} ({})",
        heading("Sarthi"),
        state.user.name.bold(),
        state.user.avatar
    );
    println!(
        "  {} · {} · {} {}",
        state.user.college, state.user.city, state.user.year, state.user.branch
    );
    println!(
        "  Target: {} at {}",
        state.user.target_role.cyan(),
        state.user.target_companies.join(", ")
    );
    println!();
    println!("  Progress   {}", progress_bar(stats.overall_progress));
    println!(
        "  Week       {}/{} ({} completed)",
        stats.current_week, stats.total_weeks, stats.weeks_completed
    );
    println!("  Tasks      {}/{}", stats.tasks_done, stats.tasks_total);
    println!("  Readiness  {}/100", stats.readiness_score);
    println!("  Unread     {}", stats.unread_notifications);

    if let Some(week) = state.learning_path.current() {
        println!();
        println!("{} Week {}: {}", heading("This week"), week.week, week.theme);
        for task in &week.daily_tasks {
            println!("  {} {:<10} {}", check(task.completed), task.day, task.task);
        }
    }

    close(session).await;
    Ok(())
}

pub async fn stats(ctx: &Context, json: bool) -> Result<()> {
    let session = ctx.open_session().await?;
    let stats = session.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", heading("Progress"));
        println!("  Overall progress       {}", progress_bar(stats.overall_progress));
        println!("  Tasks done             {}/{}", stats.tasks_done, stats.tasks_total);
        println!("  Weeks completed        {}/{}", stats.weeks_completed, stats.total_weeks);
        println!("  Days active            {}", stats.days_active);
        println!("  Skills learned         {}", stats.skills_learned);
        println!("  Readiness score        {}/100", stats.readiness_score);
        println!("{}", heading("Projects"));
        println!("  Reviews submitted      {}", stats.reviews_submitted);
        match stats.average_review_score {
            Some(avg) => println!("  Average review score   {:.1}", avg),
            None => println!("  Average review score   -"),
        }
        println!("{}", heading("Interview prep"));
        println!("  Questions attempted    {}", stats.questions_attempted);
        println!("  Unique solved          {}", stats.unique_questions_solved);
        println!("  Mock sessions          {}", stats.mock_sessions_completed);
    }

    close(session).await;
    Ok(())
}

pub async fn plan(ctx: &Context) -> Result<()> {
    let session = ctx.open_session().await?;
    let path = &session.state().learning_path;

    println!(
        "{} {} weeks, {}",
        heading("Learning path"),
        path.total_weeks,
        progress_bar(path.overall_progress)
    );
    for week in &path.weekly_plan {
        let marker = if week.week == path.current_week {
            "▶".cyan()
        } else {
            check(week.completed)
        };
        println!();
        println!("{} Week {}: {}", marker, week.week, week.theme.bold());
        println!("    Project: {}", week.weekly_project);
        println!("    DSA: {}", week.dsa_topics.join(", "));
        for (i, task) in week.daily_tasks.iter().enumerate() {
            println!(
                "    {} {}. {:<10} {:<40} {:>3} {}",
                check(task.completed),
                i + 1,
                task.day,
                task.task,
                task.duration,
                task.task_type.to_string().dimmed()
            );
        }
    }

    close(session).await;
    Ok(())
}

pub async fn export(ctx: &Context, output: Option<PathBuf>) -> Result<()> {
    let session = ctx.open_session().await?;
    let json = session.export_json()?;
    close(session).await;

    match output {
        Some(path) => {
            fs::write(&path, json + "\n")
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("{} Exported to {}", "✓".green(), path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

/// Replaces the saved state with a browser export.
pub async fn import(ctx: &Context, file: &Path) -> Result<()> {
    let content =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let state = import_legacy_snapshot(&content)
        .with_context(|| format!("{} is not a Sarthi browser export", file.display()))?;

    let repository = FileStateRepository::new(ctx.snapshot_paths())
        .await
        .context("Failed to open the saved dashboard state")?;
    repository.save_state(state).await?;

    println!("{} Imported {}", "✓".green(), file.display());
    Ok(())
}

pub async fn reset(ctx: &Context) -> Result<()> {
    let mut session = ctx.open_session().await?;
    session.reset();
    close(session).await;
    println!("{} Progress reset to demo data", "✓".green());
    Ok(())
}
