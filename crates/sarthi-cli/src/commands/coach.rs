use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sarthi_application::coach::BEHAVIORAL_QUESTIONS;
use sarthi_application::{ProjectReviewer, ProjectSubmission, StarAnswer, split_list};
use sarthi_core::skill_gap::Priority;

use super::context::{Context, close, to_index};
use super::render::{heading, priority_badge, progress_bar};

pub async fn analyze(ctx: &Context) -> Result<()> {
    let mut session = ctx.open_session().await?;
    println!("{}", "Analyzing your profile...".dimmed());
    let result = session.analyze_skills().await;
    close(session).await;

    println!(
        "{} {} ({})",
        heading("Skill gap"),
        progress_bar(result.readiness_score),
        result.current_level
    );
    println!("  {}", result.summary);
    println!("  Strong: {}", result.strong_skills.join(", ").green());
    for priority in [Priority::High, Priority::Medium, Priority::Low] {
        for missing in result.missing_by_priority(priority) {
            println!(
                "  {} {:<22} {}w  {}",
                priority_badge(priority),
                missing.skill,
                missing.estimated_weeks,
                missing.reason.dimmed()
            );
        }
    }
    println!("  Estimated time to ready: {} weeks", result.estimated_weeks);
    Ok(())
}

pub async fn review(
    ctx: &Context,
    name: String,
    github_url: String,
    stack: &str,
    seed: Option<u64>,
) -> Result<()> {
    let mut session = ctx.open_session().await?;
    if let Some(seed) = seed {
        let simulation = ctx.config().simulation.clone();
        session = session.with_reviewer(ProjectReviewer::with_seed(simulation, seed));
    }
    println!("{}", "Reviewing your repository...".dimmed());
    let result = session
        .review_project(ProjectSubmission {
            project_name: name,
            github_url,
            tech_stack: split_list(stack),
        })
        .await;
    close(session).await;
    let report = result?;

    println!(
        "{} {} scored {}/100",
        heading("Review"),
        report.review.project_name.bold(),
        report.review.overall_score
    );
    for category in &report.categories {
        println!(
            "  {:<18} {} {}",
            category.label,
            progress_bar(category.score),
            format!("({}%)", category.weight).dimmed()
        );
    }
    println!("{}", heading("Strengths"));
    for strength in &report.strengths {
        println!("  {} {}", "+".green(), strength);
    }
    println!("{}", heading("Issues"));
    for issue in &report.issues {
        println!("  {} {}", priority_badge(issue.priority), issue.text);
    }
    Ok(())
}

pub async fn chat(ctx: &Context, message: &str) -> Result<()> {
    let session = ctx.open_session().await?;
    let result = session.ask_coach(message).await;
    close(session).await;

    println!("{} {}", "Sarthi:".cyan().bold(), result?.content);
    Ok(())
}

pub async fn hint(ctx: &Context, question: &str) -> Result<()> {
    let session = ctx.open_session().await?;
    let result = session.dsa_hint(question).await;
    close(session).await;

    println!("{} {}", "Hint:".yellow().bold(), result?.content);
    Ok(())
}

#[derive(Args)]
pub struct StarArgs {
    /// Practice question number (1-3)
    #[arg(long, default_value_t = 1)]
    question: usize,
    #[arg(long)]
    situation: String,
    #[arg(long)]
    task: String,
    #[arg(long)]
    action: String,
    #[arg(long)]
    result: String,
}

pub async fn star(ctx: &Context, args: StarArgs) -> Result<()> {
    let question = BEHAVIORAL_QUESTIONS
        .get(to_index(args.question, "question")?)
        .ok_or_else(|| {
            anyhow::anyhow!("There are {} practice questions", BEHAVIORAL_QUESTIONS.len())
        })?;
    let answer = StarAnswer {
        situation: args.situation,
        task: args.task,
        action: args.action,
        result: args.result,
    };

    let session = ctx.open_session().await?;
    println!("{} {}", heading("Question"), question);
    println!("{}", "Analyzing your story...".dimmed());
    let result = session.evaluate_star(&answer).await;
    close(session).await;
    let feedback = result?;

    println!("{} {}/10 ({})", heading("Evaluation"), feedback.score, feedback.verdict.green());
    for strength in &feedback.strengths {
        println!("  {} {}", "+".green(), strength);
    }
    println!("  {} {}", "!".yellow(), feedback.improvement);
    Ok(())
}
