use anyhow::Result;
use colored::Colorize;

use super::context::{Context, close, to_index};
use super::render::progress_bar;

pub async fn toggle_task(ctx: &Context, week: usize, task: usize) -> Result<()> {
    let (week_index, task_index) = (to_index(week, "week")?, to_index(task, "task")?);
    let mut session = ctx.open_session().await?;

    let result = session.store_mut().update_task_complete(week_index, task_index);
    let progress = session.state().learning_path.overall_progress;
    close(session).await;

    let completed = result?;
    let status = if completed { "done".green() } else { "not done".yellow() };
    println!("Week {week}, task {task} marked {status}");
    println!("Overall {}", progress_bar(progress));
    Ok(())
}

pub async fn complete_week(ctx: &Context, week: usize) -> Result<()> {
    let week_index = to_index(week, "week")?;
    let mut session = ctx.open_session().await?;

    let result = session.store_mut().mark_week_complete(week_index);
    let path = session.state().learning_path.clone();
    close(session).await;

    result?;
    println!("{} Week {week} complete", "✓".green());
    println!(
        "Now on week {}/{}, overall {}",
        path.current_week,
        path.total_weeks,
        progress_bar(path.overall_progress)
    );
    Ok(())
}

pub async fn solve(ctx: &Context, id: String) -> Result<()> {
    let mut session = ctx.open_session().await?;
    let already = session.state().interview_prep.has_solved(&id);
    session.store_mut().add_solved_question(id.clone());

    let prep = session.state().interview_prep.clone();
    close(session).await;

    if already {
        println!("{} {id} was already solved; recorded another attempt", "!".yellow());
    } else {
        println!("{} Solved {id}", "✓".green());
    }
    println!(
        "Attempted {}, unique solved {}",
        prep.questions_attempted,
        prep.unique_solved_questions().len()
    );
    Ok(())
}

pub async fn mock(ctx: &Context) -> Result<()> {
    let mut session = ctx.open_session().await?;
    session.store_mut().complete_mock_session();
    let completed = session.state().interview_prep.mock_sessions_completed;
    close(session).await;

    println!("{} Mock interview recorded ({completed} total)", "✓".green());
    Ok(())
}
