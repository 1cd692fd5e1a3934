use anyhow::{Result, bail};
use chrono::Utc;
use clap::ValueEnum;
use colored::Colorize;
use sarthi_core::notification::{Notification, NotificationKind};

use super::context::{Context, close};
use super::render::{heading, kind_badge, time_ago};

#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    Info,
    Success,
    Warning,
}

impl From<KindArg> for NotificationKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Info => NotificationKind::Info,
            KindArg::Success => NotificationKind::Success,
            KindArg::Warning => NotificationKind::Warning,
        }
    }
}

pub async fn list(ctx: &Context) -> Result<()> {
    let session = ctx.open_session().await?;
    let state = session.state();
    let now = Utc::now();

    println!(
        "{} {} unread",
        heading("Notifications"),
        state.unread_notification_count()
    );
    if state.notifications.is_empty() {
        println!("  {}", "No notifications".dimmed());
    }
    for n in &state.notifications {
        let dot = if n.read { " ".normal() } else { "●".cyan() };
        let text = if n.read { n.text.dimmed() } else { n.text.normal() };
        println!(
            "  {} {} {:<40} {:>9}  {}",
            dot,
            kind_badge(n.kind),
            text,
            time_ago(n.created_at, now).dimmed(),
            n.id.dimmed()
        );
    }

    close(session).await;
    Ok(())
}

pub async fn read(ctx: &Context, id: &str) -> Result<()> {
    let mut session = ctx.open_session().await?;
    let found = session.store_mut().mark_notification_read(id);
    close(session).await;

    if !found {
        bail!("No notification with id '{id}'");
    }
    println!("{} Marked {id} read", "✓".green());
    Ok(())
}

pub async fn read_all(ctx: &Context) -> Result<()> {
    let mut session = ctx.open_session().await?;
    session.store_mut().mark_all_notifications_read();
    close(session).await;
    println!("{} All notifications marked read", "✓".green());
    Ok(())
}

pub async fn add(ctx: &Context, text: String, kind: KindArg) -> Result<()> {
    if text.trim().is_empty() {
        bail!("Notification text is empty");
    }
    let notification = Notification::new(text, kind.into());
    let id = notification.id.clone();

    let mut session = ctx.open_session().await?;
    session.store_mut().add_notification(notification);
    close(session).await;

    println!("{} Added notification {}", "✓".green(), id.dimmed());
    Ok(())
}
