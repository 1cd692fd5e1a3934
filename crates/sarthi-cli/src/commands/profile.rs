use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use sarthi_application::{OnboardingForm, split_list};
use sarthi_core::profile::{UserProfilePatch, avatar_initials};

use super::context::{Context, close};
use super::render::heading;

#[derive(Args)]
pub struct ProfileArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    college: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    year: Option<String>,
    #[arg(long)]
    branch: Option<String>,
    #[arg(long)]
    role: Option<String>,
    /// Comma-separated
    #[arg(long)]
    companies: Option<String>,
    /// Comma-separated
    #[arg(long)]
    skills: Option<String>,
    #[arg(long)]
    github: Option<String>,
    #[arg(long)]
    timeline: Option<String>,
}

impl ProfileArgs {
    /// A new name also refreshes the avatar initials.
    fn into_patch(self) -> UserProfilePatch {
        UserProfilePatch {
            avatar: self.name.as_deref().map(avatar_initials),
            name: self.name,
            college: self.college,
            city: self.city,
            year: self.year,
            branch: self.branch,
            target_role: self.role,
            target_companies: self.companies.as_deref().map(split_list),
            current_skills: self.skills.as_deref().map(split_list),
            github_url: self.github,
            timeline: self.timeline,
        }
    }
}

#[derive(Args)]
pub struct OnboardArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    role: String,
    #[arg(long, default_value = "")]
    college: String,
    #[arg(long, default_value = "")]
    city: String,
    #[arg(long, default_value = "")]
    year: String,
    #[arg(long, default_value = "")]
    branch: String,
    /// Comma-separated
    #[arg(long, default_value = "")]
    skills: String,
    /// Comma-separated
    #[arg(long, default_value = "")]
    companies: String,
    #[arg(long, default_value = "")]
    timeline: String,
    #[arg(long, default_value = "")]
    github: String,
}

impl From<OnboardArgs> for OnboardingForm {
    fn from(args: OnboardArgs) -> Self {
        OnboardingForm {
            full_name: args.name,
            college: args.college,
            city: args.city,
            year: args.year,
            branch: args.branch,
            skills: split_list(&args.skills),
            custom_skill: String::new(),
            target_role: args.role,
            target_companies: split_list(&args.companies),
            timeline: args.timeline,
            github_url: args.github,
        }
    }
}

pub async fn show(ctx: &Context) -> Result<()> {
    let session = ctx.open_session().await?;
    let user = &session.state().user;

    println!("{} {} ({})", heading("Profile"), user.name.bold(), user.avatar);
    println!("  College    {}", user.college);
    println!("  City       {}", user.city);
    println!("  Year       {} {}", user.year, user.branch);
    println!("  Role       {}", user.target_role);
    println!("  Companies  {}", user.target_companies.join(", "));
    println!("  Skills     {}", user.current_skills.join(", "));
    println!("  Timeline   {}", user.timeline);
    println!("  GitHub     {}", user.github_url);
    println!(
        "  Onboarded  {}",
        if session.state().onboarding_complete { "yes" } else { "no" }
    );

    close(session).await;
    Ok(())
}

pub async fn set(ctx: &Context, args: ProfileArgs) -> Result<()> {
    let patch = args.into_patch();
    if patch.is_empty() {
        bail!("Nothing to update; pass at least one field, e.g. --role \"Backend SDE\"");
    }

    let mut session = ctx.open_session().await?;
    session.store_mut().set_user(patch);
    close(session).await;
    println!("{} Profile saved", "✓".green());
    Ok(())
}

pub async fn onboard(ctx: &Context, args: OnboardArgs) -> Result<()> {
    let mut session = ctx.open_session().await?;
    println!("{}", "Setting up your dashboard...".dimmed());
    let result = session.submit_onboarding(args.into()).await;
    close(session).await;

    result?;
    println!("{} Welcome aboard! Run `sarthi show` to see your dashboard.", "✓".green());
    Ok(())
}

pub async fn section(ctx: &Context, name: String) -> Result<()> {
    let mut session = ctx.open_session().await?;
    session.store_mut().set_active_section(name.clone());
    close(session).await;
    println!("Active section: {}", name.cyan());
    Ok(())
}

pub async fn menu(ctx: &Context, open: bool) -> Result<()> {
    let mut session = ctx.open_session().await?;
    session.store_mut().set_mobile_menu_open(open);
    close(session).await;
    println!("Mobile menu {}", if open { "open" } else { "closed" });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_args() -> ProfileArgs {
        ProfileArgs {
            name: None,
            college: None,
            city: None,
            year: None,
            branch: None,
            role: None,
            companies: None,
            skills: None,
            github: None,
            timeline: None,
        }
    }

    #[test]
    fn test_empty_args_make_empty_patch() {
        assert!(empty_args().into_patch().is_empty());
    }

    #[test]
    fn test_name_refreshes_avatar_and_lists_split() {
        let patch = ProfileArgs {
            name: Some("Ananya Rao".to_string()),
            companies: Some("Swiggy, Zomato".to_string()),
            ..empty_args()
        }
        .into_patch();
        assert_eq!(patch.avatar.as_deref(), Some("AR"));
        assert_eq!(
            patch.target_companies,
            Some(vec!["Swiggy".to_string(), "Zomato".to_string()])
        );
        assert!(patch.current_skills.is_none());
    }
}
