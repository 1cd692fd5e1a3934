use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod commands;

use commands::context::Context;

#[derive(Parser)]
#[command(name = "sarthi")]
#[command(about = "Sarthi CLI - career guidance dashboard", long_about = None)]
struct Cli {
    /// Directory for config.toml and the saved dashboard state
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Skip the simulated coach delays
    #[arg(long, global = true)]
    instant: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard overview
    Show,
    /// Show derived progress figures
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the learning plan week by week
    Plan,
    /// Toggle a daily task (1-based week and task numbers)
    Task { week: usize, task: usize },
    /// Mark a whole week complete (1-based week number)
    CompleteWeek { week: usize },
    /// Record a solved interview question
    Solve { id: String },
    /// Record a finished mock interview
    Mock,
    /// Notification inbox
    Notifications {
        #[command(subcommand)]
        action: Option<NotificationAction>,
    },
    /// Show or edit the profile
    Profile {
        #[command(subcommand)]
        action: Option<ProfileAction>,
    },
    /// Set the active dashboard section
    Section { name: String },
    /// Open or close the mobile menu
    Menu {
        #[arg(value_enum)]
        state: MenuState,
    },
    /// Run the skill gap analysis
    Analyze,
    /// Request a project review
    Review {
        name: String,
        github_url: String,
        /// Comma-separated tech stack
        #[arg(long, default_value = "")]
        stack: String,
        /// Fix the score jitter for a reproducible result
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Ask the coach a question
    Chat { message: String },
    /// Ask for a hint on a DSA question
    Hint { question: String },
    /// Get feedback on a behavioral answer in STAR form
    Star(commands::coach::StarArgs),
    /// Complete onboarding
    Onboard(commands::profile::OnboardArgs),
    /// Print the current state as JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Import a snapshot exported from the browser dashboard
    Import { file: PathBuf },
    /// Discard all progress and restore the demo data
    Reset,
    /// Configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum NotificationAction {
    /// List notifications, newest first
    List,
    /// Mark one notification read
    Read { id: String },
    /// Mark every notification read
    ReadAll,
    /// Post a notification
    Add {
        text: String,
        #[arg(long, value_enum, default_value = "info")]
        kind: commands::notifications::KindArg,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Show the profile
    Show,
    /// Update profile fields
    Set(commands::profile::ProfileArgs),
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write a default config.toml if none exists
    Init,
}

#[derive(Clone, Copy, ValueEnum)]
enum MenuState {
    Open,
    Closed,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = Context::load(cli.data_dir, cli.instant)?;
    commands::context::init_tracing(&ctx.config().logging.filter);
    ctx.report_config_error();

    match cli.command {
        Commands::Show => commands::dashboard::show(&ctx).await?,
        Commands::Stats { json } => commands::dashboard::stats(&ctx, json).await?,
        Commands::Plan => commands::dashboard::plan(&ctx).await?,
        Commands::Task { week, task } => commands::progress::toggle_task(&ctx, week, task).await?,
        Commands::CompleteWeek { week } => commands::progress::complete_week(&ctx, week).await?,
        Commands::Solve { id } => commands::progress::solve(&ctx, id).await?,
        Commands::Mock => commands::progress::mock(&ctx).await?,
        Commands::Notifications { action } => match action.unwrap_or(NotificationAction::List) {
            NotificationAction::List => commands::notifications::list(&ctx).await?,
            NotificationAction::Read { id } => commands::notifications::read(&ctx, &id).await?,
            NotificationAction::ReadAll => commands::notifications::read_all(&ctx).await?,
            NotificationAction::Add { text, kind } => {
                commands::notifications::add(&ctx, text, kind).await?
            }
        },
        Commands::Profile { action } => match action.unwrap_or(ProfileAction::Show) {
            ProfileAction::Show => commands::profile::show(&ctx).await?,
            ProfileAction::Set(args) => commands::profile::set(&ctx, args).await?,
        },
        Commands::Section { name } => commands::profile::section(&ctx, name).await?,
        Commands::Menu { state } => {
            commands::profile::menu(&ctx, matches!(state, MenuState::Open)).await?
        }
        Commands::Analyze => commands::coach::analyze(&ctx).await?,
        Commands::Review {
            name,
            github_url,
            stack,
            seed,
        } => commands::coach::review(&ctx, name, github_url, &stack, seed).await?,
        Commands::Chat { message } => commands::coach::chat(&ctx, &message).await?,
        Commands::Hint { question } => commands::coach::hint(&ctx, &question).await?,
        Commands::Star(args) => commands::coach::star(&ctx, args).await?,
        Commands::Onboard(args) => commands::profile::onboard(&ctx, args).await?,
        Commands::Export { output } => commands::dashboard::export(&ctx, output).await?,
        Commands::Import { file } => commands::dashboard::import(&ctx, &file).await?,
        Commands::Reset => commands::dashboard::reset(&ctx).await?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&ctx)?,
            ConfigAction::Init => commands::config::init(&ctx)?,
        },
    }

    Ok(())
}
