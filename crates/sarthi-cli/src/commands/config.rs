use anyhow::{Context as _, Result};
use colored::Colorize;

use super::context::Context;

pub fn show(ctx: &Context) -> Result<()> {
    let path = ctx.config_service().path();
    let source = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not created, using defaults)", path.display())
    };
    println!("{}", format!("# {source}").dimmed());
    print!(
        "{}",
        toml::to_string_pretty(ctx.config()).context("Failed to render config")?
    );
    Ok(())
}

pub fn init(ctx: &Context) -> Result<()> {
    let path = ctx.config_service().path();
    if ctx.config_service().write_default()? {
        println!("{} Wrote {}", "✓".green(), path.display());
    } else {
        println!("{} already exists, left unchanged", path.display());
    }
    Ok(())
}
