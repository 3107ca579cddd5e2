//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(built-in defaults)"),
    }

    ctx.output.info("[page]");
    ctx.output.kv("premium", &ctx.config.page.premium.to_string());

    ctx.output.info("[shipping]");
    ctx.output.kv(
        "standard_rate_cents",
        &ctx.config.shipping.standard_rate_cents.to_string(),
    );
    ctx.output.kv("currency", &ctx.config.shipping.currency);

    let product = ctx.config.product();
    ctx.output.info("[product]");
    ctx.output.kv("title", &product.title());
    if ctx.config.product.is_none() {
        ctx.output.kv("source", "built-in catalog");
    }
    for variant in &product.variants {
        ctx.output.list_item(&format!(
            "{} {} (qty {}{})",
            variant.id,
            variant.color,
            variant.quantity,
            if variant.on_sale { ", on sale" } else { "" }
        ));
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("pdp.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let problems = ctx.config.problems();
    if problems.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for problem in &problems {
        ctx.output.error(&format!("Error: {}", problem));
    }

    bail!("Configuration has {} error(s)", problems.len());
}
