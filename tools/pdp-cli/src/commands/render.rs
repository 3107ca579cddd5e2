//! Render command: write the page HTML.

use std::fs;

use anyhow::{Context as _, Result};
use chrono::Utc;
use product_page::Action;

use super::RenderArgs;
use crate::context::Context;

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let mut page = ctx.mount(args.membership.premium_override())?;
    page.dispatch(Action::SelectVariant(args.variant))?;

    let html = page.render();

    match args.out {
        Some(out) => {
            let path = ctx.resolve_path(&out);
            fs::write(&path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "path": path.display().to_string(),
                    "bytes": html.len(),
                    "rendered_at": Utc::now().to_rfc3339(),
                }));
            } else {
                ctx.output
                    .success(&format!("Wrote {} ({} bytes)", path.display(), html.len()));
            }
        }
        None => print!("{}", html),
    }

    Ok(())
}
