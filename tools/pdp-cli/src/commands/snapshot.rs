//! Snapshot command: print the page state as JSON.

use anyhow::Result;
use product_page::Action;

use super::SnapshotArgs;
use crate::context::Context;

/// Run the snapshot command.
pub fn run(args: SnapshotArgs, ctx: &Context) -> Result<()> {
    let mut page = ctx.mount(args.membership.premium_override())?;
    page.dispatch(Action::SelectVariant(args.variant))?;

    ctx.output.json(&page.snapshot());
    Ok(())
}
