//! Squeak command handlers.

use std::sync::Arc;

use squeakdash_core::AdminClient;
use squeakdash_core::view::SqueaksScreen;

use crate::cli::{GlobalOpts, SqueaksArgs, SqueaksCommand};
use crate::error::CliError;
use crate::output;

use super::{load, print_navigation, row_index, settle};

pub async fn handle(
    client: &Arc<AdminClient>,
    args: SqueaksArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let ctl = load::<SqueaksScreen>(client).await?;
    match args.command {
        SqueaksCommand::List => {
            let out = output::render_rows(global.output, ctl.screen().squeaks())?;
            output::print_output(&out, global.quiet);
        }
        SqueaksCommand::Open(row) => {
            let index = row_index(row.row, ctl.screen().squeaks().len(), "squeaks list")?;
            print_navigation(ctl.screen().open(index), global);
        }
    }
    Ok(())
}

/// Ask the node to sync squeaks, then show the refreshed list.
pub async fn sync(client: &Arc<AdminClient>, global: &GlobalOpts) -> Result<(), CliError> {
    let mut ctl = load::<SqueaksScreen>(client).await?;
    ctl.sync();
    settle(&mut ctl).await?;
    output::success("Squeaks synced", global.color, global.quiet);
    let out = output::render_rows(global.output, ctl.screen().squeaks())?;
    output::print_output(&out, global.quiet);
    Ok(())
}
