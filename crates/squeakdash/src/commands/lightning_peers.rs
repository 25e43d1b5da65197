//! Lightning peer command handlers.

use std::sync::Arc;

use squeakdash_core::AdminClient;
use squeakdash_core::view::LightningPeersScreen;

use crate::cli::{GlobalOpts, LightningPeersArgs, LightningPeersCommand};
use crate::error::CliError;
use crate::output;

use super::{load, print_navigation, row_index};

pub async fn handle(
    client: &Arc<AdminClient>,
    args: LightningPeersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let ctl = load::<LightningPeersScreen>(client).await?;
    match args.command {
        LightningPeersCommand::List => {
            let out = output::render_rows(global.output, ctl.screen().peers())?;
            output::print_output(&out, global.quiet);
        }
        LightningPeersCommand::Open(row) => {
            let index = row_index(
                row.row,
                ctl.screen().peers().len(),
                "lightning-peers list",
            )?;
            print_navigation(ctl.screen().open(index), global);
        }
    }
    Ok(())
}
