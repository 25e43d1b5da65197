//! Squeak peer command handlers.

use std::sync::Arc;

use squeakdash_core::AdminClient;
use squeakdash_core::view::PeersScreen;

use crate::cli::{GlobalOpts, PeersArgs, PeersCommand};
use crate::error::CliError;
use crate::output;

use super::{Controller, load, print_navigation, row_index, settle, util};

pub async fn handle(
    client: &Arc<AdminClient>,
    args: PeersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        PeersCommand::List => {
            let ctl = load::<PeersScreen>(client).await?;
            render(&ctl, global)
        }

        PeersCommand::Create {
            name,
            peer_host,
            peer_port,
        } => {
            let mut ctl = load::<PeersScreen>(client).await?;
            ctl.create_peer(name.clone(), peer_host, peer_port);
            settle(&mut ctl).await?;
            output::success(&format!("Created peer '{name}'"), global.color, global.quiet);
            render(&ctl, global)
        }

        PeersCommand::Delete { id } => {
            if !util::confirm(&format!("Delete peer {id}?"), "delete peer", global.yes)? {
                return Ok(());
            }
            let mut ctl = load::<PeersScreen>(client).await?;
            ctl.delete_peer(id);
            settle(&mut ctl).await?;
            output::success(&format!("Deleted peer {id}"), global.color, global.quiet);
            render(&ctl, global)
        }

        PeersCommand::Uploading { id, state } => {
            let mut ctl = load::<PeersScreen>(client).await?;
            ctl.set_uploading(id, state.enabled());
            settle(&mut ctl).await?;
            output::success(
                &format!("Uploading to peer {id} turned {}", on_off(state.enabled())),
                global.color,
                global.quiet,
            );
            render(&ctl, global)
        }

        PeersCommand::Downloading { id, state } => {
            let mut ctl = load::<PeersScreen>(client).await?;
            ctl.set_downloading(id, state.enabled());
            settle(&mut ctl).await?;
            output::success(
                &format!("Downloading from peer {id} turned {}", on_off(state.enabled())),
                global.color,
                global.quiet,
            );
            render(&ctl, global)
        }

        PeersCommand::Open(row) => {
            let ctl = load::<PeersScreen>(client).await?;
            let index = row_index(row.row, ctl.screen().peers().len(), "peers list")?;
            print_navigation(ctl.screen().open(index), global);
            Ok(())
        }
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

fn render(ctl: &Controller<PeersScreen>, global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_rows(global.output, ctl.screen().peers())?;
    output::print_output(&out, global.quiet);
    Ok(())
}
