//! Node-level handlers: greeting, Lightning node info, wallet.

use std::sync::Arc;

use serde::Serialize;

use squeakdash_core::projection::node_info_rows;
use squeakdash_core::view::WalletScreen;
use squeakdash_core::{AdminClient, AdminService, Table};

use crate::cli::{GlobalOpts, HelloArgs, OutputFormat};
use crate::error::CliError;
use crate::output;

pub async fn hello(
    client: &Arc<AdminClient>,
    args: HelloArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let reply = client.say_hello(&args.name).await?;
    let out = output::render_single(
        global.output,
        &reply,
        |r| r.message.clone(),
        |r| r.message.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn info(client: &Arc<AdminClient>, global: &GlobalOpts) -> Result<(), CliError> {
    let info = client.lnd_get_info().await?;
    let out = output::render_single(
        global.output,
        &info,
        |i| output::render_table(&node_info_rows(i)),
        |i| i.identity_pubkey.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

#[derive(Serialize)]
struct WalletView<'a> {
    node: &'a Table<2>,
    balance: &'a Table<2>,
}

pub async fn wallet(client: &Arc<AdminClient>, global: &GlobalOpts) -> Result<(), CliError> {
    let ctl = super::load::<WalletScreen>(client).await?;
    let screen = ctl.screen();
    let out = match global.output {
        OutputFormat::Table | OutputFormat::Plain => [
            output::render_rows(global.output, screen.node_info())?,
            output::render_rows(global.output, screen.balance())?,
        ]
        .join("\n"),
        OutputFormat::Json | OutputFormat::JsonCompact => output::render_single(
            global.output,
            &WalletView {
                node: screen.node_info(),
                balance: screen.balance(),
            },
            |_| String::new(),
            |_| String::new(),
        )?,
    };
    output::print_output(&out, global.quiet);
    Ok(())
}
