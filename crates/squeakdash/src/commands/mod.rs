//! Command dispatch: bridges CLI args -> view controllers -> output formatting.

pub mod config_cmd;
pub mod lightning_peers;
pub mod node;
pub mod peers;
pub mod profiles;
pub mod squeaks;
pub mod util;

use std::sync::Arc;

use squeakdash_core::{AdminClient, Effect, LoadState, Screen, ViewController};
use tracing::debug;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// A controller bound to the session's HTTP client.
pub type Controller<S> = ViewController<S, AdminClient>;

/// Dispatch a service-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    client: &Arc<AdminClient>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Hello(args) => node::hello(client, args, global).await,
        Command::Info => node::info(client, global).await,
        Command::Wallet => node::wallet(client, global).await,
        Command::Profiles(args) => profiles::handle(client, args, global).await,
        Command::Squeaks(args) => squeaks::handle(client, args, global).await,
        Command::Sync => squeaks::sync(client, global).await,
        Command::Peers(args) => peers::handle(client, args, global).await,
        Command::LightningPeers(args) => lightning_peers::handle(client, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}

// ── Screen lifecycle ────────────────────────────────────────────────

/// Mount a screen and wait for its initial fetches.
///
/// Individual read failures are only logged; the screen is unavailable when
/// none of them succeeded.
pub async fn load<S: Screen>(client: &Arc<AdminClient>) -> Result<Controller<S>, CliError> {
    let mut ctl = Controller::<S>::new(Arc::clone(client));
    ctl.mount();
    settle(&mut ctl).await?;
    if ctl.state() == LoadState::Loading {
        return Err(CliError::Unavailable {
            screen: S::ID.to_string(),
        });
    }
    Ok(ctl)
}

/// Wait for outstanding calls and act on their effects.
///
/// An alert fails the command with the alert text.
pub async fn settle<S: Screen>(ctl: &mut Controller<S>) -> Result<(), CliError> {
    for effect in ctl.settle().await {
        match effect {
            Effect::Alert(message) => return Err(CliError::ActionFailed { message }),
            Effect::Navigate(path) => debug!(screen = %S::ID, %path, "navigation requested"),
            Effect::Reload => debug!(screen = %S::ID, "reloaded after write"),
        }
    }
    Ok(())
}

/// Turn a 1-based row number into an index, checking it against `count`.
pub fn row_index(row: usize, count: usize, list_command: &str) -> Result<usize, CliError> {
    match row.checked_sub(1) {
        Some(index) if index < count => Ok(index),
        _ => Err(CliError::NoSuchRow {
            row,
            count,
            list_command: list_command.into(),
        }),
    }
}

/// Print a navigation effect's path.
pub fn print_navigation(effect: Option<Effect>, global: &GlobalOpts) {
    if let Some(Effect::Navigate(path)) = effect {
        crate::output::print_output(&path, global.quiet);
    }
}
