//! Profile command handlers.

use std::sync::Arc;

use serde::Serialize;

use squeakdash_core::view::{ProfileList, ProfilesScreen};
use squeakdash_core::{AdminClient, Table};

use crate::cli::{GlobalOpts, OutputFormat, ProfilesArgs, ProfilesCommand};
use crate::error::CliError;
use crate::output;

use super::{Controller, load, print_navigation, row_index, settle, util};

#[derive(Serialize)]
struct ProfilesView<'a> {
    greeting: &'a str,
    node: &'a Table<2>,
    squeaks: &'a Table<4>,
    signing: &'a Table<4>,
    contacts: &'a Table<4>,
}

pub async fn handle(
    client: &Arc<AdminClient>,
    args: ProfilesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ProfilesCommand::List => {
            let ctl = load::<ProfilesScreen>(client).await?;
            render(&ctl, global)
        }

        ProfilesCommand::CreateSigning { name } => {
            let mut ctl = load::<ProfilesScreen>(client).await?;
            ctl.create_signing_profile(name.clone());
            settle(&mut ctl).await?;
            output::success(
                &format!("Created signing profile '{name}'"),
                global.color,
                global.quiet,
            );
            render(&ctl, global)
        }

        ProfilesCommand::AddContact { name, address } => {
            let mut ctl = load::<ProfilesScreen>(client).await?;
            ctl.create_contact_profile(name.clone(), address);
            settle(&mut ctl).await?;
            output::success(
                &format!("Added contact '{name}'"),
                global.color,
                global.quiet,
            );
            render(&ctl, global)
        }

        ProfilesCommand::Following { id, state } => {
            let mut ctl = load::<ProfilesScreen>(client).await?;
            ctl.set_following(id, state.enabled());
            settle(&mut ctl).await?;
            let verb = if state.enabled() { "Following" } else { "Unfollowed" };
            output::success(&format!("{verb} profile {id}"), global.color, global.quiet);
            render(&ctl, global)
        }

        ProfilesCommand::Sharing { id, state } => {
            let mut ctl = load::<ProfilesScreen>(client).await?;
            ctl.set_sharing(id, state.enabled());
            settle(&mut ctl).await?;
            let state = if state.enabled() { "on" } else { "off" };
            output::success(
                &format!("Sharing for profile {id} turned {state}"),
                global.color,
                global.quiet,
            );
            render(&ctl, global)
        }

        ProfilesCommand::Delete { id } => {
            if !util::confirm(&format!("Delete profile {id}?"), "delete profile", global.yes)? {
                return Ok(());
            }
            let mut ctl = load::<ProfilesScreen>(client).await?;
            ctl.delete_profile(id);
            settle(&mut ctl).await?;
            output::success(&format!("Deleted profile {id}"), global.color, global.quiet);
            render(&ctl, global)
        }

        ProfilesCommand::Open { row, contacts } => {
            let ctl = load::<ProfilesScreen>(client).await?;
            let (list, table, list_command) = if contacts {
                (
                    ProfileList::Contacts,
                    ctl.screen().contacts(),
                    "profiles list (contacts)",
                )
            } else {
                (
                    ProfileList::Signing,
                    ctl.screen().signing(),
                    "profiles list (signing)",
                )
            };
            let index = row_index(row.row, table.len(), list_command)?;
            print_navigation(ctl.screen().open(list, index), global);
            Ok(())
        }
    }
}

fn render(ctl: &Controller<ProfilesScreen>, global: &GlobalOpts) -> Result<(), CliError> {
    let screen = ctl.screen();
    let out = match global.output {
        OutputFormat::Table => format!(
            "{}\n\nNode\n{}\n\nFollowed squeaks\n{}\n\nSigning profiles\n{}\n\nContacts\n{}",
            screen.greeting(),
            output::render_rows(global.output, screen.node_info())?,
            output::render_rows(global.output, screen.squeaks())?,
            output::render_rows(global.output, screen.signing())?,
            output::render_rows(global.output, screen.contacts())?,
        ),
        OutputFormat::Plain => [
            output::render_rows(global.output, screen.signing())?,
            output::render_rows(global.output, screen.contacts())?,
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n"),
        OutputFormat::Json | OutputFormat::JsonCompact => output::render_single(
            global.output,
            &ProfilesView {
                greeting: screen.greeting(),
                node: screen.node_info(),
                squeaks: screen.squeaks(),
                signing: screen.signing(),
                contacts: screen.contacts(),
            },
            |_| String::new(),
            |_| String::new(),
        )?,
    };
    output::print_output(&out, global.quiet);
    Ok(())
}
