// Followed squeaks screen, with a manual sync action.

use squeakdash_api::models::{Empty, SqueakDisplaysReply};

use super::{Calls, Effect, Reaction, Screen, ScreenId, ViewController, read_failed, write_outcome};
use crate::error::CoreError;
use crate::nav::squeak_path;
use crate::projection::{SQUEAK_COLUMNS, Table, squeak_rows};
use crate::service::AdminService;

pub enum SqueaksCompletion {
    Squeaks(Result<SqueakDisplaysReply, CoreError>),
    Synced(Result<Empty, CoreError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqueaksScreen {
    squeaks: Table<4>,
}

impl Default for SqueaksScreen {
    fn default() -> Self {
        Self {
            squeaks: Table::empty(SQUEAK_COLUMNS),
        }
    }
}

impl SqueaksScreen {
    pub fn squeaks(&self) -> &Table<4> {
        &self.squeaks
    }

    pub fn open(&self, index: usize) -> Option<Effect> {
        let [hash, ..] = self.squeaks.row(index)?;
        Some(Effect::Navigate(squeak_path(Some(hash.as_str()))))
    }
}

impl Screen for SqueaksScreen {
    type Completion = SqueaksCompletion;

    const ID: ScreenId = ScreenId::Squeaks;

    fn on_enter<A>(&self, calls: &mut Calls<'_, A, SqueaksCompletion>)
    where
        A: AdminService + Sync + 'static,
    {
        calls.issue(|svc| async move {
            SqueaksCompletion::Squeaks(svc.get_followed_squeak_displays().await)
        });
    }

    fn on_completion(&mut self, completion: SqueaksCompletion) -> Reaction {
        match completion {
            SqueaksCompletion::Squeaks(Ok(reply)) => {
                self.squeaks = squeak_rows(&reply.squeak_display_entries);
                Reaction::loaded()
            }
            SqueaksCompletion::Squeaks(Err(e)) => {
                read_failed(Self::ID, "get_followed_squeak_displays", &e)
            }
            SqueaksCompletion::Synced(result) => write_outcome("syncing squeaks", result),
        }
    }
}

impl<A> ViewController<SqueaksScreen, A>
where
    A: AdminService + Sync + 'static,
{
    pub fn sync(&mut self) {
        self.perform(|_, calls| {
            calls.issue(|svc| async move { SqueaksCompletion::Synced(svc.sync_squeaks().await) });
        });
    }
}
