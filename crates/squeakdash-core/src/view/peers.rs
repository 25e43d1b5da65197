// Squeak peers screen: peer table plus create, delete and upload/download
// toggles.

use squeakdash_api::models::{CreatePeerReply, Empty, GetPeersReply};

use super::{Calls, Effect, Reaction, Screen, ScreenId, ViewController, read_failed, write_outcome};
use crate::error::CoreError;
use crate::nav::peer_path;
use crate::projection::{PEER_COLUMNS, Table, peer_rows};
use crate::service::AdminService;

pub enum PeersCompletion {
    Peers(Result<GetPeersReply, CoreError>),
    Created(Result<CreatePeerReply, CoreError>),
    Deleted(Result<Empty, CoreError>),
    Uploading(Result<Empty, CoreError>),
    Downloading(Result<Empty, CoreError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeersScreen {
    peers: Table<6>,
}

impl Default for PeersScreen {
    fn default() -> Self {
        Self {
            peers: Table::empty(PEER_COLUMNS),
        }
    }
}

impl PeersScreen {
    pub fn peers(&self) -> &Table<6> {
        &self.peers
    }

    /// Row click: open the peer's detail page.
    pub fn open(&self, index: usize) -> Option<Effect> {
        let [id, ..] = self.peers.row(index)?;
        Some(Effect::Navigate(peer_path(Some(id.as_str()))))
    }
}

impl Screen for PeersScreen {
    type Completion = PeersCompletion;

    const ID: ScreenId = ScreenId::Peers;

    fn on_enter<A>(&self, calls: &mut Calls<'_, A, PeersCompletion>)
    where
        A: AdminService + Sync + 'static,
    {
        calls.issue(|svc| async move { PeersCompletion::Peers(svc.get_peers().await) });
    }

    fn on_completion(&mut self, completion: PeersCompletion) -> Reaction {
        match completion {
            PeersCompletion::Peers(Ok(reply)) => {
                self.peers = peer_rows(&reply.squeak_peers);
                Reaction::loaded()
            }
            PeersCompletion::Peers(Err(e)) => read_failed(Self::ID, "get_peers", &e),
            PeersCompletion::Created(result) => write_outcome("creating peer", result),
            PeersCompletion::Deleted(result) => write_outcome("deleting peer", result),
            PeersCompletion::Uploading(result) => write_outcome("updating peer uploading", result),
            PeersCompletion::Downloading(result) => {
                write_outcome("updating peer downloading", result)
            }
        }
    }
}

impl<A> ViewController<PeersScreen, A>
where
    A: AdminService + Sync + 'static,
{
    pub fn create_peer(&mut self, peer_name: String, host: String, port: Option<u16>) {
        self.perform(|_, calls| {
            calls.issue(move |svc| async move {
                PeersCompletion::Created(svc.create_peer(&peer_name, &host, port).await)
            });
        });
    }

    pub fn delete_peer(&mut self, peer_id: i64) {
        self.perform(|_, calls| {
            calls.issue(move |svc| async move {
                PeersCompletion::Deleted(svc.delete_peer(peer_id).await)
            });
        });
    }

    pub fn set_uploading(&mut self, peer_id: i64, uploading: bool) {
        self.perform(|_, calls| {
            calls.issue(move |svc| async move {
                PeersCompletion::Uploading(svc.set_peer_uploading(peer_id, uploading).await)
            });
        });
    }

    pub fn set_downloading(&mut self, peer_id: i64, downloading: bool) {
        self.perform(|_, calls| {
            calls.issue(move |svc| async move {
                PeersCompletion::Downloading(svc.set_peer_downloading(peer_id, downloading).await)
            });
        });
    }
}
