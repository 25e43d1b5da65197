// Lightning peers screen: peers of the paired node, each linking to its node page.

use squeakdash_api::models::{LightningPeer, ListPeersReply};

use super::{Calls, Effect, Reaction, Screen, ScreenId, read_failed};
use crate::error::CoreError;
use crate::nav::lightning_node_path;
use crate::projection::{LIGHTNING_PEER_COLUMNS, Table, lightning_peer_rows, peer_target};
use crate::service::AdminService;

pub enum LightningPeersCompletion {
    Peers(Result<ListPeersReply, CoreError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightningPeersScreen {
    rows: Table<4>,
    // Row-aligned with `rows`; navigation reads the raw pubkey and address.
    peers: Vec<LightningPeer>,
}

impl Default for LightningPeersScreen {
    fn default() -> Self {
        Self {
            rows: Table::empty(LIGHTNING_PEER_COLUMNS),
            peers: Vec::new(),
        }
    }
}

impl LightningPeersScreen {
    pub fn peers(&self) -> &Table<4> {
        &self.rows
    }

    /// Row click: open `/app/lightningnode/<pubkey>/<host>/<port>`.
    pub fn open(&self, index: usize) -> Option<Effect> {
        let peer = self.peers.get(index)?;
        Some(Effect::Navigate(lightning_node_path(&peer_target(peer))))
    }
}

impl Screen for LightningPeersScreen {
    type Completion = LightningPeersCompletion;

    const ID: ScreenId = ScreenId::LightningPeers;

    fn on_enter<A>(&self, calls: &mut Calls<'_, A, LightningPeersCompletion>)
    where
        A: AdminService + Sync + 'static,
    {
        calls.issue(|svc| async move { LightningPeersCompletion::Peers(svc.lnd_list_peers().await) });
    }

    fn on_completion(&mut self, completion: LightningPeersCompletion) -> Reaction {
        match completion {
            LightningPeersCompletion::Peers(Ok(reply)) => {
                self.rows = lightning_peer_rows(&reply.peers);
                self.peers = reply.peers;
                Reaction::loaded()
            }
            LightningPeersCompletion::Peers(Err(e)) => read_failed(Self::ID, "lnd_list_peers", &e),
        }
    }
}
