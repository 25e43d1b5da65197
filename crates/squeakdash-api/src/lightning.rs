// Lightning node endpoints
//
// Read-only views of the node paired with the squeaknode instance.

use tracing::debug;

use crate::client::AdminRpcClient;
use crate::error::Error;
use crate::models::{Empty, ListPeersReply, LndInfo, WalletBalance};

impl AdminRpcClient {
    /// Identity and sync status of the paired Lightning node.
    ///
    /// `LndGetInfo`
    pub async fn lnd_get_info(&self) -> Result<LndInfo, Error> {
        debug!("fetching lightning node info");
        self.call("LndGetInfo", &Empty {}).await
    }

    /// On-chain wallet balance of the paired Lightning node.
    ///
    /// `LndWalletBalance`
    pub async fn lnd_wallet_balance(&self) -> Result<WalletBalance, Error> {
        debug!("fetching wallet balance");
        self.call("LndWalletBalance", &Empty {}).await
    }

    /// Peers currently connected to the Lightning node.
    ///
    /// `LndListPeers`
    pub async fn lnd_list_peers(&self) -> Result<ListPeersReply, Error> {
        debug!("listing lightning peers");
        self.call("LndListPeers", &Empty {}).await
    }
}
