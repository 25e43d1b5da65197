// Squeak timeline endpoints

use tracing::debug;

use crate::client::AdminRpcClient;
use crate::error::Error;
use crate::models::{Empty, SqueakDisplaysReply};

impl AdminRpcClient {
    /// Squeaks authored by followed profiles, newest first.
    ///
    /// `GetFollowedSqueakDisplays`
    pub async fn get_followed_squeak_displays(&self) -> Result<SqueakDisplaysReply, Error> {
        debug!("listing followed squeak displays");
        self.call("GetFollowedSqueakDisplays", &Empty {}).await
    }

    /// Ask the node to sync squeaks with its peers now.
    ///
    /// `SyncSqueaks`
    pub async fn sync_squeaks(&self) -> Result<Empty, Error> {
        debug!("requesting squeak sync");
        self.call("SyncSqueaks", &Empty {}).await
    }
}
