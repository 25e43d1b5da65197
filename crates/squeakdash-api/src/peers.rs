// Squeak peer endpoints

use tracing::debug;

use crate::client::AdminRpcClient;
use crate::error::Error;
use crate::models::{
    CreatePeerReply, CreatePeerRequest, DeletePeerRequest, Empty, GetPeersReply,
    SetPeerDownloadingRequest, SetPeerUploadingRequest,
};

impl AdminRpcClient {
    /// All configured squeak peers.
    ///
    /// `GetPeers`
    pub async fn get_peers(&self) -> Result<GetPeersReply, Error> {
        debug!("listing squeak peers");
        self.call("GetPeers", &Empty {}).await
    }

    /// Register a squeak peer. Without a port the node uses its default
    /// peer port.
    ///
    /// `CreatePeer`
    pub async fn create_peer(
        &self,
        peer_name: &str,
        host: &str,
        port: Option<u16>,
    ) -> Result<CreatePeerReply, Error> {
        debug!(peer_name, host, ?port, "creating peer");
        self.call(
            "CreatePeer",
            &CreatePeerRequest {
                peer_name: peer_name.to_owned(),
                host: host.to_owned(),
                port,
            },
        )
        .await
    }

    /// `DeletePeer`
    pub async fn delete_peer(&self, peer_id: i64) -> Result<Empty, Error> {
        debug!(peer_id, "deleting peer");
        self.call("DeletePeer", &DeletePeerRequest { peer_id }).await
    }

    /// `SetPeerUploading`
    pub async fn set_peer_uploading(&self, peer_id: i64, uploading: bool) -> Result<Empty, Error> {
        debug!(peer_id, uploading, "setting peer uploading");
        self.call(
            "SetPeerUploading",
            &SetPeerUploadingRequest { peer_id, uploading },
        )
        .await
    }

    /// `SetPeerDownloading`
    pub async fn set_peer_downloading(
        &self,
        peer_id: i64,
        downloading: bool,
    ) -> Result<Empty, Error> {
        debug!(peer_id, downloading, "setting peer downloading");
        self.call(
            "SetPeerDownloading",
            &SetPeerDownloadingRequest {
                peer_id,
                downloading,
            },
        )
        .await
    }
}
