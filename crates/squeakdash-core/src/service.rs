// ── Admin client facade ──
//
// The single point of contact with the admin service. One method per admin
// operation; every method resolves to exactly one `Result`, so a caller can
// never read a response alongside an error. The facade has no side effects
// beyond the request itself: logging of outcomes, alerts and navigation
// belong to the view controllers.

use squeakdash_api::models::{
    CreatePeerReply, CreateProfileReply, Empty, GetPeersReply, HelloReply, ListPeersReply,
    LndInfo, ProfilesReply, SqueakDisplaysReply, WalletBalance,
};
use squeakdash_api::{AdminRpcClient, TransportConfig};
use tracing::debug;

use crate::config::AdminConfig;
use crate::error::CoreError;

/// Admin operations, one call each.
///
/// Calls are independent and unordered relative to each other: no
/// sequencing, retry or cancellation is imposed here.
#[trait_variant::make(AdminService: Send)]
pub trait LocalAdminService {
    /// Greeting round-trip (health check).
    async fn say_hello(&self, name: &str) -> Result<HelloReply, CoreError>;

    /// Paired Lightning node identity and sync status.
    async fn lnd_get_info(&self) -> Result<LndInfo, CoreError>;

    async fn lnd_wallet_balance(&self) -> Result<WalletBalance, CoreError>;

    async fn lnd_list_peers(&self) -> Result<ListPeersReply, CoreError>;

    /// Squeaks from followed profiles, in display order.
    async fn get_followed_squeak_displays(&self) -> Result<SqueakDisplaysReply, CoreError>;

    async fn get_signing_profiles(&self) -> Result<ProfilesReply, CoreError>;

    async fn get_contact_profiles(&self) -> Result<ProfilesReply, CoreError>;

    /// New profile that signs with a key generated by the node.
    async fn create_signing_profile(
        &self,
        profile_name: &str,
    ) -> Result<CreateProfileReply, CoreError>;

    async fn create_contact_profile(
        &self,
        profile_name: &str,
        address: &str,
    ) -> Result<CreateProfileReply, CoreError>;

    async fn set_squeak_profile_following(
        &self,
        profile_id: i64,
        following: bool,
    ) -> Result<Empty, CoreError>;

    async fn set_squeak_profile_sharing(
        &self,
        profile_id: i64,
        sharing: bool,
    ) -> Result<Empty, CoreError>;

    async fn delete_squeak_profile(&self, profile_id: i64) -> Result<Empty, CoreError>;

    async fn get_peers(&self) -> Result<GetPeersReply, CoreError>;

    /// `port` of `None` leaves the choice to the node.
    async fn create_peer(
        &self,
        peer_name: &str,
        host: &str,
        port: Option<u16>,
    ) -> Result<CreatePeerReply, CoreError>;

    async fn delete_peer(&self, peer_id: i64) -> Result<Empty, CoreError>;

    async fn set_peer_uploading(&self, peer_id: i64, uploading: bool) -> Result<Empty, CoreError>;

    async fn set_peer_downloading(
        &self,
        peer_id: i64,
        downloading: bool,
    ) -> Result<Empty, CoreError>;

    async fn sync_squeaks(&self) -> Result<Empty, CoreError>;
}

/// HTTP-backed [`AdminService`].
///
/// Constructed once by the composition root and shared read-only (behind an
/// `Arc`) by every view controller. The target endpoint is fixed for the
/// lifetime of the handle.
#[derive(Debug, Clone)]
pub struct AdminClient {
    rpc: AdminRpcClient,
}

impl AdminClient {
    pub fn new(config: &AdminConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig::default().with_timeout(config.timeout);
        let rpc = AdminRpcClient::new(config.url.clone(), &transport)?;
        debug!(url = %config.url, "admin client ready");
        Ok(Self { rpc })
    }

    /// Wrap an already-built RPC client.
    pub fn from_rpc(rpc: AdminRpcClient) -> Self {
        Self { rpc }
    }

    /// The endpoint this handle talks to.
    pub fn endpoint(&self) -> &url::Url {
        self.rpc.base_url()
    }
}

impl AdminService for AdminClient {
    async fn say_hello(&self, name: &str) -> Result<HelloReply, CoreError> {
        Ok(self.rpc.say_hello(name).await?)
    }

    async fn lnd_get_info(&self) -> Result<LndInfo, CoreError> {
        Ok(self.rpc.lnd_get_info().await?)
    }

    async fn lnd_wallet_balance(&self) -> Result<WalletBalance, CoreError> {
        Ok(self.rpc.lnd_wallet_balance().await?)
    }

    async fn lnd_list_peers(&self) -> Result<ListPeersReply, CoreError> {
        Ok(self.rpc.lnd_list_peers().await?)
    }

    async fn get_followed_squeak_displays(&self) -> Result<SqueakDisplaysReply, CoreError> {
        Ok(self.rpc.get_followed_squeak_displays().await?)
    }

    async fn get_signing_profiles(&self) -> Result<ProfilesReply, CoreError> {
        Ok(self.rpc.get_signing_profiles().await?)
    }

    async fn get_contact_profiles(&self) -> Result<ProfilesReply, CoreError> {
        Ok(self.rpc.get_contact_profiles().await?)
    }

    async fn create_signing_profile(
        &self,
        profile_name: &str,
    ) -> Result<CreateProfileReply, CoreError> {
        Ok(self.rpc.create_signing_profile(profile_name).await?)
    }

    async fn create_contact_profile(
        &self,
        profile_name: &str,
        address: &str,
    ) -> Result<CreateProfileReply, CoreError> {
        Ok(self.rpc.create_contact_profile(profile_name, address).await?)
    }

    async fn set_squeak_profile_following(
        &self,
        profile_id: i64,
        following: bool,
    ) -> Result<Empty, CoreError> {
        Ok(self
            .rpc
            .set_squeak_profile_following(profile_id, following)
            .await?)
    }

    async fn set_squeak_profile_sharing(
        &self,
        profile_id: i64,
        sharing: bool,
    ) -> Result<Empty, CoreError> {
        Ok(self.rpc.set_squeak_profile_sharing(profile_id, sharing).await?)
    }

    async fn delete_squeak_profile(&self, profile_id: i64) -> Result<Empty, CoreError> {
        Ok(self.rpc.delete_squeak_profile(profile_id).await?)
    }

    async fn get_peers(&self) -> Result<GetPeersReply, CoreError> {
        Ok(self.rpc.get_peers().await?)
    }

    async fn create_peer(
        &self,
        peer_name: &str,
        host: &str,
        port: Option<u16>,
    ) -> Result<CreatePeerReply, CoreError> {
        Ok(self.rpc.create_peer(peer_name, host, port).await?)
    }

    async fn delete_peer(&self, peer_id: i64) -> Result<Empty, CoreError> {
        Ok(self.rpc.delete_peer(peer_id).await?)
    }

    async fn set_peer_uploading(&self, peer_id: i64, uploading: bool) -> Result<Empty, CoreError> {
        Ok(self.rpc.set_peer_uploading(peer_id, uploading).await?)
    }

    async fn set_peer_downloading(
        &self,
        peer_id: i64,
        downloading: bool,
    ) -> Result<Empty, CoreError> {
        Ok(self.rpc.set_peer_downloading(peer_id, downloading).await?)
    }

    async fn sync_squeaks(&self) -> Result<Empty, CoreError> {
        Ok(self.rpc.sync_squeaks().await?)
    }
}
