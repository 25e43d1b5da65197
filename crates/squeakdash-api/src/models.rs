// Admin RPC message types
//
// Request and reply bodies for the squeaknode admin service, in the service's
// JSON mapping (camelCase keys, 64-bit integers may arrive as strings).
// Fields use `#[serde(default)]` liberally: the service omits fields that
// hold their zero value, and optional sub-fields may be absent outright.

use serde::{Deserialize, Serialize};

// ── int64 handling ───────────────────────────────────────────────────

/// Accept a 64-bit integer encoded either as a JSON number or a string.
mod int64 {
    use serde::{Deserialize, Deserializer, de::Error};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Str(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<i64, D::Error> {
        match Raw::deserialize(de)? {
            Raw::Num(n) => Ok(n),
            Raw::Str(s) => s.parse().map_err(D::Error::custom),
        }
    }
}

// ── Empty messages ───────────────────────────────────────────────────

/// Request or reply carrying no fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

// ── Greeting ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelloRequest {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloReply {
    #[serde(default)]
    pub message: String,
}

// ── Lightning node ───────────────────────────────────────────────────

/// Reply from `LndGetInfo`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LndInfo {
    #[serde(default)]
    pub identity_pubkey: String,
    #[serde(default)]
    pub alias: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub num_active_channels: u32,
    #[serde(default)]
    pub num_pending_channels: u32,
    #[serde(default)]
    pub num_peers: u32,
    #[serde(default)]
    pub block_height: u32,
    #[serde(default)]
    pub synced_to_chain: bool,
    #[serde(default)]
    pub uris: Vec<String>,
}

/// Reply from `LndWalletBalance`. Amounts are in satoshis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalance {
    #[serde(default, deserialize_with = "int64::deserialize")]
    pub total_balance: i64,
    #[serde(default, deserialize_with = "int64::deserialize")]
    pub confirmed_balance: i64,
    #[serde(default, deserialize_with = "int64::deserialize")]
    pub unconfirmed_balance: i64,
}

/// A peer of the paired Lightning node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightningPeer {
    #[serde(default)]
    pub pub_key: String,
    /// `host:port` as reported by the node; absent for some inbound peers.
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "int64::deserialize")]
    pub bytes_sent: i64,
    #[serde(default, deserialize_with = "int64::deserialize")]
    pub bytes_recv: i64,
    #[serde(default)]
    pub inbound: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPeersReply {
    #[serde(default)]
    pub peers: Vec<LightningPeer>,
}

// ── Squeak profiles ──────────────────────────────────────────────────

/// A signing or contact profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqueakProfile {
    #[serde(default, deserialize_with = "int64::deserialize")]
    pub profile_id: i64,
    #[serde(default)]
    pub profile_name: Option<String>,
    #[serde(default)]
    pub has_private_key: bool,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub sharing: bool,
    #[serde(default)]
    pub following: bool,
    #[serde(default)]
    pub whitelisted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilesReply {
    #[serde(default)]
    pub squeak_profiles: Vec<SqueakProfile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSqueakProfileRequest {
    pub profile_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSigningProfileRequest {
    pub profile_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactProfileRequest {
    pub profile_name: String,
    /// Squeak address of the contact; the node validates it.
    pub address: String,
}

/// Reply to both profile-creating calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileReply {
    #[serde(default, deserialize_with = "int64::deserialize")]
    pub profile_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSqueakProfileFollowingRequest {
    pub profile_id: i64,
    pub following: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSqueakProfileSharingRequest {
    pub profile_id: i64,
    pub sharing: bool,
}

// ── Squeak displays ──────────────────────────────────────────────────

/// A squeak as rendered in timelines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqueakDisplayEntry {
    #[serde(default)]
    pub squeak_hash: String,
    #[serde(default)]
    pub is_unlocked: bool,
    /// Decrypted content; only present when `is_unlocked`.
    #[serde(default)]
    pub content_str: Option<String>,
    #[serde(default)]
    pub block_height: u32,
    #[serde(default)]
    pub block_time: u32,
    #[serde(default)]
    pub is_author_known: bool,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_address: Option<String>,
    #[serde(default)]
    pub is_reply: bool,
    #[serde(default)]
    pub reply_to: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqueakDisplaysReply {
    #[serde(default)]
    pub squeak_display_entries: Vec<SqueakDisplayEntry>,
}

// ── Squeak peers ─────────────────────────────────────────────────────

/// A squeak network peer the node syncs with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqueakPeer {
    #[serde(default, deserialize_with = "int64::deserialize")]
    pub peer_id: i64,
    #[serde(default)]
    pub peer_name: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub uploading: bool,
    #[serde(default)]
    pub downloading: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPeersReply {
    #[serde(default)]
    pub squeak_peers: Vec<SqueakPeer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePeerRequest {
    pub peer_name: String,
    pub host: String,
    /// Omitted to let the node pick its default peer port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePeerReply {
    #[serde(default, deserialize_with = "int64::deserialize")]
    pub peer_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePeerRequest {
    pub peer_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPeerUploadingRequest {
    pub peer_id: i64,
    pub uploading: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPeerDownloadingRequest {
    pub peer_id: i64,
    pub downloading: bool,
}

// ── Error body ───────────────────────────────────────────────────────

/// Error body returned alongside a non-success status.
///
/// ```json
/// { "code": 5, "message": "Peer not found." }
/// ```
#[derive(Debug, Deserialize)]
pub(crate) struct RpcStatus {
    #[serde(default)]
    pub code: Option<i32>,
    #[serde(default)]
    pub message: Option<String>,
}
