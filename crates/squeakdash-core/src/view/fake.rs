// In-memory admin service for controller tests

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::Mutex;

use squeakdash_api::models::{
    CreatePeerReply, CreateProfileReply, Empty, GetPeersReply, HelloReply, LightningPeer,
    ListPeersReply, LndInfo, ProfilesReply, SqueakDisplayEntry, SqueakDisplaysReply, SqueakPeer,
    SqueakProfile, WalletBalance,
};

use crate::error::CoreError;
use crate::service::AdminService;

#[derive(Debug, Default, Clone)]
pub(crate) struct FakeData {
    pub info: LndInfo,
    pub balance: WalletBalance,
    pub lightning_peers: Vec<LightningPeer>,
    pub squeaks: Vec<SqueakDisplayEntry>,
    pub signing: Vec<SqueakProfile>,
    pub contacts: Vec<SqueakProfile>,
    pub peers: Vec<SqueakPeer>,
}

/// Records every call by operation name and answers from `FakeData`, or
/// with a `Rejected` error for operations marked as failing.
#[derive(Debug, Default)]
pub(crate) struct FakeAdmin {
    data: Mutex<FakeData>,
    failures: Mutex<HashMap<&'static str, String>>,
    calls: Mutex<Vec<String>>,
}

impl FakeAdmin {
    pub fn with_data(data: FakeData) -> Self {
        Self {
            data: Mutex::new(data),
            ..Self::default()
        }
    }

    pub fn update(&self, f: impl FnOnce(&mut FakeData)) {
        f(&mut self.data.lock().unwrap());
    }

    pub fn fail(&self, operation: &'static str, message: &str) {
        self.failures
            .lock()
            .unwrap()
            .insert(operation, message.to_owned());
    }

    pub fn heal(&self, operation: &'static str) {
        self.failures.lock().unwrap().remove(operation);
    }

    pub fn count(&self, operation: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.split(' ').next() == Some(operation))
            .count()
    }

    /// Calls in the order they ran, e.g. `"delete_peer 7"`.
    pub fn log(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, operation: &'static str, args: &str) -> Result<FakeData, CoreError> {
        let entry = if args.is_empty() {
            operation.to_owned()
        } else {
            format!("{operation} {args}")
        };
        self.calls.lock().unwrap().push(entry);
        if let Some(message) = self.failures.lock().unwrap().get(operation) {
            return Err(CoreError::Rejected {
                message: message.clone(),
                code: None,
                status: Some(500),
            });
        }
        Ok(self.data.lock().unwrap().clone())
    }

    fn next_profile_id(data: &FakeData) -> i64 {
        data.signing
            .iter()
            .chain(&data.contacts)
            .map(|p| p.profile_id)
            .max()
            .unwrap_or(0)
            + 1
    }

    fn reject(message: &str) -> CoreError {
        CoreError::Rejected {
            message: message.to_owned(),
            code: None,
            status: Some(500),
        }
    }

    fn set_profile_flag(&self, profile_id: i64, apply: impl Fn(&mut SqueakProfile)) {
        self.update(|d| {
            d.signing
                .iter_mut()
                .chain(d.contacts.iter_mut())
                .filter(|p| p.profile_id == profile_id)
                .for_each(&apply);
        });
    }
}

impl AdminService for FakeAdmin {
    async fn say_hello(&self, name: &str) -> Result<HelloReply, CoreError> {
        self.record("say_hello", name)?;
        Ok(HelloReply {
            message: format!("Hello, {name}!"),
        })
    }

    async fn lnd_get_info(&self) -> Result<LndInfo, CoreError> {
        Ok(self.record("lnd_get_info", "")?.info)
    }

    async fn lnd_wallet_balance(&self) -> Result<WalletBalance, CoreError> {
        Ok(self.record("lnd_wallet_balance", "")?.balance)
    }

    async fn lnd_list_peers(&self) -> Result<ListPeersReply, CoreError> {
        Ok(ListPeersReply {
            peers: self.record("lnd_list_peers", "")?.lightning_peers,
        })
    }

    async fn get_followed_squeak_displays(&self) -> Result<SqueakDisplaysReply, CoreError> {
        Ok(SqueakDisplaysReply {
            squeak_display_entries: self.record("get_followed_squeak_displays", "")?.squeaks,
        })
    }

    async fn get_signing_profiles(&self) -> Result<ProfilesReply, CoreError> {
        Ok(ProfilesReply {
            squeak_profiles: self.record("get_signing_profiles", "")?.signing,
        })
    }

    async fn get_contact_profiles(&self) -> Result<ProfilesReply, CoreError> {
        Ok(ProfilesReply {
            squeak_profiles: self.record("get_contact_profiles", "")?.contacts,
        })
    }

    async fn create_signing_profile(
        &self,
        profile_name: &str,
    ) -> Result<CreateProfileReply, CoreError> {
        let data = self.record("create_signing_profile", profile_name)?;
        if profile_name.is_empty() {
            return Err(Self::reject("Profile name cannot be empty."));
        }
        let profile_id = Self::next_profile_id(&data);
        self.update(|d| {
            d.signing.push(SqueakProfile {
                profile_id,
                profile_name: Some(profile_name.to_owned()),
                has_private_key: true,
                address: Some(format!("addr-{profile_id}")),
                sharing: true,
                following: true,
                whitelisted: false,
            });
        });
        Ok(CreateProfileReply { profile_id })
    }

    async fn create_contact_profile(
        &self,
        profile_name: &str,
        address: &str,
    ) -> Result<CreateProfileReply, CoreError> {
        let data = self.record("create_contact_profile", &format!("{profile_name} {address}"))?;
        if profile_name.is_empty() {
            return Err(Self::reject("Profile name cannot be empty."));
        }
        let profile_id = Self::next_profile_id(&data);
        self.update(|d| {
            d.contacts.push(SqueakProfile {
                profile_id,
                profile_name: Some(profile_name.to_owned()),
                has_private_key: false,
                address: Some(address.to_owned()),
                sharing: false,
                following: true,
                whitelisted: false,
            });
        });
        Ok(CreateProfileReply { profile_id })
    }

    async fn set_squeak_profile_following(
        &self,
        profile_id: i64,
        following: bool,
    ) -> Result<Empty, CoreError> {
        self.record(
            "set_squeak_profile_following",
            &format!("{profile_id} {following}"),
        )?;
        self.set_profile_flag(profile_id, |p| p.following = following);
        Ok(Empty {})
    }

    async fn set_squeak_profile_sharing(
        &self,
        profile_id: i64,
        sharing: bool,
    ) -> Result<Empty, CoreError> {
        self.record(
            "set_squeak_profile_sharing",
            &format!("{profile_id} {sharing}"),
        )?;
        self.set_profile_flag(profile_id, |p| p.sharing = sharing);
        Ok(Empty {})
    }

    async fn delete_squeak_profile(&self, profile_id: i64) -> Result<Empty, CoreError> {
        self.record("delete_squeak_profile", &profile_id.to_string())?;
        self.update(|d| {
            d.signing.retain(|p| p.profile_id != profile_id);
            d.contacts.retain(|p| p.profile_id != profile_id);
        });
        Ok(Empty {})
    }

    async fn get_peers(&self) -> Result<GetPeersReply, CoreError> {
        Ok(GetPeersReply {
            squeak_peers: self.record("get_peers", "")?.peers,
        })
    }

    async fn create_peer(
        &self,
        peer_name: &str,
        host: &str,
        port: Option<u16>,
    ) -> Result<CreatePeerReply, CoreError> {
        let port = port.unwrap_or(8555);
        let data = self.record("create_peer", &format!("{peer_name} {host}:{port}"))?;
        if peer_name.is_empty() {
            return Err(Self::reject("Peer name cannot be empty."));
        }
        let peer_id = data.peers.iter().map(|p| p.peer_id).max().unwrap_or(0) + 1;
        self.update(|d| {
            d.peers.push(SqueakPeer {
                peer_id,
                peer_name: Some(peer_name.to_owned()),
                host: Some(host.to_owned()),
                port: Some(port),
                uploading: false,
                downloading: false,
            });
        });
        Ok(CreatePeerReply { peer_id })
    }

    async fn delete_peer(&self, peer_id: i64) -> Result<Empty, CoreError> {
        self.record("delete_peer", &peer_id.to_string())?;
        self.update(|d| d.peers.retain(|p| p.peer_id != peer_id));
        Ok(Empty {})
    }

    async fn set_peer_uploading(&self, peer_id: i64, uploading: bool) -> Result<Empty, CoreError> {
        self.record("set_peer_uploading", &format!("{peer_id} {uploading}"))?;
        self.update(|d| {
            for p in d.peers.iter_mut().filter(|p| p.peer_id == peer_id) {
                p.uploading = uploading;
            }
        });
        Ok(Empty {})
    }

    async fn set_peer_downloading(
        &self,
        peer_id: i64,
        downloading: bool,
    ) -> Result<Empty, CoreError> {
        self.record("set_peer_downloading", &format!("{peer_id} {downloading}"))?;
        self.update(|d| {
            for p in d.peers.iter_mut().filter(|p| p.peer_id == peer_id) {
                p.downloading = downloading;
            }
        });
        Ok(Empty {})
    }

    async fn sync_squeaks(&self) -> Result<Empty, CoreError> {
        self.record("sync_squeaks", "")?;
        Ok(Empty {})
    }
}
