// Profiles screen: greeting, node summary, followed squeaks, signing and
// contact profiles.

use squeakdash_api::models::{
    CreateProfileReply, Empty, HelloReply, LndInfo, ProfilesReply, SqueakDisplaysReply,
    SqueakProfile,
};

use super::{Calls, Effect, Reaction, Screen, ScreenId, ViewController, read_failed, write_outcome};
use crate::error::CoreError;
use crate::nav::squeak_address_path;
use crate::projection::{
    FIELD_COLUMNS, PROFILE_COLUMNS, SQUEAK_COLUMNS, Table, node_info_rows, profile_rows,
    squeak_rows,
};
use crate::service::AdminService;

/// Name sent with the greeting round-trip.
pub const GREETING_NAME: &str = "World";

/// Greeting shown until the service answers.
pub const WAITING_MESSAGE: &str = "waiting for message...";

pub enum ProfilesCompletion {
    Greeting(Result<HelloReply, CoreError>),
    NodeInfo(Result<LndInfo, CoreError>),
    Squeaks(Result<SqueakDisplaysReply, CoreError>),
    Signing(Result<ProfilesReply, CoreError>),
    Contacts(Result<ProfilesReply, CoreError>),
    SigningCreated(Result<CreateProfileReply, CoreError>),
    ContactCreated(Result<CreateProfileReply, CoreError>),
    Following(Result<Empty, CoreError>),
    Sharing(Result<Empty, CoreError>),
    Deleted(Result<Empty, CoreError>),
}

/// Which profile table a row index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileList {
    Signing,
    Contacts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilesScreen {
    greeting: String,
    node_info: Table<2>,
    squeaks: Table<4>,
    signing: Table<4>,
    contacts: Table<4>,
    signing_ids: Vec<i64>,
    contact_ids: Vec<i64>,
}

impl Default for ProfilesScreen {
    fn default() -> Self {
        Self {
            greeting: WAITING_MESSAGE.to_owned(),
            node_info: Table::empty(FIELD_COLUMNS),
            squeaks: Table::empty(SQUEAK_COLUMNS),
            signing: Table::empty(PROFILE_COLUMNS),
            contacts: Table::empty(PROFILE_COLUMNS),
            signing_ids: Vec::new(),
            contact_ids: Vec::new(),
        }
    }
}

fn ids(profiles: &[SqueakProfile]) -> Vec<i64> {
    profiles.iter().map(|p| p.profile_id).collect()
}

impl ProfilesScreen {
    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    pub fn node_info(&self) -> &Table<2> {
        &self.node_info
    }

    pub fn squeaks(&self) -> &Table<4> {
        &self.squeaks
    }

    pub fn signing(&self) -> &Table<4> {
        &self.signing
    }

    pub fn contacts(&self) -> &Table<4> {
        &self.contacts
    }

    /// Profile id behind a row, for deletion.
    pub fn profile_id(&self, list: ProfileList, index: usize) -> Option<i64> {
        match list {
            ProfileList::Signing => self.signing_ids.get(index).copied(),
            ProfileList::Contacts => self.contact_ids.get(index).copied(),
        }
    }

    /// Row click: open the profile's address page.
    pub fn open(&self, list: ProfileList, index: usize) -> Option<Effect> {
        let table = match list {
            ProfileList::Signing => &self.signing,
            ProfileList::Contacts => &self.contacts,
        };
        let [_, address, ..] = table.row(index)?;
        Some(Effect::Navigate(squeak_address_path(Some(address.as_str()))))
    }
}

impl Screen for ProfilesScreen {
    type Completion = ProfilesCompletion;

    const ID: ScreenId = ScreenId::Profiles;

    fn on_enter<A>(&self, calls: &mut Calls<'_, A, ProfilesCompletion>)
    where
        A: AdminService + Sync + 'static,
    {
        calls.issue(|svc| async move {
            ProfilesCompletion::Greeting(svc.say_hello(GREETING_NAME).await)
        });
        calls.issue(|svc| async move { ProfilesCompletion::NodeInfo(svc.lnd_get_info().await) });
        calls.issue(|svc| async move {
            ProfilesCompletion::Squeaks(svc.get_followed_squeak_displays().await)
        });
        calls.issue(|svc| async move {
            ProfilesCompletion::Signing(svc.get_signing_profiles().await)
        });
        calls.issue(|svc| async move {
            ProfilesCompletion::Contacts(svc.get_contact_profiles().await)
        });
    }

    fn on_completion(&mut self, completion: ProfilesCompletion) -> Reaction {
        match completion {
            ProfilesCompletion::Greeting(Ok(reply)) => {
                self.greeting = reply.message;
                Reaction::loaded()
            }
            ProfilesCompletion::NodeInfo(Ok(info)) => {
                self.node_info = node_info_rows(&info);
                Reaction::loaded()
            }
            ProfilesCompletion::Squeaks(Ok(reply)) => {
                self.squeaks = squeak_rows(&reply.squeak_display_entries);
                Reaction::loaded()
            }
            ProfilesCompletion::Signing(Ok(reply)) => {
                self.signing = profile_rows(&reply.squeak_profiles);
                self.signing_ids = ids(&reply.squeak_profiles);
                Reaction::loaded()
            }
            ProfilesCompletion::Contacts(Ok(reply)) => {
                self.contacts = profile_rows(&reply.squeak_profiles);
                self.contact_ids = ids(&reply.squeak_profiles);
                Reaction::loaded()
            }
            ProfilesCompletion::Greeting(Err(e)) => read_failed(Self::ID, "say_hello", &e),
            ProfilesCompletion::NodeInfo(Err(e)) => read_failed(Self::ID, "lnd_get_info", &e),
            ProfilesCompletion::Squeaks(Err(e)) => {
                read_failed(Self::ID, "get_followed_squeak_displays", &e)
            }
            ProfilesCompletion::Signing(Err(e)) => {
                read_failed(Self::ID, "get_signing_profiles", &e)
            }
            ProfilesCompletion::Contacts(Err(e)) => {
                read_failed(Self::ID, "get_contact_profiles", &e)
            }
            ProfilesCompletion::SigningCreated(result) => {
                write_outcome("creating signing profile", result)
            }
            ProfilesCompletion::ContactCreated(result) => {
                write_outcome("creating contact profile", result)
            }
            ProfilesCompletion::Following(result) => {
                write_outcome("updating profile following", result)
            }
            ProfilesCompletion::Sharing(result) => {
                write_outcome("updating profile sharing", result)
            }
            ProfilesCompletion::Deleted(result) => write_outcome("deleting profile", result),
        }
    }
}

impl<A> ViewController<ProfilesScreen, A>
where
    A: AdminService + Sync + 'static,
{
    pub fn create_signing_profile(&mut self, profile_name: String) {
        self.perform(|_, calls| {
            calls.issue(move |svc| async move {
                ProfilesCompletion::SigningCreated(svc.create_signing_profile(&profile_name).await)
            });
        });
    }

    pub fn create_contact_profile(&mut self, profile_name: String, address: String) {
        self.perform(|_, calls| {
            calls.issue(move |svc| async move {
                ProfilesCompletion::ContactCreated(
                    svc.create_contact_profile(&profile_name, &address).await,
                )
            });
        });
    }

    pub fn set_following(&mut self, profile_id: i64, following: bool) {
        self.perform(|_, calls| {
            calls.issue(move |svc| async move {
                ProfilesCompletion::Following(
                    svc.set_squeak_profile_following(profile_id, following).await,
                )
            });
        });
    }

    pub fn set_sharing(&mut self, profile_id: i64, sharing: bool) {
        self.perform(|_, calls| {
            calls.issue(move |svc| async move {
                ProfilesCompletion::Sharing(svc.set_squeak_profile_sharing(profile_id, sharing).await)
            });
        });
    }

    pub fn delete_profile(&mut self, profile_id: i64) {
        self.perform(|_, calls| {
            calls.issue(move |svc| async move {
                ProfilesCompletion::Deleted(svc.delete_squeak_profile(profile_id).await)
            });
        });
    }
}
