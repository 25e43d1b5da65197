// Squeak profile endpoints

use tracing::debug;

use crate::client::AdminRpcClient;
use crate::error::Error;
use crate::models::{
    CreateContactProfileRequest, CreateProfileReply, CreateSigningProfileRequest,
    DeleteSqueakProfileRequest, Empty, HelloReply, HelloRequest, ProfilesReply,
    SetSqueakProfileFollowingRequest, SetSqueakProfileSharingRequest,
};

impl AdminRpcClient {
    /// Greeting round-trip, used as a health check.
    ///
    /// `SayHello`
    pub async fn say_hello(&self, name: &str) -> Result<HelloReply, Error> {
        debug!(name, "saying hello");
        self.call(
            "SayHello",
            &HelloRequest {
                name: name.to_owned(),
            },
        )
        .await
    }

    /// Profiles holding a private key (the node can sign as them).
    ///
    /// `GetSigningProfiles`
    pub async fn get_signing_profiles(&self) -> Result<ProfilesReply, Error> {
        debug!("listing signing profiles");
        self.call("GetSigningProfiles", &Empty {}).await
    }

    /// Profiles without a private key.
    ///
    /// `GetContactProfiles`
    pub async fn get_contact_profiles(&self) -> Result<ProfilesReply, Error> {
        debug!("listing contact profiles");
        self.call("GetContactProfiles", &Empty {}).await
    }

    /// New profile with a freshly generated signing key.
    ///
    /// `CreateSigningProfile`
    pub async fn create_signing_profile(
        &self,
        profile_name: &str,
    ) -> Result<CreateProfileReply, Error> {
        debug!(profile_name, "creating signing profile");
        self.call(
            "CreateSigningProfile",
            &CreateSigningProfileRequest {
                profile_name: profile_name.to_owned(),
            },
        )
        .await
    }

    /// `CreateContactProfile`
    pub async fn create_contact_profile(
        &self,
        profile_name: &str,
        address: &str,
    ) -> Result<CreateProfileReply, Error> {
        debug!(profile_name, address, "creating contact profile");
        self.call(
            "CreateContactProfile",
            &CreateContactProfileRequest {
                profile_name: profile_name.to_owned(),
                address: address.to_owned(),
            },
        )
        .await
    }

    /// `SetSqueakProfileFollowing`
    pub async fn set_squeak_profile_following(
        &self,
        profile_id: i64,
        following: bool,
    ) -> Result<Empty, Error> {
        debug!(profile_id, following, "setting profile following");
        self.call(
            "SetSqueakProfileFollowing",
            &SetSqueakProfileFollowingRequest {
                profile_id,
                following,
            },
        )
        .await
    }

    /// `SetSqueakProfileSharing`
    pub async fn set_squeak_profile_sharing(
        &self,
        profile_id: i64,
        sharing: bool,
    ) -> Result<Empty, Error> {
        debug!(profile_id, sharing, "setting profile sharing");
        self.call(
            "SetSqueakProfileSharing",
            &SetSqueakProfileSharingRequest {
                profile_id,
                sharing,
            },
        )
        .await
    }

    /// `DeleteSqueakProfile`
    pub async fn delete_squeak_profile(&self, profile_id: i64) -> Result<Empty, Error> {
        debug!(profile_id, "deleting squeak profile");
        self.call("DeleteSqueakProfile", &DeleteSqueakProfileRequest { profile_id })
            .await
    }
}
