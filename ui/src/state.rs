use payloads::{UserId, responses::UserProfile};
use yewdux::prelude::*;

/// Who the current user is, as far as this browser session knows.
///
/// Fields are only written through [`Session::login`],
/// [`Session::set_auth_url`] and [`Session::logout`]. A present profile
/// means the user is authenticated.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct Session {
    profile: Option<UserProfile>,
    /// External sign-in URL offered by the backend while signed out
    auth_url: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.profile.is_some()
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn id(&self) -> Option<&UserId> {
        self.profile.as_ref().map(|p| &p.id)
    }

    pub fn name(&self) -> Option<&str> {
        self.profile.as_ref()?.name.as_deref()
    }

    pub fn picture(&self) -> Option<&str> {
        self.profile.as_ref()?.picture.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.profile.as_ref()?.email.as_deref()
    }

    pub fn auth_url(&self) -> Option<&str> {
        self.auth_url.as_deref()
    }

    pub fn login(&mut self, profile: UserProfile) {
        self.profile = Some(profile);
        self.auth_url = None;
    }

    pub fn set_auth_url(&mut self, url: String) {
        self.auth_url = Some(url);
    }

    pub fn logout(&mut self) {
        self.profile = None;
    }
}
