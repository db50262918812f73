use dioxus::prelude::*;

use crate::{client::model::error::ApiError, model::admin::AdminUserDto};

/// Shared authentication state provided at the app root.
#[derive(Clone, Copy)]
pub struct AuthContext {
    inner: Signal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(AuthState::Initializing),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = AuthState> + '_ {
        self.inner.read()
    }

    pub fn set(&mut self, state: AuthState) {
        *self.inner.write() = state;
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub enum AuthState {
    /// Initial state - haven't checked authentication yet
    Initializing,
    /// Admin is authenticated
    Authenticated(AdminUserDto),
    /// No active session
    NotLoggedIn,
    /// Failed to check authentication
    Error(ApiError),
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    /// Get the authenticated admin, if any
    pub fn admin(&self) -> Option<&AdminUserDto> {
        match self {
            AuthState::Authenticated(admin) => Some(admin),
            _ => None,
        }
    }
}

impl From<Option<AdminUserDto>> for AuthState {
    fn from(opt: Option<AdminUserDto>) -> Self {
        match opt {
            Some(admin) => AuthState::Authenticated(admin),
            None => AuthState::NotLoggedIn,
        }
    }
}
