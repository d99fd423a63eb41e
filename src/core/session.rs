//! Login gate.
//!
//! The session is a single `isLoggedIn` slot. Commands read it once into an
//! [`AuthContext`] and pass that to [`require_login`], which has no access to
//! storage of its own.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::storage::{SESSION_KEY, SlotStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    pub logged_in: bool,
    /// When false the guard admits everyone (config `require_login: false`).
    pub enforced: bool,
}

impl AuthContext {
    /// Read the session flag. An unreadable slot counts as logged out.
    pub fn from_slots<S: SlotStore>(slots: &S, cfg: &Config) -> Self {
        let logged_in = matches!(slots.read(SESSION_KEY), Ok(Some(v)) if v == "true");
        Self {
            logged_in,
            enforced: cfg.require_login,
        }
    }
}

/// Route guard for the dashboard commands.
pub fn require_login(ctx: &AuthContext) -> AppResult<()> {
    if !ctx.enforced || ctx.logged_in {
        Ok(())
    } else {
        Err(AppError::NotLoggedIn)
    }
}

/// Check the credentials against the configuration and set the flag.
pub fn login<S: SlotStore>(
    slots: &mut S,
    cfg: &Config,
    username: &str,
    password: &str,
) -> AppResult<()> {
    if username.trim().is_empty()
        || username.trim() != cfg.login_username
        || password != cfg.login_password
    {
        return Err(AppError::InvalidCredentials);
    }

    slots.write(SESSION_KEY, "true")?;
    Ok(())
}

pub fn logout<S: SlotStore>(slots: &mut S) -> AppResult<()> {
    slots.remove(SESSION_KEY)?;
    Ok(())
}
