//! Route guard decisions.
//!
//! Pure functions of the current token. They never contact the server, so a
//! stale token still passes the guard. The UI performs the redirect (replacing
//! the history entry) when the answer is [`Access::Redirect`].

/// Where a redirected navigation should land.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Login,
    Notes,
}

/// Outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(Target),
}

/// Views that need a session: redirect to login when no token is present.
pub fn protected(token: Option<&str>) -> Access {
    match token {
        Some(t) if !t.is_empty() => Access::Allow,
        _ => Access::Redirect(Target::Login),
    }
}

/// Login and signup: an authenticated visitor goes straight to the notes.
pub fn public(token: Option<&str>) -> Access {
    match token {
        Some(t) if !t.is_empty() => Access::Redirect(Target::Notes),
        _ => Access::Allow,
    }
}
