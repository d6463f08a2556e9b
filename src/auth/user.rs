use nix::unistd::{Uid, User};

/// Name of the user whose session is locked.
///
/// `$USER` wins when set; otherwise the passwd entry for the real uid,
/// and as a last resort the numeric uid.
pub fn current_username() -> String {
    if let Some(user) = std::env::var("USER").ok().filter(|u| !u.is_empty()) {
        return user;
    }

    let uid = Uid::current();
    match User::from_uid(uid) {
        Ok(Some(user)) => user.name,
        Ok(None) => uid.to_string(),
        Err(err) => {
            tracing::warn!(%uid, "passwd lookup failed: {}", err);
            uid.to_string()
        }
    }
}
