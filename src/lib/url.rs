//! Target-independent pieces of the HTTP layer.

/// Joins the configured base URL and an API path. An empty base keeps the
/// path relative so a same-origin proxy can serve the API.
pub fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// A 401 only ends the session when the request actually carried a token;
/// a 401 on the login form just means bad credentials.
pub fn session_expired(status: u16, had_token: bool) -> bool {
    status == 401 && had_token
}

#[cfg(test)]
mod tests {
    use super::{join_url, session_expired};

    #[test]
    fn join_url_handles_slashes() {
        assert_eq!(join_url("https://api.roster.dev/", "/users"), "https://api.roster.dev/users");
        assert_eq!(join_url("https://api.roster.dev", "users/7"), "https://api.roster.dev/users/7");
        assert_eq!(join_url(" https://api.roster.dev// ", " /login "), "https://api.roster.dev/login");
    }

    #[test]
    fn join_url_keeps_relative_paths_without_base() {
        assert_eq!(join_url("", "/users"), "/users");
        assert_eq!(join_url("   ", "/payments"), "/payments");
    }

    #[test]
    fn session_expires_only_for_authenticated_401() {
        assert!(session_expired(401, true));
        assert!(!session_expired(401, false));
        assert!(!session_expired(403, true));
        assert!(!session_expired(200, true));
    }
}
