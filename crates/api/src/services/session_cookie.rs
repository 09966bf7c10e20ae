//! Admin session cookie.
//!
//! The session is a marker cookie: its presence is the whole credential.
//! It is HttpOnly so scripts cannot read it, and expires after
//! `cookie.max_age_secs`.

use axum::http::{
    header::{COOKIE, SET_COOKIE},
    HeaderMap, HeaderValue,
};

use tracing::warn;

use crate::config::Config;

/// Value stored in the session cookie.
pub const SESSION_VALUE: &str = "true";

/// Builds and reads the admin session cookie.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    name: String,
    path: String,
    max_age_secs: i64,
    secure: bool,
    same_site: String,
    domain: String,
}

impl SessionCookie {
    pub fn from_config(config: &Config) -> Self {
        Self {
            name: config.cookie.name.clone(),
            path: config.cookie.path.clone(),
            max_age_secs: config.cookie.max_age_secs,
            secure: config.secure_cookies(),
            same_site: config.cookie.same_site.clone(),
            domain: config.cookie.domain.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `Set-Cookie` value that opens a session.
    pub fn build_session_cookie(&self) -> String {
        let cookie = format!(
            "{}={}; Path={}; Max-Age={}",
            self.name, SESSION_VALUE, self.path, self.max_age_secs
        );
        self.with_attributes(cookie)
    }

    /// `Set-Cookie` value that removes the session.
    pub fn build_clear_cookie(&self) -> String {
        let cookie = format!(
            "{}=; Path={}; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT",
            self.name, self.path
        );
        self.with_attributes(cookie)
    }

    /// Returns false, after logging, when the cookie cannot be encoded as a
    /// header value.
    pub fn add_session_cookie(&self, headers: &mut HeaderMap) -> bool {
        append_cookie(headers, &self.build_session_cookie(), &self.name)
    }

    pub fn add_clear_cookie(&self, headers: &mut HeaderMap) -> bool {
        append_cookie(headers, &self.build_clear_cookie(), &self.name)
    }

    /// True when the request carries the session cookie with a non-empty value.
    pub fn is_present(&self, headers: &HeaderMap) -> bool {
        extract_cookie(headers, &self.name).is_some_and(|value| !value.is_empty())
    }

    fn with_attributes(&self, mut cookie: String) -> String {
        cookie.push_str("; HttpOnly");
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie.push_str(&format!("; SameSite={}", self.same_site));
        if !self.domain.is_empty() {
            cookie.push_str(&format!("; Domain={}", self.domain));
        }
        cookie
    }
}

fn append_cookie(headers: &mut HeaderMap, cookie: &str, name: &str) -> bool {
    match HeaderValue::from_str(cookie) {
        Ok(value) => {
            headers.append(SET_COOKIE, value);
            true
        }
        Err(err) => {
            warn!(cookie = %name, error = %err, "Dropping unencodable Set-Cookie header");
            false
        }
    }
}

/// Extracts a cookie value by name from the `Cookie` header(s).
pub fn extract_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|cookie_header| cookie_header.split(';'))
        .map(str::trim)
        .find_map(|cookie| {
            let (cookie_name, cookie_value) = cookie.split_once('=')?;
            (cookie_name == name).then_some(cookie_value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn helper(secure: bool) -> SessionCookie {
        SessionCookie {
            name: "admin_session".to_string(),
            path: "/".to_string(),
            max_age_secs: 86_400,
            secure,
            same_site: "Lax".to_string(),
            domain: String::new(),
        }
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = helper(false).build_session_cookie();
        assert!(cookie.starts_with("admin_session=true; Path=/; Max-Age=86400"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn test_secure_flag() {
        assert!(helper(true).build_session_cookie().contains("; Secure"));
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        let cookie = helper(false).build_clear_cookie();
        assert!(cookie.starts_with("admin_session=;"));
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.contains("Expires=Thu, 01 Jan 1970 00:00:00 GMT"));
    }

    #[test]
    fn test_is_present() {
        let session = helper(false);
        let mut headers = HeaderMap::new();
        assert!(!session.is_present(&headers));

        headers.insert(COOKIE, HeaderValue::from_static("theme=dark; admin_session=true"));
        assert!(session.is_present(&headers));

        headers.insert(COOKIE, HeaderValue::from_static("admin_session="));
        assert!(!session.is_present(&headers));
    }

    #[test]
    fn test_extract_cookie_ignores_prefix_matches() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("admin_session_old=1"));
        assert_eq!(extract_cookie(&headers, "admin_session"), None);
    }

    #[test]
    fn test_add_cookies_to_headers() {
        let session = helper(false);
        let mut headers = HeaderMap::new();
        session.add_session_cookie(&mut headers);
        session.add_clear_cookie(&mut headers);
        assert_eq!(headers.get_all(SET_COOKIE).iter().count(), 2);
    }

    #[test]
    fn test_unencodable_cookie_is_not_appended() {
        let session = SessionCookie {
            domain: "example.com\n".to_string(),
            ..helper(false)
        };
        let mut headers = HeaderMap::new();
        assert!(!session.add_session_cookie(&mut headers));
        assert!(!session.add_clear_cookie(&mut headers));
        assert!(headers.get(SET_COOKIE).is_none());
    }
}
