use base64::{Engine, engine::general_purpose::STANDARD};
use std::fmt;

/// Username/password pair for Meteomatics basic authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }

    /// Value for the `Authorization` header: `Basic base64(username:password)`.
    pub fn authorization_header(&self) -> String {
        let encoded = STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {encoded}")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(header: &str) -> String {
        let encoded = header.strip_prefix("Basic ").expect("basic scheme");
        String::from_utf8(STANDARD.decode(encoded).expect("valid base64")).expect("utf-8")
    }

    #[test]
    fn header_uses_basic_scheme() {
        let creds = Credentials::new("user", "pass");

        assert_eq!(creds.authorization_header(), "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn header_decodes_back_to_username_colon_password() {
        let cases = [
            ("user", "pass"),
            ("", ""),
            ("name:with:colons", "p:a:s:s"),
            ("ünïcödé", "パスワード"),
            ("spaces in name", "  "),
        ];

        for (username, password) in cases {
            let header = Credentials::new(username, password).authorization_header();
            assert_eq!(decode(&header), format!("{username}:{password}"));
        }
    }

    #[test]
    fn debug_output_hides_password() {
        let creds = Credentials::new("user", "s3cret");
        let rendered = format!("{creds:?}");

        assert!(rendered.contains("user"));
        assert!(!rendered.contains("s3cret"));
    }
}
