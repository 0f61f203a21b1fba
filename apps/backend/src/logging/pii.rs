use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Vetted redaction patterns, compiled once.
pub struct PiiRegexRegistry;

impl PiiRegexRegistry {
    /// bcrypt (`$2a$`, `$2b$`, `$2y$`) and argon2 (`$argon2id$` ...) hashes
    pub fn password_hash() -> &'static Regex {
        static PASSWORD_HASH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r#"\$(?:2[aby]|argon2(?:id|i|d))\$[^\s'")]+"#).unwrap()
        });
        &PASSWORD_HASH_REGEX
    }

    /// Base64-like token pattern: matches base64-encoded tokens (≥16 chars)
    pub fn base64_token() -> &'static Regex {
        static BASE64_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9+/]{16,}={0,2}\b").unwrap()
        });
        &BASE64_TOKEN_REGEX
    }

    /// Hex token pattern: matches hexadecimal tokens (≥16 chars)
    pub fn hex_token() -> &'static Regex {
        static HEX_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Fa-f0-9]{16,}\b").unwrap()
        });
        &HEX_TOKEN_REGEX
    }
}

/// Redacts secrets from a free-form message such as a raw database error.
///
/// Password hashes go first so their base64 tails are not half-matched by
/// the token patterns.
pub fn redact(input: &str) -> String {
    let hashes = PiiRegexRegistry::password_hash().replace_all(input, "[REDACTED_HASH]");
    let base64 = PiiRegexRegistry::base64_token().replace_all(&hashes, "[REDACTED_TOKEN]");
    PiiRegexRegistry::hex_token()
        .replace_all(&base64, "[REDACTED_TOKEN]")
        .to_string()
}

/// Display wrapper that redacts on format, for use in log fields.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_password_hashes() {
        assert_eq!(
            redact("value '$2b$12$R9h/cIPz0gi.URNNX3kh2OPST9/PgBkqquzi.Ss7KIUgO2t0jWMUW' rejected"),
            "value '[REDACTED_HASH]' rejected"
        );
        assert_eq!(
            redact("$argon2id$v=19$m=65536,t=3,p=4$c2FsdHNhbHQ$aGFzaGhhc2g"),
            "[REDACTED_HASH]"
        );
    }

    #[test]
    fn redacts_tokens() {
        assert_eq!(
            redact("Token1: eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9 Token2: a1b2c3d4e5f678901234567890123456"),
            "Token1: [REDACTED_TOKEN] Token2: [REDACTED_TOKEN]"
        );
        assert_eq!(redact("short123"), "short123");
    }

    #[test]
    fn leaves_ordinary_db_messages_alone() {
        let msg = "error returned from database: no such table: games";
        assert_eq!(redact(msg), msg);
        assert_eq!(redact(""), "");
    }

    #[test]
    fn wrapper_redacts_in_display_and_debug() {
        let wrapped = Redacted("hash=$2y$10$abcdefghijklmnopqrstuv");
        assert_eq!(format!("{wrapped}"), "hash=[REDACTED_HASH]");
        assert_eq!(format!("{wrapped:?}"), "hash=[REDACTED_HASH]");
    }
}
