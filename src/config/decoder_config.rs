use serde::Deserialize;

use crate::session::Charset;

// -----------------------------------------------------------------------------
// ----- Constants -------------------------------------------------------------

/// Hard ceiling on a single frame payload (1 GiB).
pub const DEFAULT_MAX_FRAME_LEN: usize = 1 << 30;

// -----------------------------------------------------------------------------
// ----- DecoderConfig ---------------------------------------------------------

/// Constructor parameters of a `BackendDecoder`.
///
/// Deserializable so a host application can keep these next to its own
/// settings, e.g. in TOML:
///
/// ```toml
/// initial_charset = "UTF8"
/// max_frame_len = 16777216
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecoderConfig {
    pub initial_charset: Charset,
    pub max_frame_len: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            initial_charset: Charset::Ascii,
            max_frame_len: DEFAULT_MAX_FRAME_LEN,
        }
    }
}

// -----------------------------------------------------------------------------
// ----- DecoderConfig: Builder ------------------------------------------------

impl DecoderConfig {
    pub fn with_initial_charset(mut self, charset: Charset) -> Self {
        self.initial_charset = charset;
        self
    }

    pub fn with_max_frame_len(mut self, max_frame_len: usize) -> Self {
        self.max_frame_len = max_frame_len;
        self
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = DecoderConfig::default();
        assert_eq!(cfg.initial_charset, Charset::Ascii);
        assert_eq!(cfg.max_frame_len, 1024 * 1024 * 1024);
    }

    #[test]
    fn parses_from_toml() {
        let cfg: DecoderConfig = toml::from_str(
            r#"
            initial_charset = "UTF8"
            max_frame_len = 4096
            "#,
        )
        .unwrap();

        assert_eq!(cfg.initial_charset, Charset::utf8());
        assert_eq!(cfg.max_frame_len, 4096);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: DecoderConfig = toml::from_str(r#"initial_charset = "latin1""#).unwrap();
        assert_eq!(cfg.initial_charset, Charset::from_pg_name("LATIN1").unwrap());
        assert_eq!(cfg.max_frame_len, DEFAULT_MAX_FRAME_LEN);
    }

    #[test]
    fn rejects_unknown_encoding() {
        let err = toml::from_str::<DecoderConfig>(r#"initial_charset = "KLINGON""#).unwrap_err();
        assert!(err.to_string().contains("unknown PostgreSQL encoding"));
    }

    #[test]
    fn builder_overrides() {
        let cfg = DecoderConfig::default()
            .with_initial_charset(Charset::utf8())
            .with_max_frame_len(64);
        assert_eq!(cfg.initial_charset, Charset::utf8());
        assert_eq!(cfg.max_frame_len, 64);
    }
}

// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
