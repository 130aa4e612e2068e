//! Module: session::charset
//!
//! Byte-to-character mapping used for NUL-terminated string fields.
//!
//! PostgreSQL names its encodings (`UTF8`, `LATIN1`, `WIN1252`, ...); the
//! server reports the one in force through `ParameterStatus("client_encoding")`.
//! `Charset` resolves those names to an `encoding_rs` codec, or to strict
//! 7-bit ASCII for `SQL_ASCII`.

use encoding_rs::Encoding;
use serde::{Deserialize, Deserializer, de};
use std::{borrow::Cow, fmt};

// -----------------------------------------------------------------------------
// ----- Constants -------------------------------------------------------------

/// Canonical PostgreSQL spelling of every supported encoding. `Charset::name`
/// reports the first entry resolving to the charset.
const PG_NAMES: [&str; 37] = [
    "SQL_ASCII",
    "UTF8",
    "LATIN1",
    "LATIN2",
    "LATIN3",
    "LATIN4",
    "LATIN5",
    "LATIN6",
    "LATIN7",
    "LATIN8",
    "LATIN9",
    "LATIN10",
    "ISO_8859_5",
    "ISO_8859_6",
    "ISO_8859_7",
    "ISO_8859_8",
    "WIN866",
    "WIN874",
    "WIN1250",
    "WIN1251",
    "WIN1252",
    "WIN1253",
    "WIN1254",
    "WIN1255",
    "WIN1256",
    "WIN1257",
    "WIN1258",
    "KOI8R",
    "KOI8U",
    "EUC_JP",
    "SJIS",
    "EUC_KR",
    "UHC",
    "EUC_CN",
    "GBK",
    "GB18030",
    "BIG5",
];

/// C1 control range of the ISO-8859 charsets.
const C1_CONTROLS: std::ops::RangeInclusive<u8> = 0x80..=0x9F;

// -----------------------------------------------------------------------------
// ----- Charset ---------------------------------------------------------------

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// `SQL_ASCII`: only 7-bit bytes are accepted.
    Ascii,

    /// ISO-8859 charset whose 0x80-0x9F bytes are the C1 controls
    /// U+0080-U+009F. `encoding_rs` only ships the windows superset, which
    /// decodes every other byte identically and is used for those.
    IsoC1(&'static Encoding),

    /// Any charset `encoding_rs` knows how to decode.
    Encoded(&'static Encoding),
}

// -----------------------------------------------------------------------------
// ----- Charset: Static -------------------------------------------------------

impl Charset {
    pub fn utf8() -> Charset {
        Charset::Encoded(encoding_rs::UTF_8)
    }

    /// Resolve a PostgreSQL encoding name. Case and `_`/`-` separators are
    /// ignored, so `utf-8`, `UTF8` and `Utf_8` all resolve to UTF-8.
    pub fn from_pg_name(name: &str) -> Option<Charset> {
        let normalized: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_uppercase())
            .collect();

        let encoding = match normalized.as_str() {
            "SQLASCII" => return Some(Charset::Ascii),

            "UTF8" | "UNICODE" => encoding_rs::UTF_8,

            "LATIN1" => return Some(Charset::IsoC1(encoding_rs::WINDOWS_1252)),
            "LATIN2" => encoding_rs::ISO_8859_2,
            "LATIN3" => encoding_rs::ISO_8859_3,
            "LATIN4" => encoding_rs::ISO_8859_4,
            "LATIN5" => return Some(Charset::IsoC1(encoding_rs::WINDOWS_1254)),
            "LATIN6" => encoding_rs::ISO_8859_10,
            "LATIN7" => encoding_rs::ISO_8859_13,
            "LATIN8" => encoding_rs::ISO_8859_14,
            "LATIN9" => encoding_rs::ISO_8859_15,
            "LATIN10" => encoding_rs::ISO_8859_16,
            "ISO88595" => encoding_rs::ISO_8859_5,
            "ISO88596" => encoding_rs::ISO_8859_6,
            "ISO88597" => encoding_rs::ISO_8859_7,
            "ISO88598" => encoding_rs::ISO_8859_8,

            "WIN866" | "ALT" => encoding_rs::IBM866,
            "WIN874" => encoding_rs::WINDOWS_874,
            "WIN1250" => encoding_rs::WINDOWS_1250,
            "WIN1251" | "WIN" => encoding_rs::WINDOWS_1251,
            "WIN1252" => encoding_rs::WINDOWS_1252,
            "WIN1253" => encoding_rs::WINDOWS_1253,
            "WIN1254" => encoding_rs::WINDOWS_1254,
            "WIN1255" => encoding_rs::WINDOWS_1255,
            "WIN1256" => encoding_rs::WINDOWS_1256,
            "WIN1257" => encoding_rs::WINDOWS_1257,
            "WIN1258" => encoding_rs::WINDOWS_1258,
            "KOI8R" | "KOI8" => encoding_rs::KOI8_R,
            "KOI8U" => encoding_rs::KOI8_U,

            "EUCJP" => encoding_rs::EUC_JP,
            "SJIS" | "SHIFTJIS" => encoding_rs::SHIFT_JIS,
            "EUCKR" | "UHC" => encoding_rs::EUC_KR,
            "EUCCN" | "GBK" => encoding_rs::GBK,
            "GB18030" => encoding_rs::GB18030,
            "BIG5" => encoding_rs::BIG5,

            _ => return None,
        };

        Some(Charset::Encoded(encoding))
    }
}

// -----------------------------------------------------------------------------
// ----- Charset: Public -------------------------------------------------------

impl Charset {
    /// PostgreSQL name of the charset, accepted back by `from_pg_name`.
    pub fn name(&self) -> &'static str {
        let pg_name = PG_NAMES
            .iter()
            .copied()
            .find(|name| Charset::from_pg_name(name).as_ref() == Some(self));

        match (pg_name, *self) {
            (Some(name), _) => name,
            (None, Charset::Ascii) => "SQL_ASCII",
            // encodings PostgreSQL has no name for
            (None, Charset::IsoC1(encoding) | Charset::Encoded(encoding)) => encoding.name(),
        }
    }

    /// Decode `bytes` into an owned string. Returns `None` when the bytes are
    /// not valid in this charset; no replacement characters are ever produced.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match *self {
            Charset::Ascii => {
                if !bytes.is_ascii() {
                    return None;
                }
                // ASCII is a subset of UTF-8
                std::str::from_utf8(bytes).ok().map(str::to_owned)
            }
            Charset::IsoC1(encoding) => decode_iso_c1(encoding, bytes),
            Charset::Encoded(encoding) => encoding
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(Cow::into_owned),
        }
    }

    /// Encode `value`, or `None` if some character has no mapping.
    pub fn encode<'a>(&self, value: &'a str) -> Option<Cow<'a, [u8]>> {
        match *self {
            Charset::Ascii => value.is_ascii().then_some(Cow::Borrowed(value.as_bytes())),
            Charset::IsoC1(encoding) => encode_iso_c1(encoding, value).map(Cow::Owned),
            Charset::Encoded(encoding) => {
                let (bytes, _, had_errors) = encoding.encode(value);
                (!had_errors).then_some(bytes)
            }
        }
    }
}

// -----------------------------------------------------------------------------
// ----- Charset: Traits -------------------------------------------------------

impl Default for Charset {
    fn default() -> Self {
        Charset::Ascii
    }
}

impl fmt::Debug for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Charset({})", self.name())
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Charset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Charset::from_pg_name(&name)
            .ok_or_else(|| de::Error::custom(format!("unknown PostgreSQL encoding: {name}")))
    }
}

// -----------------------------------------------------------------------------
// ----- Helpers ---------------------------------------------------------------

/// Single-byte charsets are stateless, so runs between C1 bytes decode on
/// their own.
fn decode_iso_c1(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    let mut out = String::with_capacity(bytes.len());

    for run in bytes.split_inclusive(|b| C1_CONTROLS.contains(b)) {
        let (text, control) = match run.split_last() {
            Some((&last, head)) if C1_CONTROLS.contains(&last) => (head, Some(last)),
            _ => (run, None),
        };

        out.push_str(&encoding.decode_without_bom_handling_and_without_replacement(text)?);
        if let Some(byte) = control {
            out.push(char::from(byte));
        }
    }

    Some(out)
}

/// Characters the windows superset places in 0x80-0x9F have no ISO mapping.
fn encode_iso_c1(encoding: &'static Encoding, value: &str) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(value.len());
    let mut scratch = [0u8; 4];

    for ch in value.chars() {
        if let Ok(byte) = u8::try_from(u32::from(ch)) {
            if C1_CONTROLS.contains(&byte) {
                out.push(byte);
                continue;
            }
        }

        let (bytes, _, had_errors) = encoding.encode(ch.encode_utf8(&mut scratch));
        if had_errors || bytes.iter().any(|b| C1_CONTROLS.contains(b)) {
            return None;
        }
        out.extend_from_slice(&bytes);
    }

    Some(out)
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
