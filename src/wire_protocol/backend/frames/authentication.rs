//! Module: wire_protocol::backend::frames::authentication
//!
//! Authentication request ('R').
//!
//! Every step of the authentication exchange shares the same tag; the first
//! four payload bytes select the request. Opaque continuation data (GSS,
//! SASL) is copied out of the frame so the inbound buffer can be reclaimed.

use bytes::{BufMut, Bytes, BytesMut};

use crate::errors::{DecodeError, EncodeError};
use crate::session::Charset;
use crate::wire_protocol::WireSerializable;
use crate::wire_protocol::utils::{PayloadReader, put_cstr};

// -----------------------------------------------------------------------------
// ----- Constants -------------------------------------------------------------

const AUTH_OK: i32 = 0;
const AUTH_KERBEROS_V5: i32 = 2;
const AUTH_CLEARTEXT_PASSWORD: i32 = 3;
const AUTH_CRYPT_PASSWORD: i32 = 4;
const AUTH_MD5_PASSWORD: i32 = 5;
const AUTH_SCM_CREDENTIAL: i32 = 6;
const AUTH_GSS: i32 = 7;
const AUTH_GSS_CONTINUE: i32 = 8;
const AUTH_SSPI: i32 = 9;
const AUTH_SASL: i32 = 10;
const AUTH_SASL_CONTINUE: i32 = 11;
const AUTH_SASL_FINAL: i32 = 12;

// -----------------------------------------------------------------------------
// ----- AuthenticationFrame ---------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationFrame {
    Ok,
    KerberosV5,
    CleartextPassword,
    /// Pre-7.2 servers only.
    CryptPassword { salt: [u8; 2] },
    Md5Password { salt: [u8; 4] },
    ScmCredential,
    Gss,
    GssContinue { data: Bytes },
    Sspi,
    Sasl { mechanisms: Vec<String> },
    SaslContinue { data: Bytes },
    SaslFinal { data: Bytes },
}

// -----------------------------------------------------------------------------
// ----- AuthenticationFrame: Public -------------------------------------------

impl AuthenticationFrame {
    /// Request code carried in the first four payload bytes.
    pub fn code(&self) -> i32 {
        use AuthenticationFrame::*;

        match self {
            Ok => AUTH_OK,
            KerberosV5 => AUTH_KERBEROS_V5,
            CleartextPassword => AUTH_CLEARTEXT_PASSWORD,
            CryptPassword { .. } => AUTH_CRYPT_PASSWORD,
            Md5Password { .. } => AUTH_MD5_PASSWORD,
            ScmCredential => AUTH_SCM_CREDENTIAL,
            Gss => AUTH_GSS,
            GssContinue { .. } => AUTH_GSS_CONTINUE,
            Sspi => AUTH_SSPI,
            Sasl { .. } => AUTH_SASL,
            SaslContinue { .. } => AUTH_SASL_CONTINUE,
            SaslFinal { .. } => AUTH_SASL_FINAL,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, AuthenticationFrame::Ok)
    }
}

// -----------------------------------------------------------------------------
// ----- WireSerializable ------------------------------------------------------

impl WireSerializable for AuthenticationFrame {
    fn from_payload(reader: &mut PayloadReader<'_>) -> Result<Self, DecodeError> {
        use AuthenticationFrame::*;

        let frame = match reader.read_i32()? {
            AUTH_OK => Ok,
            AUTH_KERBEROS_V5 => KerberosV5,
            AUTH_CLEARTEXT_PASSWORD => CleartextPassword,
            AUTH_CRYPT_PASSWORD => CryptPassword {
                salt: reader.read_array()?,
            },
            AUTH_MD5_PASSWORD => Md5Password {
                salt: reader.read_array()?,
            },
            AUTH_SCM_CREDENTIAL => ScmCredential,
            AUTH_GSS => Gss,
            AUTH_GSS_CONTINUE => GssContinue {
                data: Bytes::copy_from_slice(reader.read_rest()),
            },
            AUTH_SSPI => Sspi,
            AUTH_SASL => Sasl {
                mechanisms: read_mechanisms(reader)?,
            },
            AUTH_SASL_CONTINUE => SaslContinue {
                data: Bytes::copy_from_slice(reader.read_rest()),
            },
            AUTH_SASL_FINAL => SaslFinal {
                data: Bytes::copy_from_slice(reader.read_rest()),
            },
            other => return Err(DecodeError::UnknownAuthSubkind(other)),
        };

        Result::Ok(frame)
    }

    fn write_payload(&self, buf: &mut BytesMut, charset: Charset) -> Result<(), EncodeError> {
        use AuthenticationFrame::*;

        buf.put_i32(self.code());

        match self {
            CryptPassword { salt } => buf.put_slice(salt),
            Md5Password { salt } => buf.put_slice(salt),
            GssContinue { data } | SaslContinue { data } | SaslFinal { data } => {
                buf.put_slice(data)
            }
            Sasl { mechanisms } => {
                for mechanism in mechanisms {
                    put_cstr(buf, "mechanism", mechanism, charset)?;
                }
                buf.put_u8(0);
            }
            Ok | KerberosV5 | CleartextPassword | ScmCredential | Gss | Sspi => {}
        }

        Result::Ok(())
    }
}

// -----------------------------------------------------------------------------
// ----- Helpers ---------------------------------------------------------------

/// Mechanism names run until an empty name.
fn read_mechanisms(reader: &mut PayloadReader<'_>) -> Result<Vec<String>, DecodeError> {
    let mut mechanisms = Vec::new();
    loop {
        let mechanism = reader.read_string("mechanism")?;
        if mechanism.is_empty() {
            return Ok(mechanisms);
        }
        mechanisms.push(mechanism);
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------


// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
