//! Decryption collaborator boundary.
//!
//! Encrypted xlsx exports arrive as OLE/CFB containers wrapping the real
//! zip payload. Actual password decryption is an external concern; this
//! module defines the seam and a stock implementation that passes plain
//! payloads through untouched.

use crate::error::{IngestError, Result};

/// Magic bytes of an OLE/CFB compound file, the container format used by
/// agile-encrypted Office documents.
const CFB_MAGIC: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// Returns true when the payload is an encrypted Office container rather
/// than a plain zip-based workbook.
pub fn is_encrypted(bytes: &[u8]) -> bool {
    bytes.len() >= CFB_MAGIC.len() && bytes[..CFB_MAGIC.len()] == CFB_MAGIC
}

/// Opens password-protected workbook payloads.
///
/// Implementations must return the bytes unchanged when the payload is not
/// actually encrypted, rather than failing.
pub trait Decryptor {
    fn decrypt(&self, name: &str, bytes: &[u8], password: &str) -> Result<Vec<u8>>;
}

/// Stock decryptor: passthrough for plain payloads, rejection for real
/// encrypted containers. Deployments that need to open protected exports
/// inject their own [`Decryptor`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainDecryptor;

impl Decryptor for PlainDecryptor {
    fn decrypt(&self, name: &str, bytes: &[u8], _password: &str) -> Result<Vec<u8>> {
        if is_encrypted(bytes) {
            return Err(IngestError::Encrypted {
                name: name.to_string(),
            });
        }
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_zip_payload_passes_through() {
        let bytes = b"PK\x03\x04rest-of-zip";
        let out = PlainDecryptor.decrypt("a.xlsx", bytes, "pw").unwrap();
        assert_eq!(out, bytes);
    }

    #[test]
    fn cfb_container_is_rejected() {
        let mut bytes = CFB_MAGIC.to_vec();
        bytes.extend_from_slice(b"encrypted-body");
        let err = PlainDecryptor.decrypt("a.xlsx", &bytes, "pw").unwrap_err();
        assert!(matches!(err, IngestError::Encrypted { .. }));
    }

    #[test]
    fn short_payload_is_not_encrypted() {
        assert!(!is_encrypted(b"\xD0\xCF"));
    }
}
