use ed25519_dalek::{Signature, VerifyingKey};

pub const ED25519_KEY_LEN: usize = 32;
pub const ED25519_SIGNATURE_LEN: usize = 64;

/// Checks that `signature` over `message` was produced by `signer`.
///
/// Verification must report failure instead of aborting: the bulk vote path
/// skips bad entries and keeps going.
pub trait SignatureVerifier {
    fn verify(
        &self,
        signer: &[u8; ED25519_KEY_LEN],
        message: &[u8],
        signature: &[u8; ED25519_SIGNATURE_LEN],
    ) -> bool;
}

/// A MultiversX account address is its ed25519 public key, so the claimed
/// voter address is the key the signature is checked against.
pub struct Ed25519Verifier;

impl SignatureVerifier for Ed25519Verifier {
    fn verify(
        &self,
        signer: &[u8; ED25519_KEY_LEN],
        message: &[u8],
        signature: &[u8; ED25519_SIGNATURE_LEN],
    ) -> bool {
        let Ok(key) = VerifyingKey::from_bytes(signer) else {
            return false;
        };
        key.verify_strict(message, &Signature::from_bytes(signature))
            .is_ok()
    }
}
