//! AES-CBC implementations for the settings payload wire format.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::{CryptoError, Result};

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;
type Aes192CbcEnc = cbc::Encryptor<aes::Aes192>;
type Aes192CbcDec = cbc::Decryptor<aes::Aes192>;
type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Encrypt a settings payload with AES-CBC/PKCS7.
///
/// The key length selects the cipher: 16 bytes for AES-128, 24 for AES-192,
/// 32 for AES-256. The IV must be 16 bytes. Output is a base64 ciphertext
/// string, the exact format the provider expects in the `settings` field.
///
/// # Arguments
/// * `key` - Symmetric key bytes
/// * `iv` - Initialization vector (16 bytes)
/// * `plaintext` - Serialized settings to encrypt
///
/// # Returns
/// Base64-encoded ciphertext
pub fn encrypt_settings(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<String> {
    let ciphertext = match key.len() {
        16 => Aes128CbcEnc::new_from_slices(key, iv)
            .map_err(|_| CryptoError::InvalidIvLength(iv.len()))?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        24 => Aes192CbcEnc::new_from_slices(key, iv)
            .map_err(|_| CryptoError::InvalidIvLength(iv.len()))?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        32 => Aes256CbcEnc::new_from_slices(key, iv)
            .map_err(|_| CryptoError::InvalidIvLength(iv.len()))?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        n => return Err(CryptoError::InvalidKeyLength(n)),
    };

    Ok(STANDARD.encode(ciphertext))
}

/// Decrypt a base64 ciphertext produced by [`encrypt_settings`].
///
/// # Arguments
/// * `key` - Symmetric key bytes
/// * `iv` - Initialization vector (16 bytes)
/// * `ciphertext_b64` - Base64-encoded ciphertext
///
/// # Returns
/// The original plaintext bytes
pub fn decrypt_settings(key: &[u8], iv: &[u8], ciphertext_b64: &str) -> Result<Vec<u8>> {
    let ciphertext = STANDARD.decode(ciphertext_b64)?;

    let plaintext = match key.len() {
        16 => Aes128CbcDec::new_from_slices(key, iv)
            .map_err(|_| CryptoError::InvalidIvLength(iv.len()))?
            .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
            .map_err(|_| CryptoError::Padding)?,
        24 => Aes192CbcDec::new_from_slices(key, iv)
            .map_err(|_| CryptoError::InvalidIvLength(iv.len()))?
            .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
            .map_err(|_| CryptoError::Padding)?,
        32 => Aes256CbcDec::new_from_slices(key, iv)
            .map_err(|_| CryptoError::InvalidIvLength(iv.len()))?
            .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
            .map_err(|_| CryptoError::Padding)?,
        n => return Err(CryptoError::InvalidKeyLength(n)),
    };

    Ok(plaintext)
}
