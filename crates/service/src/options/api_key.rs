use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::errors::ServiceError;

/// Random bytes behind each key; hex-encoded this gives 64 characters.
pub const API_KEY_BYTES: usize = 32;

/// Generate a fresh API key from the OS CSPRNG.
///
/// There is no weaker fallback: if the OS source fails, no key is produced.
pub fn generate_api_key() -> Result<String, ServiceError> {
    generate_api_key_with(&mut OsRng)
}

pub fn generate_api_key_with<R: RngCore + CryptoRng>(rng: &mut R) -> Result<String, ServiceError> {
    let mut bytes = [0u8; API_KEY_BYTES];
    rng.try_fill_bytes(&mut bytes)
        .map_err(|e| ServiceError::Entropy(e.to_string()))?;
    Ok(hex::encode(bytes))
}
