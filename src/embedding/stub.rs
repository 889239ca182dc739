//! Deterministic hashed bag-of-words embeddings.
//!
//! Each lowercase alphanumeric token is hashed with BLAKE3 into one of `dim`
//! buckets and the counts are L2-normalized. Texts sharing tokens point in
//! similar directions, identical texts embed identically, and text without
//! tokens embeds to the zero vector.

use super::types::Embedding;

pub(crate) fn bag_of_words_embedding(text: &str, dim: usize) -> Embedding {
    let mut values = vec![0.0f32; dim];
    if dim == 0 {
        return Embedding::new(values);
    }

    let lowered = text.to_lowercase();
    for token in lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
    {
        values[bucket(token, dim)] += 1.0;
    }

    Embedding::new(values).normalized()
}

fn bucket(token: &str, dim: usize) -> usize {
    let hash = blake3::hash(token.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&hash.as_bytes()[..8]);
    (u64::from_le_bytes(prefix) % dim as u64) as usize
}
