//! Deterministic schedule identifiers: `blake3(holder || index_le)`.

use anchor_lang::prelude::Pubkey;

pub fn compute_schedule_id(holder: &Pubkey, index: u64) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(holder.as_ref());
    hasher.update(&index.to_le_bytes());
    *hasher.finalize().as_bytes()
}
