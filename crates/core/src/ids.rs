use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

/// Alphabet for short toast ids (base-36, lowercase).
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of a short toast id in characters.
const SHORT_ID_LEN: usize = 8;

/// Generate a new item identifier: a version-4, variant-1 UUID.
///
/// `uuid::Builder::from_random_bytes` forces the RFC 4122 version and
/// variant bits regardless of where the 16 bytes came from, so ids stay
/// well-formed even on the pseudorandom fallback path. Ids only need to be
/// unique within a single-user store, not unguessable.
#[must_use]
pub fn new_item_id() -> Uuid {
    let mut bytes = [0u8; 16];
    fill_random(&mut bytes);
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}

/// Generate a short random id for transient objects (toasts).
#[must_use]
pub fn short_id() -> String {
    let mut bytes = [0u8; SHORT_ID_LEN];
    fill_random(&mut bytes);
    bytes
        .iter()
        .map(|b| BASE36[(*b as usize) % BASE36.len()] as char)
        .collect()
}

/// Fill `buf` from the OS random source, falling back to a seeded
/// pseudorandom generator if the source is unavailable.
fn fill_random(buf: &mut [u8]) {
    if getrandom::getrandom(buf).is_err() {
        log::debug!("OS random source unavailable, using pseudorandom fallback");
        fallback_fill(buf);
    }
}

/// Last state of the fallback generator. Zero means "not seeded yet".
static FALLBACK_STATE: AtomicU64 = AtomicU64::new(0);

/// splitmix64-based fallback. Seeded from the wall clock on first use;
/// quality is far below the OS source but sufficient for local ids.
fn fallback_fill(buf: &mut [u8]) {
    let mut state = FALLBACK_STATE.load(Ordering::Relaxed);
    if state == 0 {
        state = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x9e37_79b9_7f4a_7c15)
            | 1;
    }
    for chunk in buf.chunks_mut(8) {
        state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^= z >> 31;
        let bytes = z.to_le_bytes();
        chunk.copy_from_slice(&bytes[..chunk.len()]);
    }
    FALLBACK_STATE.store(state, Ordering::Relaxed);
}
