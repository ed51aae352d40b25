use crate::workflows::quote::catalog::ProjectId;

/// Separator joining the identity parts of a seed key.
const SEED_SEPARATOR: char = '|';

/// Build the stable seed key for one (project, vendor, region, dimension)
/// draw.
pub fn seed_key(project: &ProjectId, vendor: &str, region: &str, dimension: &str) -> String {
    let mut key = String::with_capacity(
        project.0.len() + vendor.len() + region.len() + dimension.len() + 3,
    );
    key.push_str(&project.0);
    key.push(SEED_SEPARATOR);
    key.push_str(vendor);
    key.push(SEED_SEPARATOR);
    key.push_str(region);
    key.push(SEED_SEPARATOR);
    key.push_str(dimension);
    key
}

/// Deterministic score in `[0, 100]` for a seed key.
///
/// Hashes the key with BLAKE3 and reduces the first eight digest bytes
/// modulo 101. The same key yields the same score on every call and in
/// every process; there is no generator state, clock, or call counter
/// involved, so previously rendered scores never change on reload.
pub fn seeded_score(seed_key: &str) -> u8 {
    let digest = blake3::hash(seed_key.as_bytes());
    let mut word = [0u8; 8];
    word.copy_from_slice(&digest.as_bytes()[..8]);
    (u64::from_le_bytes(word) % 101) as u8
}
