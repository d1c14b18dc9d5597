//! Revocation list over an expiring cache

use tracing::warn;

use crate::repositories::ExpiringCache;

/// Minimum revocation entry lifetime in seconds
///
/// An already-expired token still gets a briefly visible entry so that a
/// rotation racing the expiry boundary is observed as reuse, not accepted.
const MIN_REVOCATION_TTL: u64 = 1;

fn revocation_key(jti: &str) -> String {
    format!("revoked:{}", jti)
}

/// Token revocation list
///
/// Entries live exactly as long as the token they shadow; once the token has
/// expired on its own, the entry is garbage and the cache drops it.
///
/// Both operations degrade softly on store failure: `revoke` logs and
/// returns, `is_revoked` answers `false`. An unreachable store therefore
/// means revocation is temporarily not enforced rather than the whole
/// token path going down.
pub struct RevocationList<C> {
    cache: C,
}

impl<C: ExpiringCache> RevocationList<C> {
    pub fn new(cache: C) -> Self {
        Self { cache }
    }

    /// Record a token ID as revoked for the remaining token lifetime
    ///
    /// Never fails; store errors are logged and swallowed.
    pub async fn revoke(&self, jti: &str, remaining_seconds: u64) {
        let ttl = remaining_seconds.max(MIN_REVOCATION_TTL);

        if let Err(e) = self
            .cache
            .set_with_ttl(&revocation_key(jti), "revoked", ttl)
            .await
        {
            warn!(jti = %jti, error = %e, "failed to record token revocation");
        }
    }

    /// Check whether a token ID has been revoked
    ///
    /// Answers `false` when the store is unreachable.
    pub async fn is_revoked(&self, jti: &str) -> bool {
        match self.cache.get(&revocation_key(jti)).await {
            Ok(entry) => entry.is_some(),
            Err(e) => {
                warn!(jti = %jti, error = %e, "revocation check failed, treating as not revoked");
                false
            }
        }
    }
}
