//! Rotation grace cache

use tracing::warn;

use crate::domain::entities::token::RotatedTokens;
use crate::repositories::ExpiringCache;

fn grace_key(jti: &str) -> String {
    format!("grace:{}", jti)
}

/// Short-lived cache of replacement bundles, keyed by the superseded
/// refresh token's ID
///
/// While an entry lives, any caller presenting the superseded token receives
/// the stored bundle verbatim instead of a reuse rejection. Both operations
/// degrade softly on store failure: a failed `store` shrinks the race window
/// to nothing, a failed `lookup` falls through to the revocation check.
pub struct GraceCache<C> {
    cache: C,
    window_seconds: u64,
}

impl<C: ExpiringCache> GraceCache<C> {
    pub fn new(cache: C, window_seconds: u64) -> Self {
        Self {
            cache,
            window_seconds,
        }
    }

    /// Store the replacement bundle for a just-rotated token ID
    ///
    /// Best-effort; serialization or store errors are logged and swallowed.
    pub async fn store(&self, superseded_jti: &str, bundle: &RotatedTokens) {
        let value = match serde_json::to_string(bundle) {
            Ok(v) => v,
            Err(e) => {
                warn!(jti = %superseded_jti, error = %e, "failed to serialize grace bundle");
                return;
            }
        };

        if let Err(e) = self
            .cache
            .set_with_ttl(&grace_key(superseded_jti), &value, self.window_seconds)
            .await
        {
            warn!(jti = %superseded_jti, error = %e, "failed to store grace bundle");
        }
    }

    /// Look up the replacement bundle for a superseded token ID
    ///
    /// Answers `None` when the window has elapsed, the store is unreachable,
    /// or the stored value does not parse.
    pub async fn lookup(&self, jti: &str) -> Option<RotatedTokens> {
        let value = match self.cache.get(&grace_key(jti)).await {
            Ok(v) => v?,
            Err(e) => {
                warn!(jti = %jti, error = %e, "grace lookup failed");
                return None;
            }
        };

        match serde_json::from_str(&value) {
            Ok(bundle) => Some(bundle),
            Err(e) => {
                warn!(jti = %jti, error = %e, "grace bundle did not parse, ignoring");
                None
            }
        }
    }
}
