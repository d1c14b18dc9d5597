//! Token lifecycle orchestration

use tracing::{debug, info};

use crate::domain::entities::token::{Claims, RotatedTokens, TokenType};
use crate::errors::{DomainResult, TokenError};
use crate::repositories::ExpiringCache;

use super::config::TokenServiceConfig;
use super::grace::GraceCache;
use super::issuer::TokenIssuer;
use super::revocation::RevocationList;

/// Token lifecycle service
///
/// Owns minting, verification, rotation and revocation. Rotation is
/// single-use with a bounded grace window: after a refresh token has been
/// rotated, presenting it again inside the window returns the already-minted
/// replacement bundle; after the window it is treated as credential theft.
pub struct TokenService<C> {
    issuer: TokenIssuer,
    revocation: RevocationList<C>,
    grace: GraceCache<C>,
}

impl<C: ExpiringCache + Clone> TokenService<C> {
    /// Create a new token service over the given expiring store
    pub fn new(config: TokenServiceConfig, cache: C) -> DomainResult<Self> {
        let issuer = TokenIssuer::new(&config)?;
        let revocation = RevocationList::new(cache.clone());
        let grace = GraceCache::new(cache, config.grace_window_seconds);

        Ok(Self {
            issuer,
            revocation,
            grace,
        })
    }

    /// Issue a fresh token pair for a user, outside of rotation
    ///
    /// Used at login; no prior token is superseded.
    pub fn issue_for(&self, subject: i64) -> DomainResult<RotatedTokens> {
        Ok(self.issuer.issue_pair(subject)?)
    }

    /// Rotate a refresh token
    ///
    /// Verifies the presented token, then resolves it to a replacement pair:
    ///
    /// 1. A token rotated within the grace window yields the stored bundle
    ///    verbatim, so concurrent callers converge on one pair.
    /// 2. A token rotated longer ago is reuse and is rejected.
    /// 3. Otherwise a fresh pair is minted, the grace entry is written, and
    ///    only then is the presented token revoked. Writing grace first keeps
    ///    the reuse-rejection path closed to honest racers: no moment exists
    ///    where the token is revoked but its replacement is unfindable.
    ///
    /// # Errors
    /// * `TokenError::Expired` / `TokenError::Invalid` - Verification failed
    /// * `TokenError::RevokedReuse` - Rotation of an already-superseded token
    ///   outside the grace window
    pub async fn rotate(&self, presented_refresh: &str) -> DomainResult<RotatedTokens> {
        let claims = self.issuer.verify(presented_refresh, TokenType::Refresh)?;

        if let Some(bundle) = self.grace.lookup(&claims.jti).await {
            debug!(jti = %claims.jti, "refresh replay within grace window, returning cached pair");
            return Ok(bundle);
        }

        if self.revocation.is_revoked(&claims.jti).await {
            info!(jti = %claims.jti, "revoked refresh token reuse detected");
            return Err(TokenError::RevokedReuse.into());
        }

        let subject = claims.subject().map_err(|_| TokenError::Invalid)?;
        let bundle = self.issuer.issue_pair(subject)?;

        // Grace entry must land before the revocation entry.
        self.grace.store(&claims.jti, &bundle).await;
        self.revocation
            .revoke(&claims.jti, claims.remaining_seconds())
            .await;

        debug!(user_id = subject, "refresh token rotated");
        Ok(bundle)
    }

    /// Verify an access token and enforce revocation
    pub async fn verify_access(&self, token: &str) -> DomainResult<Claims> {
        let claims = self.issuer.verify(token, TokenType::Access)?;

        if self.revocation.is_revoked(&claims.jti).await {
            return Err(TokenError::RevokedReuse.into());
        }

        Ok(claims)
    }

    /// Revoke a session's tokens at logout
    ///
    /// Best-effort for each token that is present and still verifies; a
    /// token that no longer verifies has nothing left to revoke.
    pub async fn logout(&self, access_token: Option<&str>, refresh_token: Option<&str>) {
        if let Some(token) = access_token {
            if let Ok(claims) = self.issuer.verify(token, TokenType::Access) {
                self.revocation
                    .revoke(&claims.jti, claims.remaining_seconds())
                    .await;
            }
        }

        if let Some(token) = refresh_token {
            if let Ok(claims) = self.issuer.verify(token, TokenType::Refresh) {
                self.revocation
                    .revoke(&claims.jti, claims.remaining_seconds())
                    .await;
            }
        }
    }

    /// Derive the CSRF double-submit value for a token
    pub fn csrf_token(&self, token: &str) -> DomainResult<String> {
        Ok(self.issuer.csrf_token(token)?)
    }

    /// Check a submitted CSRF value against the token it claims to cover
    pub fn verify_csrf(&self, token: &str, submitted: &str) -> bool {
        self.issuer.verify_csrf(token, submitted)
    }
}
