//! JWT minting and verification

use chrono::Duration;
use hmac::{Hmac, Mac};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Validation};
use sha2::Sha256;

use crate::domain::entities::token::{Claims, RotatedTokens, TokenType};
use crate::errors::{DomainError, TokenError};

type HmacSha256 = Hmac<Sha256>;

/// Stateless JWT issuer and verifier
///
/// Tokens are HS256-signed. Verification enforces signature, expiry (no
/// leeway) and the `type` claim; revocation is layered on top by
/// [`super::service::TokenService`].
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    secret: Vec<u8>,
    access_lifetime: Duration,
    refresh_lifetime: Duration,
}

impl TokenIssuer {
    /// Create a new issuer from configuration
    ///
    /// # Errors
    /// Returns `DomainError::Internal` when the signing secret is empty.
    pub fn new(config: &super::TokenServiceConfig) -> Result<Self, DomainError> {
        if config.secret.is_empty() {
            return Err(DomainError::Internal {
                message: "JWT secret must not be empty".to_string(),
            });
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            secret: config.secret.as_bytes().to_vec(),
            access_lifetime: Duration::seconds(config.access_expiry_seconds),
            refresh_lifetime: Duration::seconds(config.refresh_expiry_seconds),
        })
    }

    /// Mint a single token of the given type
    pub fn mint(&self, subject: i64, token_type: TokenType) -> Result<(String, Claims), TokenError> {
        let lifetime = match token_type {
            TokenType::Access => self.access_lifetime,
            TokenType::Refresh => self.refresh_lifetime,
        };
        let claims = Claims::new(subject, token_type, lifetime);
        let token = encode(&jsonwebtoken::Header::default(), &claims, &self.encoding_key)
            .map_err(|_| TokenError::GenerationFailed)?;

        Ok((token, claims))
    }

    /// Mint a fresh access/refresh pair with matching CSRF values
    pub fn issue_pair(&self, subject: i64) -> Result<RotatedTokens, TokenError> {
        let (access_token, access_claims) = self.mint(subject, TokenType::Access)?;
        let (refresh_token, refresh_claims) = self.mint(subject, TokenType::Refresh)?;

        let csrf_access_token = self.csrf_token(&access_token)?;
        let csrf_refresh_token = self.csrf_token(&refresh_token)?;

        Ok(RotatedTokens {
            access_token,
            refresh_token,
            csrf_access_token,
            csrf_refresh_token,
            access_token_exp: access_claims.exp,
            refresh_token_exp: refresh_claims.exp,
        })
    }

    /// Verify a token's signature, expiry and type
    ///
    /// # Errors
    /// * `TokenError::Expired` - Signature is valid but the token is past its expiry
    /// * `TokenError::Invalid` - Bad signature, malformed token, or wrong type
    pub fn verify(&self, token: &str, expected_type: TokenType) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            }
        })?;

        if data.claims.token_type != expected_type {
            return Err(TokenError::Invalid);
        }

        Ok(data.claims)
    }

    /// Derive the double-submit CSRF value for a token
    ///
    /// HMAC-SHA256 over the token's signature segment, keyed with the signing
    /// secret, hex-encoded. Deterministic per token so the stored cookie and
    /// the submitted header can be recomputed and compared server-side.
    pub fn csrf_token(&self, token: &str) -> Result<String, TokenError> {
        let signature = token.rsplit('.').next().ok_or(TokenError::Invalid)?;

        let mut mac =
            HmacSha256::new_from_slice(&self.secret).map_err(|_| TokenError::GenerationFailed)?;
        mac.update(signature.as_bytes());

        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Check a submitted CSRF value against the one derived from the token
    ///
    /// Comparison is constant-time.
    pub fn verify_csrf(&self, token: &str, submitted: &str) -> bool {
        match self.csrf_token(token) {
            Ok(expected) => {
                constant_time_eq::constant_time_eq(expected.as_bytes(), submitted.as_bytes())
            }
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::token::TokenServiceConfig;

    fn issuer() -> TokenIssuer {
        let config = TokenServiceConfig {
            secret: "unit-test-secret".to_string(),
            ..Default::default()
        };
        TokenIssuer::new(&config).unwrap()
    }

    #[test]
    fn test_empty_secret_rejected() {
        let config = TokenServiceConfig {
            secret: String::new(),
            ..Default::default()
        };
        assert!(TokenIssuer::new(&config).is_err());
    }

    #[test]
    fn test_mint_and_verify_roundtrip() {
        let issuer = issuer();
        let (token, claims) = issuer.mint(42, TokenType::Access).unwrap();

        let verified = issuer.verify(&token, TokenType::Access).unwrap();
        assert_eq!(verified, claims);
        assert_eq!(verified.subject().unwrap(), 42);
    }

    #[test]
    fn test_wrong_type_rejected() {
        let issuer = issuer();
        let (token, _) = issuer.mint(42, TokenType::Refresh).unwrap();

        assert_eq!(
            issuer.verify(&token, TokenType::Access),
            Err(TokenError::Invalid)
        );
    }

    #[test]
    fn test_tampered_token_rejected() {
        let issuer = issuer();
        let (token, _) = issuer.mint(42, TokenType::Access).unwrap();
        let tampered = format!("{}x", token);

        assert_eq!(
            issuer.verify(&tampered, TokenType::Access),
            Err(TokenError::Invalid)
        );
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = issuer();
        let other = TokenIssuer::new(&TokenServiceConfig {
            secret: "a-different-secret".to_string(),
            ..Default::default()
        })
        .unwrap();

        let (token, _) = issuer.mint(42, TokenType::Access).unwrap();
        assert_eq!(
            other.verify(&token, TokenType::Access),
            Err(TokenError::Invalid)
        );
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = TokenServiceConfig {
            secret: "unit-test-secret".to_string(),
            access_expiry_seconds: -10,
            ..Default::default()
        };
        let issuer = TokenIssuer::new(&config).unwrap();
        let (token, _) = issuer.mint(42, TokenType::Access).unwrap();

        assert_eq!(
            issuer.verify(&token, TokenType::Access),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_csrf_deterministic_per_token() {
        let issuer = issuer();
        let (a, _) = issuer.mint(1, TokenType::Access).unwrap();
        let (b, _) = issuer.mint(1, TokenType::Access).unwrap();

        assert_eq!(issuer.csrf_token(&a).unwrap(), issuer.csrf_token(&a).unwrap());
        assert_ne!(issuer.csrf_token(&a).unwrap(), issuer.csrf_token(&b).unwrap());
    }

    #[test]
    fn test_verify_csrf() {
        let issuer = issuer();
        let (token, _) = issuer.mint(1, TokenType::Access).unwrap();
        let csrf = issuer.csrf_token(&token).unwrap();

        assert!(issuer.verify_csrf(&token, &csrf));
        assert!(!issuer.verify_csrf(&token, "wrong"));
    }

    #[test]
    fn test_issue_pair_shape() {
        let issuer = issuer();
        let pair = issuer.issue_pair(7).unwrap();

        let access = issuer.verify(&pair.access_token, TokenType::Access).unwrap();
        let refresh = issuer
            .verify(&pair.refresh_token, TokenType::Refresh)
            .unwrap();

        assert_eq!(access.subject().unwrap(), 7);
        assert_eq!(refresh.subject().unwrap(), 7);
        assert_ne!(access.jti, refresh.jti);
        assert_eq!(access.exp, pair.access_token_exp);
        assert_eq!(refresh.exp, pair.refresh_token_exp);
    }
}
