//! Connection authentication gateway

use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::entities::token::TokenType;
use crate::errors::{DomainResult, TokenError};
use crate::repositories::UserLookup;

use super::registry::ConnectionRegistry;
use crate::services::token::{TokenIssuer, TokenServiceConfig};

/// Reasons a realtime connection attempt is refused
///
/// These are protocol-level refusals delivered to the client before the
/// connection is registered, never transport errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionRefused {
    #[error("Authentication token missing")]
    MissingToken,

    #[error("Malformed authentication token")]
    Malformed,

    #[error("Authentication token expired")]
    Expired,

    #[error("Invalid authentication token")]
    Invalid,

    #[error("Unknown user")]
    UnknownUser,
}

/// Authenticates realtime connections and registers them
///
/// Verification covers signature, expiry and token type only. Revocation is
/// deliberately not consulted here: a connection authorized at handshake
/// time stays up for its natural lifetime, matching the access token model
/// where possession of an unexpired token is sufficient.
pub struct RealtimeGateway<U> {
    issuer: TokenIssuer,
    registry: ConnectionRegistry,
    users: U,
}

impl<U: UserLookup> RealtimeGateway<U> {
    /// Create a new gateway
    pub fn new(
        config: &TokenServiceConfig,
        registry: ConnectionRegistry,
        users: U,
    ) -> DomainResult<Self> {
        Ok(Self {
            issuer: TokenIssuer::new(config)?,
            registry,
            users,
        })
    }

    /// Authenticate a connection attempt and bind it to its user
    ///
    /// # Arguments
    /// * `token` - Access token presented at handshake, if any
    /// * `connection_id` - Transport-assigned connection identifier
    /// * `sender` - Outbound channel for the connection
    ///
    /// # Returns
    /// The authenticated user's ID, or a typed refusal.
    pub async fn authenticate_and_register(
        &self,
        token: Option<&str>,
        connection_id: Uuid,
        sender: UnboundedSender<String>,
    ) -> Result<i64, ConnectionRefused> {
        let token = match token {
            Some(t) if !t.is_empty() => t,
            _ => return Err(ConnectionRefused::MissingToken),
        };

        if token.split('.').count() != 3 {
            return Err(ConnectionRefused::Malformed);
        }

        let claims = self
            .issuer
            .verify(token, TokenType::Access)
            .map_err(|e| match e {
                TokenError::Expired => ConnectionRefused::Expired,
                _ => ConnectionRefused::Invalid,
            })?;

        let user_id = claims
            .subject()
            .map_err(|_| ConnectionRefused::Invalid)?;

        match self.users.exists(user_id).await {
            Ok(true) => {}
            Ok(false) => return Err(ConnectionRefused::UnknownUser),
            Err(e) => {
                warn!(user_id, error = %e, "user lookup failed during handshake");
                return Err(ConnectionRefused::UnknownUser);
            }
        }

        self.registry.bind(connection_id, user_id, sender).await;
        info!(user_id, %connection_id, "realtime connection established");
        Ok(user_id)
    }

    /// Tear down a connection
    pub async fn disconnect(&self, connection_id: Uuid) {
        self.registry.unbind(connection_id).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UserProfile;
    use crate::repositories::MockUserLookup;
    use tokio::sync::mpsc;

    fn config() -> TokenServiceConfig {
        TokenServiceConfig {
            secret: "gateway-test-secret".to_string(),
            ..Default::default()
        }
    }

    async fn gateway_with_user(user_id: i64) -> (RealtimeGateway<MockUserLookup>, ConnectionRegistry) {
        let users = MockUserLookup::new();
        users
            .insert(UserProfile::new(user_id, "ada", "Ada L."))
            .await;
        let registry = ConnectionRegistry::new();
        let gateway = RealtimeGateway::new(&config(), registry.clone(), users).unwrap();
        (gateway, registry)
    }

    fn access_token(subject: i64, config: &TokenServiceConfig) -> String {
        let issuer = TokenIssuer::new(config).unwrap();
        issuer.mint(subject, TokenType::Access).unwrap().0
    }

    #[tokio::test]
    async fn test_valid_token_binds_connection() {
        let (gateway, registry) = gateway_with_user(7).await;
        let (tx, _rx) = mpsc::unbounded_channel();

        let token = access_token(7, &config());
        let user_id = gateway
            .authenticate_and_register(Some(&token), Uuid::new_v4(), tx)
            .await
            .unwrap();

        assert_eq!(user_id, 7);
        assert_eq!(registry.connection_count(7).await, 1);
    }

    #[tokio::test]
    async fn test_missing_token_refused() {
        let (gateway, _) = gateway_with_user(7).await;
        let (tx, _rx) = mpsc::unbounded_channel();

        let result = gateway
            .authenticate_and_register(None, Uuid::new_v4(), tx)
            .await;
        assert_eq!(result, Err(ConnectionRefused::MissingToken));
    }

    #[tokio::test]
    async fn test_malformed_token_refused() {
        let (gateway, _) = gateway_with_user(7).await;
        let (tx, _rx) = mpsc::unbounded_channel();

        let result = gateway
            .authenticate_and_register(Some("only.two"), Uuid::new_v4(), tx)
            .await;
        assert_eq!(result, Err(ConnectionRefused::Malformed));
    }

    #[tokio::test]
    async fn test_wrong_secret_refused() {
        let (gateway, registry) = gateway_with_user(7).await;
        let (tx, _rx) = mpsc::unbounded_channel();

        let other = TokenServiceConfig {
            secret: "some-other-secret".to_string(),
            ..Default::default()
        };
        let token = access_token(7, &other);

        let result = gateway
            .authenticate_and_register(Some(&token), Uuid::new_v4(), tx)
            .await;
        assert_eq!(result, Err(ConnectionRefused::Invalid));
        assert_eq!(registry.connection_count(7).await, 0);
    }

    #[tokio::test]
    async fn test_expired_token_refused() {
        let (gateway, _) = gateway_with_user(7).await;
        let (tx, _rx) = mpsc::unbounded_channel();

        let expired = TokenServiceConfig {
            access_expiry_seconds: -10,
            ..config()
        };
        let token = access_token(7, &expired);

        let result = gateway
            .authenticate_and_register(Some(&token), Uuid::new_v4(), tx)
            .await;
        assert_eq!(result, Err(ConnectionRefused::Expired));
    }

    #[tokio::test]
    async fn test_deleted_subject_refused() {
        let (gateway, _) = gateway_with_user(7).await;
        let (tx, _rx) = mpsc::unbounded_channel();

        let token = access_token(99, &config());
        let result = gateway
            .authenticate_and_register(Some(&token), Uuid::new_v4(), tx)
            .await;
        assert_eq!(result, Err(ConnectionRefused::UnknownUser));
    }

    #[tokio::test]
    async fn test_refresh_token_refused_at_handshake() {
        let (gateway, _) = gateway_with_user(7).await;
        let (tx, _rx) = mpsc::unbounded_channel();

        let issuer = TokenIssuer::new(&config()).unwrap();
        let (token, _) = issuer.mint(7, TokenType::Refresh).unwrap();

        let result = gateway
            .authenticate_and_register(Some(&token), Uuid::new_v4(), tx)
            .await;
        assert_eq!(result, Err(ConnectionRefused::Invalid));
    }

    #[tokio::test]
    async fn test_disconnect_unbinds() {
        let (gateway, registry) = gateway_with_user(7).await;
        let (tx, _rx) = mpsc::unbounded_channel();
        let connection_id = Uuid::new_v4();

        let token = access_token(7, &config());
        gateway
            .authenticate_and_register(Some(&token), connection_id, tx)
            .await
            .unwrap();

        gateway.disconnect(connection_id).await;
        assert_eq!(registry.connection_count(7).await, 0);
    }
}
