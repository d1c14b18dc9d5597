//! Auth DTOs

use serde::{Deserialize, Serialize};

/// Response body for POST /api/v1/auth/refresh
///
/// The rotated tokens themselves are set as HTTP-only cookies; the body
/// carries only what client scripts need.
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub message: String,
    pub access_token_exp: i64,
    pub csrf_access_token: String,
    pub csrf_refresh_token: String,
}

/// Response body for POST /api/v1/auth/logout
#[derive(Debug, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_response_shape() {
        let response = RefreshResponse {
            message: "Token refreshed".to_string(),
            access_token_exp: 1_700_000_900,
            csrf_access_token: "csrf-a".to_string(),
            csrf_refresh_token: "csrf-r".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["message"], "Token refreshed");
        assert!(json.get("access_token").is_none());
        assert!(json.get("refresh_token").is_none());
    }
}
