use chrono::Utc;
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::{auth::AuthError, Error},
    model::auth::Role,
};

/// Tokens are valid for 24 hours from issuance. There is no revocation;
/// account deactivation is enforced by the call sites that re-fetch the user.
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// The payload carried in every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: Uuid,
    pub email: String,
    pub role: Role,
    pub practice_id: Uuid,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and verifies HS256 access tokens with the process-wide secret.
#[derive(Clone)]
pub struct TokenAuthority {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenAuthority {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Signs a token for the given user.
    pub fn issue(&self, user: &entity::user::Model) -> Result<String, Error> {
        let role = Role::from_str(&user.role)
            .ok_or_else(|| Error::Internal(format!("unknown role {:?} on user", user.role)))?;

        let iat = Utc::now().timestamp();
        let claims = AccessClaims {
            sub: user.id,
            email: user.email.clone(),
            role,
            practice_id: user.practice_id,
            iat,
            exp: iat + TOKEN_TTL_SECS,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|err| Error::Internal(format!("token signing failed: {err}")))
    }

    /// Checks signature and expiry. Does not check that the account still
    /// exists or is active.
    pub fn verify(&self, token: &str) -> Result<AccessClaims, AuthError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<AccessClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })
    }
}

#[cfg(test)]
mod tests {
    use bitewing_test_utils::prelude::*;
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};

    use crate::{
        error::auth::AuthError,
        service::token::{AccessClaims, TokenAuthority},
    };

    async fn test_user() -> Result<entity::user::Model, TestError> {
        let test = test_setup_with_all_tables!()?;
        let practice = fixtures::insert_practice(&test.db, "Sunrise Dental").await?;

        fixtures::insert_user(&test.db, practice.id, "ada@example.com", "staff", true).await
    }

    /// Expect a freshly issued token to verify and carry the user's identity
    #[tokio::test]
    async fn test_issue_verify_roundtrip() -> Result<(), TestError> {
        let user = test_user().await?;
        let authority = TokenAuthority::new(TEST_JWT_SECRET);

        let token = authority.issue(&user).unwrap();
        let claims = authority.verify(&token).unwrap();

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.practice_id, user.practice_id);

        Ok(())
    }

    /// Expect a token past its expiry to fail with TokenExpired
    #[tokio::test]
    async fn test_expired_token() -> Result<(), TestError> {
        let user = test_user().await?;
        let authority = TokenAuthority::new(TEST_JWT_SECRET);

        let iat = Utc::now().timestamp() - 100_000;
        let claims = AccessClaims {
            sub: user.id,
            email: user.email.clone(),
            role: crate::model::auth::Role::Staff,
            practice_id: user.practice_id,
            iat,
            exp: iat + 10,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
        )
        .unwrap();

        let result = authority.verify(&token);

        assert_eq!(result.unwrap_err(), AuthError::TokenExpired);

        Ok(())
    }

    /// Expect a token signed with a different secret to fail as invalid
    #[tokio::test]
    async fn test_wrong_secret() -> Result<(), TestError> {
        let user = test_user().await?;
        let authority = TokenAuthority::new(TEST_JWT_SECRET);
        let other = TokenAuthority::new("some-other-secret");

        let token = other.issue(&user).unwrap();
        let result = authority.verify(&token);

        assert_eq!(result.unwrap_err(), AuthError::InvalidToken);

        Ok(())
    }

    /// Expect a tampered token to fail as invalid
    #[tokio::test]
    async fn test_tampered_token() -> Result<(), TestError> {
        let user = test_user().await?;
        let authority = TokenAuthority::new(TEST_JWT_SECRET);

        let mut token = authority.issue(&user).unwrap();
        token.pop();
        token.push('x');

        let result = authority.verify(&token);

        assert_eq!(result.unwrap_err(), AuthError::InvalidToken);

        Ok(())
    }
}
