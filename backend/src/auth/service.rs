//! Core business logic for the authentication system.
//!
//! This module holds the two collaborators behind the login and auth-gate
//! flows: the credential store, which resolves usernames to statically
//! configured identities and checks passwords, and the token service, which
//! issues and verifies signed session tokens.

use bcrypt::verify;
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::auth::errors::AuthError;
use crate::auth::models::{Claims, User};

/// Session token lifetime.
const TOKEN_TTL_HOURS: i64 = 24;

/// bcrypt hash of "password", shared by both seed accounts.
const SEED_PASSWORD_HASH: &str = "$2a$10$92IXUNpkjO0rOQ5byMi.Ye4oKoEa3Ro9llC/.og/at2.uheWG/igi";

/// Read-only source of user identities.
///
/// Abstracted behind a trait so the fixed two-user map can later be swapped
/// for a real identity provider without touching the handlers.
pub trait CredentialStore: Send + Sync {
    fn lookup(&self, username: &str) -> Option<&User>;

    fn lookup_by_id(&self, id: i32) -> Option<&User>;

    /// Check a password against the stored hash for `username`.
    ///
    /// Comparison is delegated to bcrypt, which is deliberately slow and
    /// salted; an unknown username and a wrong password are indistinguishable
    /// to the caller.
    fn verify_password(&self, username: &str, password: &str) -> Option<&User> {
        let user = self.lookup(username)?;
        match verify(password, &user.password_hash) {
            Ok(true) => Some(user),
            _ => None,
        }
    }
}

/// The fixed two-user credential store for this two-person system.
///
/// Built once at startup; no runtime mutation is exposed.
pub struct StaticCredentials {
    users: Vec<User>,
}

impl StaticCredentials {
    pub fn seeded() -> Self {
        Self {
            users: vec![
                User {
                    id: 1,
                    username: "user1".to_string(),
                    password_hash: SEED_PASSWORD_HASH.to_string(),
                },
                User {
                    id: 2,
                    username: "user2".to_string(),
                    password_hash: SEED_PASSWORD_HASH.to_string(),
                },
            ],
        }
    }
}

impl CredentialStore for StaticCredentials {
    fn lookup(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    fn lookup_by_id(&self, id: i32) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }
}

/// Issues and verifies signed, time-limited session tokens.
///
/// Tokens are HS256 JWTs carrying `{user_id, username, iat, exp}`. Validity
/// is purely a function of signature and expiry; there is no server-side
/// session state and no revocation. Verification only accepts HS256, so a
/// token presenting any other algorithm is rejected outright.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Build a service around a symmetric secret. The caller (config loading)
    /// guarantees the secret is non-empty before this is ever reached.
    pub fn new(secret: &str) -> Self {
        // Validation::new pins the accepted algorithm set to HS256 and
        // requires an exp claim. The default 60s leeway tolerates minor
        // clock skew between issuer and verifier.
        let validation = Validation::new(Algorithm::HS256);

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn issue(&self, user_id: i32, username: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            user_id,
            username: username.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(|_| AuthError::TokenCreation)
    }

    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::InvalidToken,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key";

    #[test]
    fn issued_token_verifies_with_same_claims() {
        let service = TokenService::new(SECRET);

        let token = service.issue(1, "testuser").unwrap();
        assert!(!token.is_empty());

        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.user_id, 1);
        assert_eq!(claims.username, "testuser");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn garbage_token_is_rejected() {
        let service = TokenService::new(SECRET);
        assert_eq!(
            service.verify("invalid-token"),
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn expired_token_is_rejected_as_expired() {
        let service = TokenService::new(SECRET);

        let now = Utc::now();
        let claims = Claims {
            user_id: 1,
            username: "testuser".to_string(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert_eq!(service.verify(&token), Err(AuthError::Expired));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let issuer = TokenService::new("some-other-secret");
        let verifier = TokenService::new(SECRET);

        let token = issuer.issue(1, "testuser").unwrap();
        assert_eq!(verifier.verify(&token), Err(AuthError::InvalidToken));
    }

    #[test]
    fn token_with_different_algorithm_is_rejected() {
        let service = TokenService::new(SECRET);

        let now = Utc::now();
        let claims = Claims {
            user_id: 1,
            username: "testuser".to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(1)).timestamp(),
        };
        // Correct secret, wrong algorithm: must still fail.
        let token = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert_eq!(service.verify(&token), Err(AuthError::InvalidToken));
    }

    #[test]
    fn seeded_credentials_accept_the_right_password() {
        let store = StaticCredentials::seeded();

        let user = store.verify_password("user1", "password").unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.username, "user1");

        let user = store.verify_password("user2", "password").unwrap();
        assert_eq!(user.id, 2);
    }

    #[test]
    fn wrong_password_and_unknown_user_are_rejected() {
        let store = StaticCredentials::seeded();
        assert!(store.verify_password("user1", "wrong").is_none());
        assert!(store.verify_password("nobody", "password").is_none());
    }

    #[test]
    fn lookup_by_id_finds_seeded_users() {
        let store = StaticCredentials::seeded();
        assert_eq!(store.lookup_by_id(2).unwrap().username, "user2");
        assert!(store.lookup_by_id(99).is_none());
    }
}
