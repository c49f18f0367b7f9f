//! Password hashing, bearer tokens, and the register/login/authenticate
//! operations that gate summarization.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::{SessionStore, StoreError, UserRecord};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("user already exists")]
    DuplicateUser,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("invalid token")]
    InvalidToken,
    #[error("failed to hash password: {0}")]
    Hash(String),
    #[error("failed to issue token: {0}")]
    Token(String),
}

/// Bearer-token claims. `sub` is the user's email; tokens are stateless,
/// validity is signature plus expiry plus a known subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
}

fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hash(e.to_string()))
}

fn verify_password(password: &str, hashed: &str) -> bool {
    PasswordHash::new(hashed)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

/// Issues and verifies HS256-signed bearer tokens.
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl TokenSigner {
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    pub fn issue(&self, email: &str) -> Result<String, AuthError> {
        let claims = Claims {
            sub: email.to_string(),
            exp: Utc::now().timestamp() + self.ttl_secs,
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AuthError::Token(e.to_string()))
    }

    /// Check signature and expiry, returning the subject email.
    pub fn verify(&self, token: &str) -> Result<String, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|_| AuthError::InvalidToken)?;
        if data.claims.sub.is_empty() {
            return Err(AuthError::InvalidToken);
        }
        Ok(data.claims.sub)
    }
}

/// Store a new user with a freshly hashed password.
pub fn register(store: &dyn SessionStore, email: &str, password: &str) -> Result<(), AuthError> {
    let hashed_password = hash_password(password)?;
    store
        .register_user(UserRecord {
            email: email.to_string(),
            hashed_password,
        })
        .map_err(|StoreError::DuplicateUser| AuthError::DuplicateUser)
}

/// Check credentials and issue a bearer token for the user.
pub fn login(
    store: &dyn SessionStore,
    signer: &TokenSigner,
    email: &str,
    password: &str,
) -> Result<String, AuthError> {
    let user = store.find_user(email).ok_or(AuthError::InvalidCredentials)?;
    if !verify_password(password, &user.hashed_password) {
        return Err(AuthError::InvalidCredentials);
    }
    signer.issue(&user.email)
}

/// Resolve a bearer token to a registered user's email.
///
/// Rejects a bad signature, an expired token, and a subject that is not a
/// known registered email.
pub fn authenticate(
    store: &dyn SessionStore,
    signer: &TokenSigner,
    token: &str,
) -> Result<String, AuthError> {
    let email = signer.verify(token)?;
    if store.find_user(&email).is_none() {
        return Err(AuthError::InvalidToken);
    }
    Ok(email)
}
