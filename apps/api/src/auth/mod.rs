// Cookie-session authentication: argon2 password hashing, session rows in
// Postgres, and the `Session` / `AdminSession` extractors used by handlers.

pub mod extract;
pub mod handlers;

use argon2::Argon2;
use uuid::Uuid;

pub const COOKIE_NAME: &str = "session";
pub const HASH_LENGTH: usize = 32;

/// Hashes a password with Argon2, using the user's id as the salt. The digest
/// is stored raw (BYTEA) and compared byte-for-byte on login.
pub fn hash_password(password: &str, user_id: &Uuid) -> Result<[u8; HASH_LENGTH], argon2::Error> {
    let mut hash = [0u8; HASH_LENGTH];
    Argon2::default().hash_password_into(password.as_bytes(), user_id.as_bytes(), &mut hash)?;
    Ok(hash)
}

/// Creates the session cookie set on register/login.
pub fn create_cookie(session_id: Uuid) -> cookie::Cookie<'static> {
    cookie::Cookie::build((COOKIE_NAME, session_id.to_string()))
        .http_only(true)
        .path("/")
        .into()
}

/// Creates an expired session cookie used to invalidate a previous one.
pub fn clear_cookie() -> cookie::Cookie<'static> {
    cookie::Cookie::build(COOKIE_NAME)
        .http_only(true)
        .path("/")
        .max_age(cookie::time::Duration::ZERO)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic_per_user() {
        let user_id = Uuid::new_v4();
        let a = hash_password("hunter2hunter2", &user_id).unwrap();
        let b = hash_password("hunter2hunter2", &user_id).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_hash_differs_across_users() {
        let a = hash_password("hunter2hunter2", &Uuid::new_v4()).unwrap();
        let b = hash_password("hunter2hunter2", &Uuid::new_v4()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_hash_differs_across_passwords() {
        let user_id = Uuid::new_v4();
        let a = hash_password("correct-horse", &user_id).unwrap();
        let b = hash_password("battery-staple", &user_id).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        let cookie = clear_cookie();
        assert_eq!(cookie.name(), COOKIE_NAME);
        assert_eq!(cookie.max_age(), Some(cookie::time::Duration::ZERO));
    }

    #[test]
    fn test_create_cookie_carries_session_id() {
        let id = Uuid::new_v4();
        let cookie = create_cookie(id);
        assert_eq!(cookie.name(), COOKIE_NAME);
        assert_eq!(cookie.value(), id.to_string());
    }
}
