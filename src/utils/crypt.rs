//! Hashing de contraseñas con bcrypt

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::utils::errors::AppError;

/// Hashear una contraseña en texto plano
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST).map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))
}

/// Comparar una contraseña en texto plano contra su hash
pub fn compare_password(password: &str, password_hash: &str) -> Result<bool, AppError> {
    verify(password, password_hash)
        .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))
}

/// Hashear solo cuando hay contraseña nueva; un update sin contraseña
/// deja el hash almacenado intacto.
pub fn hash_password_if_present(password: Option<&str>) -> Result<Option<String>, AppError> {
    match password {
        Some(plain) => Ok(Some(hash_password(plain)?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_compare() {
        let hashed = hash_password("secret123").unwrap();
        assert!(compare_password("secret123", &hashed).unwrap());
        assert!(!compare_password("wrong", &hashed).unwrap());
    }

    #[test]
    fn test_hash_if_present_skips_missing_password() {
        assert_eq!(hash_password_if_present(None).unwrap(), None);

        let hashed = hash_password_if_present(Some("newpass")).unwrap().unwrap();
        assert!(compare_password("newpass", &hashed).unwrap());
    }
}
