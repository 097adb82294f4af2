//! Utilidades del sistema
//!
//! Manejo de errores, JWT y hashing de contraseñas.

pub mod crypt;
pub mod errors;
pub mod jwt;
