//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos.

use chrono::NaiveDate;
use uuid::Uuid;
use validator::ValidationError;

/// Validar y convertir string a UUID
pub fn validate_uuid(value: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(value).map_err(|_| {
        let mut error = ValidationError::new("uuid");
        error.add_param("value".into(), &value.to_string());
        error
    })
}

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar la mezcla de pasajeros de una reserva: conteos no negativos
/// y al menos un pasajero en total.
pub fn validate_pax(adults: i32, children: i32) -> Result<(), ValidationError> {
    if adults < 0 || children < 0 {
        let mut error = ValidationError::new("pax_negative");
        error.add_param("adults".into(), &adults);
        error.add_param("children".into(), &children);
        return Err(error);
    }
    if adults + children == 0 {
        let mut error = ValidationError::new("pax_empty");
        error.add_param("adults".into(), &adults);
        error.add_param("children".into(), &children);
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("9f5c2c9e-8f50-4bb0-9df5-0d4f7a6a8a31").is_ok());
        assert!(validate_uuid("not-a-uuid").is_err());
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2025-03-14").is_ok());
        assert!(validate_date("14/03/2025").is_err());
    }

    #[test]
    fn test_validate_pax() {
        assert!(validate_pax(2, 1).is_ok());
        assert!(validate_pax(0, 1).is_ok());
        assert!(validate_pax(0, 0).is_err());
        assert!(validate_pax(-1, 2).is_err());
    }
}
