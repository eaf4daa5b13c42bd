//! Guardián de capacidad
//!
//! Decisión pura de plazas: la ocupación aceptada de una salida de ruta
//! nunca supera las plazas del vehículo asignado. Capacidad cero o sin
//! vehículo significa "sin tope", no "siempre llena". La atomicidad frente
//! a reservas concurrentes la aporta la transacción con lock de fila del
//! repositorio de reservas.

use crate::utils::errors::AppError;

/// Verificar si `requested` pasajeros caben en una salida con `capacity`
/// plazas y `occupied` ya ocupadas. El error lleva los tres números para
/// que el caller pueda responder "solo quedan N plazas".
pub fn check_capacity(capacity: i32, occupied: i64, requested: i64) -> Result<(), AppError> {
    if capacity <= 0 {
        return Ok(());
    }

    if occupied + requested > capacity as i64 {
        return Err(AppError::CapacityExceeded {
            capacity,
            occupied,
            requested,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_is_unconstrained() {
        assert!(check_capacity(0, 100, 50).is_ok());
    }

    #[test]
    fn exact_fill_is_accepted() {
        assert!(check_capacity(20, 18, 2).is_ok());
    }

    #[test]
    fn overflow_is_rejected_with_numbers() {
        let err = check_capacity(20, 19, 2).unwrap_err();
        match err {
            AppError::CapacityExceeded {
                capacity,
                occupied,
                requested,
            } => {
                assert_eq!(capacity, 20);
                assert_eq!(occupied, 19);
                assert_eq!(requested, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn serialized_double_booking_boundary() {
        // cap 20 con 18 ocupadas: dos reservas de 2 pax serializadas por el
        // lock de fila — la primera entra, la segunda ve ocupación 20 y cae
        assert!(check_capacity(20, 18, 2).is_ok());
        assert!(check_capacity(20, 20, 2).is_err());
    }

    #[test]
    fn end_to_end_boundary_from_booking_flow() {
        // cap 4, 3 ocupadas (2 adultos + 1 niño), 2 solicitadas → rechazo {4, 3, 2}
        let err = check_capacity(4, 3, 2).unwrap_err();
        match err {
            AppError::CapacityExceeded {
                capacity,
                occupied,
                requested,
            } => {
                assert_eq!((capacity, occupied, requested), (4, 3, 2));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
