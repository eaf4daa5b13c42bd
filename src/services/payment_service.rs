//! Resolución de método de pago
//!
//! Determina cómo se cobró (o no) una reserva: en caja de la casa, por el
//! conductor en campo, pagada por otra vía, o pendiente. La fila de caja
//! manda sobre el estado de la reserva.

use serde::{Deserialize, Serialize};

use crate::models::reservation::ReservationStatus;

/// Método de cobro de una reserva
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Cobrada en la caja de la casa (existe fila de caja)
    HouseCash,
    /// El conductor la cobra o la cobró en campo
    DriverCollected,
    /// Pagada sin fila de caja (otra vía)
    PaidOther,
    /// Aún sin cobrar
    Pending,
}

/// Decisión pura: estado de la reserva + existencia de fila de caja
pub fn resolve(status: ReservationStatus, has_cash_entry: bool) -> PaymentMethod {
    if has_cash_entry {
        return PaymentMethod::HouseCash;
    }

    match status {
        ReservationStatus::ToConfirm | ReservationStatus::Received => {
            PaymentMethod::DriverCollected
        }
        ReservationStatus::Paid => PaymentMethod::PaidOther,
        ReservationStatus::Pending | ReservationStatus::Cancelled => PaymentMethod::Pending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cash_entry_always_wins() {
        assert_eq!(
            resolve(ReservationStatus::Pending, true),
            PaymentMethod::HouseCash
        );
        assert_eq!(
            resolve(ReservationStatus::Paid, true),
            PaymentMethod::HouseCash
        );
    }

    #[test]
    fn driver_collected_states() {
        assert_eq!(
            resolve(ReservationStatus::ToConfirm, false),
            PaymentMethod::DriverCollected
        );
        assert_eq!(
            resolve(ReservationStatus::Received, false),
            PaymentMethod::DriverCollected
        );
    }

    #[test]
    fn paid_without_cash_entry_is_paid_other() {
        assert_eq!(
            resolve(ReservationStatus::Paid, false),
            PaymentMethod::PaidOther
        );
    }

    #[test]
    fn everything_else_is_pending() {
        assert_eq!(
            resolve(ReservationStatus::Pending, false),
            PaymentMethod::Pending
        );
        assert_eq!(
            resolve(ReservationStatus::Cancelled, false),
            PaymentMethod::Pending
        );
    }
}
