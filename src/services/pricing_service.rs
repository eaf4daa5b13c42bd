//! Cálculo de precios
//!
//! Deriva el precio con descuento del catálogo y resuelve el importe a
//! cobrar por una reserva según el tipo de servicio y la mezcla de
//! pasajeros. Un importe explícito distinto de cero siempre gana: el
//! sistema nunca pisa un precio cargado a mano por el operador.

use rust_decimal::Decimal;

use crate::models::service::{Service, ServiceType};

/// Factor de la tarifa de niño en servicios colectivos: los niños viajan
/// con 25% de descuento.
fn child_fare_factor() -> Decimal {
    Decimal::new(75, 2)
}

/// Precio con descuento de un servicio. Sin descuento (o cero) el precio
/// queda igual al base; con descuento d se aplica base × (1 − d/100).
pub fn discounted_price(base_price: Decimal, discount_percent: Option<Decimal>) -> Decimal {
    match discount_percent {
        Some(d) if !d.is_zero() => {
            let factor = (Decimal::ONE_HUNDRED - d) / Decimal::ONE_HUNDRED;
            (base_price * factor).round_dp(2)
        }
        _ => base_price,
    }
}

/// Importe a cobrar por una reserva.
///
/// - `explicit_charge` presente y distinto de cero se devuelve intacto.
/// - Servicio PRIVATE: precio plano por unidad, el conteo no importa.
/// - Servicio COLLECTIVE: adultos a tarifa completa, niños al 75%.
pub fn resolve_charge(
    service: &Service,
    adults: i32,
    children: i32,
    explicit_charge: Option<Decimal>,
) -> Decimal {
    if let Some(charge) = explicit_charge {
        if !charge.is_zero() {
            return charge;
        }
    }

    match service.service_type {
        ServiceType::Private => service.discounted_price,
        ServiceType::Collective => {
            let unit = service.discounted_price;
            let child_unit = (unit * child_fare_factor()).round_dp(2);
            (Decimal::from(adults) * unit + Decimal::from(children) * child_unit).round_dp(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn service(service_type: ServiceType, base: Decimal, discount: Option<Decimal>) -> Service {
        Service {
            id: Uuid::new_v4(),
            route_id: Some(Uuid::new_v4()),
            tour_id: None,
            base_price: base,
            discount_percent: discount,
            discounted_price: discounted_price(base, discount),
            service_type,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn discount_derivation() {
        assert_eq!(
            discounted_price(Decimal::new(200, 0), Some(Decimal::new(10, 0))),
            Decimal::new(18000, 2)
        );
        assert_eq!(
            discounted_price(Decimal::new(200, 0), None),
            Decimal::new(200, 0)
        );
        assert_eq!(
            discounted_price(Decimal::new(200, 0), Some(Decimal::ZERO)),
            Decimal::new(200, 0)
        );
    }

    #[test]
    fn private_service_ignores_headcount() {
        let s = service(ServiceType::Private, Decimal::new(500, 0), None);
        assert_eq!(resolve_charge(&s, 0, 0, None), Decimal::new(500, 0));
        assert_eq!(resolve_charge(&s, 7, 3, None), Decimal::new(500, 0));
    }

    #[test]
    fn collective_service_prices_per_head_with_child_discount() {
        // precio 100, 2 adultos + 1 niño → 2×100 + 1×75 = 275.00
        let s = service(ServiceType::Collective, Decimal::new(100, 0), None);
        assert_eq!(resolve_charge(&s, 2, 1, None), Decimal::new(27500, 2));
    }

    #[test]
    fn collective_with_discount_end_to_end() {
        // base 100, descuento 20 → 80; 2 adultos + 1 niño → 160 + 60 = 220.00
        let s = service(
            ServiceType::Collective,
            Decimal::new(100, 0),
            Some(Decimal::new(20, 0)),
        );
        assert_eq!(s.discounted_price, Decimal::new(8000, 2));
        assert_eq!(resolve_charge(&s, 2, 1, None), Decimal::new(22000, 2));
    }

    #[test]
    fn explicit_charge_wins() {
        let s = service(ServiceType::Collective, Decimal::new(100, 0), None);
        let explicit = Decimal::new(99999, 2);
        assert_eq!(resolve_charge(&s, 2, 1, Some(explicit)), explicit);

        let p = service(ServiceType::Private, Decimal::new(500, 0), None);
        assert_eq!(resolve_charge(&p, 1, 0, Some(explicit)), explicit);
    }

    #[test]
    fn explicit_zero_does_not_override() {
        let s = service(ServiceType::Collective, Decimal::new(100, 0), None);
        assert_eq!(
            resolve_charge(&s, 1, 0, Some(Decimal::ZERO)),
            Decimal::new(100, 0)
        );
    }
}
