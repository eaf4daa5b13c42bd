//! Clasificador de escenarios de liquidación
//!
//! Función pura de (agencia operadora, agencia de traspaso, agencia casa).
//! La tabla es exhaustiva y mutuamente excluyente: toda reserva con agencia
//! operadora resuelta cae en exactamente uno de los seis escenarios que las
//! vistas contables usan para decidir quién cobra qué.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Escenario de venta/operación/cobro relativo a la agencia casa
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SettlementScenario {
    /// La casa opera y vendió directo, sin traspaso
    DirectSale,
    /// La casa opera y se traspasó a sí misma
    InternalReallocation,
    /// La casa opera pero traspasó la reserva a un tercero
    HouseTransfersOut,
    /// Opera un tercero sin traspaso: la casa recibió la venta y la deriva
    HouseReceivesAndOperates,
    /// Opera un tercero y se traspasó a otro tercero: la casa es puente
    HouseAsBridge,
    /// Opera un tercero y el traspaso apunta a la casa
    SpecialCase,
}

/// Clasificar una reserva según quién opera y hacia dónde se traspasó
pub fn classify(
    operating_agency: Uuid,
    transfer_agency: Option<Uuid>,
    house_agency: Uuid,
) -> SettlementScenario {
    let house_operates = operating_agency == house_agency;

    match (house_operates, transfer_agency) {
        (true, None) => SettlementScenario::DirectSale,
        (true, Some(t)) if t == house_agency => SettlementScenario::InternalReallocation,
        (true, Some(_)) => SettlementScenario::HouseTransfersOut,
        (false, None) => SettlementScenario::HouseReceivesAndOperates,
        (false, Some(t)) if t == house_agency => SettlementScenario::SpecialCase,
        (false, Some(_)) => SettlementScenario::HouseAsBridge,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_six_combinations_map_to_distinct_scenarios() {
        let house = Uuid::new_v4();
        let other = Uuid::new_v4();
        let third = Uuid::new_v4();

        assert_eq!(classify(house, None, house), SettlementScenario::DirectSale);
        assert_eq!(
            classify(house, Some(house), house),
            SettlementScenario::InternalReallocation
        );
        assert_eq!(
            classify(house, Some(other), house),
            SettlementScenario::HouseTransfersOut
        );
        assert_eq!(
            classify(other, None, house),
            SettlementScenario::HouseReceivesAndOperates
        );
        assert_eq!(
            classify(other, Some(third), house),
            SettlementScenario::HouseAsBridge
        );
        assert_eq!(
            classify(other, Some(house), house),
            SettlementScenario::SpecialCase
        );
    }

    #[test]
    fn classification_is_total_over_valid_inputs() {
        // cualquier combinación (operadora, traspaso) produce un escenario;
        // no existe resultado "sin clasificar"
        let house = Uuid::new_v4();
        let agencies = [house, Uuid::new_v4(), Uuid::new_v4()];
        let transfers = [None, Some(house), Some(Uuid::new_v4())];

        for op in agencies {
            for tr in transfers {
                let _ = classify(op, tr, house);
            }
        }
    }
}
