//! Compuerta de liquidación
//!
//! Deriva si una salida de ruta está cerrada/liquidada a partir de su
//! estado de ciclo de vida. Separa en los reportes contables las rutas
//! listas para cierre de las que aún deben cobros o confirmaciones del
//! conductor.

use crate::models::route::RouteStatus;

/// Una salida cuenta como liquidada desde que entra al proceso de
/// liquidación; cualquier otro estado no lo es.
pub fn is_settled(status: RouteStatus) -> bool {
    matches!(status, RouteStatus::Liquidating | RouteStatus::Liquidated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn liquidating_states_are_settled() {
        assert!(is_settled(RouteStatus::Liquidating));
        assert!(is_settled(RouteStatus::Liquidated));
    }

    #[test]
    fn other_states_are_not_settled() {
        assert!(!is_settled(RouteStatus::Activated));
        assert!(!is_settled(RouteStatus::Full));
        assert!(!is_settled(RouteStatus::InExecution));
        assert!(!is_settled(RouteStatus::Suspended));
    }

    #[test]
    fn unknown_labels_parse_to_not_settled() {
        assert!(!is_settled(RouteStatus::from_label("estado raro")));
    }
}
