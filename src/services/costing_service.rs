//! Cálculo de costo operativo por kilómetro
//!
//! Función pura: costo = precio por litro / eficiencia en km por litro.
//! Con eficiencia no positiva (o entradas no finitas) devuelve 0.0,
//! nunca NaN, infinito ni panic. Se recalcula en cada cambio de entrada;
//! llamadas repetidas con las mismas entradas dan el mismo resultado.

use crate::utils::rounding::round2;

/// Costo por kilómetro en AED, redondeado a 2 decimales
pub fn compute_cost_per_km(fuel_price_per_litre: f64, fuel_efficiency_km_per_litre: f64) -> f64 {
    if !fuel_price_per_litre.is_finite() || !fuel_efficiency_km_per_litre.is_finite() {
        return 0.0;
    }
    if fuel_efficiency_km_per_litre <= 0.0 {
        return 0.0;
    }
    let cost = round2(fuel_price_per_litre / fuel_efficiency_km_per_litre);
    // eficiencias subnormales pueden desbordar la división
    if cost.is_finite() {
        cost
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_matches_rounded_division() {
        assert_eq!(compute_cost_per_km(2.90, 8.6), 0.34);
        assert_eq!(compute_cost_per_km(3.14, 15.0), 0.21);
        assert_eq!(compute_cost_per_km(0.0, 10.0), 0.0);
    }

    #[test]
    fn test_cost_is_idempotent() {
        let first = compute_cost_per_km(2.68, 7.3);
        let second = compute_cost_per_km(2.68, 7.3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_non_positive_efficiency_yields_zero() {
        assert_eq!(compute_cost_per_km(2.90, 0.0), 0.0);
        assert_eq!(compute_cost_per_km(2.90, -4.0), 0.0);
    }

    #[test]
    fn test_degenerate_inputs_never_produce_nan() {
        assert_eq!(compute_cost_per_km(f64::NAN, 9.0), 0.0);
        assert_eq!(compute_cost_per_km(2.90, f64::NAN), 0.0);
        assert_eq!(compute_cost_per_km(f64::INFINITY, 9.0), 0.0);

        let cost = compute_cost_per_km(2.90, f64::MIN_POSITIVE);
        assert_eq!(cost, 0.0);
    }
}
