//! Redondeo de valores derivados
//!
//! Eficiencia ajustada y costo por km se redondean half-away-from-zero,
//! igual que los históricos de costos ya persistidos.

// El producto de decimales cortos no siempre es representable en binario
// (9.0 * 0.95 = 8.549999…); el corrector absorbe ese error de
// representación antes de redondear, sin alterar mitades genuinas.
const REPRESENTATION_EPSILON: f64 = 1e-9;

fn round_scaled(value: f64, factor: f64) -> f64 {
    let scaled = value * factor;
    (scaled + scaled.signum() * REPRESENTATION_EPSILON).round() / factor
}

/// Redondear a 1 decimal, mitad lejos de cero
pub fn round1(value: f64) -> f64 {
    round_scaled(value, 10.0)
}

/// Redondear a 2 decimales, mitad lejos de cero
pub fn round2(value: f64) -> f64 {
    round_scaled(value, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_half_away_from_zero() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(0.336), 0.34);
        assert_eq!(round2(2.0), 2.0);
    }

    #[test]
    fn test_round1_matches_historical_efficiency_figures() {
        // 9.0 km/l con factor de edad 0.95
        assert_eq!(round1(9.0 * 0.95), 8.6);
        assert_eq!(round1(7.04), 7.0);
        assert_eq!(round1(-1.25), -1.3);
    }

    #[test]
    fn test_rounding_absorbs_binary_representation_error() {
        // 9.0 * 0.95 = 8.549999999999999 en f64; debe redondear como 8.55
        assert_eq!(round1(9.0 * 0.95), 8.6);
        // 2.675 * 100 = 267.49999999999997 en f64; debe redondear como 267.5
        assert_eq!(round2(2.675), 2.68);
        assert_eq!(round2(-2.675), -2.68);
        // una mitad genuina sigue yendo lejos de cero, no más allá
        assert_eq!(round2(0.335), 0.34);
        assert_eq!(round1(8.55), 8.6);
    }
}
