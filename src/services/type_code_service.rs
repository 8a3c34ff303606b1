//! Generación de códigos de tipo de vehículo
//!
//! Código legible `{MFR3}-{MODEL3}-{YEAR}-{DISAMB}`: tres caracteres de
//! fabricante y modelo, año de modelo y un sufijo de 4 dígitos para evitar
//! colisiones dentro de la sesión. El sufijo no es criptográfico.

use lazy_static::lazy_static;
use std::sync::atomic::{AtomicU64, Ordering};

lazy_static! {
    // secuencia monotónica del proceso, sembrada con el reloj para que
    // dos sesiones consecutivas no arranquen en el mismo punto
    static ref DISAMBIGUATOR_SEQ: AtomicU64 = {
        let seed = chrono::Utc::now().timestamp_millis().unsigned_abs() % 10_000;
        AtomicU64::new(seed)
    };
}

/// Generar el código de tipo a partir de fabricante, modelo y año
pub fn generate_type_code(
    manufacturer: &str,
    model: &str,
    model_year: i32,
    disambiguator: &str,
) -> String {
    format!(
        "{}-{}-{}-{}",
        code_fragment(manufacturer),
        code_fragment(model),
        model_year,
        disambiguator.trim().to_uppercase()
    )
}

/// Siguiente token de desambiguación: 4 dígitos, único dentro de la sesión
pub fn next_disambiguator() -> String {
    let value = DISAMBIGUATOR_SEQ.fetch_add(1, Ordering::Relaxed) % 10_000;
    format!("{:04}", value)
}

// primeros tres alfanuméricos del nombre, en mayúsculas, relleno con X
fn code_fragment(name: &str) -> String {
    let mut fragment: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(3)
        .collect::<String>()
        .to_uppercase();
    while fragment.len() < 3 {
        fragment.push('X');
    }
    fragment
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_type_code_format() {
        assert_eq!(
            generate_type_code("Toyota", "Corolla", 2022, "4821"),
            "TOY-COR-2022-4821"
        );
    }

    #[test]
    fn test_short_names_are_padded() {
        assert_eq!(generate_type_code("BMW", "X5", 2020, "0001"), "BMW-X5X-2020-0001");
        assert_eq!(generate_type_code("Kia", "EV", 2024, "0002"), "KIA-EVX-2024-0002");
    }

    #[test]
    fn test_non_alphanumeric_characters_are_skipped() {
        assert_eq!(
            generate_type_code("Mercedes-Benz", "C 200", 2021, "7777"),
            "MER-C20-2021-7777"
        );
    }

    #[test]
    fn test_disambiguators_are_session_unique() {
        let tokens: Vec<String> = (0..50).map(|_| next_disambiguator()).collect();
        let distinct: HashSet<&String> = tokens.iter().collect();

        assert_eq!(distinct.len(), tokens.len());
        for token in &tokens {
            assert_eq!(token.len(), 4);
            assert!(token.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_regenerated_codes_do_not_collide() {
        let first = generate_type_code("Toyota", "Hiace", 2022, &next_disambiguator());
        let second = generate_type_code("Toyota", "Hiace", 2022, &next_disambiguator());
        assert_ne!(first, second);
    }
}
