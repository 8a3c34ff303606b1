//! Servicio de precios de combustible (job mensual)
//!
//! Este módulo reproduce el job que corre el día 1 de cada mes: busca el
//! último anuncio de precios en WAM (Emirates News Agency), extrae los
//! precios por tipo de combustible del texto del artículo y los empuja a
//! POST /api/fuel-types/update de la API externa.

use anyhow::{anyhow, Result};
use chrono::Utc;
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;

use crate::config::environment::EnvironmentConfig;
use crate::models::fuel_type::FuelPriceUpdate;

lazy_static! {
    /// Nombres de combustible en los anuncios → código interno
    static ref FUEL_TYPE_MAPPING: Vec<(&'static str, &'static str)> = vec![
        ("special 95", "PETROL"),
        ("super 98", "SUPER"),
        ("e-plus 91", "EPLUS"),
        ("diesel", "DIESEL"),
    ];

    // montos tipo "3.14" o "2,95"
    static ref AMOUNT_RE: Regex = Regex::new(r"(\d+[.,]\d+)").unwrap();
    static ref TAG_RE: Regex = Regex::new(r"<[^>]+>").unwrap();
    static ref ANCHOR_RE: Regex =
        Regex::new(r#"(?is)<a[^>]+href="([^"]+)"[^>]*>(.*?)</a>"#).unwrap();
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
}

const PRICE_SOURCE: &str = "WAM (Emirates News Agency)";

pub struct FuelPriceService {
    wam_url: String,
    api_url: String,
    client: Client,
}

impl FuelPriceService {
    pub fn new(config: &EnvironmentConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            wam_url: config.wam_fuel_prices_url.clone(),
            api_url: config.app_url.clone(),
            client,
        }
    }

    /// Ejecutar el job completo: scrape → extracción → push.
    /// Devuelve `false` cuando no se encontró ningún precio (no es error).
    pub async fn run_updater(&self) -> Result<bool> {
        log::info!("⛽ Iniciando actualización de precios de combustible");

        let article_text = self.fetch_latest_announcement().await?;
        let Some(update) = extract_fuel_prices(&article_text) else {
            log::warn!("⚠️ El anuncio no contenía precios reconocibles");
            return Ok(false);
        };

        self.send_price_update(&update).await?;
        log::info!("✅ {} precios enviados a la API", update.prices.len());
        Ok(true)
    }

    /// Buscar el anuncio de precios más reciente en WAM y devolver su
    /// texto plano (la página de búsqueda lista lo más nuevo primero)
    pub async fn fetch_latest_announcement(&self) -> Result<String> {
        log::info!("🌐 Buscando anuncios de precios en {}", self.wam_url);

        let search_html = self
            .client
            .get(&self.wam_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let article_url = find_announcement_link(&search_html)
            .ok_or_else(|| anyhow!("No fuel price announcement found on WAM search page"))?;

        let article_url = if article_url.starts_with("http") {
            article_url
        } else {
            format!("https://wam.ae{}", article_url)
        };

        log::info!("📄 Descargando anuncio: {}", article_url);

        let article_html = self
            .client
            .get(&article_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(strip_tags(&article_html))
    }

    /// Enviar los precios extraídos a la API externa
    pub async fn send_price_update(&self, update: &FuelPriceUpdate) -> Result<()> {
        let url = format!("{}/api/fuel-types/update", self.api_url);
        log::info!("📤 Enviando precios a {}", url);

        let response = self.client.post(&url).json(update).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("❌ Push de precios falló con status {}: {}", status, body);
            return Err(anyhow!("price update rejected with status {}", status));
        }

        Ok(())
    }
}

/// Extraer los precios por combustible del texto de un anuncio.
/// Para cada nombre mapeado presente en el texto se inspeccionan los
/// ~100 caracteres siguientes: primero un monto tras "AED", si no el
/// primer número decimal (coma o punto como separador).
pub fn extract_fuel_prices(article_text: &str) -> Option<FuelPriceUpdate> {
    let text = article_text.to_lowercase();
    let mut prices: HashMap<String, f64> = HashMap::new();

    for (name, code) in FUEL_TYPE_MAPPING.iter() {
        let Some(pos) = text.find(name) else {
            continue;
        };

        let segment: String = text[pos..].chars().take(100).collect();

        let mut price = segment.find("aed").and_then(|aed_pos| {
            let tail: String = segment[aed_pos + 3..].chars().take(10).collect();
            tail.split_whitespace()
                .find_map(|word| word.replace(',', ".").parse::<f64>().ok())
        });

        if price.is_none() {
            price = AMOUNT_RE
                .find(&segment)
                .and_then(|m| m.as_str().replace(',', ".").parse::<f64>().ok());
        }

        if let Some(price) = price {
            log::info!("💰 Precio encontrado para {}: {} AED", code, price);
            prices.insert(code.to_string(), price);
        }
    }

    if prices.is_empty() {
        return None;
    }

    Some(FuelPriceUpdate {
        prices,
        date: Utc::now().to_rfc3339(),
        source: PRICE_SOURCE.to_string(),
    })
}

/// Link del primer artículo cuyo título habla de un anuncio de precios
fn find_announcement_link(search_html: &str) -> Option<String> {
    for capture in ANCHOR_RE.captures_iter(search_html) {
        let href = capture.get(1)?.as_str();
        let title = strip_tags(capture.get(2)?.as_str()).to_lowercase();

        let about_prices = title.contains("fuel price") || title.contains("petrol price");
        let is_announcement = title.contains("announce") || title.contains("set");

        if about_prices && is_announcement {
            return Some(href.to_string());
        }
    }
    None
}

/// Reducir HTML a texto plano con espacios normalizados
fn strip_tags(html: &str) -> String {
    let without_tags = TAG_RE.replace_all(html, " ");
    WHITESPACE_RE.replace_all(&without_tags, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_prices_with_aed_pattern() {
        let text = "UAE fuel prices for September: Special 95 will cost AED 3.14 per litre, \
                    while Diesel is set at AED 2.95 per litre.";
        let update = extract_fuel_prices(text).unwrap();

        assert_eq!(update.prices.get("PETROL"), Some(&3.14));
        assert_eq!(update.prices.get("DIESEL"), Some(&2.95));
        assert_eq!(update.source, "WAM (Emirates News Agency)");
    }

    #[test]
    fn test_extract_prices_with_bare_numbers_and_comma_separator() {
        let text = "Super 98 petrol at 3,26 a litre and E-Plus 91 at 2,89 per litre in September.";
        let update = extract_fuel_prices(text).unwrap();

        assert_eq!(update.prices.get("SUPER"), Some(&3.26));
        assert_eq!(update.prices.get("EPLUS"), Some(&2.89));
    }

    #[test]
    fn test_extract_prices_returns_none_without_matches() {
        assert!(extract_fuel_prices("Weather update for Dubai and Abu Dhabi").is_none());
        assert!(extract_fuel_prices("Special 95 stays unchanged").is_none());
    }

    #[test]
    fn test_find_announcement_link_filters_titles() {
        let html = r#"
            <a href="/en/article/1">UAE weather forecast</a>
            <a href="/en/article/2"><span>Fuel prices announced for September</span></a>
        "#;
        assert_eq!(find_announcement_link(html).as_deref(), Some("/en/article/2"));
    }

    #[test]
    fn test_find_announcement_link_none_when_absent() {
        let html = r#"<a href="/en/article/1">UAE weather forecast</a>"#;
        assert!(find_announcement_link(html).is_none());
    }

    #[test]
    fn test_strip_tags_normalizes_whitespace() {
        let html = "<div><p>Special 95:</p>\n<b>AED 3.14</b></div>";
        assert_eq!(strip_tags(html), "Special 95: AED 3.14");
    }
}
