use std::time::Duration;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

use crate::color::Color;
use crate::error::HueSortError;
use crate::pipeline::classify::ReferencePalette;

use super::PaletteSource;

pub const WEB_COLORS_URL: &str = "https://en.wikipedia.org/wiki/Web_colors";

/// Converts a 0-100 percentage to the 0-255 channel scale.
const PERCENT_TO_CHANNEL: f64 = 2.55;

/// Fetches the basic color table from the Web colors article.
pub struct WebColorsSource {
    pub url: String,
    pub timeout: Duration,
}

impl Default for WebColorsSource {
    fn default() -> Self {
        Self {
            url: WEB_COLORS_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl PaletteSource for WebColorsSource {
    fn name(&self) -> &str {
        "web colors"
    }

    fn fetch(&self) -> Result<ReferencePalette, HueSortError> {
        debug!(url = %self.url, "fetching reference palette");

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("hue-sort/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let body = client.get(&self.url).send()?.error_for_status()?.text()?;

        let palette = parse_web_colors_table(&body)?;
        info!(colors = palette.len(), url = %self.url, "fetched reference palette");
        Ok(palette)
    }
}

fn selector(css: &str) -> Result<Selector, HueSortError> {
    Selector::parse(css)
        .map_err(|e| HueSortError::PaletteParse(format!("invalid selector {css:?}: {e:?}")))
}

/// Parse the basic color table: the second `tbody` on the page, one color per
/// row after the header, name in `th a`, hex code in `td` column 0 and
/// red/green/blue percentages in `td` columns 1 to 3. The hex code is used
/// when the percentages are missing or malformed.
pub fn parse_web_colors_table(html: &str) -> Result<ReferencePalette, HueSortError> {
    let document = Html::parse_document(html);
    let tbody = selector("tbody")?;
    let tr = selector("tr")?;
    let th_a = selector("th a")?;
    let td = selector("td")?;

    let table = document
        .select(&tbody)
        .nth(1)
        .ok_or_else(|| HueSortError::PaletteParse("basic color table not found".into()))?;

    let mut palette = ReferencePalette::new();
    for row in table.select(&tr).skip(1) {
        match parse_row(row, &th_a, &td) {
            Some((name, color)) => palette.insert(name, color),
            None => debug!(row = %row.html(), "skipping unparsable color row"),
        }
    }

    if palette.is_empty() {
        return Err(HueSortError::PaletteParse(
            "basic color table has no colors".into(),
        ));
    }
    Ok(palette)
}

fn parse_row(row: ElementRef<'_>, th_a: &Selector, td: &Selector) -> Option<(String, [f64; 3])> {
    let name = row.select(th_a).next()?.text().collect::<String>();
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    let columns: Vec<ElementRef<'_>> = row.select(td).collect();
    let channel = |i: usize| -> Option<f64> {
        let text = columns.get(i)?.text().collect::<String>();
        let percent: f64 = text
            .trim()
            .trim_end_matches('%')
            .trim()
            .parse()
            .ok()?;
        Some(percent * PERCENT_TO_CHANNEL)
    };

    let from_percentages = || Some([channel(1)?, channel(2)?, channel(3)?]);
    let from_hex = || {
        let text = columns.first()?.text().collect::<String>();
        Color::from_hex(text.trim()).ok().map(Color::to_triple)
    };

    Some((name.to_string(), from_percentages().or_else(from_hex)?))
}
