use crate::color::Color;
use crate::error::HueSortError;

/// Named reference colors, kept in insertion order.
///
/// Names are unique; inserting an existing name replaces its color in place
/// so the original position (and with it the tie-break order) is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferencePalette {
    entries: Vec<(String, [f64; 3])>,
}

impl ReferencePalette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, color: [f64; 3]) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = color,
            None => self.entries.push((name, color)),
        }
    }

    pub fn insert_color(&mut self, name: impl Into<String>, color: Color) {
        self.insert(name, color.to_triple());
    }

    pub fn get(&self, name: &str) -> Option<[f64; 3]> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| *c)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64; 3])> {
        self.entries.iter().map(|(n, c)| (n.as_str(), c))
    }
}

impl<S: Into<String>> FromIterator<(S, [f64; 3])> for ReferencePalette {
    fn from_iter<I: IntoIterator<Item = (S, [f64; 3])>>(iter: I) -> Self {
        let mut palette = ReferencePalette::new();
        for (name, color) in iter {
            palette.insert(name, color);
        }
        palette
    }
}

/// Sum of absolute per-channel differences.
pub fn manhattan(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum()
}

/// Name of the palette entry closest to `value` under L1 distance.
///
/// Candidates are visited in palette order and only a strictly smaller
/// distance replaces the current best, so ties go to the earlier entry.
pub fn find_best_color<'a>(
    value: &[f64; 3],
    palette: &'a ReferencePalette,
) -> Result<&'a str, HueSortError> {
    let mut best: Option<&str> = None;
    let mut lowest = f64::INFINITY;

    for (name, color) in palette.iter() {
        let difference = manhattan(value, color);
        if difference < lowest {
            best = Some(name);
            lowest = difference;
        }
    }

    best.ok_or(HueSortError::EmptyPalette)
}
