//! Deterministic random sources and sample records used by unit and
//! behaviour tests.

use std::collections::BTreeSet;

use crate::{
    Coordinates, CostRange, Culture, Destination, Difficulty, GuideCategory, PhotoGuide,
    RandomSource, TravelInfo,
};

/// `RandomSource` returning the same draw forever.
///
/// A draw of `0.5` cancels noise in every scorer.
#[derive(Debug, Clone, Copy)]
pub struct FixedSource {
    value: f64,
    draws: u64,
}

impl FixedSource {
    /// Create a source that always yields `value`.
    pub const fn new(value: f64) -> Self {
        Self { value, draws: 0 }
    }

    /// Number of draws taken so far.
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}

impl RandomSource for FixedSource {
    fn draw(&mut self) -> f64 {
        self.draws += 1;
        self.value
    }
}

/// `RandomSource` cycling through a fixed list of draws.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    next: usize,
}

impl SequenceSource {
    /// Create a source cycling through `values`; an empty list yields `0.5`.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }
}

impl RandomSource for SequenceSource {
    fn draw(&mut self) -> f64 {
        let Some(value) = self.values.get(self.next).copied() else {
            return 0.5;
        };
        self.next = (self.next + 1) % self.values.len();
        value
    }
}

/// A destination with no culture, history, accommodation or photo spots and
/// a daily cost of `50..=150`.
pub fn sample_destination(id: &str, name: &str) -> Destination {
    Destination {
        id: id.to_owned(),
        name: name.to_owned(),
        country: "Testland".to_owned(),
        coordinates: Coordinates::new(0.0, 0.0),
        activities: Vec::new(),
        culture: None,
        history: String::new(),
        travel_info: TravelInfo {
            average_cost_range: CostRange { min: 50, max: 150 },
            best_time_to_visit: "All year".to_owned(),
        },
        accommodation: Vec::new(),
        photo_spot_count: 0,
    }
}

/// A cultural profile carrying the given traditions.
pub fn culture_with_traditions(traditions: &[&str]) -> Culture {
    Culture {
        language: "Esperanto".to_owned(),
        currency: "EUR".to_owned(),
        traditions: traditions.iter().map(|&t| t.to_owned()).collect(),
        festivals: BTreeSet::new(),
    }
}

/// A photo guide for destination `"1"`.
pub fn sample_guide(
    id: &str,
    category: GuideCategory,
    difficulty: Difficulty,
    image_count: u32,
) -> PhotoGuide {
    PhotoGuide {
        id: id.to_owned(),
        destination_id: "1".to_owned(),
        category,
        difficulty,
        image_count,
    }
}
