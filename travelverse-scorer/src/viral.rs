//! Viral potential for photo guides.

use travelverse_core::scoring::sanitise;
use travelverse_core::{Difficulty, GuideCategory, GuideScorer, PhotoGuide, ScoredPhotoGuide};

const BASE_POTENTIAL: f32 = 0.5_f32;
const CATEGORY_BONUS: f32 = 0.2_f32;
const EASY_BONUS: f32 = 0.2_f32;
const IMAGE_BONUS: f32 = 0.1_f32;
/// Guides need strictly more images than this for the image bonus.
const IMAGE_THRESHOLD: u32 = 3;

/// Whether the category tends to travel well on social feeds.
const fn is_shareable(category: GuideCategory) -> bool {
    matches!(
        category,
        GuideCategory::Scenic | GuideCategory::Sunset | GuideCategory::Adventure
    )
}

/// Viral potential of `guide` in `0.0..=1.0`.
///
/// The guide starts at `0.5` and gains `0.2` for a scenic, sunset or
/// adventure category, `0.2` for an easy route and `0.1` for more than three
/// images. No randomness is involved.
///
/// # Examples
/// ```
/// use travelverse_core::{Difficulty, GuideCategory, PhotoGuide};
/// use travelverse_scorer::viral_potential;
///
/// let guide = PhotoGuide {
///     id: "g1".into(),
///     destination_id: "1".into(),
///     category: GuideCategory::Sunset,
///     difficulty: Difficulty::Easy,
///     image_count: 5,
/// };
/// assert_eq!(viral_potential(&guide), 1.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "viral potential sums fixed bonuses"
)]
pub fn viral_potential(guide: &PhotoGuide) -> f32 {
    let mut potential = BASE_POTENTIAL;
    if is_shareable(guide.category) {
        potential += CATEGORY_BONUS;
    }
    if guide.difficulty == Difficulty::Easy {
        potential += EASY_BONUS;
    }
    if guide.image_count > IMAGE_THRESHOLD {
        potential += IMAGE_BONUS;
    }
    sanitise(potential)
}

/// [`GuideScorer`] backed by [`viral_potential`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViralPotentialScorer;

impl GuideScorer for ViralPotentialScorer {
    fn score(&self, guide: &PhotoGuide) -> ScoredPhotoGuide {
        let potential = viral_potential(guide);
        log::trace!("guide {} viral potential {potential:.2}", guide.id);
        ScoredPhotoGuide {
            guide: guide.clone(),
            viral_potential: potential,
        }
    }
}
