//! Property coverage for score ranges, determinism and monotonicity.

use proptest::prelude::*;
use travelverse_core::test_support::{SequenceSource, culture_with_traditions, sample_destination};
use travelverse_core::{
    BudgetRange, Destination, DestinationScorer, Difficulty, GuideCategory, PhotoGuide,
    TravelStyle, TravelerProfile,
};
use travelverse_scorer::{RelevanceScorer, rank_destinations, viral_potential};

const INTERESTS: [&str; 5] = ["culture", "adventure", "photography", "nature", "food"];
const ACTIVITIES: [&str; 5] = [
    "Adventure rafting",
    "Nature walk",
    "Hiking trail",
    "Relaxation spa",
    "Museum tour",
];
const BUDGETS: [BudgetRange; 3] = [BudgetRange::Budget, BudgetRange::Moderate, BudgetRange::Luxury];
const STYLES: [TravelStyle; 4] = [
    TravelStyle::Adventure,
    TravelStyle::Cultural,
    TravelStyle::Luxury,
    TravelStyle::Balanced,
];
const CATEGORIES: [GuideCategory; 6] = [
    GuideCategory::Scenic,
    GuideCategory::Architectural,
    GuideCategory::Cultural,
    GuideCategory::Adventure,
    GuideCategory::Food,
    GuideCategory::Sunset,
];
const DIFFICULTIES: [Difficulty; 4] = [
    Difficulty::Easy,
    Difficulty::Moderate,
    Difficulty::Challenging,
    Difficulty::Expert,
];

fn profile_strategy() -> impl Strategy<Value = TravelerProfile> {
    (
        prop::sample::select(BUDGETS.to_vec()),
        prop::sample::select(STYLES.to_vec()),
        prop::sample::subsequence(INTERESTS.to_vec(), 0..=INTERESTS.len()),
    )
        .prop_map(|(budget, style, interests)| {
            interests
                .into_iter()
                .fold(TravelerProfile::new(budget, style), TravelerProfile::with_interest)
        })
}

fn destination_strategy() -> impl Strategy<Value = Destination> {
    (
        prop::sample::subsequence(ACTIVITIES.to_vec(), 0..=ACTIVITIES.len()),
        any::<bool>(),
        0_u32..10,
        0_u32..600,
    )
        .prop_map(|(activities, cultured, spots, max_cost)| {
            let mut destination = sample_destination("p", "Prop").with_activities(activities);
            if cultured {
                destination.culture = Some(culture_with_traditions(&["Festival"]));
                destination.history = "Old.".to_owned();
            }
            destination.photo_spot_count = spots;
            destination.travel_info.average_cost_range.max = max_cost;
            destination
        })
}

fn guide(category: GuideCategory, difficulty: Difficulty, image_count: u32) -> PhotoGuide {
    PhotoGuide {
        id: "g".into(),
        destination_id: "1".into(),
        category,
        difficulty,
        image_count,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn relevance_outputs_stay_in_unit_range(
        profile in profile_strategy(),
        destination in destination_strategy(),
        draws in prop::collection::vec(0.0_f64..1.0, 1..8),
    ) {
        let scored = RelevanceScorer::new().score(&profile, &destination, &mut SequenceSource::new(draws));
        prop_assert!((0.0..=1.0).contains(&scored.score));
        prop_assert!((0.0..=1.0).contains(&scored.confidence));
        prop_assert!(!scored.justification.is_empty());
    }

    #[test]
    fn relevance_is_deterministic_for_equal_streams(
        profile in profile_strategy(),
        destination in destination_strategy(),
        draws in prop::collection::vec(0.0_f64..1.0, 2..6),
    ) {
        let scorer = RelevanceScorer::new();
        let first = scorer.score(&profile, &destination, &mut SequenceSource::new(draws.clone()));
        let second = scorer.score(&profile, &destination, &mut SequenceSource::new(draws));
        prop_assert_eq!(first.score.to_bits(), second.score.to_bits());
        prop_assert_eq!(first.justification, second.justification);
    }

    #[test]
    fn ranking_is_sorted_descending(
        profile in profile_strategy(),
        destinations in prop::collection::vec(destination_strategy(), 1..8),
        draws in prop::collection::vec(0.0_f64..1.0, 1..8),
    ) {
        let ranked = rank_destinations(
            &RelevanceScorer::new(),
            &profile,
            &destinations,
            &mut SequenceSource::new(draws),
        );
        prop_assert!(ranked.is_ok());
        let sorted = ranked.unwrap_or_default();
        prop_assert_eq!(sorted.len(), destinations.len());
        let is_descending = sorted.windows(2).all(|pair| match pair {
            [higher, lower] => higher.score >= lower.score,
            _ => true,
        });
        prop_assert!(is_descending);
    }

    #[test]
    fn viral_potential_is_monotone_in_image_count(
        category in prop::sample::select(CATEGORIES.to_vec()),
        difficulty in prop::sample::select(DIFFICULTIES.to_vec()),
        few in 0_u32..=3,
        many in 4_u32..200,
    ) {
        let low = viral_potential(&guide(category, difficulty, few));
        let high = viral_potential(&guide(category, difficulty, many));
        prop_assert!(high >= low);
        prop_assert!((0.0..=1.0).contains(&high));
    }
}
