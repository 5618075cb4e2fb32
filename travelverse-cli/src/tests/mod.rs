//! Shared test harness modules for the TravelVerse CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod guides_unit;
mod helpers;
mod optimize_unit;
mod recommend_unit;
