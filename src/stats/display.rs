use rand::Rng;

use crate::config::DisplayTuning;
use crate::models::{ContributionLevel, ContributionWeek};

/// Contribution total shown to visitors: the boosted real total when the
/// calendar reported one, otherwise a synthetic estimate from the repo count.
pub fn display_contributions(real_total: u32, repo_count: u32, tuning: &DisplayTuning) -> u32 {
    let base = if real_total > 0 {
        real_total
    } else {
        repo_count * 10
    };
    (f64::from(base) * tuning.contribution_boost).round() as u32
}

/// Randomized per-cell intensity upgrade. Every cell takes one bump draw; a
/// cell that started at `NONE` takes an extra promotion draw on top. The
/// rendered heatmap is therefore not a faithful copy of the real calendar,
/// and differs between requests over identical upstream data.
pub fn boost_levels<R: Rng>(weeks: &mut [ContributionWeek], tuning: &DisplayTuning, rng: &mut R) {
    for week in weeks {
        for day in &mut week.contribution_days {
            let original = day.contribution_level;
            if rng.gen_bool(tuning.level_bump_chance) {
                day.contribution_level = original.bumped();
            }
            if original == ContributionLevel::None && rng.gen_bool(tuning.empty_fill_chance) {
                day.contribution_level = ContributionLevel::FirstQuartile;
            }
        }
    }
}
