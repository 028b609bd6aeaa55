//! Disc ranking against a condition snapshot.
//!
//! Two scoring policies exist side by side. The primary policy looks only at
//! the condition snapshot and feeds the full recommendation list; the quick
//! policy folds in the throw-relative stability shift and feeds the compact
//! summary. Both rank with a stable descending sort, so equal scores keep
//! their bag order.

use std::cmp::Reverse;

use crate::conditions::FlightCondition;
use crate::direction::CompassPoint;
use crate::disc::Disc;
use crate::utils::constants::{
    COLD_TEMP_F, STABILITY_MATCH_MAX, WIND_TIER_LIGHT_MAX_MPH, WIND_TIER_MODERATE_MAX_MPH,
};
use crate::wind::{self, RelativeWind, WindDirection};

/// Primary policy score. Condition-only; throw direction plays no part.
pub fn primary_score(disc: &Disc, condition: &FlightCondition) -> i32 {
    let mut score = 0;

    if condition.wind_speed > WIND_TIER_MODERATE_MAX_MPH {
        // High wind favors overstable plastic and punishes understable.
        if disc.stability.leans_overstable() || disc.fade >= 3 {
            score += 3;
        }
        if disc.stability.leans_understable() {
            score -= 2;
        }
    } else if condition.wind_speed < WIND_TIER_LIGHT_MAX_MPH {
        if disc.stability.leans_understable() {
            score += 2;
        }
    }
    // 5-10 mph inclusive contributes nothing from the speed terms; exactly
    // 10.0 falls in the ">10"-false branch.

    match condition.wind_direction {
        WindDirection::Relative(RelativeWind::Headwind) => {
            if disc.fade >= 2 || disc.turn >= 0 {
                score += 2;
            }
        }
        WindDirection::Relative(RelativeWind::Tailwind) => {
            if disc.turn <= -2 {
                score += 1;
            }
        }
        _ => {}
    }

    score + cold_weather_bonus(disc, condition)
}

/// Quick policy score for a precomputed stability adjustment. Peaks at
/// [`STABILITY_MATCH_MAX`] when the shifted target lands on the disc's own
/// rung and decays by one per rung of ladder distance, floored at zero.
pub fn quick_score(disc: &Disc, condition: &FlightCondition, stability_adjustment: i32) -> i32 {
    let target = disc.stability.shifted(stability_adjustment);
    let distance =
        (disc.stability.ladder_index() as i32 - target.ladder_index() as i32).abs();
    let match_score = (STABILITY_MATCH_MAX - distance).max(0);
    match_score + cold_weather_bonus(disc, condition)
}

// Cold air shifts flight overstable; nudge understable discs to compensate.
fn cold_weather_bonus(disc: &Disc, condition: &FlightCondition) -> i32 {
    if condition.temperature < COLD_TEMP_F && disc.stability.leans_understable() {
        1
    } else {
        0
    }
}

/// Rank discs best-first under the primary policy.
pub fn rank(discs: &[Disc], condition: &FlightCondition) -> Vec<Disc> {
    rank_by(discs, |disc| primary_score(disc, condition))
}

/// Rank discs best-first under the quick policy for the given throw
/// direction.
pub fn rank_quick(discs: &[Disc], condition: &FlightCondition, throw: CompassPoint) -> Vec<Disc> {
    let adjustment =
        wind::stability_adjustment(condition.wind_speed, condition.wind_direction, throw);
    rank_by(discs, |disc| quick_score(disc, condition, adjustment))
}

fn rank_by<F>(discs: &[Disc], score: F) -> Vec<Disc>
where
    F: Fn(&Disc) -> i32,
{
    let mut ranked: Vec<Disc> = discs.to_vec();
    // sort_by_key is stable: ties keep their input order.
    ranked.sort_by_key(|disc| Reverse(score(disc)));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::Stability;
    use pretty_assertions::assert_eq;

    fn disc(name: &str, stability: Stability, turn: i32, fade: i32) -> Disc {
        Disc::new(name, "Test", 9, 5, turn, fade, stability)
    }

    fn condition(wind_speed: f64, wind_direction: WindDirection) -> FlightCondition {
        FlightCondition {
            wind_speed,
            wind_direction,
            temperature: 70.0,
            ..FlightCondition::default()
        }
    }

    #[test]
    fn primary_high_wind_headwind() {
        // +3 for wind over 10 with an overstable disc, +2 for headwind fade.
        let overstable = disc("Firebird", Stability::Overstable, 0, 3);
        let cond = condition(12.0, RelativeWind::Headwind.into());
        assert_eq!(primary_score(&overstable, &cond), 5);
    }

    #[test]
    fn primary_high_wind_punishes_understable() {
        let understable = disc("Tern", Stability::VeryUnderstable, -3, 2);
        let cond = condition(12.0, RelativeWind::CrosswindLeft.into());
        assert_eq!(primary_score(&understable, &cond), -2);
    }

    #[test]
    fn primary_light_wind_rewards_understable() {
        let understable = disc("Leopard3", Stability::Understable, -2, 1);
        let cond = condition(3.0, RelativeWind::Calm.into());
        assert_eq!(primary_score(&understable, &cond), 2);
    }

    #[test]
    fn primary_tailwind_rewards_turny_discs() {
        let turny = disc("Tern", Stability::Understable, -3, 2);
        let cond = condition(7.0, RelativeWind::Tailwind.into());
        assert_eq!(primary_score(&turny, &cond), 1);
    }

    #[test]
    fn wind_speed_exactly_ten_scores_zero_from_speed_terms() {
        let overstable = disc("Firebird", Stability::VeryOverstable, 0, 4);
        let cond = condition(10.0, RelativeWind::CrosswindRight.into());
        // Neither the >10 branch nor the <5 branch fires; crosswind adds
        // nothing in the primary policy.
        assert_eq!(primary_score(&overstable, &cond), 0);
    }

    #[test]
    fn cold_weather_bonus_applies_to_both_policies() {
        let understable = disc("Leopard3", Stability::Understable, -2, 1);
        let cond = FlightCondition {
            wind_speed: 7.0,
            wind_direction: RelativeWind::Calm.into(),
            temperature: 40.0,
            ..FlightCondition::default()
        };
        assert_eq!(primary_score(&understable, &cond), 1);
        // Quick: zero adjustment gives a full stability match plus the bonus.
        assert_eq!(quick_score(&understable, &cond, 0), 4);
    }

    #[test]
    fn quick_score_decays_with_ladder_distance() {
        let cond = condition(7.0, RelativeWind::Headwind.into());
        // +2 shift: Stable lands two rungs away, Very Overstable is pinned.
        assert_eq!(quick_score(&disc("Buzzz", Stability::Stable, -1, 1), &cond, 2), 1);
        assert_eq!(
            quick_score(&disc("Firebird", Stability::VeryOverstable, 0, 4), &cond, 2),
            3
        );
        // +4 shift from the bottom rung exhausts the match entirely.
        assert_eq!(
            quick_score(&disc("Mamba", Stability::VeryUnderstable, -5, 1), &cond, 4),
            0
        );
    }

    #[test]
    fn rank_quick_resolves_throw_direction() {
        // South wind thrown North is a moderate headwind: adjustment +2.
        let cond = condition(7.0, CompassPoint::South.into());
        let discs = vec![
            disc("Buzzz", Stability::Stable, -1, 1),
            disc("Firebird", Stability::VeryOverstable, 0, 4),
        ];
        let ranked = rank_quick(&discs, &cond, CompassPoint::North);
        assert_eq!(ranked[0].name, "Firebird");
        assert_eq!(ranked[1].name, "Buzzz");
    }

    #[test]
    fn rank_is_stable_on_ties() {
        let cond = condition(7.0, RelativeWind::Calm.into());
        // All discs score zero under the primary policy here.
        let discs = vec![
            disc("A", Stability::Stable, 0, 1),
            disc("B", Stability::Stable, 0, 1),
            disc("C", Stability::Stable, 0, 1),
        ];
        let ranked = rank(&discs, &cond);
        let names: Vec<&str> = ranked.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);

        // Same discs in a different input order keep that order.
        let discs = vec![
            disc("C", Stability::Stable, 0, 1),
            disc("A", Stability::Stable, 0, 1),
            disc("B", Stability::Stable, 0, 1),
        ];
        let ranked = rank(&discs, &cond);
        let names: Vec<&str> = ranked.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn rank_is_idempotent() {
        let cond = condition(12.0, RelativeWind::Headwind.into());
        let discs = vec![
            disc("Leopard3", Stability::Understable, -2, 1),
            disc("Firebird", Stability::VeryOverstable, 0, 4),
            disc("Buzzz", Stability::Stable, -1, 1),
        ];
        let first = rank(&discs, &cond);
        let second = rank(&discs, &cond);
        assert_eq!(first, second);
    }
}
