use std::cmp::Ordering;

use super::observer::{TierEvent, TierObserver};
use super::record::{ManagerGrade, ManagerRecord, Week};

/// Weekly score at or above which a week earns a boost
pub const BOOST_THRESHOLD: f64 = 100.0;
/// Weekly score at or below which a week is penalized
pub const PENALTY_THRESHOLD: f64 = 65.0;
pub const BOOST_POINTS: f64 = 100.0;
/// Points per win, deducted per loss
pub const WIN_LOSS_POINTS: f64 = 25.0;
/// Share of a standout week's score added as a bonus
pub const STANDOUT_RATE: f64 = 0.20;

/// Whether no manager in `managers` outscored `manager` in `week`.
///
/// Tied top scores are all standouts. Returns false for an empty set.
pub fn is_standout(manager: &ManagerRecord, week: Week, managers: &[ManagerRecord]) -> bool {
    if managers.is_empty() {
        return false;
    }

    let value = manager.week(week);
    !managers.iter().any(|other| other.week(week) > value)
}

/// Boost for a single week: +100 at 100 or more, -100 at 65 or less.
fn week_boost(score: f64) -> f64 {
    if score >= BOOST_THRESHOLD {
        BOOST_POINTS
    } else if score <= PENALTY_THRESHOLD {
        -BOOST_POINTS
    } else {
        0.0
    }
}

/// Grade one manager against the full set of managers.
///
/// score = base + boost + win/loss + standout, where
/// - base is the sum of the four weeks
/// - boost is the sum of each week's [`week_boost`]
/// - win/loss is 25 per win minus 25 per loss
/// - standout is 20% of each week in which the manager was a standout
pub fn calculate_grade(
    manager: &ManagerRecord,
    managers: &[ManagerRecord],
    observer: &mut dyn TierObserver,
) -> ManagerGrade {
    let base: f64 = manager.weeks.iter().sum();
    let boost: f64 = manager.weeks.iter().map(|&w| week_boost(w)).sum();
    let win_loss = f64::from(manager.wins) * WIN_LOSS_POINTS
        - f64::from(manager.losses) * WIN_LOSS_POINTS;

    let mut standout = 0.0;
    let mut standout_tally = 0;
    for week in Week::ALL {
        if is_standout(manager, week, managers) {
            observer.on_event(&TierEvent::Standout {
                manager: &manager.manager,
                week,
            });
            standout += manager.week(week) * STANDOUT_RATE;
            standout_tally += 1;
        }
    }

    let grade = ManagerGrade {
        manager: manager.manager.clone(),
        score: round2(base + boost + win_loss + standout),
        base_scoring: round2(base),
        boost_scoring: boost,
        win_loss_scoring: win_loss,
        standout_scoring: round2(standout),
        standout_tally,
    };
    observer.on_event(&TierEvent::Graded {
        manager: &grade.manager,
        score: grade.score,
    });
    grade
}

/// Sort grades best to worst. Equal scores keep their input order.
pub fn rank(mut grades: Vec<ManagerGrade>) -> Vec<ManagerGrade> {
    grades.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    grades
}

/// Grade every manager and rank the results.
pub fn build_tier_list(
    managers: &[ManagerRecord],
    observer: &mut dyn TierObserver,
) -> Vec<ManagerGrade> {
    let grades = managers
        .iter()
        .map(|manager| calculate_grade(manager, managers, &mut *observer))
        .collect();
    rank(grades)
}

/// Round to two decimal places for reporting.
///
/// Rounds the exact binary value, half to even, so `340.125` becomes
/// `340.12` and `2.675` (stored just below the half) becomes `2.67`.
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
