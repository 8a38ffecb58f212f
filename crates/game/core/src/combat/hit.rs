//! Accuracy, initiative and block chance calculations.

use crate::config::GameConfig;

/// Accuracy of one timed bar.
///
/// # Formula
///
/// ```text
/// accuracy = clamp(base_accuracy + accuracy_bonus + noise, 0.0, 1.0)
/// ```
///
/// `noise` is drawn by the caller from `[-ACCURACY_NOISE, ACCURACY_NOISE]`.
pub fn timing_accuracy(base_accuracy: f64, accuracy_bonus: f64, noise: f64) -> f64 {
    (base_accuracy + accuracy_bonus + noise).clamp(0.0, 1.0)
}

/// Initiative bias for one combatant in one round.
///
/// `draw` is a uniform `[0, 1)` value from the combatant's own source and is
/// scaled by `INITIATIVE_NOISE`.
pub fn initiative_bias(base_accuracy: f64, accuracy_bonus: f64, draw: f64) -> f64 {
    base_accuracy + accuracy_bonus + draw * GameConfig::INITIATIVE_NOISE
}

/// Probability that a defender blocks an incoming bar.
///
/// # Formula
///
/// ```text
/// base   = BASE_BLOCK_CHANCE + base_defense + defense_bonus
/// chance = clamp(accuracy * base, MIN_BLOCK_CHANCE, MAX_BLOCK_CHANCE)
/// ```
///
/// `accuracy` is the defender's own timing roll for the round.
pub fn block_chance(accuracy: f64, base_defense: f64, defense_bonus: f64) -> f64 {
    let base = GameConfig::BASE_BLOCK_CHANCE + base_defense + defense_bonus;
    (accuracy * base).clamp(GameConfig::MIN_BLOCK_CHANCE, GameConfig::MAX_BLOCK_CHANCE)
}
