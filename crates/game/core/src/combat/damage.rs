//! Damage calculation.

use crate::config::GameConfig;

/// Damage multiplier for a bar spit at `accuracy`.
///
/// Ranges linearly from 0.5x at accuracy 0.0 to 2.0x at accuracy 1.0.
pub fn damage_multiplier(accuracy: f64) -> f64 {
    GameConfig::MIN_DAMAGE_MULTIPLIER + GameConfig::DAMAGE_MULTIPLIER_SPAN * accuracy
}

/// Damage dealt by a bar.
///
/// # Formula
///
/// ```text
/// damage = ceil(base_damage * multiplier(accuracy) * (1 + attack_bonus))
/// ```
///
/// A large negative attack bonus can drive the product below zero; the
/// result is floored at 0 so a bar never heals its target.
pub fn bar_damage(base_damage: u32, accuracy: f64, attack_bonus: f64) -> i32 {
    let raw = f64::from(base_damage) * damage_multiplier(accuracy) * (1.0 + attack_bonus);
    raw.ceil().max(0.0) as i32
}

/// Damage dealt by a special. Ignores blocking.
pub fn special_damage(level: u32) -> i32 {
    let level = i32::try_from(level).unwrap_or(i32::MAX);
    GameConfig::SPECIAL_BASE_DAMAGE.saturating_add(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_spans_half_to_double() {
        assert_eq!(damage_multiplier(0.0), 0.5);
        assert_eq!(damage_multiplier(1.0), 2.0);
    }

    #[test]
    fn perfect_bar_doubles_damage() {
        assert_eq!(bar_damage(10, 1.0, 0.0), 20);
    }

    #[test]
    fn damage_rounds_up() {
        // 10 * (0.5 + 1.5 * 0.85) = 17.75
        assert_eq!(bar_damage(10, 0.85, 0.0), 18);
        // 3 * 0.5 * 1.1 = 1.65
        assert_eq!(bar_damage(3, 0.0, 0.1), 2);
    }

    #[test]
    fn zero_base_damage_deals_nothing() {
        assert_eq!(bar_damage(0, 1.0, 0.5), 0);
        assert_eq!(bar_damage(10, 1.0, -2.0), 0);
    }

    #[test]
    fn special_scales_with_level() {
        assert_eq!(special_damage(1), 7);
        assert_eq!(special_damage(4), 10);
        assert_eq!(special_damage(u32::MAX), i32::MAX);
    }
}
