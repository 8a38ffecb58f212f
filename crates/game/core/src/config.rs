/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Safety bound on rounds per battle. Reaching it is a stalemate, not a
    /// normal outcome; see [`crate::battle::Decision::RoundCap`].
    pub max_rounds: u32,

    /// Experience granted to the winner of every battle.
    pub victory_xp: u32,

    /// Decides whether a district's rewards are granted after its battles.
    pub reward_policy: RewardPolicy,

    /// Equip newly unlocked gear on the player when its slot is empty.
    pub auto_equip_rewards: bool,
}

impl GameConfig {
    // ===== combat tuning =====
    /// Half-width of the timing noise added to every accuracy roll.
    pub const ACCURACY_NOISE: f64 = 0.25;
    /// Scale of the per-round initiative tiebreak noise.
    pub const INITIATIVE_NOISE: f64 = 0.1;
    /// Damage multiplier at accuracy 0.0.
    pub const MIN_DAMAGE_MULTIPLIER: f64 = 0.5;
    /// Multiplier gained between accuracy 0.0 and 1.0 (so 0.5x..2.0x).
    pub const DAMAGE_MULTIPLIER_SPAN: f64 = 1.5;
    /// Accuracy at or above which a bar builds the combo meter.
    pub const HIGH_ACCURACY: f64 = 0.85;
    /// Combo meter value that arms the special.
    pub const COMBO_THRESHOLD: u32 = 3;
    /// Special damage before the level bonus.
    pub const SPECIAL_BASE_DAMAGE: i32 = 6;
    /// Block chance before defense stats are added.
    pub const BASE_BLOCK_CHANCE: f64 = 0.35;
    pub const MIN_BLOCK_CHANCE: f64 = 0.05;
    pub const MAX_BLOCK_CHANCE: f64 = 0.95;

    // ===== progression =====
    /// Experience needed per level: `XP_PER_LEVEL * level`.
    pub const XP_PER_LEVEL: u32 = 5;
    /// Max health gained on every level-up.
    pub const HEALTH_PER_LEVEL: i32 = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_ROUNDS: u32 = 60;
    pub const DEFAULT_VICTORY_XP: u32 = 3;

    pub fn new() -> Self {
        Self {
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
            victory_xp: Self::DEFAULT_VICTORY_XP,
            reward_policy: RewardPolicy::default(),
            auto_equip_rewards: false,
        }
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn with_reward_policy(mut self, reward_policy: RewardPolicy) -> Self {
        self.reward_policy = reward_policy;
        self
    }

    pub fn with_auto_equip_rewards(mut self, enabled: bool) -> Self {
        self.auto_equip_rewards = enabled;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// When a district's rewards are granted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RewardPolicy {
    /// Rewards apply after every district regardless of outcomes.
    #[default]
    Always,
    /// Rewards apply only if the player beat the district boss.
    BossVictory,
    /// Rewards apply only if the player won every battle in the district.
    CleanSweep,
}
