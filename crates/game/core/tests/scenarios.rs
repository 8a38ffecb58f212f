//! End-to-end scenarios against the public API.

use std::collections::BTreeMap;
use std::sync::Arc;

use uppercut_core::{
    Battle, BattleEvent, Campaign, Catalog, CharacterTemplate, Combatant, Decision, District,
    DistrictRewards, GameConfig, GearItem, GearSlot, Move, ScriptedRng, Stage, StatMods,
};

fn hook() -> Arc<Move> {
    Arc::new(Move::new("hook", "Hook Line", 10))
}

#[test]
fn perfect_bar_lands_for_double_damage() {
    // Attacker wins initiative, rolls +0.25 noise on 1.0 accuracy, defender
    // rolls -0.25 noise on 0.0 accuracy and fails its block.
    let mut a = Combatant::builder("A")
        .health(30)
        .base_accuracy(1.0)
        .base_defense(0.0)
        .with_move(hook())
        .rng(ScriptedRng::new([0.9, 0.99, 0.0]))
        .build();
    let mut b = Combatant::builder("B")
        .health(30)
        .base_accuracy(0.0)
        .base_defense(0.0)
        .with_move(hook())
        .rng(ScriptedRng::new([0.0, 0.0, 0.99]))
        .build();

    let mut battle = Battle::new(&mut a, &mut b);
    battle.play_round().unwrap();

    assert_eq!(
        battle.transcript().last(),
        Some(&BattleEvent::Landed {
            attacker: "A".into(),
            move_name: "Hook Line".into(),
            damage: 20,
        })
    );
    assert_eq!(battle.second().health, 10);
}

#[test]
fn level_four_special_hits_for_ten() {
    let mut rapper = Combatant::builder("Vet")
        .level(4)
        .with_move(hook())
        .seed(1)
        .build();
    rapper.special_ready = true;
    rapper.combo_meter = 3;

    assert_eq!(rapper.special_move(), 10);
    assert!(!rapper.special_ready);
    assert_eq!(rapper.combo_meter, 0);
    assert_eq!(rapper.special_move(), 0);
}

#[test]
fn twenty_xp_from_level_one_reaches_level_three() {
    let mut rookie = Combatant::builder("Rookie").with_move(hook()).seed(1).build();
    rookie.health = 4;

    assert_eq!(rookie.gain_xp(20), 2);
    assert_eq!(rookie.level(), 3);
    assert_eq!(rookie.experience(), 5);
    assert_eq!(rookie.max_health(), Combatant::DEFAULT_HEALTH + 4);
    assert_eq!(rookie.health, rookie.max_health());
}

#[test]
fn capped_battle_is_decided_by_health() {
    let tap = Arc::new(Move::new("tap", "Tap", 0));
    let mut a = Combatant::builder("A").health(10).with_move(Arc::clone(&tap)).seed(1).build();
    let mut b = Combatant::builder("B").health(12).with_move(tap).seed(2).build();

    let config = GameConfig::default().with_max_rounds(4);
    let mut battle = Battle::with_config(&mut a, &mut b, &config);
    let winner = battle.play().unwrap();

    assert_eq!(winner, "B");
    let outcome = battle.outcome().unwrap();
    assert_eq!(outcome.decided_by, Decision::RoundCap);
    assert_eq!(outcome.rounds, 4);
    assert_eq!(
        battle.transcript().last().map(ToString::to_string),
        Some("🏆 B outlasts A after 4 rounds!".to_string())
    );
}

fn ladder_catalog(warmups: usize, districts: usize) -> Catalog {
    let characters = BTreeMap::from([
        ("Player".to_string(), CharacterTemplate::new("bars").with_stats(50, 1, 0.7, 0.2)),
        ("Opener".to_string(), CharacterTemplate::new("bars")),
        ("Lieutenant".to_string(), CharacterTemplate::new("bars").with_stats(16, 1, 0.6, 0.15)),
        ("Kingpin".to_string(), CharacterTemplate::new("bars").with_stats(20, 2, 0.65, 0.2)),
    ]);
    let movesets = BTreeMap::from([(
        "bars".to_string(),
        vec![Move::new("jab", "Quick Jab", 3), Move::new("hook", "Hook Line", 5)],
    )]);
    let gear = vec![GearItem::new(
        "fresh_kicks",
        GearSlot::Kicks,
        "Fresh Kicks",
        StatMods::new(0.0, 0.05, 0.02),
    )];
    let ladder = (0..districts)
        .map(|i| {
            let district = (0..warmups).fold(
                District::new(format!("district_{i}"), "Lieutenant", "Kingpin"),
                |d, _| d.with_warmup("Opener"),
            );
            district.with_rewards(DistrictRewards {
                unlock_characters: vec!["Opener".into()],
                unlock_gear: vec!["fresh_kicks".into()],
            })
        })
        .collect();
    Catalog::new(characters, movesets, gear, ladder).unwrap()
}

#[test]
fn campaign_plays_warmups_midboss_and_boss_per_district() {
    let catalog = ladder_catalog(2, 3);
    let mut campaign = Campaign::for_character("Player", &catalog, Some(2024)).unwrap();
    let results = campaign.run().unwrap();

    assert_eq!(results.len(), 3 * (2 + 2));
    for (i, chunk) in results.chunks(4).enumerate() {
        let stages: Vec<Stage> = chunk.iter().map(|r| r.stage).collect();
        assert_eq!(stages, [Stage::Warmup, Stage::Warmup, Stage::Midboss, Stage::Boss]);
        assert!(chunk.iter().all(|r| r.district == format!("district_{i}")));
    }
}

#[test]
fn campaign_unlocks_accumulate_without_duplicates() {
    let catalog = ladder_catalog(0, 4);
    let mut campaign = Campaign::for_character("Player", &catalog, Some(9)).unwrap();
    campaign.run().unwrap();

    assert_eq!(campaign.unlocks().len(), 2);
    assert_eq!(campaign.unlocks().characters().collect::<Vec<_>>(), ["Opener"]);
    assert_eq!(campaign.unlocks().gear().collect::<Vec<_>>(), ["fresh_kicks"]);
}

#[test]
fn campaign_player_keeps_progress() {
    let catalog = ladder_catalog(1, 2);
    let mut campaign = Campaign::for_character("Player", &catalog, Some(77)).unwrap();
    let results = campaign.run().unwrap();

    let wins = results.iter().filter(|r| r.player_won).count() as u32;
    let player = campaign.into_player();
    let earned = wins * GameConfig::DEFAULT_VICTORY_XP;
    // Total XP spent on level-ups plus what is left must equal what was earned.
    let spent: u32 = (1..player.level()).map(|l| GameConfig::XP_PER_LEVEL * l).sum();
    assert_eq!(spent + player.experience(), earned);
}
