//! Command runs against built-in and on-disk content.

use std::fs;

use uppercut_client::commands::{BattleCmd, CampaignCmd};
use uppercut_client::{ClientConfig, Session};
use uppercut_content::builtin;
use uppercut_core::Stage;

fn seeded(seed: u64) -> Session {
    Session::load(&ClientConfig {
        seed: Some(seed),
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn seeded_battle_is_reproducible() {
    let cmd = BattleCmd {
        first: "MC Blaze".into(),
        second: "DJ Uppercut".into(),
    };
    let first = cmd.run(&seeded(5)).unwrap();
    let second = cmd.run(&seeded(5)).unwrap();

    assert_eq!(first.transcript, second.transcript);
    assert!(["MC Blaze", "DJ Uppercut"].contains(&first.winner.as_str()));
    assert_eq!(first.transcript.len() as u32, first.rounds + 1);
}

#[test]
fn unknown_character_is_an_error() {
    let cmd = BattleCmd {
        first: "MC Blaze".into(),
        second: "Nobody".into(),
    };
    let err = cmd.run(&seeded(1)).unwrap_err();
    assert!(err.to_string().contains("Nobody"));
}

#[test]
fn campaign_report_serializes() {
    let cmd = CampaignCmd {
        player: "MC Blaze".into(),
    };
    let (report, player_line) = cmd.run(&seeded(3)).unwrap();

    assert_eq!(report.results.len(), 6);
    assert_eq!(report.results[2].stage, Stage::Boss);
    assert!(player_line.starts_with("MC Blaze (Lv "));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["results"][0]["stage"], "warmup");
    assert_eq!(json["player"]["name"], "MC Blaze");
    assert_eq!(json["player"]["gear"][0], "gold_mic");
}

#[test]
fn round_cap_override_applies() {
    let session = Session::load(&ClientConfig {
        seed: Some(8),
        max_rounds: Some(1),
        ..Default::default()
    })
    .unwrap();
    let report = BattleCmd {
        first: "MC Blaze".into(),
        second: "Queen Cadence".into(),
    }
    .run(&session)
    .unwrap();
    assert!(report.rounds <= 1);
}

#[test]
fn data_dir_content_is_used() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("characters.ron"), builtin::CHARACTERS_RON).unwrap();
    fs::write(dir.path().join("moves.ron"), builtin::MOVES_RON).unwrap();
    fs::write(dir.path().join("gear.ron"), builtin::GEAR_RON).unwrap();
    fs::write(
        dir.path().join("districts.ron"),
        r#"(districts: [(id: Some("alley"), midboss: Some("Corner Kid"), boss: Some("Lil Static"))])"#,
    )
    .unwrap();

    let session = Session::load(&ClientConfig {
        data_dir: Some(dir.path().to_path_buf()),
        seed: Some(4),
        max_rounds: None,
    })
    .unwrap();
    let (report, _) = CampaignCmd {
        player: "DJ Uppercut".into(),
    }
    .run(&session)
    .unwrap();

    assert_eq!(report.results.len(), 2);
    assert!(report.results.iter().all(|r| r.district == "alley"));
}
