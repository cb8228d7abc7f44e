use std::collections::HashMap;
use std::path::PathBuf;

use serde_json::Value;

use tui_connect_four::config::{ENV_GAME_OVER_MS, ENV_RECORD_PATH, ENV_SEED, ENV_SOUND};
use tui_connect_four::core::{GameSession, NullAudio};
use tui_connect_four::types::{FrameInput, KeyPress, TICK_MS};
use tui_connect_four::{Config, GameRecord};

fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
    let map: HashMap<&str, &str> = pairs.iter().copied().collect();
    Config::from_lookup(|key| map.get(key).map(|v| v.to_string()))
}

#[test]
fn config_reads_every_variable() {
    let cfg = config_from(&[
        (ENV_SEED, "42"),
        (ENV_GAME_OVER_MS, " 250 "),
        (ENV_SOUND, "off"),
        (ENV_RECORD_PATH, "/tmp/c4.jsonl"),
    ])
    .unwrap();

    assert_eq!(cfg.seed, Some(42));
    assert_eq!(cfg.seed_or_clock(), 42);
    assert_eq!(cfg.game_over_delay_ms, 250);
    assert!(!cfg.sound);
    assert_eq!(cfg.record_path, Some(PathBuf::from("/tmp/c4.jsonl")));
    assert_eq!(cfg.log_path, None);

    let settings = cfg.session_settings(4, 2);
    assert_eq!(settings.game_over_delay_ms, 250);
    assert_eq!((settings.cell_width, settings.cell_height), (4, 2));
}

#[test]
fn config_blank_values_fall_back_to_defaults() {
    let cfg = config_from(&[(ENV_SEED, "  "), (ENV_RECORD_PATH, "")]).unwrap();
    assert_eq!(cfg, Config::default());
}

#[test]
fn config_rejects_malformed_numbers() {
    let err = config_from(&[(ENV_SEED, "-3")]).unwrap_err();
    assert!(err.to_string().contains(ENV_SEED));

    let err = config_from(&[(ENV_GAME_OVER_MS, "soon")]).unwrap_err();
    assert!(err.to_string().contains(ENV_GAME_OVER_MS));

    let err = config_from(&[(ENV_SOUND, "loud")]).unwrap_err();
    assert!(err.to_string().contains(ENV_SOUND));
}

#[test]
fn record_writes_one_json_line_per_event() {
    let mut session = GameSession::new(1);
    let mut audio = NullAudio;
    let mut record = GameRecord::new(Vec::new());

    let mut step = |session: &mut GameSession, input: FrameInput, elapsed: u32| {
        session.update(&input, elapsed, &mut audio);
        record
            .record(session.last_events(), &session.snapshot())
            .unwrap();
    };

    step(&mut session, FrameInput::idle(), TICK_MS);
    step(&mut session, FrameInput::key(KeyPress::TwoPlayerMode), TICK_MS);
    for _ in 0..3 {
        step(&mut session, FrameInput::key(KeyPress::Digit(1)), TICK_MS);
        step(&mut session, FrameInput::key(KeyPress::Digit(2)), TICK_MS);
    }
    step(&mut session, FrameInput::key(KeyPress::Digit(1)), TICK_MS);
    step(&mut session, FrameInput::idle(), 5_000);

    assert_eq!(record.seq(), 10);
    let bytes = record.into_inner();
    let lines: Vec<Value> = std::str::from_utf8(&bytes)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 10);

    assert_eq!(lines[0]["seq"], 1);
    assert_eq!(lines[0]["event"], "started");
    assert_eq!(lines[0]["mode"], "twoPlayer");
    assert_eq!(lines[0]["screen"], "playing");

    assert_eq!(lines[1]["event"], "placed");
    assert_eq!(lines[1]["player"], "one");
    assert_eq!(lines[1]["column"], 0);
    assert_eq!(lines[1]["row"], 5);
    assert_eq!(lines[1]["by_computer"], false);
    assert_eq!(lines[1]["board"][5][0], 1);

    // The winning placement and the game over share a tick.
    assert_eq!(lines[7]["event"], "placed");
    assert_eq!(lines[8]["event"], "game_over");
    assert_eq!(lines[8]["winner"], "one");
    assert_eq!(lines[8]["draw"], false);
    assert_eq!(lines[8]["screen"], "gameOver");

    assert_eq!(lines[9]["event"], "returned_to_title");
    assert_eq!(lines[9]["screen"], "title");
    assert_eq!(lines[9]["board"][5][0], 0);
}
