//! Tests for the configuration module.

use super::*;
use std::io::Write;

#[test]
fn test_default_config() {
    let config = CentralConfig::default();
    assert_eq!(config.common.game, "reversi");
    assert_eq!(config.common.log_level, "info");
    assert_eq!(config.search.iterations, 200);
    assert!((config.search.exploration_constant - 0.707_106_781_186_547_6).abs() < 1e-12);
    assert_eq!(config.search.max_playout_plies, None);
    assert_eq!(config.search.seed, None);
    assert_eq!(config.play.mode, "human");
    assert_eq!(config.play.human_side, 2);
    assert_eq!(config.play.max_turns, None);
}

#[test]
fn test_search_env_overrides() {
    std::env::set_var("UCT_SEARCH_ITERATIONS", "750");
    std::env::set_var("UCT_SEARCH_SEED", "7");
    std::env::set_var("UCT_SEARCH_MAX_PLAYOUT_PLIES", "300");

    let config = apply_env_overrides(CentralConfig::default());
    assert_eq!(config.search.iterations, 750);
    assert_eq!(config.search.seed, Some(7));
    assert_eq!(config.search.max_playout_plies, Some(300));

    std::env::remove_var("UCT_SEARCH_ITERATIONS");
    std::env::remove_var("UCT_SEARCH_SEED");
    std::env::remove_var("UCT_SEARCH_MAX_PLAYOUT_PLIES");
}

#[test]
fn test_play_env_overrides() {
    std::env::set_var("UCT_COMMON_GAME", "tictactoe");
    std::env::set_var("UCT_PLAY_MODE", "self-play");
    std::env::set_var("UCT_PLAY_MAX_TURNS", "12");

    let config = apply_env_overrides(CentralConfig::default());
    assert_eq!(config.common.game, "tictactoe");
    assert_eq!(config.play.mode, "self-play");
    assert_eq!(config.play.max_turns, Some(12));

    std::env::remove_var("UCT_COMMON_GAME");
    std::env::remove_var("UCT_PLAY_MODE");
    std::env::remove_var("UCT_PLAY_MAX_TURNS");
}

#[test]
fn test_unparseable_env_override_ignored() {
    std::env::set_var("UCT_PLAY_HUMAN_SIDE", "black");

    let config = apply_env_overrides(CentralConfig::default());
    assert_eq!(config.play.human_side, 2);

    std::env::remove_var("UCT_PLAY_HUMAN_SIDE");
}

#[test]
fn test_parse_config_toml() {
    let toml_content = r#"
[common]
game = "tictactoe"
log_level = "debug"

[search]
iterations = 1000
exploration_constant = 1.4
max_playout_plies = 64
seed = 42

[play]
mode = "self-play"
human_side = 1
max_turns = 9
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.common.game, "tictactoe");
    assert_eq!(config.common.log_level, "debug");
    assert_eq!(config.search.iterations, 1000);
    assert!((config.search.exploration_constant - 1.4).abs() < f64::EPSILON);
    assert_eq!(config.search.max_playout_plies, Some(64));
    assert_eq!(config.search.seed, Some(42));
    assert_eq!(config.play.mode, "self-play");
    assert_eq!(config.play.human_side, 1);
    assert_eq!(config.play.max_turns, Some(9));
}

#[test]
fn test_partial_config() {
    let toml_content = r#"
[search]
iterations = 50
"#;
    let config: CentralConfig = toml::from_str(toml_content).unwrap();
    assert_eq!(config.search.iterations, 50);
    assert_eq!(config.common.game, "reversi"); // Default
    assert_eq!(config.play.human_side, 2); // Default
    assert_eq!(config.search.seed, None); // Default
}

#[test]
fn test_load_from_path() {
    let path = std::env::temp_dir().join(format!("uct-config-{}.toml", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "[common]\nlog_level = \"trace\"").unwrap();

    let config = load_from_path(&path);
    assert_eq!(config.common.log_level, "trace");

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_load_from_bad_path_falls_back() {
    let path = std::env::temp_dir().join("uct-config-does-not-exist.toml");
    let config = load_from_path(&path);
    assert_eq!(config.common.log_level, "info");
}

#[test]
fn test_load_from_malformed_file_falls_back() {
    let path = std::env::temp_dir().join(format!("uct-config-bad-{}.toml", std::process::id()));
    std::fs::write(&path, "[search\niterations = ").unwrap();

    let config = load_from_path(&path);
    assert_eq!(config.common.log_level, "info");

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_config_clone() {
    let config = CentralConfig::default();
    let cloned = config.clone();
    assert_eq!(config, cloned);
}
