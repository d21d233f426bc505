//! 설정 파일 로드/저장 테스트.
use std::path::PathBuf;

use hydrogen_platform_toolbox::config::{load_or_default, Config};
use hydrogen_platform_toolbox::production::ElectrolyzerType;
use hydrogen_platform_toolbox::transport::TransportType;

fn temp_config_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "h2_toolbox_{tag}_{}.toml",
        std::process::id()
    ))
}

#[test]
fn missing_file_is_created_with_defaults() {
    let path = temp_config_path("create");
    let _ = std::fs::remove_file(&path);

    let cfg = load_or_default(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());

    let reloaded = load_or_default(&path).expect("reload");
    assert_eq!(reloaded, cfg);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn saved_changes_round_trip() {
    let path = temp_config_path("save");
    let mut cfg = Config::default();
    cfg.language = "ko".into();
    cfg.defaults.electrolyzer_type = ElectrolyzerType::Soec;
    cfg.defaults.transport_type = TransportType::Pipeline;
    cfg.save(&path).expect("save");

    let reloaded = load_or_default(&path).expect("reload");
    assert_eq!(reloaded, cfg);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn partial_file_fills_defaults() {
    let path = temp_config_path("partial");
    std::fs::write(&path, "language = \"en\"\n[defaults]\nelectrolyzer_type = \"Alkaline\"\n")
        .expect("write");

    let cfg = load_or_default(&path).expect("load");
    assert_eq!(cfg.language, "en");
    assert_eq!(cfg.defaults.electrolyzer_type, ElectrolyzerType::Alkaline);
    assert_eq!(cfg.defaults.discount_rate, 0.08);
    assert_eq!(cfg.defaults.transport_type, TransportType::TubeTrailer);
    let _ = std::fs::remove_file(&path);
}
