use auto_clicker::settings::Settings;
use auto_clicker::state::SessionState;
use auto_clicker::trigger::Trigger;

#[test]
fn disk_round_trip_preserves_every_field() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");

    let settings = Settings {
        hotkey: "Button.right".into(),
        h: "1".into(),
        m: "02".into(),
        s: "3".into(),
        ms: "450".into(),
        click: "right".into(),
        bg: "wallpaper.jpg".into(),
        win_w: 800,
        win_h: 500,
    };

    settings.save(&path).expect("save");
    assert_eq!(Settings::load(&path), settings);
}

#[test]
fn session_snapshot_survives_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");

    let mut settings = Settings::default();
    settings.hotkey = "f8".into();
    settings.s = "2".into();
    settings.ms = "500".into();
    settings.click = "right".into();

    let state = SessionState::from_settings(&settings);
    state
        .to_settings("bg.png".into(), 640, 480)
        .save(&path)
        .expect("save");

    let restored = SessionState::from_settings(&Settings::load(&path));
    assert_eq!(restored.trigger(), Trigger::parse("f8"));
    assert_eq!(restored.click_button().as_str(), "right");
    assert_eq!(restored.delay_fields().total_seconds(), 2.5);
}

#[test]
fn delay_fields_persist_as_raw_text() {
    // non-numeric text is stored untouched and only parses to zero on use
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");

    let mut settings = Settings::default();
    settings.m = "abc".into();
    settings.s = "1".into();
    settings.save(&path).expect("save");

    let loaded = Settings::load(&path);
    assert_eq!(loaded.m, "abc");

    let state = SessionState::from_settings(&loaded);
    assert_eq!(state.delay_fields().total_seconds(), 1.0);
}
