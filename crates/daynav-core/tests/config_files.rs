use std::fs;

use daynav_core::Direction;
use daynav_core::cli::Invocation;
use daynav_core::commands::dispatch;
use daynav_core::config::Config;
use tempfile::tempdir;

#[test]
fn rc_file_with_include_builds_props() {
    let temp = tempdir().expect("tempdir");
    let shared = temp.path().join("shared.rc");
    fs::write(
        &shared,
        "# shared styling\nclassnames.navbar = month-nav\nhovered.classname = is-hot\n",
    )
    .expect("write shared rc");

    let rc = temp.path().join("navbarrc");
    fs::write(
        &rc,
        "include shared.rc\ndir = rtl   # hebrew calendar\nshow.previous = no\nlabels.next = Later\n",
    )
    .expect("write rc");

    let cfg = Config::load(Some(rc.as_path())).expect("load config");
    assert_eq!(cfg.loaded_files.len(), 2);

    let props = cfg.nav_bar_config().expect("props");
    assert_eq!(props.dir, Direction::Rtl);
    assert!(!props.show_previous_button);
    assert!(props.show_next_button);
    assert_eq!(props.container_class(), "month-nav");
    assert_eq!(props.hovered_arrow_class_name.as_deref(), Some("is-hot"));
    assert_eq!(props.labels.next_month, "Later");
    assert_eq!(props.labels.previous_month, "Previous Month");
}

#[test]
fn toml_file_is_flattened_to_dotted_keys() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("navbar.toml");
    fs::write(
        &path,
        r#"
dir = "rtl"
classname = "toolbar"

[show]
next = false

[calendar]
start = "2026-02"
"#,
    )
    .expect("write toml");

    let cfg = Config::load(Some(path.as_path())).expect("load toml");
    let props = cfg.nav_bar_config().expect("props");
    assert_eq!(props.dir, Direction::Rtl);
    assert!(!props.show_next_button);
    assert_eq!(props.container_class(), "toolbar");
    assert_eq!(cfg.calendar_start().expect("start").to_string(), "2026-02");
}

#[test]
fn malformed_rc_line_reports_location() {
    let temp = tempdir().expect("tempdir");
    let rc = temp.path().join("navbarrc");
    fs::write(&rc, "dir = ltr\nthis line has no separator\n").expect("write rc");

    let err = Config::load(Some(rc.as_path())).expect_err("malformed line");
    assert!(err.to_string().contains(":2:"), "{err}");
}

#[test]
fn self_include_is_reported_as_cycle() {
    let temp = tempdir().expect("tempdir");
    let rc = temp.path().join("navbarrc");
    fs::write(&rc, "dir = rtl\ninclude navbarrc\n").expect("write rc");

    let err = Config::load(Some(rc.as_path())).expect_err("self include");
    let msg = err.to_string();
    assert!(msg.contains("include cycle at"), "{msg}");
    assert!(msg.contains(":2:"), "{msg}");
}

#[test]
fn mutual_includes_are_reported_as_cycle() {
    let temp = tempdir().expect("tempdir");
    let first = temp.path().join("first.rc");
    let second = temp.path().join("second.rc");
    fs::write(&first, "include second.rc\n").expect("write first");
    fs::write(&second, "dir = rtl\ninclude first.rc\n").expect("write second");

    let err = Config::load(Some(first.as_path())).expect_err("mutual include");
    assert!(err.to_string().contains("include cycle at"), "{err}");
}

#[test]
fn repeated_include_without_cycle_loads() {
    let temp = tempdir().expect("tempdir");
    let shared = temp.path().join("shared.rc");
    fs::write(&shared, "hovered.classname = is-hot\n").expect("write shared");
    let rc = temp.path().join("navbarrc");
    fs::write(&rc, "include shared.rc\ninclude shared.rc\n").expect("write rc");

    let cfg = Config::load(Some(rc.as_path())).expect("load config");
    assert_eq!(cfg.loaded_files.len(), 3);
}

#[test]
fn hash_inside_value_is_kept() {
    let temp = tempdir().expect("tempdir");
    let rc = temp.path().join("navbarrc");
    fs::write(
        &rc,
        "labels.next = Week #2\nlabels.previous = Week#1  # trailing note\n",
    )
    .expect("write rc");

    let props = Config::load(Some(rc.as_path()))
        .expect("load config")
        .nav_bar_config()
        .expect("props");
    assert_eq!(props.labels.next_month, "Week #2");
    assert_eq!(props.labels.previous_month, "Week#1");
}

#[test]
fn simulate_command_reports_each_event() {
    let mut cfg = Config::default();
    cfg.apply_overrides([
        ("calendar.start".to_string(), "2026-02".to_string()),
        ("show.next".to_string(), "false".to_string()),
    ]);
    let inv = Invocation {
        command: "simulate".to_string(),
        command_args: vec![
            "enter:prev".to_string(),
            "click:prev".to_string(),
            "click:next".to_string(),
            "key:prev:Space".to_string(),
            "leave:prev".to_string(),
        ],
    };

    let mut out = Vec::new();
    dispatch(&cfg, inv, &mut out).expect("simulate");
    let text = String::from_utf8(out).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 7);
    assert!(lines[0].starts_with("start 2026-02"));
    assert!(lines[1].contains("rerendered=true") && lines[1].contains("renders=2"));
    assert!(lines[2].contains("invoked=previous") && lines[2].ends_with("month=2026-01"));
    assert!(lines[3].contains("invoked=-") && lines[3].ends_with("month=2026-01"));
    assert!(lines[4].contains("prevent_default=true") && lines[4].ends_with("month=2025-12"));
    assert!(lines[6].starts_with("end 2025-12"));
}

#[test]
fn render_command_prints_markup() {
    let mut cfg = Config::default();
    cfg.apply_overrides([("hovered.classname".to_string(), "hot".to_string())]);
    let inv = Invocation {
        command: "render".to_string(),
        command_args: vec!["hover-next".to_string()],
    };

    let mut out = Vec::new();
    dispatch(&cfg, inv, &mut out).expect("render");
    let html = String::from_utf8(out).expect("utf8");
    assert!(html.starts_with("<div class=\"DayPicker-NavBar\" dir=\"ltr\">"));
    assert!(html.contains("DayPicker-NavButton--next hot"));
    assert!(!html.contains("DayPicker-NavButton--prev hot"));
}
