//! Loading render configuration from a host application's config file

use huelog::Level;
use huelog_console::style::{BOLD, FG_GREEN, FG_HI_RED};
use huelog_console::{Field, Keys, RenderConfig, Style};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct AppConfig {
    name: String,
    logging: Logging,
}

#[derive(Debug, Deserialize)]
struct Logging {
    level: Level,
    #[serde(default)]
    render: RenderConfig,
}

#[test]
fn partial_tables_keep_defaults() {
    let config: AppConfig = toml::from_str(
        r#"
        name = "gateway"

        [logging]
        level = "warn+1"

        [logging.render]
        time_format = "%H:%M"
        field_order = ["message", "level", "status"]
        delimiter = ": "

        [logging.render.keys]
        status = "code"

        [logging.render.palette]
        level_info = [1, 32]
        "#,
    )
    .unwrap();

    assert_eq!(config.name, "gateway");
    let logging = config.logging;
    assert_eq!(logging.level, Level::WARN.offset(1));

    let render = logging.render;
    assert_eq!(render.time_format, "%H:%M");
    assert!(render.local_time);
    assert_eq!(
        render.field_order,
        [Field::Message, Field::Level, Field::Status]
    );
    assert_eq!(render.delimiter, ": ");
    assert_eq!(
        render.keys,
        Keys {
            status: "code".to_string(),
            ..Keys::default()
        }
    );
    assert_eq!(render.palette.level_info, Style::from([BOLD, FG_GREEN]));
    assert_eq!(render.palette.level_error, Style::from([FG_HI_RED]));
}

#[test]
fn missing_render_table_uses_defaults() {
    let config: AppConfig = toml::from_str(
        r#"
        name = "worker"
        [logging]
        level = "DEBUG"
        "#,
    )
    .unwrap();

    assert_eq!(config.logging.level, Level::DEBUG);
    assert_eq!(config.logging.render, RenderConfig::default());
}

#[test]
fn unknown_field_name_is_rejected() {
    let result = toml::from_str::<RenderConfig>(r#"field_order = ["level", "latency"]"#);
    assert!(result.is_err());

    let result = toml::from_str::<Logging>(r#"level = "verbose""#);
    assert!(result.is_err());
}

#[test]
fn config_round_trips_through_toml() {
    let config = RenderConfig::default()
        .with_time_format("%T")
        .with_field_order([Field::Level, Field::Message]);
    let text = toml::to_string(&config).unwrap();
    let parsed: RenderConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}
