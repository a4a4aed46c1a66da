use tracing_subscriber::filter::EnvFilter;

use crate::config;

pub fn set_up(verbosity: u8) {
    let level = max_level(verbosity);

    let filter = EnvFilter::try_new("warn")
        .unwrap()
        .add_directive(format!("{}={}", config::BIN_NAME, level).parse().unwrap())
        .add_directive(format!("potlevel_lib={}", level).parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn max_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}
