// SPDX-License-Identifier: MPL-2.0
use iced_dial::app::{self, paths, Flags};

fn main() -> iced::Result {
    init_tracing();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        endpoint: args.opt_value_from_str("--endpoint").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
    };

    // Make the config dir override visible to every later load/save
    paths::init_cli_overrides(flags.config_dir.clone());

    app::run(flags)
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
