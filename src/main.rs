// SPDX-License-Identifier: MPL-2.0
use gif_extractor::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = pico_args::Arguments::from_env();

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring invalid --lang");
        None
    });
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring invalid --config-dir");
        None
    });
    let source = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    // Takes precedence over GIF_EXTRACTOR_CONFIG_DIR.
    paths::init_cli_overrides(config_dir);

    app::run(Flags { lang, source })
}
