// SPDX-License-Identifier: MPL-2.0
use folio::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
folio

USAGE:
  folio [OPTIONS]

OPTIONS:
  --lang <code>        Display language for this session (en, de, ja)
  --config-dir <dir>   Directory holding settings.toml
  --data-dir <dir>     Directory holding persisted state
  --offline            Skip content fetches and show built-in content
  -h, --help           Print help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_string(&mut args, "--lang"),
        config_dir: opt_string(&mut args, "--config-dir"),
        data_dir: opt_string(&mut args, "--data-dir"),
        offline: args.contains("--offline"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    app::run(flags)
}

fn opt_string(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(flag = key, error = %err, "ignoring invalid flag value");
            None
        }
    }
}
