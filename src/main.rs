// SPDX-License-Identifier: MPL-2.0
use learnhub::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
LearnHub

USAGE:
  learnhub [OPTIONS]

OPTIONS:
  --theme MODE         light, dark or system
  --notify MESSAGE     show a toast at startup
  --severity NAME      success, error, warning or info (default: info)
  --config-dir DIR     directory holding settings.toml
  --data-dir DIR       directory holding storage.cbor
  --log LEVEL          log filter, e.g. debug or learnhub=trace (default: info)
  -h, --help           print this help
";

fn init_logging(level: Option<&str>) {
    let filter = level
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let opt = |args: &mut pico_args::Arguments, key: &'static str| -> Option<String> {
        args.opt_value_from_str(key).unwrap_or_else(|err| {
            eprintln!("ignoring {key}: {err}");
            None
        })
    };

    let log = opt(&mut args, "--log");
    init_logging(log.as_deref());

    let flags = Flags {
        theme: opt(&mut args, "--theme"),
        notify: opt(&mut args, "--notify"),
        severity: opt(&mut args, "--severity"),
        data_dir: opt(&mut args, "--data-dir"),
        config_dir: opt(&mut args, "--config-dir"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}
