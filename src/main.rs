// SPDX-License-Identifier: MPL-2.0
use clock_dashboard::app::{self, paths, Flags};
use clock_dashboard::ui::theming::ThemeMode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
Clock Dashboard - analog and digital clocks for several timezones

USAGE:
  clock_dashboard [OPTIONS]

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --theme <MODE>         light, dark or system
  --config-dir <DIR>     Directory holding settings.toml
  -h, --help             Print this help

ENVIRONMENT:
  CLOCK_DASHBOARD_CONFIG_DIR   Same as --config-dir
  RUST_LOG                     Log filter (default: clock_dashboard=info)
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        theme: args.opt_value_from_fn("--theme", str::parse::<ThemeMode>)?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "clock_dashboard=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    tracing::info!("Clock Dashboard v{}", env!("CARGO_PKG_VERSION"));
    paths::init_cli_overrides(flags.config_dir.clone());

    app::run(flags)
}
