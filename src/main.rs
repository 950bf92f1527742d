// SPDX-License-Identifier: MPL-2.0
use tons_toast::app::{self, Flags};

const HELP: &str = "\
tons_toast

USAGE:
  tons_toast [OPTIONS]

OPTIONS:
  --config-dir <PATH>   Directory holding settings.toml
  --message <TEXT>      Post a toast at startup (repeatable)
  -h, --help            Print help
";

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_dir = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            log::warn!("ignoring --config-dir: {err}");
            None
        }
    };
    let messages = match args.values_from_str("--message") {
        Ok(messages) => messages,
        Err(err) => {
            log::warn!("ignoring --message: {err}");
            Vec::new()
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unexpected arguments: {remaining:?}");
    }

    app::run(Flags {
        config_dir,
        messages,
    })
}
