// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use tee_studio::app::{self, Flags};
use tee_studio::ui::theme::ThemeId;
use tee_studio::{config, logging};

const HELP: &str = "\
TeeStudio - t-shirt customizer

USAGE:
  tee_studio [OPTIONS] [IMAGE]

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --theme <THEME>        Startup theme: default, retro or futuristic
  --config-dir <DIR>     Directory containing settings.toml
  -h, --help             Print this help

ARGS:
  <IMAGE>                Artwork to preload

ENVIRONMENT:
  TEE_STUDIO_CONFIG_DIR  Config directory, when --config-dir is not given
  TEE_STUDIO_LOG         Log filter (e.g. debug, tee_studio=trace)
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang")?;
    let theme = args.opt_value_from_fn("--theme", str::parse::<ThemeId>)?;
    let config_dir = args.opt_value_from_os_str("--config-dir", |s| {
        Ok::<_, std::convert::Infallible>(PathBuf::from(s))
    })?;
    let file_path = args.finish().into_iter().next().map(PathBuf::from);

    Ok(Flags {
        lang,
        theme,
        config_dir,
        file_path,
    })
}

fn main() -> iced::Result {
    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
    logging::init(&config.general.log_level);
    if let Some(key) = &config_warning {
        tracing::warn!(warning = %key, "settings file ignored");
    }

    app::run(flags, config, config_warning)
}
