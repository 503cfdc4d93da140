use clap::Parser;

use kuten_cli::args::{Cli, Command};
use kuten_cli::commands::{config_ops, replace_ops};
use kuten_cli::trace_init::init_tracing;
use kuten_core::settings::settings;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Replace {
            file,
            direction,
            settings: custom,
        } => {
            if let Some(path) = custom {
                config_ops::load_settings(&path);
            }
            init_tracing(&settings().log.filter);
            replace_ops::replace_cmd(&file, direction.resolve(settings().default_direction()));
        }
        Command::Check {
            file,
            direction,
            settings: custom,
        } => {
            if let Some(path) = custom {
                config_ops::load_settings(&path);
            }
            init_tracing(&settings().log.filter);
            replace_ops::check_cmd(&file, direction.resolve(settings().default_direction()));
        }
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
