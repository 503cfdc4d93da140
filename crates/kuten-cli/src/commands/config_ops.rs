use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn settings_export() {
    print!("{}", kuten_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        kuten_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: cli.default_direction={}, backup.timezone={}, log.filter={}",
        s.default_direction(),
        s.backup.timezone,
        s.log.filter
    );
}

/// Install a custom settings file before the first `settings()` call.
pub fn load_settings(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(kuten_core::settings::init_custom(content), "Error: {}");
}
