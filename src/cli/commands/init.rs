use std::{fs, io, path::Path};

use anyhow::Result;

use super::super::exit_status::ExitStatus;
use super::super::report::{print_init_created_to, print_init_exists_to};
use crate::config::{CONFIG_FILE_NAME, Config, default_config_json};

/// Write the default `.yamlocalerc.json` into the working directory.
///
/// An existing file is never overwritten; that case exits with `Failure`.
pub fn init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        print_init_exists_to(&mut io::stderr().lock());
        return Ok(ExitStatus::Failure);
    }

    fs::write(config_path, format!("{}\n", default_config_json()?))?;
    print_init_created_to(&Config::default(), &mut io::stdout().lock());

    Ok(ExitStatus::Success)
}
