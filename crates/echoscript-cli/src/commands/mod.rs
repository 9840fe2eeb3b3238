pub mod ast;
pub mod run;

use anyhow::{bail, Result};

/// Require the `.es` file extension on a script path
pub(crate) fn check_extension(file_path: &str) -> Result<()> {
    if file_path.len() > 3 && file_path.ends_with(".es") {
        Ok(())
    } else {
        bail!("The file must have a .es extension.")
    }
}
