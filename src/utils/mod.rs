use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use std::path::PathBuf;

/// Returns the default data directory, `data/` next to the running executable.
pub fn default_data_dir() -> Result<PathBuf, Report> {
    let exe = std::env::current_exe().wrap_err("Failed to locate the running executable.")?;
    let parent = exe.parent().ok_or_else(|| eyre!("Executable has no parent directory: {exe:?}"))?;
    Ok(parent.join("data"))
}

#[cfg(test)]
mod tests {
    use super::default_data_dir;
    use color_eyre::eyre::{Report, Result};

    #[test]
    fn data_next_to_executable() -> Result<(), Report> {
        let dir = default_data_dir()?;
        assert!(dir.ends_with("data"));
        assert_eq!(dir.parent(), std::env::current_exe()?.parent());
        Ok(())
    }
}
