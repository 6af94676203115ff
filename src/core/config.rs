use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", cfg.to_yaml()?);
        Ok(())
    }

    /// Open the configuration file in `editor`, then `$EDITOR`/`$VISUAL`,
    /// then the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let first = editor.clone().unwrap_or_else(|| default_editor.clone());
        if run_editor(&first, path) {
            success(format!("Configuration file edited using '{}'", first));
            return Ok(());
        }

        if first != default_editor {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                first, default_editor
            ));
            if run_editor(&default_editor, path) {
                success(format!("Configuration file edited using '{}'", default_editor));
                return Ok(());
            }
        }

        Err(AppError::Config(format!(
            "could not open {} with '{}'",
            path.display(),
            default_editor
        )))
    }
}

fn run_editor(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
