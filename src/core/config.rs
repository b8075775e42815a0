use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", cfg.to_yaml()?);
        let converter = cfg.converter()?;
        println!("Civil zone: {}", converter.zone());
        println!(
            "Offset-less timestamps read as: {}",
            converter.offsetless_policy().as_str()
        );
        Ok(())
    }

    pub fn check(path: &Path) -> AppResult<()> {
        if !path.exists() {
            warning(format!("No configuration file at {}", path.display()));
            return Ok(());
        }

        let missing = migrate::missing_keys(path)?;
        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            warning(format!("Missing keys: {}", missing.join(", ")));
            info("Run `heliops config --migrate` to add them with default values.");
        }
        Ok(())
    }

    pub fn migrate(path: &Path) -> AppResult<()> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "no configuration file at {}",
                path.display()
            )));
        }

        if migrate::add_missing_keys(path)?.is_empty() {
            info("Configuration already up to date.");
        }
        Ok(())
    }

    /// Open the config file in `editor`, else `$EDITOR`/`$VISUAL`, else the
    /// platform default. Falls back to the default once if the first editor fails.
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

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
                Ok(())
            }
            _ => {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    editor_to_use, default_editor
                ));

                match Command::new(&default_editor).arg(path).status() {
                    Ok(s) if s.success() => {
                        success(format!(
                            "Configuration file edited successfully using fallback '{}'",
                            default_editor
                        ));
                        Ok(())
                    }
                    _ => Err(AppError::Config(format!(
                        "failed to edit configuration file using '{}'",
                        default_editor
                    ))),
                }
            }
        }
    }
}
