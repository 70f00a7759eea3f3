//! Interactive prompts
//!
//! Uses dialoguer to ask before a missing directory is created.

use std::path::Path;

use colored::Colorize;
use dialoguer::Confirm;
use romsift_core::Confirmer;

/// Asks on the terminal, defaulting to "no".
#[derive(Debug, Default)]
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm_create(&mut self, category: &str, path: &Path) -> romsift_core::Result<bool> {
        tracing::warn!("{category}: path does NOT exist: {}", path.display());
        Confirm::new()
            .with_prompt(format!(
                "{} Create {}?",
                category.cyan(),
                path.display().to_string().bold()
            ))
            .default(false)
            .interact()
            .map_err(|e| romsift_core::Error::Prompt {
                message: e.to_string(),
            })
    }
}
