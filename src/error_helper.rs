use colored::*;
use std::path::Path;

use crate::error::ExplorerError;

/// Print the error together with steps that usually resolve it
pub fn print_error_with_help(error: &ExplorerError) {
    eprintln!("\n{}", "❌ Could not build the report".red().bold());
    eprintln!();
    eprintln!("Cause: {}", error);
    eprintln!();
    eprintln!("{}", "💡 How to fix:".yellow().bold());

    match error {
        ExplorerError::FileRead { path, .. } => {
            eprintln!("  1. Check that the file exists:");
            eprintln!(
                "     {}",
                format!("ls {}", path.parent().unwrap_or(Path::new(".")).display()).cyan()
            );
            eprintln!("  2. Unzip your ChatGPT export into the data directory");
            eprintln!(
                "  3. Point at another location with {}",
                "--data-dir <DIRECTORY>".cyan()
            );
        }
        ExplorerError::Parse { path, .. } => {
            eprintln!("  1. Make sure {} is the untouched file from the export", path.display());
            eprintln!("  2. Validate the JSON:");
            eprintln!("     {}", format!("jq . {}", path.display()).cyan());
            eprintln!("  3. Request a fresh export if the file was truncated");
        }
        ExplorerError::EmptyInput => {
            eprintln!("  1. The export contains no conversations");
            eprintln!("  2. Check that conversations.json comes from the same export as user.json");
        }
        ExplorerError::InvalidArgument(_) => {
            eprintln!("  1. Window lengths and chart dimensions must be positive");
            eprintln!("  2. Review the file passed with {}", "--config".cyan());
        }
    }
    eprintln!();
}
