use std::path::PathBuf;

use anyhow::Result;
use scrollback_store::Store;

use crate::args::{Cli, Commands};
use crate::handlers;
use crate::presentation::{DisplayOptions, RenderMode};

pub fn run(cli: Cli) -> Result<()> {
    let store = Store::new(expand_tilde(&cli.storage_root));
    let opts = DisplayOptions::detect();

    match cli.command {
        Commands::List => handlers::list::handle(&store, &opts),

        Commands::Show {
            session_id,
            full,
            message,
        } => {
            let mode = if full {
                RenderMode::Full
            } else {
                RenderMode::Compact
            };

            match message {
                Some(message_id) => {
                    handlers::show::handle_message(&store, &session_id, &message_id, &opts)
                }
                None => handlers::show::handle_session(&store, &session_id, mode, &opts),
            }
        }
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_with_home() {
        unsafe { std::env::set_var("HOME", "/home/tester") };
        assert_eq!(
            expand_tilde("~/.local/share/opencode/storage"),
            PathBuf::from("/home/tester/.local/share/opencode/storage")
        );
    }

    #[test]
    fn test_expand_tilde_absolute_path_unchanged() {
        assert_eq!(expand_tilde("/var/data"), PathBuf::from("/var/data"));
    }
}
