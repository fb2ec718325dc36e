//! Terminal implementation of the host collaborators.

use std::cell::Cell;
use std::io::{self, BufRead, Write};

use packet_presets_core::{PresetEvent, PresetHost};
use tracing::{debug, warn};

/// Prompts on stderr, reads answers from stdin.
pub struct TerminalHost {
    assume_yes: bool,
    live_changed: Cell<bool>,
}

impl TerminalHost {
    pub fn new(assume_yes: bool) -> Self {
        Self {
            assume_yes,
            live_changed: Cell::new(false),
        }
    }

    /// Whether a load overwrote the live configuration since the last call.
    pub fn take_live_changed(&self) -> bool {
        self.live_changed.replace(false)
    }
}

impl PresetHost for TerminalHost {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            debug!("Auto-confirming: {}", message);
            return true;
        }

        let mut stderr = io::stderr();
        let _ = write!(stderr, "{message} [y/N] ");
        let _ = stderr.flush();

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => parse_confirmation(&answer),
            Err(e) => {
                warn!("Failed to read confirmation: {}", e);
                false
            }
        }
    }

    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }

    fn notify(&self, event: PresetEvent) {
        match event {
            PresetEvent::LiveConfigChanged { id } => {
                debug!("Live configuration replaced from {}", id);
                self.live_changed.set(true);
            }
            PresetEvent::PresetsChanged { presets } => {
                debug!("Preset list now has {} entries", presets.len());
            }
        }
    }
}

/// `y` or `yes`, any case, surrounding whitespace ignored.
pub fn parse_confirmation(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_confirmation() {
        assert!(parse_confirmation("y\n"));
        assert!(parse_confirmation("  YES "));
        assert!(!parse_confirmation("\n"));
        assert!(!parse_confirmation("no"));
        assert!(!parse_confirmation("yep"));
    }

    #[test]
    fn test_assume_yes_skips_prompt() {
        assert!(TerminalHost::new(true).confirm("Delete preset \"x\"?"));
    }

    #[test]
    fn test_live_changed_flag_is_consumed() {
        let host = TerminalHost::new(false);
        assert!(!host.take_live_changed());

        host.notify(PresetEvent::LiveConfigChanged { id: "p".into() });
        assert!(host.take_live_changed());
        assert!(!host.take_live_changed());
    }
}
