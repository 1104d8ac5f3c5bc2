//! Transfer progress display
//!
//! Wraps an indicatif progress bar sized by the advisory byte estimate.
//! ADB exposes no byte-level progress, so the bar shows indeterminate
//! activity while the child runs and snaps to completion only on a clean
//! exit. With a zero estimate the bar degrades to a spinner, and drawing
//! is suppressed in quiet mode or when stderr is not a terminal.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::constants::progress;

/// Progress indicator for a single transfer
pub struct TransferBar {
    bar: ProgressBar,
}

impl TransferBar {
    /// Create a bar scaled to `total_bytes`, labelled with `message`
    pub fn new(total_bytes: u64, message: &str, enabled: bool) -> Self {
        let bar = if total_bytes > 0 {
            let bar = ProgressBar::new(total_bytes);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template(progress::BAR_TEMPLATE)
                    .unwrap()
                    .progress_chars(progress::BAR_CHARS),
            );
            bar
        } else {
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::default_spinner()
                    .template(progress::SPINNER_TEMPLATE)
                    .unwrap(),
            );
            bar
        };

        if !enabled || !atty::is(atty::Stream::Stderr) {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }

        bar.set_message(message.to_string());
        Self { bar }
    }

    /// Redraw without advancing the position
    pub fn tick(&self) {
        self.bar.tick();
    }

    /// Snap to the full estimate and finish
    pub fn complete(&self) {
        if let Some(len) = self.bar.length() {
            self.bar.set_position(len);
        }
        self.bar.finish();
    }

    /// Stop short of completion, leaving the bar as it stands
    pub fn abandon(&self) {
        self.bar.abandon();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sized_bar_starts_at_zero() {
        let bar = TransferBar::new(1000, "Pushing album", false);

        assert_eq!(bar.bar.position(), 0);
        assert_eq!(bar.bar.length(), Some(1000));
    }

    #[test]
    fn test_zero_estimate_degrades_to_spinner() {
        let bar = TransferBar::new(0, "Pulling album", false);
        assert_eq!(bar.bar.length(), None);
    }

    #[test]
    fn test_complete_snaps_to_estimate() {
        let bar = TransferBar::new(1000, "Pushing album", false);
        bar.complete();

        assert_eq!(bar.bar.position(), 1000);
        assert!(bar.bar.is_finished());
    }

    #[test]
    fn test_tick_does_not_advance_position() {
        let bar = TransferBar::new(1000, "Pushing album", false);
        bar.tick();
        bar.tick();

        assert_eq!(bar.bar.position(), 0);
    }

    #[test]
    fn test_abandon_leaves_bar_short_of_estimate() {
        let bar = TransferBar::new(1000, "Pulling album", false);
        bar.tick();
        bar.abandon();

        assert!(bar.bar.position() < 1000);
        assert!(bar.bar.is_finished());
    }
}
