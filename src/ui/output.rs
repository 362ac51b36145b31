//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including hints.
    Verbose,
    /// Show data, status lines and hints.
    #[default]
    Normal,
    /// Show data and errors only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows status lines (success, warning, headers).
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows hints.
    pub fn shows_hints(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_shows_status() {
        assert!(OutputMode::Verbose.shows_status());
        assert!(OutputMode::Normal.shows_status());
        assert!(!OutputMode::Quiet.shows_status());
    }

    #[test]
    fn output_mode_shows_hints() {
        assert!(OutputMode::Verbose.shows_hints());
        assert!(OutputMode::Normal.shows_hints());
        assert!(!OutputMode::Quiet.shows_hints());
    }

    #[test]
    fn default_is_normal() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }
}
