/// Output formatting for serialized payloads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonStyle {
    /// Indented, human readable
    Pretty,
    /// Compact
    #[default]
    Web,
}

impl JsonStyle {
    /// Verbose logging implies readable payloads.
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose { Self::Pretty } else { Self::Web }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Web => "web",
        }
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
