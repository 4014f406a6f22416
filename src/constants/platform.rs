use std::fmt;

/// Targets a release artifact is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    LinuxX86_64,
    LinuxAarch64,
}

impl Platform {
    /// Every supported platform, in the order they appear in the manifest.
    pub const ALL: [Platform; 2] = [Platform::LinuxX86_64, Platform::LinuxAarch64];

    pub fn key(self) -> &'static str {
        match self {
            Platform::LinuxX86_64 => "linux-x86_64",
            Platform::LinuxAarch64 => "linux-aarch64",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
