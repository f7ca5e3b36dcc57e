use std::fmt;

/// PHP version a unit is fixed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct PhpVersion {
    pub major: u32,
    pub minor: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub release: u32,
}

impl PhpVersion {
    /// Code targeting this version or newer is left untouched
    pub const LEGACY_BASELINE: PhpVersion = PhpVersion::new(7, 2, 0);

    pub const fn new(major: u32, minor: u32, release: u32) -> Self {
        Self {
            major,
            minor,
            release,
        }
    }

    /// `PHP_VERSION_ID` encoding, e.g. 7.1.33 is 70133
    pub const fn id(self) -> u32 {
        self.major * 10_000 + self.minor * 100 + self.release
    }

    pub fn is_legacy(self) -> bool {
        self.id() < Self::LEGACY_BASELINE.id()
    }
}

impl fmt::Display for PhpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.release)
    }
}
