//! Platform selection panel.
//!
//! The landing screen offers ENZO builds for three platforms. Selecting one
//! updates a system-info panel (software name, version, release status) and
//! the download call-to-action label. None of the builds are released, so
//! the download action is a logged stub.

use std::fmt;

/// Download target platforms offered by the landing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Android,
    MacOs,
}

/// Display strings for one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformInfo {
    /// Software name shown in the system panel.
    pub name: &'static str,
    /// Version string shown in the system panel.
    pub version: &'static str,
    /// Release status shown in the system panel.
    pub status: &'static str,
    /// Label of the download call-to-action.
    pub action: &'static str,
}

impl Platform {
    /// All selectable platforms, in display order.
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::Android, Platform::MacOs];

    /// Panel strings for this platform.
    pub fn info(self) -> PlatformInfo {
        match self {
            Platform::Windows => PlatformInfo {
                name: "ENZO WINDOWS",
                version: "N/A",
                status: "NOT RELEASED",
                action: "DOWNLOAD FOR WINDOWS",
            },
            Platform::Android => PlatformInfo {
                name: "ENZO ANDROID",
                version: "N/A",
                status: "NOT RELEASED",
                action: "DOWNLOAD FOR ANDROID",
            },
            Platform::MacOs => PlatformInfo {
                name: "ENZO MACOS",
                version: "N/A",
                status: "NOT RELEASED",
                action: "DOWNLOAD FOR MACOS",
            },
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Windows => "windows",
            Platform::Android => "android",
            Platform::MacOs => "macos",
        };
        write!(f, "{}", name)
    }
}

/// Selection state of the platform cards plus the download stub.
pub struct PlatformPanel {
    selected: Platform,
}

impl PlatformPanel {
    /// Create a panel with the default selection (Windows).
    pub fn new() -> Self {
        Self {
            selected: Platform::Windows,
        }
    }

    /// Currently selected platform.
    #[inline]
    pub fn selected(&self) -> Platform {
        self.selected
    }

    /// Panel strings for the current selection.
    pub fn info(&self) -> PlatformInfo {
        self.selected.info()
    }

    /// Select a platform, updating the panel strings.
    pub fn select(&mut self, platform: Platform) {
        self.selected = platform;
        log::debug!("platform selected: {}", platform);
    }

    /// Download stub; no build is released yet.
    pub fn begin_download(&self) {
        log::info!("download initiated for {}", self.selected);
    }
}

impl Default for PlatformPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection_is_windows() {
        let panel = PlatformPanel::new();
        assert_eq!(panel.selected(), Platform::Windows);
        assert_eq!(panel.info().name, "ENZO WINDOWS");
    }

    #[test]
    fn test_android_selection_strings() {
        let mut panel = PlatformPanel::new();
        panel.select(Platform::Android);

        let info = panel.info();
        assert_eq!(info.name, "ENZO ANDROID");
        assert_eq!(info.version, "N/A");
        assert_eq!(info.status, "NOT RELEASED");
        assert_eq!(info.action, "DOWNLOAD FOR ANDROID");
    }

    #[test]
    fn test_every_platform_has_consistent_panel() {
        for platform in Platform::ALL {
            let info = platform.info();
            assert!(info.name.starts_with("ENZO "));
            assert_eq!(info.version, "N/A");
            assert_eq!(info.status, "NOT RELEASED");
            assert!(info.action.starts_with("DOWNLOAD FOR "));
        }
    }
}
