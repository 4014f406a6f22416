use serde::{Deserialize, Serialize};

use crate::config::ReleaseConfig;
use crate::constants::Platform;

/// Release manifest consumed by the dearsql updater.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub version: String,
    // nothing fills this yet
    pub release_notes: String,
    pub downloads: Downloads,
}

/// One entry per [`Platform`], serialized in [`Platform::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Downloads {
    #[serde(rename = "linux-x86_64")]
    pub linux_x86_64: Download,

    #[serde(rename = "linux-aarch64")]
    pub linux_aarch64: Download,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Download {
    pub url: String,
    /// Left empty until the release pipeline publishes checksums.
    pub sha256: String,
}

impl Manifest {
    pub fn from_release(release: &ReleaseConfig) -> Self {
        let download = |platform| Download {
            url: artifact_url(release, platform),
            sha256: String::new(),
        };

        Self {
            version: release.version.clone(),
            release_notes: String::new(),
            downloads: Downloads {
                linux_x86_64: download(Platform::LinuxX86_64),
                linux_aarch64: download(Platform::LinuxAarch64),
            },
        }
    }
}

impl Downloads {
    pub fn get(&self, platform: Platform) -> &Download {
        match platform {
            Platform::LinuxX86_64 => &self.linux_x86_64,
            Platform::LinuxAarch64 => &self.linux_aarch64,
        }
    }
}

/// `{base_url}/{artifact}-{version}-{platform}`
pub fn artifact_url(release: &ReleaseConfig, platform: Platform) -> String {
    format!(
        "{}/{}-{}-{}",
        release.base_url,
        release.artifact_name,
        release.version,
        platform.key()
    )
}
