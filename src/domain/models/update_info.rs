//! Client release descriptor served by the version check.

/// Latest published Android client release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateInfo {
    pub version_num: String,
    pub description: String,
    pub url: String,
}
