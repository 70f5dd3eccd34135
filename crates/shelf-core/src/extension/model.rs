use serde::{Deserialize, Serialize};

/// Fields every extension carries regardless of install state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionInfo {
    pub name: String,
    pub pkg_name: String,
    pub version_name: String,
    #[serde(default)]
    pub version_code: i64,
    /// Language code such as `en`, `pt-BR`, or `all`.
    pub lang: String,
    #[serde(default)]
    pub is_nsfw: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Extension {
    /// Listed in a repository, not installed.
    Available {
        #[serde(flatten)]
        info: ExtensionInfo,
        icon_url: String,
    },
    Installed {
        #[serde(flatten)]
        info: ExtensionInfo,
        #[serde(default)]
        has_update: bool,
        /// No longer published by any repository.
        #[serde(default)]
        is_obsolete: bool,
        /// Signed by someone other than the official repository.
        #[serde(default)]
        is_unofficial: bool,
    },
    /// Installed, but its signature hasn't been trusted by the user yet.
    Untrusted {
        #[serde(flatten)]
        info: ExtensionInfo,
        signature_hash: String,
    },
}

impl Extension {
    pub fn info(&self) -> &ExtensionInfo {
        match self {
            Extension::Available { info, .. }
            | Extension::Installed { info, .. }
            | Extension::Untrusted { info, .. } => info,
        }
    }

    pub fn name(&self) -> &str {
        &self.info().name
    }

    pub fn pkg_name(&self) -> &str {
        &self.info().pkg_name
    }

    pub fn version_name(&self) -> &str {
        &self.info().version_name
    }

    pub fn lang(&self) -> &str {
        &self.info().lang
    }
}

/// Progress of an install or update, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallStep {
    Pending,
    Downloading,
    Installing,
    Installed,
    Error,
}

/// One row of the extension list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionItem {
    pub extension: Extension,
    #[serde(default)]
    pub install_step: Option<InstallStep>,
}

impl ExtensionItem {
    pub fn new(extension: Extension) -> Self {
        Self {
            extension,
            install_step: None,
        }
    }

    pub fn with_step(mut self, step: InstallStep) -> Self {
        self.install_step = Some(step);
        self
    }
}
