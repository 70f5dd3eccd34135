use std::fmt;

use super::{source_display_name, Extension, ExtensionItem, InstallStep};

/// Action button caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonLabel {
    Pending,
    Downloading,
    Installing,
    Installed,
    Retry,
    Update,
    Settings,
    Trust,
    Install,
}

impl ButtonLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonLabel::Pending => "Pending",
            ButtonLabel::Downloading => "Downloading",
            ButtonLabel::Installing => "Installing",
            ButtonLabel::Installed => "Installed",
            ButtonLabel::Retry => "Retry",
            ButtonLabel::Update => "Update",
            ButtonLabel::Settings => "Settings",
            ButtonLabel::Trust => "Trust",
            ButtonLabel::Install => "Install",
        }
    }
}

impl fmt::Display for ButtonLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<InstallStep> for ButtonLabel {
    fn from(step: InstallStep) -> Self {
        match step {
            InstallStep::Pending => ButtonLabel::Pending,
            InstallStep::Downloading => ButtonLabel::Downloading,
            InstallStep::Installing => ButtonLabel::Installing,
            InstallStep::Installed => ButtonLabel::Installed,
            InstallStep::Error => ButtonLabel::Retry,
        }
    }
}

/// Warning badge, highest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    Untrusted,
    Obsolete,
    Unofficial,
}

impl Warning {
    pub fn as_str(self) -> &'static str {
        match self {
            Warning::Untrusted => "UNTRUSTED",
            Warning::Obsolete => "OBSOLETE",
            Warning::Unofficial => "UNOFFICIAL",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row icon: fetched for repository listings, taken from the installed
/// package otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icon {
    Remote(String),
    Package(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    pub label: ButtonLabel,
    pub enabled: bool,
}

/// Everything a bound row displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub title: String,
    pub version: String,
    pub lang: String,
    pub warning: Option<Warning>,
    pub icon: Icon,
    pub button: ButtonState,
}

/// Receives action button clicks by row position.
pub trait ButtonClickListener {
    fn on_button_click(&self, position: usize);
}

impl<F: Fn(usize)> ButtonClickListener for F {
    fn on_button_click(&self, position: usize) {
        self(position)
    }
}

/// Untrusted beats obsolete beats unofficial.
pub fn warning_for(extension: &Extension) -> Option<Warning> {
    match extension {
        Extension::Untrusted { .. } => Some(Warning::Untrusted),
        Extension::Installed {
            is_obsolete: true, ..
        } => Some(Warning::Obsolete),
        Extension::Installed {
            is_unofficial: true,
            ..
        } => Some(Warning::Unofficial),
        Extension::Installed { .. } | Extension::Available { .. } => None,
    }
}

/// Button caption and enabled flag for a row.
///
/// A running install disables the button; only a failed one (`Error`)
/// re-enables it as a retry.
pub fn button_state(item: &ExtensionItem) -> ButtonState {
    if let Some(step) = item.install_step {
        return ButtonState {
            label: step.into(),
            enabled: step == InstallStep::Error,
        };
    }
    let label = match &item.extension {
        Extension::Installed {
            has_update: true, ..
        } => ButtonLabel::Update,
        Extension::Installed { .. } => ButtonLabel::Settings,
        Extension::Untrusted { .. } => ButtonLabel::Trust,
        Extension::Available { .. } => ButtonLabel::Install,
    };
    ButtonState {
        label,
        enabled: true,
    }
}

fn icon_for(extension: &Extension) -> Icon {
    match extension {
        Extension::Available { icon_url, .. } => Icon::Remote(icon_url.clone()),
        other => Icon::Package(other.pkg_name().to_string()),
    }
}

/// A list row bound to one extension at a time.
pub struct ExtensionRow<L> {
    position: usize,
    listener: L,
    view: Option<RowView>,
}

impl<L: ButtonClickListener> ExtensionRow<L> {
    pub fn new(position: usize, listener: L) -> Self {
        Self {
            position,
            listener,
            view: None,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Rows get reused for other positions as the list scrolls.
    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    pub fn view(&self) -> Option<&RowView> {
        self.view.as_ref()
    }

    pub fn bind(&mut self, item: &ExtensionItem) -> &RowView {
        let extension = &item.extension;
        self.view.insert(RowView {
            title: extension.name().to_string(),
            version: extension.version_name().to_string(),
            lang: source_display_name(extension.lang()),
            warning: warning_for(extension),
            icon: icon_for(extension),
            button: button_state(item),
        })
    }

    /// Refresh only the button, e.g. on an install progress update.
    pub fn bind_button(&mut self, item: &ExtensionItem) -> ButtonState {
        let state = button_state(item);
        if let Some(view) = self.view.as_mut() {
            view.button = state;
        }
        state
    }

    /// Report a button click to the listener. Disabled buttons swallow the
    /// click; returns whether it was dispatched.
    pub fn click(&self) -> bool {
        if self.view.as_ref().is_some_and(|v| !v.button.enabled) {
            return false;
        }
        self.listener.on_button_click(self.position);
        true
    }
}
