//! Capability-branched shortcut registration.
//!
//! A registration is planned first (pure, no host calls) and then
//! dispatched to the host. Native hosts get a [`ShortcutRecord`]; legacy
//! hosts get a [`LegacyShortcutBundle`]. Nothing is retried or rolled back:
//! a host failure is returned to the caller as is.

use super::icon::ShortcutIcon;
use super::launch::{LaunchTarget, ShortcutTarget};
use super::record::{LegacyShortcutBundle, ShortcutId, ShortcutRecord};
use crate::config::LaunchConfig;
use crate::error::{Result, ShortcutError};
use crate::platform::HostCapabilities;
use tracing::{debug, info};

/// How the shortcut reaches the launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationMode {
    /// The launcher started us to create a shortcut; hand the result back.
    ReturnToLauncher,
    /// Started from our own UI; install the shortcut ourselves.
    Install,
}

impl RegistrationMode {
    /// Mode implied by the action the host was started with.
    pub fn from_action(action: Option<&str>) -> Self {
        match action {
            Some(LaunchConfig::ACTION_CREATE_SHORTCUT) => RegistrationMode::ReturnToLauncher,
            _ => RegistrationMode::Install,
        }
    }
}

/// What a registration produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    NativeResult(ShortcutRecord),
    PinRequest(ShortcutRecord),
    LegacyResult(LegacyShortcutBundle),
    LegacyBroadcast(LegacyShortcutBundle),
    /// An existing pinned shortcut was re-published.
    Updated(ShortcutRecord),
}

impl RegistrationOutcome {
    /// Native record carried by the outcome, if any.
    pub fn record(&self) -> Option<&ShortcutRecord> {
        match self {
            RegistrationOutcome::NativeResult(record)
            | RegistrationOutcome::PinRequest(record)
            | RegistrationOutcome::Updated(record) => Some(record),
            RegistrationOutcome::LegacyResult(_) | RegistrationOutcome::LegacyBroadcast(_) => None,
        }
    }

    /// Legacy bundle carried by the outcome, if any.
    pub fn bundle(&self) -> Option<&LegacyShortcutBundle> {
        match self {
            RegistrationOutcome::LegacyResult(bundle)
            | RegistrationOutcome::LegacyBroadcast(bundle) => Some(bundle),
            _ => None,
        }
    }
}

/// Launcher-side operations the host performs for us.
pub trait ShortcutHost {
    /// Finish the create-shortcut flow with `outcome` as the activity result.
    fn set_result(&self, outcome: &RegistrationOutcome) -> Result<()>;

    /// Ask the launcher to pin `record`.
    fn request_pin_shortcut(&self, record: &ShortcutRecord) -> Result<()>;

    /// Send the legacy install broadcast.
    fn send_broadcast(&self, action: &str, bundle: &LegacyShortcutBundle) -> Result<()>;

    /// Replace an existing pinned shortcut.
    fn update_shortcut(&self, record: &ShortcutRecord) -> Result<()>;
}

/// Everything needed to build one shortcut.
#[derive(Debug, Clone)]
pub struct ShortcutRequest {
    pub target: ShortcutTarget,
    pub label: String,
    pub mime_type: String,
    pub icon: ShortcutIcon,
}

impl ShortcutRequest {
    pub fn new(
        target: ShortcutTarget,
        label: impl Into<String>,
        mime_type: impl Into<String>,
        icon: ShortcutIcon,
    ) -> Self {
        Self {
            target,
            label: label.into(),
            mime_type: mime_type.into(),
            icon,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(ShortcutError::validation("label", "label must not be empty"));
        }
        Ok(())
    }
}

/// Builds and submits shortcuts according to the host's capabilities.
#[derive(Debug, Clone, Copy)]
pub struct ShortcutRegistrar {
    capabilities: HostCapabilities,
}

impl ShortcutRegistrar {
    pub fn new(capabilities: HostCapabilities) -> Self {
        Self { capabilities }
    }

    pub fn capabilities(&self) -> &HostCapabilities {
        &self.capabilities
    }

    /// Decide what to submit, without touching the host.
    pub fn plan(
        &self,
        mode: RegistrationMode,
        request: &ShortcutRequest,
    ) -> Result<RegistrationOutcome> {
        request.validate()?;

        if self.capabilities.native_shortcuts {
            if mode == RegistrationMode::Install && !self.capabilities.pin_supported {
                return Err(pin_unsupported());
            }

            let record = self.build_record(ShortcutId::generate(), request)?;
            debug!("Planned native shortcut {} ({:?})", record.id, mode);

            Ok(match mode {
                RegistrationMode::ReturnToLauncher => RegistrationOutcome::NativeResult(record),
                RegistrationMode::Install => RegistrationOutcome::PinRequest(record),
            })
        } else {
            let bundle = LegacyShortcutBundle {
                name: request.label.clone(),
                launch: LaunchTarget::legacy(request.target.clone(), request.mime_type.clone()),
                icon: request.icon.clone(),
            };
            debug!("Planned legacy shortcut '{}' ({:?})", bundle.name, mode);

            Ok(match mode {
                RegistrationMode::ReturnToLauncher => RegistrationOutcome::LegacyResult(bundle),
                RegistrationMode::Install => RegistrationOutcome::LegacyBroadcast(bundle),
            })
        }
    }

    /// Plan the re-publication of an existing pinned shortcut.
    pub fn plan_update(
        &self,
        existing_id: ShortcutId,
        request: &ShortcutRequest,
    ) -> Result<RegistrationOutcome> {
        request.validate()?;

        if !self.capabilities.native_shortcuts {
            return Err(ShortcutError::PlatformCapabilityMissing {
                capability: "native_shortcuts".to_string(),
            });
        }

        Ok(RegistrationOutcome::Updated(
            self.build_record(existing_id, request)?,
        ))
    }

    /// Submit a planned outcome to the host.
    pub fn dispatch(&self, host: &dyn ShortcutHost, outcome: &RegistrationOutcome) -> Result<()> {
        match outcome {
            RegistrationOutcome::NativeResult(_) | RegistrationOutcome::LegacyResult(_) => {
                host.set_result(outcome)?;
            }
            RegistrationOutcome::PinRequest(record) => {
                host.request_pin_shortcut(record)?;
            }
            RegistrationOutcome::LegacyBroadcast(bundle) => {
                host.send_broadcast(LaunchConfig::ACTION_INSTALL_SHORTCUT, bundle)?;
            }
            RegistrationOutcome::Updated(record) => {
                host.update_shortcut(record)?;
            }
        }

        info!("Submitted shortcut: {}", describe(outcome));
        Ok(())
    }

    /// Plan and submit a new shortcut.
    pub fn register(
        &self,
        host: &dyn ShortcutHost,
        mode: RegistrationMode,
        request: &ShortcutRequest,
    ) -> Result<RegistrationOutcome> {
        let outcome = self.plan(mode, request)?;
        self.dispatch(host, &outcome)?;
        Ok(outcome)
    }

    /// Plan and submit an update of `existing_id`.
    pub fn update(
        &self,
        host: &dyn ShortcutHost,
        existing_id: ShortcutId,
        request: &ShortcutRequest,
    ) -> Result<RegistrationOutcome> {
        let outcome = self.plan_update(existing_id, request)?;
        self.dispatch(host, &outcome)?;
        Ok(outcome)
    }

    fn build_record(&self, id: ShortcutId, request: &ShortcutRequest) -> Result<ShortcutRecord> {
        let icon = request.icon.fit_within(self.capabilities.icon_limits)?;
        let launch = LaunchTarget::native(request.target.clone(), request.mime_type.clone(), &icon);

        Ok(ShortcutRecord {
            id,
            label: request.label.clone(),
            launch,
            icon,
        })
    }
}

fn pin_unsupported() -> ShortcutError {
    ShortcutError::PlatformCapabilityMissing {
        capability: "pin_shortcut".to_string(),
    }
}

fn describe(outcome: &RegistrationOutcome) -> String {
    match outcome {
        RegistrationOutcome::NativeResult(r) => format!("native result {} '{}'", r.id, r.label),
        RegistrationOutcome::PinRequest(r) => format!("pin request {} '{}'", r.id, r.label),
        RegistrationOutcome::LegacyResult(b) => format!("legacy result '{}'", b.name),
        RegistrationOutcome::LegacyBroadcast(b) => format!("legacy broadcast '{}'", b.name),
        RegistrationOutcome::Updated(r) => format!("update {} '{}'", r.id, r.label),
    }
}
