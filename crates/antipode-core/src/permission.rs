use crate::error::ProbeError;

/// Geolocation permission as reported by the Permissions API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    Prompt,
    #[default]
    Unknown,
}

/// How the first location fetch presents itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchMode {
    /// No loading indicator.
    Silent,
    /// Loading indicator shown until the device answers.
    Loud,
}

impl FetchMode {
    #[inline]
    pub fn shows_loading(self) -> bool {
        matches!(self, FetchMode::Loud)
    }
}

/// What the caller should do once the permission query settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub status: PermissionStatus,
    pub fetch: FetchMode,
    /// Whether to surface the instructive permission message.
    pub show_message: bool,
}

/// One-shot permission check. The query result decides whether the first
/// fetch is silent; it never gates manual input.
#[derive(Debug, Default)]
pub struct PermissionProber {
    status: PermissionStatus,
    settled: bool,
}

impl PermissionProber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> PermissionStatus {
        self.status
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Settle the probe. Returns `None` if it already settled, so at most one
    /// fetch is ever triggered from this path.
    pub fn settle(&mut self, result: Result<PermissionStatus, ProbeError>) -> Option<ProbeOutcome> {
        if self.settled {
            log::debug!("[permission] ignoring repeated result {:?}", result);
            return None;
        }
        self.settled = true;
        self.status = match result {
            Ok(status) => status,
            Err(e) => {
                log::warn!("[permission] {}", e);
                PermissionStatus::Unknown
            }
        };
        let granted = self.status == PermissionStatus::Granted;
        log::info!("[permission] status={:?}", self.status);
        Some(ProbeOutcome {
            status: self.status,
            fetch: if granted {
                FetchMode::Silent
            } else {
                FetchMode::Loud
            },
            show_message: !granted,
        })
    }
}
