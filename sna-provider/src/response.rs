//! Result of a provider configure call

use sna_config::Diagnostics;
use sna_interfaces::ProviderData;
use sna_logging::LogContext;
use std::fmt;

/// Everything a configure call hands back to its caller
///
/// On success both data slots hold the same shared client. On failure they
/// are empty and `diagnostics` has at least one error.
pub struct ConfigureResponse<C> {
    pub diagnostics: Diagnostics,
    pub data_source_data: Option<ProviderData<C>>,
    pub resource_data: Option<ProviderData<C>>,
    /// Masked logging context used while building the client
    pub log_context: Option<LogContext>,
}

impl<C> ConfigureResponse<C> {
    pub(crate) fn failed(diagnostics: Diagnostics) -> Self {
        Self {
            diagnostics,
            data_source_data: None,
            resource_data: None,
            log_context: None,
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.diagnostics.has_error() && self.data_source_data.is_some()
    }

    /// The shared client data, or every diagnostic if configuration failed
    pub fn into_result(self) -> Result<ProviderData<C>, Diagnostics> {
        match self.data_source_data {
            Some(data) if !self.diagnostics.has_error() => Ok(data),
            _ => Err(self.diagnostics),
        }
    }
}

impl<C: fmt::Debug> fmt::Debug for ConfigureResponse<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigureResponse")
            .field("diagnostics", &self.diagnostics)
            .field("data_source_data", &self.data_source_data)
            .field("resource_data", &self.resource_data)
            .field("log_context", &self.log_context)
            .finish()
    }
}
