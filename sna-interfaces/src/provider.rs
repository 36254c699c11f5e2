//! Provider collaborator interfaces
//!
//! Data sources and resources never build their own client. The provider
//! resolves its configuration once, constructs a single client and hands it
//! to every collaborator through [`ProviderData`].

use std::fmt;
use std::sync::Arc;

/// Client handle shared with data sources and resources.
///
/// The client is immutable after construction, so collaborators only ever
/// get read access to it and may use it concurrently.
pub struct ProviderData<C> {
    client: Arc<C>,
}

impl<C> ProviderData<C> {
    pub fn new(client: C) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Borrow the configured client
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Get a shared handle to the configured client
    pub fn shared_client(&self) -> Arc<C> {
        Arc::clone(&self.client)
    }
}

impl<C> Clone for ProviderData<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<C: fmt::Debug> fmt::Debug for ProviderData<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderData")
            .field("client", &self.client)
            .finish()
    }
}

/// Read-only collaborator exposed by the provider
pub trait DataSource<C>: Send + Sync {
    /// Full type name, usually `<provider type name>_<suffix>`
    fn metadata(&self, provider_type_name: &str) -> String;

    /// Receive the configured client.
    ///
    /// Called once per provider configuration; `None` when the provider has
    /// not been configured yet.
    fn configure(&mut self, data: Option<&ProviderData<C>>);
}

/// Managed collaborator exposed by the provider
pub trait Resource<C>: Send + Sync {
    /// Full type name, usually `<provider type name>_<suffix>`
    fn metadata(&self, provider_type_name: &str) -> String;

    /// Receive the configured client.
    fn configure(&mut self, data: Option<&ProviderData<C>>);
}

/// Constructor registered with the provider for a data source
pub type DataSourceConstructor<C> = fn() -> Box<dyn DataSource<C>>;

/// Constructor registered with the provider for a resource
pub type ResourceConstructor<C> = fn() -> Box<dyn Resource<C>>;
