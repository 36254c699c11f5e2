//! Provider implementation

use crate::logging::client_log_context;
use crate::response::ConfigureResponse;
use serde::Serialize;
use sna_client::SnaClientFactory;
use sna_config::{
    construct_client, ClientFactory, ConfigResolver, EnvSource, ProcessEnv, ProviderConfigInput,
    ProviderSchema,
};
use sna_interfaces::{
    DataSource, DataSourceConstructor, LogLevel, ProviderData, Resource, ResourceConstructor,
};
use tracing::info;

/// Provider type name, prefixed to every data source and resource name
pub const PROVIDER_TYPE_NAME: &str = "sna";

/// Provider type name and version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderMetadata {
    pub type_name: String,
    pub version: String,
}

/// Secure Network Analytics provider
///
/// Holds no configuration between calls. Each [`configure`](Self::configure)
/// resolves from scratch and returns the client to the caller.
pub struct SnaProvider<F: ClientFactory = SnaClientFactory> {
    /// "dev" when built locally, "test" under acceptance tests, otherwise the
    /// release version
    version: String,
    factory: F,
    data_sources: Vec<DataSourceConstructor<F::Client>>,
    resources: Vec<ResourceConstructor<F::Client>>,
}

impl SnaProvider<SnaClientFactory> {
    /// Provider using the default HTTP client factory
    pub fn new(version: impl Into<String>) -> Self {
        Self::with_factory(version, SnaClientFactory::new())
    }
}

impl<F> SnaProvider<F>
where
    F: ClientFactory,
    F::Client: Send + Sync + 'static,
{
    pub fn with_factory(version: impl Into<String>, factory: F) -> Self {
        Self {
            version: version.into(),
            factory,
            data_sources: Vec::new(),
            resources: Vec::new(),
        }
    }

    pub fn with_data_source(mut self, constructor: DataSourceConstructor<F::Client>) -> Self {
        self.data_sources.push(constructor);
        self
    }

    pub fn with_resource(mut self, constructor: ResourceConstructor<F::Client>) -> Self {
        self.resources.push(constructor);
        self
    }

    pub fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            type_name: PROVIDER_TYPE_NAME.to_string(),
            version: self.version.clone(),
        }
    }

    pub fn schema(&self) -> ProviderSchema {
        ProviderSchema::new()
    }

    /// Configure against the process environment
    pub fn configure(&self, config: &ProviderConfigInput) -> ConfigureResponse<F::Client> {
        self.configure_with_env(config, ProcessEnv)
    }

    /// Resolve `config`, build the client and return it for the collaborators.
    ///
    /// The factory is only invoked when resolution produced no error.
    pub fn configure_with_env<E: EnvSource>(
        &self,
        config: &ProviderConfigInput,
        env: E,
    ) -> ConfigureResponse<F::Client> {
        info!("Configuring Secure Network Analytics client");

        let resolution = match ConfigResolver::new(env).resolve(config) {
            Ok(resolution) => resolution,
            Err(diagnostics) => return ConfigureResponse::failed(diagnostics),
        };
        let mut diagnostics = resolution.diagnostics;

        let log_context = client_log_context(&resolution.config);
        log_context.emit(LogLevel::Debug, "Creating Secure Network Analytics client");

        let client = match construct_client(&self.factory, resolution.config) {
            Ok(client) => client,
            Err(diagnostic) => {
                diagnostics.push(diagnostic);
                return ConfigureResponse::failed(diagnostics);
            }
        };

        let data = ProviderData::new(client);

        log_context.emit_with(
            LogLevel::Info,
            "Configured Secure Network Analytics client",
            [("success", true)],
        );

        ConfigureResponse {
            diagnostics,
            data_source_data: Some(data.clone()),
            resource_data: Some(data),
            log_context: Some(log_context),
        }
    }

    /// Fresh instance of every registered data source
    pub fn data_sources(&self) -> Vec<Box<dyn DataSource<F::Client>>> {
        self.data_sources.iter().map(|new| new()).collect()
    }

    /// Fresh instance of every registered resource
    pub fn resources(&self) -> Vec<Box<dyn Resource<F::Client>>> {
        self.resources.iter().map(|new| new()).collect()
    }

    /// Instantiate every collaborator and hand it the configured client
    pub fn configured_collaborators(
        &self,
        response: &ConfigureResponse<F::Client>,
    ) -> (
        Vec<Box<dyn DataSource<F::Client>>>,
        Vec<Box<dyn Resource<F::Client>>>,
    ) {
        let mut data_sources = self.data_sources();
        for data_source in &mut data_sources {
            data_source.configure(response.data_source_data.as_ref());
        }

        let mut resources = self.resources();
        for resource in &mut resources {
            resource.configure(response.resource_data.as_ref());
        }

        (data_sources, resources)
    }
}
