//! AWS Systems Manager Parameter Store source.

use crate::error::PstoreError;
use crate::source::{PageStream, ParameterSource};
use crate::types::{Page, ParameterKind, Record};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::types::Parameter;
use aws_sdk_ssm::Client;
use futures::{stream, StreamExt};
use tracing::{debug, info};

/// Largest page the GetParametersByPath API accepts.
pub const MAX_PAGE_SIZE: i32 = 10;

/// Connection settings resolved from flags and configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SsmSettings {
    pub profile: String,
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
    pub page_size: i32,
}

impl Default for SsmSettings {
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
            region: None,
            endpoint_url: None,
            page_size: MAX_PAGE_SIZE,
        }
    }
}

/// Parameter Store client using the SDK's default credential chain for `profile`.
pub struct SsmSource {
    client: Client,
    page_size: i32,
}

impl SsmSource {
    /// Load shared config/credentials for the profile and build a client.
    pub async fn connect(settings: &SsmSettings) -> Result<Self, PstoreError> {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).profile_name(&settings.profile);
        if let Some(ref region) = settings.region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        if let Some(ref endpoint) = settings.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;
        info!(
            profile = %settings.profile,
            region = ?sdk_config.region().map(|r| r.as_ref().to_string()),
            "Parameter Store client configured"
        );
        Ok(Self {
            client: Client::new(&sdk_config),
            page_size: settings.page_size.clamp(1, MAX_PAGE_SIZE),
        })
    }
}

fn convert_parameter(parameter: &Parameter) -> Result<Record, PstoreError> {
    let key = parameter
        .name()
        .ok_or_else(|| PstoreError::RemoteFetch("Parameter without a name in response".to_string()))?;
    let kind = match parameter.r#type() {
        Some(t) => ParameterKind::from_api_name(t.as_str()).ok_or_else(|| {
            PstoreError::RemoteFetch(format!(
                "Unsupported type {} for parameter {}",
                t.as_str(),
                key
            ))
        })?,
        None => ParameterKind::String,
    };
    Ok(Record::new(
        key,
        parameter.value().unwrap_or_default(),
        kind,
        parameter.version(),
    ))
}

#[async_trait]
impl ParameterSource for SsmSource {
    fn list_pages<'a>(&'a self, path: &'a str) -> PageStream<'a> {
        debug!(path, page_size = self.page_size, "GetParametersByPath");
        let paginator = self
            .client
            .get_parameters_by_path()
            .path(path)
            .recursive(true)
            .with_decryption(true)
            .max_results(self.page_size)
            .into_paginator()
            .send();

        let pages = stream::unfold(paginator, |mut paginator| async move {
            paginator.next().await.map(|item| (item, paginator))
        });

        Box::pin(pages.map(|item| -> Result<Page, PstoreError> {
            let output =
                item.map_err(|e| PstoreError::RemoteFetch(DisplayErrorContext(&e).to_string()))?;
            let records = output
                .parameters()
                .iter()
                .map(convert_parameter)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Page::new(records))
        }))
    }

    async fn get(&self, key: &str) -> Result<Record, PstoreError> {
        debug!(key, "GetParameter");
        let output = self
            .client
            .get_parameter()
            .name(key)
            .with_decryption(true)
            .send()
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                match e.into_service_error() {
                    svc if svc.is_parameter_not_found() => {
                        PstoreError::ParameterNotFound(key.to_string())
                    }
                    _ => PstoreError::RemoteFetch(message),
                }
            })?;
        let parameter = output
            .parameter()
            .ok_or_else(|| PstoreError::ParameterNotFound(key.to_string()))?;
        convert_parameter(parameter)
    }

    fn source_name(&self) -> &str {
        "ssm"
    }
}
