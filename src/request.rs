//! Shared request-construction helpers.
//!
//! Every Watson operation builds its target URL the same way: a
//! service-relative path, optionally followed by a positional identifier
//! segment, with the API `version` date attached as a query parameter and a
//! client-identifying analytics header naming the service and operation.
//! These helpers are composed into the service client rather than inherited.

use url::Url;

use crate::error::{Error, Result};

/// Header carrying SDK analytics metadata on every request.
pub const ANALYTICS_HEADER: &str = "X-IBMCloud-SDK-Analytics";

/// Build the analytics header value for one operation.
pub(crate) fn analytics_value(service_name: &str, service_version: &str, operation_id: &str) -> String {
    format!(
        "service_name={};service_version={};operation_id={}",
        service_name, service_version, operation_id
    )
}

/// Join the endpoint, a fixed path, and optional identifier segments into a
/// request URL. Identifier segments are appended one at a time so that
/// reserved characters are percent-escaped rather than interpreted as path
/// structure.
pub(crate) fn build_url(endpoint: &str, path: &str, path_params: &[&str]) -> Result<Url> {
    let mut url = Url::parse(endpoint)
        .map_err(|e| Error::InvalidArgument(format!("invalid endpoint '{}': {}", endpoint, e)))?;

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| Error::InvalidArgument(format!("endpoint '{}' cannot be a base", endpoint)))?;
        // Avoid a double slash when the endpoint carries a trailing slash
        segments.pop_if_empty();
        for segment in path.split('/') {
            segments.push(segment);
        }
        for param in path_params {
            segments.push(param);
        }
    }

    Ok(url)
}
