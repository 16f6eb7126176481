//! Adobe Analytics 2.0 API client.

use crate::credentials::Credentials;
use crate::description::ApiDescription;
use crate::error::{Error, ErrorKind, TransportError};
use crate::helpers::format_time;
use crate::options::{
    CalculatedMetricsOptions, CollectionOptions, CollectionsOptions, DateRangesOptions,
    DimensionsOptions, LookupOptions, MetricsOptions, SegmentsOptions, UsageLogsOptions,
    UsersOptions,
};
use crate::request::{Params, RequestDescriptor, DEFAULT_SERVER};
use crate::response::ApiResponse;
use crate::transport::Transport;
use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client as HttpClient;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Configures and builds a [`Client`].
#[derive(Debug)]
pub struct ClientBuilder {
    server: Option<String>,
    timeout: Duration,
    user_agent: String,
    description: Option<ApiDescription>,
    headers: HeaderMap,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            server: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("adobe-analytics-rs/{}", crate::VERSION),
            description: None,
            headers: HeaderMap::new(),
        }
    }
}

impl ClientBuilder {
    /// Server URL template; `{companyId}` is substituted on every request.
    ///
    /// Defaults to the first server of the API description.
    pub fn server(mut self, template: impl Into<String>) -> Self {
        self.server = Some(template.into());
        self
    }

    /// Header sent with every request.
    ///
    /// Preset `x-api-key`, `x-proxy-global-company-id`, `authorization` or
    /// `content-type` values take precedence over the ones derived from the
    /// credentials.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Use this API description instead of the one bundled with the crate.
    pub fn description(mut self, description: ApiDescription) -> Self {
        self.description = Some(description);
        self
    }

    /// Validate credentials, load the API description and build the HTTP client.
    pub async fn build(
        self,
        company_id: impl Into<String>,
        api_key: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Client, Error> {
        let credentials = Credentials::new(company_id, api_key, token)?;
        let description = match self.description {
            Some(d) => d,
            None => ApiDescription::embedded().map_err(Error::Description)?,
        };
        let server = self
            .server
            .or_else(|| description.servers.first().cloned())
            .unwrap_or_else(|| DEFAULT_SERVER.to_string());
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()
            .map_err(Error::HttpClient)?;
        info!(
            company_id = credentials.company_id(),
            operations = description.operations.len(),
            "Analytics client initialized"
        );
        Ok(Client {
            server: Arc::from(server),
            headers: Arc::new(self.headers),
            transport: Arc::new(Transport::new(http, description, credentials)),
        })
    }
}

/// Adobe Analytics API client.
///
/// Immutable after construction; clones share the same transport and can be
/// used from concurrent tasks.
#[derive(Clone, Debug)]
pub struct Client {
    server: Arc<str>,
    headers: Arc<HeaderMap>,
    transport: Arc<Transport>,
}

impl Client {
    /// Create a client with default settings.
    ///
    /// Fails with [`Error::Initialization`] naming every empty credential.
    pub async fn init(
        company_id: impl Into<String>,
        api_key: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, Error> {
        Self::builder().build(company_id, api_key, token).await
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Server URL template requests are sent to.
    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn company_id(&self) -> &str {
        self.transport.credentials().company_id()
    }

    pub fn api_key(&self) -> &str {
        self.transport.credentials().api_key()
    }

    pub fn token(&self) -> &str {
        self.transport.credentials().token()
    }

    /// Retrieve calculated metrics.
    ///
    /// Results always include id, name, description, rsid, owner, polarity,
    /// precision and type. `expansion` can add `modified`, `definition`,
    /// `compatibility`, `reportSuiteName` and `tags`.
    pub async fn get_calculated_metrics(
        &self,
        options: &CalculatedMetricsOptions,
    ) -> Result<ApiResponse, Error> {
        self.call(
            ErrorKind::GetCalculatedMetrics,
            "calculatedmetrics",
            "findCalculatedMetrics",
            options.params(),
            None,
        )
        .await
    }

    /// Retrieve a single calculated metric by id.
    pub async fn get_calculated_metric_by_id(
        &self,
        id: &str,
        options: &LookupOptions,
    ) -> Result<ApiResponse, Error> {
        self.call(
            ErrorKind::GetCalculatedMetricById,
            "calculatedmetrics",
            "findOneCalculatedMetric",
            options.params().with("id", id),
            None,
        )
        .await
    }

    /// Retrieve report suites matching the filters.
    pub async fn get_collections(&self, options: &CollectionsOptions) -> Result<ApiResponse, Error> {
        self.call(
            ErrorKind::GetCollections,
            "collections",
            "getCollections",
            options.params(),
            None,
        )
        .await
    }

    /// Retrieve a report suite by rsid.
    pub async fn get_collection_by_id(
        &self,
        rsid: &str,
        options: &CollectionOptions,
    ) -> Result<ApiResponse, Error> {
        self.call(
            ErrorKind::GetCollectionById,
            "collections",
            "findOne",
            options.params().with("rsid", rsid),
            None,
        )
        .await
    }

    /// List the date ranges stored for the user.
    pub async fn get_date_ranges(&self, options: &DateRangesOptions) -> Result<ApiResponse, Error> {
        self.call(
            ErrorKind::GetDateRanges,
            "dateranges",
            "getDateRanges",
            options.params(),
            None,
        )
        .await
    }

    pub async fn get_date_range_by_id(
        &self,
        date_range_id: &str,
        options: &LookupOptions,
    ) -> Result<ApiResponse, Error> {
        self.call(
            ErrorKind::GetDateRangeById,
            "dateranges",
            "getDateRange",
            options.params().with("dateRangeId", date_range_id),
            None,
        )
        .await
    }

    /// List the dimensions of a report suite.
    pub async fn get_dimensions(
        &self,
        rsid: &str,
        options: &DimensionsOptions,
    ) -> Result<ApiResponse, Error> {
        self.call(
            ErrorKind::GetDimensions,
            "dimensions",
            "dimensions_getDimensions",
            options.params().with("rsid", rsid),
            None,
        )
        .await
    }

    /// Get one dimension of a report suite. Ids look like `evar1`.
    pub async fn get_dimension_by_id(
        &self,
        dimension_id: &str,
        rsid: &str,
        options: &LookupOptions,
    ) -> Result<ApiResponse, Error> {
        self.call(
            ErrorKind::GetDimensionById,
            "dimensions",
            "dimensions_getDimension",
            options
                .params()
                .with("dimensionId", dimension_id)
                .with("rsid", rsid),
            None,
        )
        .await
    }

    /// List the metrics of a report suite.
    pub async fn get_metrics(
        &self,
        rsid: &str,
        options: &MetricsOptions,
    ) -> Result<ApiResponse, Error> {
        self.call(
            ErrorKind::GetMetrics,
            "metrics",
            "getMetrics",
            options.params().with("rsid", rsid),
            None,
        )
        .await
    }

    /// Get one metric of a report suite. Ids are bare (`pageviews`, not
    /// `metrics/pageviews`).
    pub async fn get_metric_by_id(
        &self,
        id: &str,
        rsid: &str,
        options: &LookupOptions,
    ) -> Result<ApiResponse, Error> {
        self.call(
            ErrorKind::GetMetricById,
            "metrics",
            "getMetric",
            options.params().with("id", id).with("rsid", rsid),
            None,
        )
        .await
    }

    /// Run a report. `body` is the report query.
    pub async fn get_report<B>(&self, body: &B) -> Result<ApiResponse, Error>
    where
        B: Serialize + ?Sized,
    {
        let kind = ErrorKind::GetReport;
        let params = Params::new();
        let body = encode_body(kind, &params, body)?;
        self.call(kind, "reports", "runReport", params, Some(body))
            .await
    }

    pub async fn get_segments(&self, options: &SegmentsOptions) -> Result<ApiResponse, Error> {
        self.call(
            ErrorKind::GetSegments,
            "segments",
            "segments_getSegments",
            options.params(),
            None,
        )
        .await
    }

    /// Validate a segment definition against a report suite.
    pub async fn validate_segment<B>(&self, rsid: &str, body: &B) -> Result<ApiResponse, Error>
    where
        B: Serialize + ?Sized,
    {
        let kind = ErrorKind::ValidateSegment;
        let params = Params::new().with("rsid", rsid);
        let body = encode_body(kind, &params, body)?;
        self.call(kind, "segments", "segments_validateSegment", params, Some(body))
            .await
    }

    /// List users of the company designated by the token.
    pub async fn get_users(&self, options: &UsersOptions) -> Result<ApiResponse, Error> {
        self.call(
            ErrorKind::GetUsers,
            "users",
            "findAllUsers",
            options.params(),
            None,
        )
        .await
    }

    pub async fn get_current_user(&self) -> Result<ApiResponse, Error> {
        self.call(
            ErrorKind::GetCurrentUser,
            "users",
            "getCurrentUser",
            Params::new(),
            None,
        )
        .await
    }

    /// Search usage logs between two instants.
    pub async fn get_usage_logs(
        &self,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        options: &UsageLogsOptions,
    ) -> Result<ApiResponse, Error> {
        self.call(
            ErrorKind::GetUsageLogs,
            "auditlogs",
            "findAllUsageLogs",
            options
                .params()
                .with("startDate", format_time(start_date))
                .with("endDate", format_time(end_date)),
            None,
        )
        .await
    }

    async fn call(
        &self,
        kind: ErrorKind,
        tag: &str,
        operation_id: &str,
        params: Params,
        body: Option<Value>,
    ) -> Result<ApiResponse, Error> {
        let mut request = RequestDescriptor::new(&*self.server, self.company_id());
        request.headers = (*self.headers).clone();
        request.body = body.clone();
        match self
            .transport
            .execute(tag, operation_id, &params, request)
            .await
        {
            Ok(res) => Ok(res),
            Err(source) => Err(request_error(kind, params, body, source)),
        }
    }
}

fn encode_body<B>(kind: ErrorKind, params: &Params, body: &B) -> Result<Value, Error>
where
    B: Serialize + ?Sized,
{
    serde_json::to_value(body)
        .map_err(|e| request_error(kind, params.clone(), None, TransportError::Encode(e)))
}

fn request_error(
    kind: ErrorKind,
    params: Params,
    body: Option<Value>,
    source: TransportError,
) -> Error {
    warn!(code = kind.code(), error = %source, "Analytics API call failed");
    Error::Request {
        kind,
        params,
        body,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("not serializable"))
        }
    }

    #[tokio::test]
    async fn init_reports_every_missing_credential() {
        let err = Client::init("", "key1", "").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SdkInitialization);
        assert_eq!(
            err.to_string(),
            "[AnalyticsSDK:ERROR_SDK_INITIALIZATION] SDK initialization error(s). Missing arguments: companyId, token"
        );
    }

    #[tokio::test]
    async fn init_keeps_credentials() {
        let client = Client::init("acme", "key1", "tok1").await.unwrap();
        assert_eq!(client.company_id(), "acme");
        assert_eq!(client.api_key(), "key1");
        assert_eq!(client.token(), "tok1");
    }

    #[tokio::test]
    async fn unserializable_body_fails_with_endpoint_kind() {
        let client = Client::init("acme", "key1", "tok1").await.unwrap();
        let err = client.get_report(&Unserializable).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::GetReport);
        assert!(matches!(
            err,
            Error::Request {
                source: TransportError::Encode(_),
                ..
            }
        ));

        let err = client
            .validate_segment("123", &Unserializable)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValidateSegment);
        assert_eq!(err.params().and_then(|p| p.get("rsid")), Some("123"));
    }

    #[tokio::test]
    async fn server_defaults_to_description() {
        let client = Client::init("acme", "key1", "tok1").await.unwrap();
        assert_eq!(client.server(), DEFAULT_SERVER);

        let description = ApiDescription::from_json(
            r#"{"title": "t", "version": "1", "servers": ["http://localhost:9/api/{companyId}/"], "operations": []}"#,
        )
        .unwrap();
        let client = Client::builder()
            .description(description.clone())
            .build("acme", "key1", "tok1")
            .await
            .unwrap();
        assert_eq!(client.server(), "http://localhost:9/api/{companyId}/");

        let client = Client::builder()
            .description(description)
            .server("http://example.test/{companyId}/")
            .build("acme", "key1", "tok1")
            .await
            .unwrap();
        assert_eq!(client.server(), "http://example.test/{companyId}/");
    }

    #[tokio::test]
    async fn custom_description_without_operation() {
        let description = ApiDescription::from_json(
            r#"{"title": "t", "version": "1", "operations": []}"#,
        )
        .unwrap();
        let client = Client::builder()
            .description(description)
            .build("acme", "key1", "tok1")
            .await
            .unwrap();
        let err = client.get_current_user().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::GetCurrentUser);
        assert!(matches!(
            err,
            Error::Request {
                source: TransportError::UnknownOperation { .. },
                ..
            }
        ));
    }
}
