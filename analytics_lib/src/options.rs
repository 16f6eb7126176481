//! Optional parameters recognized by each endpoint.
//!
//! Every struct implements [`Default`] with the documented defaults
//! (`limit = 10`, `page = 0` for paged listings); fill only what you need:
//!
//! ```
//! use analytics_lib::options::SegmentsOptions;
//!
//! let opts = SegmentsOptions {
//!     include_type: Some("all".into()),
//!     ..Default::default()
//! };
//! assert_eq!(opts.limit, 10);
//! ```
//!
//! List-valued filters (`rsids`, `expansion`, `tag_names`, ...) are
//! comma-delimited strings, as the API expects them.

use crate::request::Params;

pub const DEFAULT_LIMIT: u32 = 10;
pub const DEFAULT_PAGE: u32 = 0;

/// Search options for calculated metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatedMetricsOptions {
    /// Comma-delimited list of calculated metric ids.
    pub calculated_metric_filter: Option<String>,
    /// Extra fields: `modified`, `definition`, `compatibility`, `reportSuiteName`, `tags`.
    pub expansion: Option<String>,
    pub limit: u32,
    pub locale: Option<String>,
    pub name: Option<String>,
    pub owner_id: Option<String>,
    pub page: u32,
    pub rsids: Option<String>,
    pub tag_names: Option<String>,
}

impl Default for CalculatedMetricsOptions {
    fn default() -> Self {
        Self {
            calculated_metric_filter: None,
            expansion: None,
            limit: DEFAULT_LIMIT,
            locale: None,
            name: None,
            owner_id: None,
            page: DEFAULT_PAGE,
            rsids: None,
            tag_names: None,
        }
    }
}

impl CalculatedMetricsOptions {
    pub(crate) fn params(&self) -> Params {
        Params::new()
            .with_opt("calculatedMetricFilter", self.calculated_metric_filter.as_deref())
            .with_opt("expansion", self.expansion.as_deref())
            .with("limit", self.limit)
            .with_opt("locale", self.locale.as_deref())
            .with_opt("name", self.name.as_deref())
            .with_opt("ownerId", self.owner_id.as_deref())
            .with("page", self.page)
            .with_opt("rsids", self.rsids.as_deref())
            .with_opt("tagNames", self.tag_names.as_deref())
    }
}

/// `expansion` and `locale`, shared by the single-item lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupOptions {
    pub expansion: Option<String>,
    pub locale: Option<String>,
}

impl LookupOptions {
    pub(crate) fn params(&self) -> Params {
        Params::new()
            .with_opt("expansion", self.expansion.as_deref())
            .with_opt("locale", self.locale.as_deref())
    }
}

/// Report suite search options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionsOptions {
    pub expansion: Option<String>,
    pub limit: u32,
    pub page: u32,
    /// Only suites whose rsid contains this value.
    pub rsid_contains: Option<String>,
    pub rsids: Option<String>,
}

impl Default for CollectionsOptions {
    fn default() -> Self {
        Self {
            expansion: None,
            limit: DEFAULT_LIMIT,
            page: DEFAULT_PAGE,
            rsid_contains: None,
            rsids: None,
        }
    }
}

impl CollectionsOptions {
    pub(crate) fn params(&self) -> Params {
        Params::new()
            .with_opt("expansion", self.expansion.as_deref())
            .with("limit", self.limit)
            .with("page", self.page)
            .with_opt("rsidContains", self.rsid_contains.as_deref())
            .with_opt("rsids", self.rsids.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionOptions {
    pub expansion: Option<String>,
}

impl CollectionOptions {
    pub(crate) fn params(&self) -> Params {
        Params::new().with_opt("expansion", self.expansion.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangesOptions {
    pub expansion: Option<String>,
    /// Comma-delimited list of date range ids.
    pub filter_by_ids: Option<String>,
    pub limit: u32,
    pub locale: Option<String>,
    pub page: u32,
}

impl Default for DateRangesOptions {
    fn default() -> Self {
        Self {
            expansion: None,
            filter_by_ids: None,
            limit: DEFAULT_LIMIT,
            locale: None,
            page: DEFAULT_PAGE,
        }
    }
}

impl DateRangesOptions {
    pub(crate) fn params(&self) -> Params {
        Params::new()
            .with_opt("expansion", self.expansion.as_deref())
            .with_opt("filterByIds", self.filter_by_ids.as_deref())
            .with("limit", self.limit)
            .with_opt("locale", self.locale.as_deref())
            .with("page", self.page)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DimensionsOptions {
    pub classifiable: Option<bool>,
    pub expansion: Option<String>,
    pub locale: Option<String>,
    pub reportable: Option<bool>,
    pub segmentable: Option<bool>,
}

impl DimensionsOptions {
    pub(crate) fn params(&self) -> Params {
        Params::new()
            .with_opt("classifiable", self.classifiable)
            .with_opt("expansion", self.expansion.as_deref())
            .with_opt("locale", self.locale.as_deref())
            .with_opt("reportable", self.reportable)
            .with_opt("segmentable", self.segmentable)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsOptions {
    pub expansion: Option<String>,
    pub locale: Option<String>,
    pub segmentable: Option<bool>,
}

impl MetricsOptions {
    pub(crate) fn params(&self) -> Params {
        Params::new()
            .with_opt("expansion", self.expansion.as_deref())
            .with_opt("locale", self.locale.as_deref())
            .with_opt("segmentable", self.segmentable)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentsOptions {
    pub expansion: Option<String>,
    /// `shared` or `all`; `all` takes precedence.
    pub include_type: Option<String>,
    pub limit: u32,
    pub locale: Option<String>,
    pub name: Option<String>,
    pub page: u32,
    pub rsids: Option<String>,
    /// Comma-delimited list of segment ids.
    pub segment_filter: Option<String>,
    pub tag_names: Option<String>,
}

impl Default for SegmentsOptions {
    fn default() -> Self {
        Self {
            expansion: None,
            include_type: None,
            limit: DEFAULT_LIMIT,
            locale: None,
            name: None,
            page: DEFAULT_PAGE,
            rsids: None,
            segment_filter: None,
            tag_names: None,
        }
    }
}

impl SegmentsOptions {
    pub(crate) fn params(&self) -> Params {
        Params::new()
            .with_opt("expansion", self.expansion.as_deref())
            .with_opt("includeType", self.include_type.as_deref())
            .with("limit", self.limit)
            .with_opt("locale", self.locale.as_deref())
            .with_opt("name", self.name.as_deref())
            .with("page", self.page)
            .with_opt("rsids", self.rsids.as_deref())
            .with_opt("segmentFilter", self.segment_filter.as_deref())
            .with_opt("tagNames", self.tag_names.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersOptions {
    pub limit: u32,
    pub page: u32,
}

impl Default for UsersOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            page: DEFAULT_PAGE,
        }
    }
}

impl UsersOptions {
    pub(crate) fn params(&self) -> Params {
        Params::new()
            .with("limit", self.limit)
            .with("page", self.page)
    }
}

/// Filters for the usage (audit) log search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageLogsOptions {
    pub login: Option<String>,
    pub ip: Option<String>,
    pub rsid: Option<String>,
    pub event_type: Option<String>,
    /// Free-text match on the event description.
    pub event: Option<String>,
    pub limit: u32,
    pub page: u32,
}

impl Default for UsageLogsOptions {
    fn default() -> Self {
        Self {
            login: None,
            ip: None,
            rsid: None,
            event_type: None,
            event: None,
            limit: DEFAULT_LIMIT,
            page: DEFAULT_PAGE,
        }
    }
}

impl UsageLogsOptions {
    pub(crate) fn params(&self) -> Params {
        Params::new()
            .with_opt("login", self.login.as_deref())
            .with_opt("ip", self.ip.as_deref())
            .with_opt("rsid", self.rsid.as_deref())
            .with_opt("eventType", self.event_type.as_deref())
            .with_opt("event", self.event.as_deref())
            .with("limit", self.limit)
            .with("page", self.page)
    }
}
