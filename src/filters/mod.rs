//! Declarative list filters and their URL representation.
//!
//! Every list page declares an ordered set of [`FilterField`]s. A
//! [`FilterState`] holds the values currently typed into the filter form, the
//! query that was last applied, and any URL parameters the page does not own.
//! The applied query is always rebuilt from the field values in declared
//! order, so the same selection yields a byte-identical query string.

use serde::Serialize;
use thiserror::Error;

pub mod query;
pub mod views;

pub use query::QueryParams;

/// Name of the pagination parameter in the URL and in backend queries.
pub const PAGE_PARAM: &str = "page";

/// Sentinel value used by select fields to mean "no filter".
pub const ALL: &str = "all";

/// Errors produced when manipulating filter state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown filter field: {0}")]
    UnknownField(String),
    #[error("page must be greater than zero")]
    InvalidPage,
}

/// Selectable value of a select-style field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// How a field is rendered in the filter form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "options", rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Date,
    Select(&'static [FilterOption]),
}

/// Declaration of one filter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterField {
    pub name: &'static str,
    pub label: &'static str,
    pub default: &'static str,
    /// Value meaning "no filter"; the key is omitted from queries when set to it.
    pub all_sentinel: Option<&'static str>,
    pub kind: FieldKind,
}

impl FilterField {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            default: "",
            all_sentinel: None,
            kind: FieldKind::Text,
        }
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            default: "",
            all_sentinel: None,
            kind: FieldKind::Date,
        }
    }

    /// Select field defaulting to the [`ALL`] sentinel.
    pub const fn select(
        name: &'static str,
        label: &'static str,
        options: &'static [FilterOption],
    ) -> Self {
        Self {
            name,
            label,
            default: ALL,
            all_sentinel: Some(ALL),
            kind: FieldKind::Select(options),
        }
    }

    /// Whether `value` narrows the result set and must appear in the query.
    pub fn is_active(&self, value: &str) -> bool {
        !value.is_empty() && self.all_sentinel != Some(value)
    }
}

/// Ordered list of filter fields owned by one list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilterSpec {
    fields: &'static [FilterField],
}

impl FilterSpec {
    pub const fn new(fields: &'static [FilterField]) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &'static [FilterField] {
        self.fields
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    /// Whether the URL key `name` is owned by this view.
    pub fn owns(&self, name: &str) -> bool {
        name == PAGE_PARAM || self.position(name).is_some()
    }
}

/// Parses a page number, rejecting anything that is not a positive integer.
pub fn parse_page(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|page| *page >= 1)
}

/// Filter values of one list view and the query derived from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    spec: FilterSpec,
    values: Vec<String>,
    applied: QueryParams,
    passthrough: QueryParams,
    /// Every parameter of the address bar in the order it appears there.
    location: QueryParams,
}

impl FilterState {
    /// Creates a state with every field at its default and nothing applied.
    pub fn new(spec: FilterSpec) -> Self {
        Self {
            spec,
            values: spec
                .fields()
                .iter()
                .map(|field| field.default.to_string())
                .collect(),
            applied: QueryParams::new(),
            passthrough: QueryParams::new(),
            location: QueryParams::new(),
        }
    }

    /// Hydrates fields, page and applied query from a URL query string.
    ///
    /// Missing or empty fields take their defaults. A malformed `page` is
    /// dropped, which leaves the view on page 1.
    pub fn from_url(spec: FilterSpec, url_query: &str) -> Self {
        let mut state = Self::new(spec);
        state.sync_from_url(url_query);
        state
    }

    /// Re-derives the whole state from the URL, discarding unsaved edits.
    pub fn sync_from_url(&mut self, url_query: &str) {
        let params = QueryParams::parse(url_query);

        for (field, value) in self.spec.fields().iter().zip(self.values.iter_mut()) {
            *value = params
                .get(field.name)
                .filter(|value| !value.is_empty())
                .unwrap_or(field.default)
                .to_string();
        }

        let mut passthrough = params.clone();
        passthrough.retain(|key| !self.spec.owns(key));
        self.passthrough = passthrough;

        self.applied = self.canonical_params();
        if let Some(page) = params.get(PAGE_PARAM).and_then(parse_page) {
            self.applied.set(PAGE_PARAM, page.to_string());
        }

        self.location = params;
        self.merge_applied_into_location();
    }

    /// Writes the applied filters and page into the address-bar parameters.
    /// Keys already present keep their position, new ones are appended and
    /// inactive ones are removed.
    fn merge_applied_into_location(&mut self) {
        let owned = self
            .spec
            .fields()
            .iter()
            .map(|field| field.name)
            .chain([PAGE_PARAM]);
        for name in owned {
            match self.applied.get(name) {
                Some(value) => self.location.set(name, value),
                None => self.location.remove(name),
            }
        }
    }

    pub fn spec(&self) -> FilterSpec {
        self.spec
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.spec
            .position(name)
            .map(|index| self.values[index].as_str())
    }

    /// Field names paired with their current values, in declared order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.spec
            .fields()
            .iter()
            .zip(self.values.iter())
            .map(|(field, value)| (field.name, value.as_str()))
    }

    /// Updates a field value without touching the applied query.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FilterError> {
        let index = self
            .spec
            .position(name)
            .ok_or_else(|| FilterError::UnknownField(name.to_string()))?;
        self.values[index] = value.into();
        Ok(())
    }

    /// Active fields in declared order; never contains `page`.
    pub fn canonical_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        for (field, value) in self.spec.fields().iter().zip(self.values.iter()) {
            if field.is_active(value) {
                params.append(field.name, value.clone());
            }
        }
        params
    }

    pub fn canonical_query(&self) -> String {
        self.canonical_params().to_query_string()
    }

    /// Commits the current field values and resets pagination.
    pub fn apply(&mut self) -> String {
        self.applied = self.canonical_params();
        self.merge_applied_into_location();
        self.applied_query()
    }

    /// Restores every default and forgets all URL parameters.
    pub fn reset(&mut self) {
        for (field, value) in self.spec.fields().iter().zip(self.values.iter_mut()) {
            *value = field.default.to_string();
        }
        self.applied = QueryParams::new();
        self.passthrough = QueryParams::new();
        self.location = QueryParams::new();
    }

    /// Sets the page on the applied query, leaving every applied filter intact.
    pub fn go_to_page(&mut self, page: u32) -> Result<(), FilterError> {
        if page == 0 {
            return Err(FilterError::InvalidPage);
        }
        self.applied.set(PAGE_PARAM, page.to_string());
        self.location.set(PAGE_PARAM, page.to_string());
        Ok(())
    }

    /// Page the applied query points at; 1 when none was requested.
    pub fn page(&self) -> u32 {
        self.applied
            .get(PAGE_PARAM)
            .and_then(parse_page)
            .unwrap_or(1)
    }

    /// Query string sent to the data source.
    pub fn applied_query(&self) -> String {
        self.applied.to_query_string()
    }

    /// Whether the form differs from what is currently applied.
    pub fn is_dirty(&self) -> bool {
        let mut applied = self.applied.clone();
        applied.remove(PAGE_PARAM);
        applied != self.canonical_params()
    }

    pub fn passthrough(&self) -> &QueryParams {
        &self.passthrough
    }

    /// Query string the address bar should show. Parameters keep the
    /// position they had in the URL the state was hydrated from.
    pub fn location_query(&self) -> String {
        self.location.to_query_string()
    }
}
