use serde::Serialize;

use crate::api::ListPage;
use crate::controller::FetchStatus;
use crate::filters::FilterField;
use crate::filters::views::ListView;
use crate::pagination::Pager;

/// Filter input with the value currently shown in the form.
#[derive(Debug, Serialize)]
pub struct FieldData {
    pub field: FilterField,
    pub value: String,
}

/// Data required to render a filterable list page.
#[derive(Debug, Serialize)]
pub struct ListPageData {
    pub view: ListView,
    pub fields: Vec<FieldData>,
    /// URL parameters not owned by the view, echoed as hidden inputs.
    pub passthrough: Vec<(String, String)>,
    /// Current address-bar query, posted back when filters are applied.
    pub location: String,
    pub page: ListPage,
    pub pager: Pager,
    pub status: FetchStatus,
    pub error: Option<String>,
}
