//! Filterable list pages: rendering from the URL, applying and resetting
//! filters.

use crate::api::errors::ApiError;
use crate::api::{AdminApi, ListPage, ViewSource};
use crate::controller::{ListController, ListSource};
use crate::dto::lists::{FieldData, ListPageData};
use crate::filters::query::{QueryParams, with_query};
use crate::filters::views::ListView;
use crate::filters::{FilterState, PAGE_PARAM};
use crate::pagination::Pager;
use crate::services::{ServiceError, ServiceResult};

/// Hidden input carrying the address-bar query into the apply request.
pub const LOCATION_PARAM: &str = "_location";

/// Loads a list page exactly as described by its URL query.
///
/// A failed fetch does not fail the page: it is rendered with an error
/// message and whatever data the controller still holds.
pub async fn load_list_page<A>(
    api: &A,
    view: ListView,
    url_query: &str,
) -> ServiceResult<ListPageData>
where
    A: AdminApi + ?Sized,
{
    let mut controller = ListController::<ListPage>::from_url(view.filters, url_query);
    let source = ViewSource::new(api, view);

    let ticket = controller.refetch();
    let result = source.fetch(ticket.query()).await;
    if let Err(ApiError::Unauthorized) = result {
        return Err(ServiceError::Unauthorized);
    }
    controller.complete(&ticket, result);

    let state = controller.state().clone();
    let status = controller.status();
    let error = controller.error().map(str::to_string);
    let page = controller.into_data().unwrap_or_default();

    let current_page = state.page() as usize;
    let pager = Pager::new(current_page, page.total_pages as usize, |number| {
        page_url(view, &state, number)
    });

    Ok(ListPageData {
        view,
        fields: view
            .filters
            .fields()
            .iter()
            .map(|field| FieldData {
                field: *field,
                value: state.get(field.name).unwrap_or(field.default).to_string(),
            })
            .collect(),
        passthrough: state
            .passthrough()
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect(),
        location: state.location_query(),
        page,
        pager,
        status,
        error,
    })
}

fn page_url(view: ListView, state: &FilterState, page: usize) -> String {
    let mut state = state.clone();
    let page = u32::try_from(page).unwrap_or(u32::MAX);
    if let Err(err) = state.go_to_page(page) {
        log::warn!("Invalid page link {page}: {err}");
    }
    with_query(view.path, &state.location_query())
}

/// Applies the submitted filter form and returns the URL to navigate to.
///
/// The form carries every field of the view plus the current address-bar
/// query in [`LOCATION_PARAM`], so parameters the view does not own survive.
pub fn apply_filters(view: ListView, submitted_query: &str) -> ServiceResult<String> {
    let submitted = QueryParams::parse(submitted_query);
    let location = submitted.get(LOCATION_PARAM).unwrap_or_default();

    let mut controller = ListController::<ListPage>::from_url(view.filters, location);
    for (name, value) in submitted.iter() {
        if name == LOCATION_PARAM || name == PAGE_PARAM {
            continue;
        }
        if view.filters.position(name).is_some() {
            controller.set_field(name, value)?;
        }
    }
    let ticket = controller.apply_filters();
    log::debug!("Applied {} filters: {:?}", view.slug, ticket.query());

    Ok(with_query(view.path, &controller.location()))
}

/// URL of the view with every filter and parameter removed.
pub fn reset_filters(view: ListView) -> String {
    let mut controller = ListController::<ListPage>::new(view.filters);
    controller.reset_filters();
    with_query(view.path, &controller.location())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::views::{TRANSACTIONS, USERS};

    #[test]
    fn apply_updates_filters_in_place_and_drops_page() {
        let url = apply_filters(
            TRANSACTIONS,
            "_location=page%3D4%26status%3DPending&dateFrom=&dateTo=2026-01-31&transactionType=all&currency=USDT&status=Completed",
        )
        .unwrap();
        assert_eq!(
            url,
            "/transactions?status=Completed&dateTo=2026-01-31&currency=USDT"
        );
    }

    #[test]
    fn apply_from_a_clean_url_uses_declared_order() {
        let url = apply_filters(
            TRANSACTIONS,
            "_location=&status=Failed&currency=3TWENTY&transactionType=Refund",
        )
        .unwrap();
        assert_eq!(
            url,
            "/transactions?transactionType=Refund&currency=3TWENTY&status=Failed"
        );
    }

    #[test]
    fn apply_keeps_foreign_parameters() {
        let url = apply_filters(USERS, "_location=tab%3Dwallet&search=bob&status=all").unwrap();
        assert_eq!(url, "/users?tab=wallet&search=bob");
    }

    #[test]
    fn apply_with_everything_cleared_returns_bare_path() {
        let url = apply_filters(USERS, "search=&status=all&userStatus=all").unwrap();
        assert_eq!(url, "/users");
    }

    #[test]
    fn reset_returns_bare_path() {
        assert_eq!(reset_filters(TRANSACTIONS), "/transactions");
    }
}
