use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::query::{ExpiryFilter, QueryState, SortKey};
use crate::dto::customer::CustomerCard;
use crate::pagination::Paginated;

/// A page number that does not parse (`abc`, `-1`, empty) is treated as
/// missing, so a stale or hand-edited link still renders the list.
fn lenient_page<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse().ok())
}

/// Query parameters accepted by the index page.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct IndexQuery {
    /// Optional search string entered by the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// Expiry filter token, see [`ExpiryFilter::from_token`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Sort token, see [`SortKey::from_token`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Page number requested by the user interface.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_page"
    )]
    pub page: Option<usize>,
}

impl IndexQuery {
    /// Builds the pipeline state; missing values take the screen defaults.
    pub fn to_query_state(&self, page_size: usize) -> QueryState {
        QueryState::new()
            .search(self.q.as_deref().map(str::trim).unwrap_or_default())
            .filter(
                self.filter
                    .as_deref()
                    .map(ExpiryFilter::from_token)
                    .unwrap_or_default(),
            )
            .sort(self.sort.as_deref().map(SortKey::from_token).unwrap_or_default())
            .page(self.page.unwrap_or(1))
            .page_size(page_size)
    }
}

/// Data required to render the main index template.
pub struct IndexPageData {
    /// The visible page of customer cards.
    pub customers: Paginated<CustomerCard>,
    /// Search query echoed back to the template when present.
    pub search_query: Option<String>,
    pub filter: ExpiryFilter,
    pub sort: SortKey,
}
