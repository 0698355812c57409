//! Autocomplete suggestions from a fixed catalog of popular product sites.

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

/// Static catalog of popular product sites offered as suggestions.
const SUGGESTION_CATALOG: &[(&str, &str)] = &[
    ("https://slack.com", "Slack - team messaging"),
    ("https://notion.so", "Notion - connected workspace"),
    ("https://figma.com", "Figma - collaborative design"),
    ("https://stripe.com", "Stripe - payments infrastructure"),
    ("https://shopify.com", "Shopify - commerce platform"),
    ("https://dropbox.com", "Dropbox - file storage"),
    ("https://zoom.us", "Zoom - video meetings"),
    ("https://github.com", "GitHub - code hosting"),
    ("https://salesforce.com", "Salesforce - CRM"),
    ("https://hubspot.com", "HubSpot - marketing platform"),
    ("https://asana.com", "Asana - work management"),
    ("https://linear.app", "Linear - issue tracking"),
    ("https://airtable.com", "Airtable - flexible databases"),
    ("https://vercel.com", "Vercel - frontend deployment"),
    ("https://datadoghq.com", "Datadog - observability"),
];

/// Maximum number of suggestions returned for a query.
const MAX_SUGGESTIONS: usize = 5;

#[derive(Deserialize)]
pub struct SuggestParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Suggestion {
    pub url: String,
    #[serde(rename = "displayText")]
    pub display_text: String,
}

/// `GET /suggest?q=<string>`
///
/// Case-insensitive substring match over the catalog; queries shorter than
/// two characters yield an empty list.
pub async fn suggest_handler(Query(params): Query<SuggestParams>) -> Json<Vec<Suggestion>> {
    Json(suggestions_for(&params.q))
}

fn suggestions_for(query: &str) -> Vec<Suggestion> {
    let query = query.trim().to_lowercase();
    if query.chars().count() < 2 {
        return Vec::new();
    }

    SUGGESTION_CATALOG
        .iter()
        .filter(|(url, display)| {
            url.to_lowercase().contains(&query) || display.to_lowercase().contains(&query)
        })
        .take(MAX_SUGGESTIONS)
        .map(|(url, display)| Suggestion {
            url: url.to_string(),
            display_text: display.to_string(),
        })
        .collect()
}
