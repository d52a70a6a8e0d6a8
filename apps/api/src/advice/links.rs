//! Video search link for an advice request.

use url::form_urlencoded;

const SEARCH_URL: &str = "https://www.youtube.com/results?search_query=";

/// Builds a video search link for `"{age_group} mental health advice for {concern}"`.
/// The query is form-encoded: spaces become `+`, reserved characters are
/// percent-encoded.
pub fn search_link(age_group: &str, concern: &str) -> String {
    let query = format!("{age_group} mental health advice for {concern}");
    let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("{SEARCH_URL}{encoded}")
}
