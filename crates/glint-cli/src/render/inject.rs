//! Reload-script injection.
//!
//! Every HTML response (successful render or error page) gets a small inline
//! fragment that opens an `EventSource` on the live-reload endpoint and
//! reloads the page when a reload frame arrives. If the channel itself dies
//! (server restart), the client falls back to a delayed reload.

/// The inline browser fragment, wrapped in a script tag.
const RELOAD_SNIPPET: &str = concat!(
    "<script>\n",
    include_str!("../../assets/reload-client.js"),
    "</script>\n"
);

/// Inject the reload fragment into an HTML document.
///
/// The fragment goes immediately before the closing `</body>` tag when one is
/// present (the last occurrence, so trailing markup in embedded strings does
/// not fool it); otherwise it is appended to the end of the document.
pub fn inject_reload_script(html: &str) -> String {
    if let Some(pos) = html.rfind("</body>") {
        let mut result = String::with_capacity(html.len() + RELOAD_SNIPPET.len() + 1);
        result.push_str(&html[..pos]);
        result.push_str(RELOAD_SNIPPET);
        result.push_str(&html[pos..]);
        return result;
    }

    // Fallback: append at end
    let mut result = String::with_capacity(html.len() + RELOAD_SNIPPET.len() + 1);
    result.push_str(html);
    result.push('\n');
    result.push_str(RELOAD_SNIPPET);
    result
}
