use urlencoding::encode;

use crate::engines::EngineDescriptor;

/// What kind of search a submission asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchAction {
    #[default]
    Search,
    Images,
    Videos,
    Calculate,
}

/// Build the destination URL for a submission. Pure string construction;
/// the caller decides whether and how to navigate.
///
/// Google and Bing have dedicated image/video endpoints; every other engine
/// falls back to the DuckDuckGo ones. Anything that is not an image or
/// video search uses the engine's base template.
pub fn resolve(engine: &EngineDescriptor, action: SearchAction, query: &str) -> String {
    let q = encode(query);
    match action {
        SearchAction::Images => match engine.id {
            "google" => format!("https://www.google.com/search?tbm=isch&q={q}"),
            "bing" => format!("https://www.bing.com/images/search?q={q}"),
            _ => format!("https://duckduckgo.com/?iax=images&ia=images&q={q}"),
        },
        SearchAction::Videos => match engine.id {
            "google" => format!("https://www.google.com/search?tbm=vid&q={q}"),
            "bing" => format!("https://www.bing.com/videos/search?q={q}"),
            _ => format!("https://duckduckgo.com/?iax=videos&ia=videos&q={q}"),
        },
        _ => format!("{}{q}", engine.url),
    }
}
