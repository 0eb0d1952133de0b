use quick_search::engines::{self, ENGINES};
use quick_search::url::{resolve, SearchAction};

fn engine(id: &str) -> &'static engines::EngineDescriptor {
    &ENGINES[engines::position_of(id).expect("known engine")]
}

#[test]
fn plain_search_appends_the_encoded_query_to_the_base_template() {
    let url = resolve(engine("google"), SearchAction::Search, "rust lang");
    assert_eq!(url, "https://www.google.com/search?q=rust%20lang");
}

#[test]
fn queries_are_percent_encoded() {
    let url = resolve(engine("duckduckgo"), SearchAction::Search, "a&b=c?");
    assert_eq!(url, "https://duckduckgo.com/?q=a%26b%3Dc%3F");
}

#[test]
fn bing_images_use_the_dedicated_endpoint() {
    let plain = resolve(engine("bing"), SearchAction::Search, "sunset");
    let images = resolve(engine("bing"), SearchAction::Images, "sunset");
    assert_ne!(plain, images);
    assert_eq!(images, "https://www.bing.com/images/search?q=sunset");
}

#[test]
fn google_has_image_and_video_overrides() {
    assert_eq!(
        resolve(engine("google"), SearchAction::Images, "sunset"),
        "https://www.google.com/search?tbm=isch&q=sunset"
    );
    assert_eq!(
        resolve(engine("google"), SearchAction::Videos, "sunset"),
        "https://www.google.com/search?tbm=vid&q=sunset"
    );
}

#[test]
fn other_engines_fall_back_to_duckduckgo_for_images_and_videos() {
    assert_eq!(
        resolve(engine("spotify"), SearchAction::Images, "sunset"),
        "https://duckduckgo.com/?iax=images&ia=images&q=sunset"
    );
    assert_eq!(
        resolve(engine("github"), SearchAction::Videos, "sunset"),
        "https://duckduckgo.com/?iax=videos&ia=videos&q=sunset"
    );
}

#[test]
fn calculate_falls_back_to_the_base_template() {
    // A calculate submission that reaches the resolver is a plain search.
    assert_eq!(
        resolve(engine("youtube"), SearchAction::Calculate, "2+2"),
        "https://www.youtube.com/results?search_query=2%2B2"
    );
}
