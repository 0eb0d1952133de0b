use quick_search::engines;
use quick_search::routing;

fn engine(id: &str) -> usize {
    engines::position_of(id).expect("known engine")
}

#[test]
fn letter_prefix_switches_engine_and_strips_the_prefix() {
    let routed = routing::route_on_input("g hello", engine("bing"));
    assert_eq!(routed, Some((engine("google"), "hello".to_string())));
}

#[test]
fn prefix_matching_the_current_engine_is_left_alone_while_typing() {
    assert_eq!(routing::route_on_input("g hello", engine("google")), None);
}

#[test]
fn unknown_letters_do_not_route() {
    assert_eq!(routing::route_on_input("x hello", engine("bing")), None);
}

#[test]
fn words_are_not_prefixes() {
    assert_eq!(routing::route_on_input("go hello", engine("bing")), None);
}

#[test]
fn prefix_needs_trailing_whitespace() {
    assert_eq!(routing::route_on_input("g", engine("bing")), None);
    assert_eq!(
        routing::route_on_input("g ", engine("bing")),
        Some((engine("google"), String::new()))
    );
}

#[test]
fn multiple_spaces_are_part_of_the_prefix() {
    assert_eq!(
        routing::route_on_input("d   cats", engine("bing")),
        Some((engine("duckduckgo"), "cats".to_string()))
    );
}

#[test]
fn submit_routing_strips_even_for_the_already_selected_engine() {
    let google = engine("google");
    assert_eq!(
        routing::route_on_submit("g hello", google),
        (google, "hello".to_string())
    );
}

#[test]
fn submit_routing_keeps_unprefixed_queries_untouched() {
    let bing = engine("bing");
    assert_eq!(
        routing::route_on_submit("hello world", bing),
        (bing, "hello world".to_string())
    );
}

#[test]
fn submit_routing_ignores_unknown_letters() {
    let bing = engine("bing");
    assert_eq!(
        routing::route_on_submit("x hello", bing),
        (bing, "x hello".to_string())
    );
}
