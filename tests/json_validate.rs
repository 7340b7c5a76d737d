use challenger_carousel::{
    CarouselConfig, CarouselError, Color, Deck, Ease, compute_background_transform,
};

#[test]
fn config_fixture_validates() {
    let s = include_str!("data/wide_config.json");
    let config: CarouselConfig = serde_json::from_str(s).unwrap();
    config.validate().unwrap();
    assert_eq!(config.layout.viewport_width, 1024.0);
    assert_eq!(config.layout.step(), 300.0);
    assert_eq!(config.snap.duration_ms, 300);
    assert_eq!(config.snap.ease, Ease::InOutCubic);
}

#[test]
fn deck_fixture_validates() {
    let s = include_str!("data/mini_deck.json");
    let deck: Deck = serde_json::from_str(s).unwrap();
    deck.validate().unwrap();
    assert_eq!(deck.len(), 3);
    assert_eq!(deck.cards[0].badge.as_deref(), Some("Captain"));
    assert_eq!(deck.cards[1].badge, None);
}

#[test]
fn deck_fixture_accepts_every_color_form() {
    let deck = Deck::from_json_str(include_str!("data/mini_deck.json")).unwrap();

    assert_eq!(deck.cards[0].colors[0].to_hex(), "#1a1a2e");
    assert_eq!(deck.cards[1].colors[0], Color::rgba(0.1, 0.3, 0.2, 1.0));
    assert_eq!(deck.cards[1].colors[1], Color::rgba(0.2, 0.4, 0.3, 1.0));

    let hsla = deck.cards[2].colors[0];
    assert!(hsla.g > hsla.r && hsla.g > hsla.b);
    assert_eq!(hsla.a, 1.0);
    // One color: gradient collapses to a flat fill.
    let theme = deck.cards[2].theme().unwrap();
    assert_eq!(theme.top, theme.bottom);
}

#[test]
fn builtin_deck_validates() {
    let deck = Deck::builtin().unwrap();
    deck.validate().unwrap();
    assert!(deck.cards.iter().all(|c| c.colors.len() == 2));
}

#[test]
fn inverted_backdrop_curve_is_rejected() {
    let s = r#"{"backdrop": {"opacity": [0.8, 0.5, 0.0], "scale": [1.3, 1.2, 1.1]}}"#;
    let err = CarouselConfig::from_json_str(s).unwrap_err();
    assert!(matches!(err, CarouselError::Validation(_)), "{err}");

    let config = CarouselConfig::from_json_str(include_str!("data/wide_config.json")).unwrap();
    let center = compute_background_transform(2, 600.0, 300.0, &config.backdrop);
    let far = compute_background_transform(2, 0.0, 300.0, &config.backdrop);
    assert!(center.opacity >= far.opacity);
    assert!(center.scale >= far.scale);
}
