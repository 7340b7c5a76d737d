use challenger_carousel::{
    Carousel, CarouselConfig, Deck, FocusChange, FocusTracker, LayoutConfig, NO_FOCUS,
    compute_focused_index, focused_index,
};

#[test]
fn focused_index_rounds_offset_over_step() {
    assert_eq!(compute_focused_index(305.0, 300.0, 5), 1);
    assert_eq!(compute_focused_index(0.0, 300.0, 5), 0);
    assert_eq!(compute_focused_index(1199.0, 300.0, 5), 4);
    assert_eq!(compute_focused_index(5000.0, 300.0, 5), 4);
    assert_eq!(compute_focused_index(-5000.0, 300.0, 5), 0);
    assert_eq!(compute_focused_index(77.0, 300.0, 0), NO_FOCUS);
    assert_eq!(focused_index(77.0, 300.0, 0), None);
}

#[test]
fn sweep_emits_one_event_per_index_change() {
    let mut tracker = FocusTracker::new(Some(0));
    let mut events = Vec::new();
    // Forward across five cards at sub-pixel resolution, then jitter on card 4.
    let mut offset = 0.0;
    while offset <= 1200.0 {
        events.extend(tracker.update(offset, 300.0, 5));
        offset += 0.25;
    }
    for jitter in [1199.5, 1200.0, 1199.9, 1150.1, 1200.0] {
        events.extend(tracker.update(jitter, 300.0, 5));
    }

    let targets: Vec<Option<usize>> = events.iter().map(|e| e.to).collect();
    assert_eq!(targets, [Some(1), Some(2), Some(3), Some(4)]);
    assert_eq!(
        events[0],
        FocusChange {
            from: Some(0),
            to: Some(1)
        }
    );
}

#[test]
fn backwards_scroll_reports_descending_changes() {
    let mut tracker = FocusTracker::new(Some(3));
    let changes: Vec<FocusChange> = [850.0, 760.0, 600.0, 449.0, 440.0, 10.0]
        .into_iter()
        .filter_map(|o| tracker.update(o, 300.0, 4))
        .collect();
    assert_eq!(
        changes,
        [
            FocusChange {
                from: Some(3),
                to: Some(2)
            },
            FocusChange {
                from: Some(2),
                to: Some(1)
            },
            FocusChange {
                from: Some(1),
                to: Some(0)
            },
        ]
    );
}

#[test]
fn carousel_focus_drives_theme_lookup() {
    let deck = Deck::builtin().unwrap();
    let config = CarouselConfig {
        layout: LayoutConfig {
            viewport_width: 1024.0,
            ..LayoutConfig::default()
        },
        ..CarouselConfig::default()
    };
    let carousel = Carousel::new(&config, deck.len());
    let mut tracker = FocusTracker::new(carousel.focused_index(0.0));

    let mut themes = Vec::new();
    for offset in [10.0, 140.0, 160.0, 290.0, 310.0, 20_000.0] {
        if let Some(change) = tracker.apply(carousel.focused_index(offset)) {
            let card = change.to.and_then(|i| deck.get(i)).unwrap();
            themes.push((card.id.clone(), card.theme().unwrap()));
        }
    }

    let ids: Vec<&str> = themes.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(ids, ["2", "10"]);
    assert_eq!(Some(themes[0].1), deck.cards[1].theme());
}
