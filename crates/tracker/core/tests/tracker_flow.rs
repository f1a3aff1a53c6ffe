use tracker_core::{
    AlwaysHint, Background, Item, ItemCatalog, KeyBindings, Locations, SpriteVariant, Temple,
    Tracker, ZoneItemMap,
};

/// Slots are laid out on the 42px grid; (col, row) → pixel origin.
fn slot(col: i32, row: i32) -> (i32, i32) {
    (col * 42, row * 42)
}

/// Pixel inside the sprite drawn at the given slot.
fn click(col: i32, row: i32) -> (i32, i32) {
    let (x, y) = slot(col, row);
    (x + 20, y + 20)
}

fn items() -> Vec<Item> {
    let at = |name: &str, col, row| {
        let (x, y) = slot(col, row);
        Item::new(name, x, y)
    };

    vec![
        at("Kokiri Sword", 0, 0),
        at("Bomb Bag", 1, 0).with_capacity([20, 30, 40]),
        at("Hookshot", 2, 0).with_sprites([SpriteVariant::new(0, 34), SpriteVariant::new(34, 34)]),
        at("Gold Skulltula Token", 3, 0).countable(100, 1),
        at("Forest Medallion", 4, 0).medallion(),
        at("Kokiri Tunic", 5, 0).enabled(),
        at("Bow", 6, 0).with_capacity([30, 40, 50]),
    ]
}

fn zone_map() -> ZoneItemMap {
    ZoneItemMap::default()
        .with(5, 5, "Hookshot")
        .with(3, 7, "Bow")
        .with(1, 1, "")
        .with(9, 9, "Megaton Hammer")
}

fn tracker() -> Tracker {
    Tracker::new(
        ItemCatalog::new(items()),
        zone_map(),
        Locations::new(vec![
            "Kokiri Forest".into(),
            "Lost Woods".into(),
            "Death Mountain Crater".into(),
            "Death Mountain Trail".into(),
        ]),
        KeyBindings::default(),
    )
}

fn index(tracker: &Tracker, name: &str) -> usize {
    tracker.catalog().index_by_name(name).unwrap()
}

fn item<'a>(tracker: &'a Tracker, name: &str) -> &'a Item {
    tracker.catalog().by_name(name).unwrap()
}

#[test]
fn simple_item_click_cycle() {
    let mut tracker = tracker();
    let (x, y) = click(0, 0);

    assert!(tracker.click_left(x, y));
    assert!(item(&tracker, "Kokiri Sword").is_enabled());
    assert!(!tracker.click_left(x, y));
    assert_eq!(tracker.history().undo_len(), 1);

    assert!(tracker.click_right(x, y));
    assert!(!item(&tracker, "Kokiri Sword").is_enabled());
    assert!(!tracker.click_right(x, y));
    assert_eq!(tracker.history().undo_len(), 2);
}

#[test]
fn clicks_outside_items_do_nothing() {
    let mut tracker = tracker();
    assert!(!tracker.click_left(1, 1));
    assert!(!tracker.click_right(1000, 1000));
    assert!(!tracker.wheel(-5, 3, true));
    assert!(!tracker.history().can_undo());
}

#[test]
fn wheel_walks_stepped_item_through_all_tiers() {
    let mut tracker = tracker();
    let (x, y) = click(1, 0);

    // off → 20 → 30 → 40
    for _ in 0..3 {
        assert!(tracker.wheel(x, y, true));
    }
    assert_eq!(item(&tracker, "Bomb Bag").capacity(), Some(40));
    assert!(!tracker.wheel(x, y, true));

    for _ in 0..3 {
        assert!(tracker.wheel(x, y, false));
    }
    assert!(!item(&tracker, "Bomb Bag").is_enabled());
}

#[test]
fn wheel_on_medallion_cycles_temple_without_history() {
    let mut tracker = tracker();
    let (x, y) = click(4, 0);

    assert!(tracker.wheel(x, y, true));
    assert!(tracker.wheel(x, y, true));
    assert_eq!(item(&tracker, "Forest Medallion").temple(), Temple::Deku);
    assert!(!item(&tracker, "Forest Medallion").is_enabled());

    assert!(tracker.wheel(x, y, false));
    assert_eq!(item(&tracker, "Forest Medallion").temple(), Temple::Free);
    assert!(!tracker.history().can_undo());

    // Clicks still toggle medallion ownership.
    assert!(tracker.click_left(x, y));
    assert!(item(&tracker, "Forest Medallion").is_enabled());
}

#[test]
fn counter_never_leaves_bounds() {
    let mut tracker = tracker();
    let skulls = index(&tracker, "Gold Skulltula Token");

    for _ in 0..150 {
        tracker.upgrade(skulls);
    }
    assert_eq!(item(&tracker, "Gold Skulltula Token").count(), 100);

    for _ in 0..100 {
        assert!(tracker.downgrade(skulls));
    }
    assert_eq!(item(&tracker, "Gold Skulltula Token").count(), 0);
    assert!(item(&tracker, "Gold Skulltula Token").is_enabled());

    assert!(tracker.downgrade(skulls));
    assert!(!item(&tracker, "Gold Skulltula Token").is_enabled());
    assert!(!tracker.downgrade(skulls));
}

#[test]
fn undo_redo_restores_catalog() {
    let mut tracker = tracker();
    let before = tracker.catalog().clone();

    let bombs = index(&tracker, "Bomb Bag");
    let skulls = index(&tracker, "Gold Skulltula Token");
    let tunic = index(&tracker, "Kokiri Tunic");
    let mut changes = 0;
    for (index, up) in [
        (bombs, true),
        (bombs, true),
        (skulls, true),
        (skulls, true),
        (skulls, true),
        (tunic, false),
        (bombs, false),
        (skulls, false),
    ] {
        let changed = if up {
            tracker.upgrade(index)
        } else {
            tracker.downgrade(index)
        };
        assert!(changed);
        changes += 1;
    }
    let after = tracker.catalog().clone();

    for _ in 0..changes {
        assert!(tracker.undo());
    }
    assert_eq!(tracker.catalog(), &before);
    assert!(!tracker.undo());

    for _ in 0..changes {
        assert!(tracker.redo());
    }
    assert_eq!(tracker.catalog(), &after);
    assert!(!tracker.redo());
}

#[test]
fn undo_redo_survives_clamped_counter() {
    let rupees = Item::new("Rupees", 0, 0).countable(5, 2);
    let mut tracker = Tracker::new(
        ItemCatalog::new(vec![rupees]),
        ZoneItemMap::default(),
        Locations::default(),
        KeyBindings::default(),
    );
    let (x, y) = click(0, 0);

    // Enable, then 0 -> 2 -> 4 -> 5 with the last step clamped.
    let mut snapshots = vec![tracker.catalog().clone()];
    for _ in 0..4 {
        assert!(tracker.click_left(x, y));
        snapshots.push(tracker.catalog().clone());
    }
    assert_eq!(tracker.catalog().get(0).map(Item::count), Some(5));
    assert!(!tracker.click_left(x, y));

    // 5 -> 4 -> 2 -> 0 -> disabled.
    for _ in 0..4 {
        assert!(tracker.click_right(x, y));
        snapshots.push(tracker.catalog().clone());
    }
    assert_eq!(tracker.catalog(), &snapshots[0]);

    for expected in snapshots.iter().rev().skip(1) {
        assert!(tracker.undo());
        assert_eq!(tracker.catalog(), expected);
    }
    for expected in snapshots.iter().skip(1) {
        assert!(tracker.redo());
        assert_eq!(tracker.catalog(), expected);
    }
}

#[test]
fn new_change_after_undo_drops_redo() {
    let mut tracker = tracker();
    let bow = index(&tracker, "Bow");

    tracker.upgrade(bow);
    tracker.upgrade(bow);
    tracker.undo();
    assert!(tracker.history().can_redo());

    tracker.upgrade(index(&tracker, "Kokiri Sword"));
    assert!(!tracker.history().can_redo());
    assert!(!tracker.redo());
}

#[test]
fn keypad_chord_upgrades_mapped_item() {
    let mut tracker = tracker();
    let bow = index(&tracker, "Bow");

    tracker.input(['/']);
    assert!(tracker.eat_input());
    assert_eq!(tracker.render().background, Background::KeypadHelp);

    tracker.input("37".chars());
    assert!(!tracker.eat_input());
    assert!(item(&tracker, "Bow").is_enabled());
    assert_eq!(item(&tracker, "Bow").upgrade_index(), 0);
    assert_eq!(tracker.history().undo_len(), 1);

    tracker.undo();
    assert!(!tracker.catalog().get(bow).unwrap().is_enabled());
}

#[test]
fn failed_chords_reset_silently() {
    let mut tracker = tracker();
    let before = tracker.catalog().clone();

    // empty cell, misconfigured cell, out of range zone
    for keys in ["/11", "/99", "/05"] {
        tracker.input(keys.chars());
        assert!(!tracker.eat_input(), "{keys} left input pending");
    }
    assert_eq!(tracker.catalog(), &before);
    assert!(!tracker.history().can_undo());
}

#[test]
fn cancel_and_escape_clear_pending_chord() {
    let mut tracker = tracker();
    tracker.input("/5".chars());
    assert!(tracker.eat_input());
    tracker.cancel();
    assert!(!tracker.eat_input());

    tracker.input(['5']);
    assert!(!item(&tracker, "Hookshot").is_enabled());
}

#[test]
fn chords_can_follow_each_other_in_one_batch() {
    let mut tracker = tracker();
    tracker.input("/55/55/37".chars());
    assert_eq!(item(&tracker, "Hookshot").upgrade_index(), 1);
    assert!(item(&tracker, "Bow").is_enabled());
    assert_eq!(tracker.history().undo_len(), 3);
}

#[test]
fn hint_entry_fills_ledger() {
    let mut tracker = tracker();

    tracker.input("wlost".chars());
    assert!(tracker.eat_input());
    tracker.submit();
    assert!(!tracker.eat_input());

    tracker.input("bdeath mountain c".chars());
    tracker.submit();
    tracker.input("bdeath".chars());
    tracker.submit();

    tracker.input("nfire arrows in".chars());
    tracker.backspace();
    tracker.backspace();
    tracker.input(['?']);
    tracker.submit();

    tracker.input("a2Bottle".chars());
    tracker.submit();

    let hints = tracker.hints();
    assert_eq!(hints.woths().collect::<Vec<_>>(), ["Lost Woods"]);
    assert_eq!(hints.barrens().collect::<Vec<_>>(), ["Death Mountain Crater"]);
    assert_eq!(hints.sometimes(), ["fire arrows ?"]);
    assert_eq!(hints.always(AlwaysHint::Biggoron), "Bottle");
    assert!(tracker.catalog().iter().all(|i| i.name != "Bottle"));
}

#[test]
fn reset_replaces_state_and_clears_history_and_hints() {
    let mut tracker = tracker();
    tracker.upgrade(index(&tracker, "Bow"));
    tracker.input("wkokiri".chars());
    tracker.submit();
    tracker.input("/3".chars());

    let replacement = vec![Item::new("Bow", 0, 0), Item::new("Slingshot", 42, 0)];
    tracker.reset(
        ItemCatalog::new(replacement),
        ZoneItemMap::default().with(3, 7, "Slingshot"),
    );

    assert_eq!(tracker.catalog().len(), 2);
    assert!(!tracker.history().can_undo());
    assert_eq!(tracker.hints().woths().count(), 0);
    assert!(!tracker.eat_input());
    assert_eq!(tracker.locations().len(), 4);

    tracker.input("/37".chars());
    assert!(item(&tracker, "Slingshot").is_enabled());
}

#[test]
fn render_reports_enabled_items_last() {
    let tracker = tracker();
    let frame = tracker.render();

    assert_eq!(frame.sprites.len(), tracker.catalog().len());
    assert_eq!(frame.sprites.last().map(|s| s.name), Some("Kokiri Tunic"));
    assert_eq!(frame.highlight, None);
    assert!(frame.input.is_none());
}
