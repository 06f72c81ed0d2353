use std::io::Write;

use proptest::prelude::*;
use zallery::catalog::{CatalogSource, EmbeddedCatalog, FileCatalog};
use zallery::domain::{Category, FilterBar};
use zallery::gallery::{render_cards, visible_set, BackgroundScroll, Trigger};
use zallery::worker::{CatalogWorker, WorkerMessage};
use zallery::{handle_event, AppState, Catalog, Event, Gallery, Item};

/// Eight items over four years, interleaved so catalog order differs from
/// year order.
fn four_year_catalog() -> Catalog {
    Catalog::new(vec![
        Item::new(10, "Ishaan Mehta", 2021, "ishaan.jpg", "Chess captain"),
        Item::new(11, "Priya Nair", 2024, "priya.jpg", "Math olympiad gold"),
        Item::new(12, "Kabir Singh", 2022, "kabir.jpg", "Robotics lead"),
        Item::new(13, "Ananya Das", 2024, "ananya.jpg", "Spelling bee winner"),
        Item::new(14, "Rohan Gupta", 2023, "rohan.jpg", "Debate finalist"),
        Item::new(15, "Meera Iyer", 2021, "meera.jpg", "Art exhibition"),
        Item::new(16, "Zoya Ali", 2024, "zoya.jpg", "Sprint record"),
        Item::new(17, "Dev Sharma", 2022, "dev.jpg", "Coding contest"),
    ])
    .unwrap()
}

fn ids(items: &[Item]) -> Vec<u32> {
    items.iter().map(|item| item.id).collect()
}

fn scenario_year_then_miss(catalog: Catalog, year: &str, expected: &[u32]) {
    let mut gallery = Gallery::with_catalog(catalog);
    assert!(gallery.activate_category(year));
    assert_eq!(ids(gallery.visible()), expected);

    gallery.set_search_text("nonexistent-xyz");
    assert!(gallery.visible().is_empty());
    assert!(gallery.cards().is_empty());
}

#[test]
fn year_filter_then_unmatched_search_on_four_year_catalog() {
    let catalog = four_year_catalog();
    assert_eq!(catalog.years().len(), 4);
    scenario_year_then_miss(catalog, "2024", &[11, 13, 16]);
}

#[test]
fn year_filter_then_unmatched_search_on_embedded_sample() {
    scenario_year_then_miss(EmbeddedCatalog.catalog(), "2024", &[1, 4, 7]);
}

#[test]
fn search_for_arun_under_all() {
    let mut gallery = Gallery::default();
    gallery.set_search_text("arun");
    assert_eq!(ids(gallery.visible()), vec![3, 6]);
    assert!(gallery.visible().iter().all(|item| item.name == "Arun R"));
}

/// Name or year contains the trimmed, lowercased query; computed directly
/// from the item fields.
fn text_matches(item: &Item, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty() || item.name.to_lowercase().contains(&needle) || item.year.to_string().contains(&needle)
}

fn category_matches(item: &Item, category: &Category) -> bool {
    match category {
        Category::All => true,
        Category::Year(token) => item.year.to_string() == *token,
    }
}

fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(("[A-Za-z]{1,6}( [A-Za-z]{1,6})?", 2018..=2026i32), 0..12).prop_map(|records| {
        let items = records
            .into_iter()
            .enumerate()
            .map(|(id, (name, year))| Item::new(id as u32, name, year, format!("{id}.jpg"), "Honour roll"))
            .collect();
        Catalog::new(items).unwrap()
    })
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("02".to_string()),
        Just("2024".to_string()),
        Just(" 202 ".to_string()),
        "[0-9]{1,4}",
        "[A-Za-z]{1,3}",
        " ?[a-z0-9]{1,3} ?",
    ]
}

proptest! {
    #[test]
    fn visible_set_is_exactly_the_ordered_matches(
        catalog in catalog_strategy(),
        query in query_strategy(),
        stray_year in 2010..=2030i32,
    ) {
        let mut categories = FilterBar::from_years(&catalog.years()).categories().to_vec();
        categories.push(Category::from_token(&stray_year.to_string()));

        for category in &categories {
            let visible = visible_set(catalog.items(), category, &query);
            let expected: Vec<u32> = catalog
                .items()
                .iter()
                .filter(|item| category_matches(item, category) && text_matches(item, &query))
                .map(|item| item.id)
                .collect();
            prop_assert_eq!(ids(&visible), expected, "category {:?} query {:?}", category, query);
        }
    }
}

#[test]
fn year_digits_match_through_the_search_box() {
    let catalog = four_year_catalog();
    assert_eq!(ids(&visible_set(catalog.items(), &Category::All, "2024")), vec![11, 13, 16]);
    assert_eq!(ids(&visible_set(catalog.items(), &Category::All, " 02 ")).len(), 8);
    assert_eq!(ids(&visible_set(catalog.items(), &Category::from_token("2022"), "22")), vec![12, 17]);
    assert!(visible_set(catalog.items(), &Category::from_token("2021"), "2024").is_empty());
}

#[test]
fn rendering_twice_gives_identical_cards() {
    let catalog = four_year_catalog();
    let first = render_cards(catalog.items());
    let second = render_cards(catalog.items());
    assert_eq!(first, second);
    assert_eq!(first.iter().map(|c| c.index).collect::<Vec<_>>(), (0..8).collect::<Vec<_>>());
    assert_eq!(first[4].accessible_label, "Rohan Gupta — Debate finalist");
}

#[test]
fn next_and_prev_n_times_return_to_start() {
    let mut gallery = Gallery::with_catalog(four_year_catalog());
    let n = gallery.visible().len();
    assert!(gallery.open(3));

    for _ in 0..n {
        gallery.next();
    }
    assert_eq!(gallery.viewer().index(), Some(3));
    for _ in 0..n {
        gallery.prev();
    }
    assert_eq!(gallery.viewer().index(), Some(3));
}

#[test]
fn open_then_close_restores_scroll() {
    let mut gallery = Gallery::default();
    assert!(gallery.activate(5, Trigger::Click));
    assert_eq!(gallery.viewer().background_scroll(), BackgroundScroll::Locked);
    gallery.close();
    assert!(!gallery.viewer().is_open());
    assert_eq!(gallery.viewer().background_scroll(), BackgroundScroll::Free);
}

#[test]
fn prev_wraps_on_a_five_item_set() {
    let items: Vec<Item> = (1..=5)
        .map(|id| Item::new(id, format!("Student {id}"), 2024, format!("{id}.jpg"), "Honour roll"))
        .collect();
    let mut gallery = Gallery::with_catalog(Catalog::new(items).unwrap());

    assert!(gallery.open(2));
    gallery.prev();
    gallery.prev();
    assert_eq!(gallery.viewer().index(), Some(0));
    gallery.prev();
    assert_eq!(gallery.viewer().index(), Some(4));
}

#[test]
fn filter_change_that_empties_the_set_keeps_viewer_on_snapshot() {
    let mut gallery = Gallery::default();
    assert!(gallery.open(1));
    gallery.set_search_text("nonexistent-xyz");

    assert!(gallery.visible().is_empty());
    assert!(gallery.viewer().is_open());
    assert_eq!(gallery.viewer().snapshot_len(), 8);
    gallery.next();
    assert_eq!(gallery.viewer().current().map(|item| item.id), Some(3));
    assert!(!gallery.open(0));
}

#[test]
fn file_catalog_flows_through_worker_into_app_state() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(
        file,
        r#"
[[items]]
id = 1
name = "Priya Nair"
year = 2025
image = "priya.jpg"
description = "Math olympiad gold"

[[items]]
id = 2
name = "Kabir Singh"
year = 2024
img = "kabir.jpg"
desc = "Robotics lead"
"#
    )
    .unwrap();
    let path = file.path().to_str().unwrap().to_string();
    assert_eq!(FileCatalog::new(&path).load().unwrap().len(), 2);

    let mut state = AppState::default();
    handle_event(&mut state, &Event::PrevFilter).unwrap();
    assert_eq!(state.gallery.filters().active(), &Category::from_token("2022"));

    let worker = CatalogWorker::default();
    let response = worker.handle_message(WorkerMessage::load_catalog(path, None));
    let (render, _) = handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();

    assert!(render);
    assert_eq!(state.gallery.catalog().len(), 2);
    assert_eq!(state.gallery.filters().active(), &Category::All);
    assert_eq!(state.gallery.visible()[1].description, "Robotics lead");
}
