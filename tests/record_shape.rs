// tests/record_shape.rs
//
// Wire format and shape validation of records.
//
use anitrakt_scrape::{Kind, Record};
use serde_json::json;

#[test]
fn movie_with_season_is_rejected() {
    let err = serde_json::from_value::<Record>(json!({
        "title": "Akira", "mal_id": 47, "trakt_id": 1412,
        "guessed_slug": "akira", "type": "movies", "season": 1
    }))
    .unwrap_err();
    assert!(err.to_string().contains("carries a season"), "{err}");
}

#[test]
fn show_without_season_is_rejected() {
    let err = serde_json::from_value::<Record>(json!({
        "title": "Monster", "mal_id": 19, "trakt_id": 1, "guessed_slug": "monster", "type": "shows"
    }))
    .unwrap_err();
    assert!(err.to_string().contains("has no season"), "{err}");
}

#[test]
fn empty_title_and_zero_season_are_rejected() {
    assert!(serde_json::from_value::<Record>(json!({
        "title": "  ", "mal_id": 1, "trakt_id": 1, "type": "movies"
    }))
    .is_err());
    assert!(serde_json::from_value::<Record>(json!({
        "title": "Zero", "mal_id": 1, "trakt_id": 1, "type": "shows", "season": 0
    }))
    .is_err());
}

#[test]
fn exact_wire_keys() {
    let show = Record::show("Mob Psycho 100", Some(32182), Some(104017), 2);
    assert_eq!(
        serde_json::to_value(&show).unwrap(),
        json!({
            "title": "Mob Psycho 100", "mal_id": 32182, "trakt_id": 104017,
            "guessed_slug": "mob-psycho-100", "type": "shows", "season": 2
        })
    );

    let movie = Record::movie("1989", None, Some(5));
    assert_eq!(
        serde_json::to_value(&movie).unwrap(),
        json!({ "title": "1989", "mal_id": null, "trakt_id": 5, "guessed_slug": null, "type": "movies" })
    );
}

#[test]
fn parsed_back_from_disk_shape() {
    let r: Record = serde_json::from_str(
        r#"{"title": "Bleach", "mal_id": 269, "trakt_id": 1374, "guessed_slug": "bleach", "type": "shows", "season": 1}"#,
    )
    .unwrap();
    assert_eq!(r.kind(), Kind::Show { season: 1 });
    assert!(r.is_valid());
}

#[test]
fn constructors_are_the_only_way_in_and_normalize_ids() {
    let r = Record::movie("Zero ids", Some(0), Some(0));
    assert_eq!((r.mal_id(), r.trakt_id()), (None, None));
    assert!(!r.is_valid());

    let s = Record::show("Shōjo Kakumei Utena", Some(440), Some(0), 1);
    assert_eq!(s.trakt_id(), None);
    assert_eq!(s.guessed_slug(), Some("shojo-kakumei-utena"));
    assert_eq!(s.kind(), Kind::Show { season: 1 });
}
