// tests/filter_rules.rs
//
// Rule matching and scope filtering through the public API.
//
use anitrakt_scrape::filter;
use anitrakt_scrape::progress::NullProgress;
use anitrakt_scrape::rules::{self, Combine, Condition, Expected, Field, Rule, Source};
use anitrakt_scrape::Record;

fn sample() -> Vec<Record> {
    vec![
        Record::movie("Akira", Some(47), Some(1412)),
        Record::show("Monster", Some(19), Some(1), 1),
        Record::movie("1989", Some(30), Some(31)),
        Record::show("Bleach", Some(269), Some(1374), 2),
        Record::movie("Broken", None, Some(99)),
    ]
}

fn rule(source: Source, combine: Combine, conditions: Vec<Condition>) -> Rule {
    Rule { source, combine, conditions, description: "test".into() }
}

#[test]
fn empty_all_matches_everything_empty_any_nothing() {
    let all = rule(Source::All, Combine::All, vec![]);
    let any = rule(Source::All, Combine::Any, vec![]);
    for r in sample() {
        assert!(rules::matches(&r, &all), "ALL [] should match {}", r.title());
        assert!(!rules::matches(&r, &any), "ANY [] should not match {}", r.title());
    }
}

#[test]
fn absent_fields_match_only_null() {
    let expectations = [Expected::Int(1), Expected::Text("x".into()), Expected::Missing];
    for r in sample() {
        for e in &expectations {
            // season is absent on movies, slug on "1989", mal_id on "Broken"
            let absent = [
                (Field::Season, r.season().is_none()),
                (Field::GuessedSlug, r.guessed_slug().is_none()),
                (Field::MalId, r.mal_id().is_none()),
            ];
            for (field, is_absent) in absent {
                if is_absent {
                    let cond = Condition::new().with(field, e.clone());
                    assert_eq!(cond.is_satisfied_by(&r), e.is_missing(), "{field:?}={e:?} on {}", r.title());
                }
            }
        }
    }
}

#[test]
fn filter_preserves_relative_order() {
    let data = sample();
    let drop_shows = rule(
        Source::Remote,
        Combine::Any,
        vec![Condition::new().with(Field::Type, Expected::Text("shows".into()))],
    );
    let out = filter::apply(&data, &[drop_shows], Source::Remote, &mut NullProgress);
    let titles: Vec<_> = out.kept.iter().map(|r| r.title()).collect();
    assert_eq!(titles, vec!["Akira", "1989", "Broken"]);
    assert_eq!(out.removed, 2);
    // input untouched
    assert_eq!(data.len(), 5);
}

#[test]
fn invalid_ids_rule_from_json() {
    let rules: Vec<Rule> = serde_json::from_str(
        r#"[{"source": "remote", "type": "OR", "description": "Invalid IDs",
             "conditions": [{"mal_id": null}, {"trakt_id": null}]}]"#,
    )
    .unwrap();
    let out = filter::apply(&sample(), &rules, Source::Remote, &mut NullProgress);
    assert_eq!(out.kept.len(), 4);
    assert!(out.kept.iter().all(Record::is_valid));
}

#[test]
fn all_scope_rule_removes_matching_movie() {
    // remote record {mal_id:5, trakt_id:10, movies} + all-scope {ALL, [{mal_id:5}]}
    let data = vec![Record::movie("Five", Some(5), Some(10)), Record::movie("Six", Some(6), Some(12))];
    let r = rule(Source::All, Combine::All, vec![Condition::new().with(Field::MalId, Expected::Int(5))]);
    let out = filter::apply(&data, &[r], Source::All, &mut NullProgress);
    assert_eq!(out.kept, vec![data[1].clone()]);
}
