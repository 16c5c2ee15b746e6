// benches/filter.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use anitrakt_scrape::{
    filter, merge,
    pipeline::{process, CategorySummary},
    progress::NullProgress,
    specs,
    store::CategoryConfig,
    Category, Record, Rule,
};

// Synthetic page shaped like the live movies table.
fn sample_page(rows: u32) -> String {
    let mut doc = String::from("<table><tbody>");
    for i in 1..=rows {
        doc.push_str(&format!(
            "<tr><td><a href=\"https://trakt.tv/movies/{t}\">Movie {i}</a></td>\
             <td><a href=\"https://myanimelist.net/anime/{m}\">Movie {i}</a></td></tr>",
            t = i * 3,
            m = if i % 50 == 0 { 0 } else { (i * 7919) % 60_000 + 1 },
        ));
    }
    doc.push_str("</tbody></table>");
    doc
}

fn rules() -> Vec<Rule> {
    serde_json::from_str(
        r#"[
        {"source": "remote", "type": "OR", "description": "Invalid IDs",
         "conditions": [{"mal_id": null}, {"trakt_id": null}]},
        {"source": "all", "type": "AND", "description": "Specials",
         "conditions": [{"type": "movies", "title": "Movie 7"}]},
        {"source": "local", "type": "ANY", "description": "Curated dup", "conditions": [{"mal_id": 1}]}
    ]"#,
    )
    .expect("bench rules")
}

fn bench_pipeline(c: &mut Criterion) {
    let doc = sample_page(4_000);
    let rules = rules();
    let parsed = specs::parse(Category::Movies, &doc, &mut NullProgress).expect("sample parses");
    let overrides: Vec<Record> = parsed.iter().step_by(40).map(|r| Record::movie("Curated", r.mal_id(), r.trakt_id())).collect();
    let config = CategoryConfig { rules: rules.clone(), overrides: overrides.clone() };

    c.bench_function("parse_movies", |b| {
        b.iter(|| black_box(specs::parse(Category::Movies, black_box(&doc), &mut NullProgress).map(|v| v.len())))
    });

    c.bench_function("filter_remote", |b| {
        b.iter(|| black_box(filter::apply(black_box(&parsed), &rules, anitrakt_scrape::Source::Remote, &mut NullProgress).kept.len()))
    });

    c.bench_function("merge_overrides", |b| {
        b.iter(|| black_box(merge::merge(parsed.clone(), overrides.clone(), &mut NullProgress).replaced))
    });

    c.bench_function("process_category", |b| {
        b.iter(|| {
            let mut summary = CategorySummary::default();
            black_box(process(Category::Movies, parsed.clone(), &config, &mut summary, &mut NullProgress).len())
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
