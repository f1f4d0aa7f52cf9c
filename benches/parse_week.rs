// benches/parse_week.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use qbr_weather::scrape::parse_doc;

// A synthetic full week: 16 game boxes with the usual chrome around them.
fn build_sample() -> String {
    let mut doc = String::from("<html><body><div class=\"container\">");
    for i in 0..16 {
        doc.push_str(&format!(
            r#"<div class="game-box">
                 <div class="header"><span class="kickoff">Sun 1:00PM</span></div>
                 <div class="d-flex">
                   <span class="fw-bold">Home {i}</span>
                   <span class="score">21</span>
                   <span class="fw-bold ms-1">Away {i}</span>
                 </div>
                 <div class="mx-2"><span>{}° Partly Cloudy</span></div>
               </div>"#,
            30 + i
        ));
    }
    doc.push_str("</div></body></html>");
    doc
}

fn bench_parse_week(c: &mut Criterion) {
    let doc = build_sample();

    c.bench_function("parse_week_16_games", |b| {
        b.iter(|| {
            let games = parse_doc(black_box(&doc));
            black_box(games.len())
        })
    });
}

criterion_group!(benches, bench_parse_week);
criterion_main!(benches);
