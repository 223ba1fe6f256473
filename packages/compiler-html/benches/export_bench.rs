use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pagecraft_compiler_html::{compile_to_html, CompileOptions};
use pagecraft_model::{instantiate_template, Forest, Project};

/// `sections` copies of every gallery template
fn generated_forest(sections: usize) -> Forest {
    let ids = ["hero-section", "card-template", "contact-form", "navigation-bar"];
    (0..sections)
        .flat_map(|_| ids.iter().filter_map(|id| instantiate_template(id)))
        .collect()
}

fn export_small_page(c: &mut Criterion) {
    let forest = generated_forest(1);
    let project = Project::new("Bench");

    c.bench_function("export_small_page", |b| {
        b.iter(|| compile_to_html(black_box(&forest), &project, CompileOptions::default()))
    });
}

fn export_large_page(c: &mut Criterion) {
    let forest = generated_forest(50);
    let project = Project::new("Bench");
    let options = CompileOptions {
        pretty: true,
        ..Default::default()
    };

    c.bench_function("export_large_page_pretty", |b| {
        b.iter(|| compile_to_html(black_box(&forest), &project, options.clone()))
    });
}

criterion_group!(benches, export_small_page, export_large_page);
criterion_main!(benches);
