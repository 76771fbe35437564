//! Benchmarks for whole-document upgrade passes.
//!
//! Measures:
//! - A full `upgrade_all` over documents of increasing size
//! - A second pass over an already upgraded document (marker checks only)
//! - Subtree upgrades through `upgrade_elements`
//! - Downgrading everything again

use ascend_dom::{Document, NodeId};
use ascend_handler::ComponentHandler;
use ascend_test_utils::{Journal, Probe, fixture};
use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

const KINDS: [(&str, &str); 4] = [
    ("Button", "js-button"),
    ("Checkbox", "js-checkbox"),
    ("Textfield", "js-textfield"),
    ("Ripple", "js-ripple"),
];

fn setup_handler(journal: &Journal) -> ComponentHandler {
    let mut handler = ComponentHandler::new();
    for (name, selector) in KINDS {
        handler
            .register(Probe::registration(name, selector, journal))
            .unwrap();
    }
    handler
}

/// `count` sections, each holding one element per kind plus a ripple on the button.
fn build_document(count: usize) -> (Document, Vec<NodeId>) {
    let (mut doc, body) = fixture::document_with_body();
    let mut sections = Vec::with_capacity(count);
    for _ in 0..count {
        let section = fixture::element_in(&mut doc, body, &["section"]);
        fixture::element_in(&mut doc, section, &["js-button", "js-ripple"]);
        fixture::element_in(&mut doc, section, &["js-checkbox"]);
        fixture::element_in(&mut doc, section, &["js-textfield"]);
        fixture::text_in(&mut doc, section, "caption");
        sections.push(section);
    }
    (doc, sections)
}

fn bench_upgrade_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("upgrade_pass/upgrade_all");

    for count in [10, 100, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || {
                    let journal = Journal::new();
                    let handler = setup_handler(&journal);
                    let (doc, _) = build_document(count);
                    (handler, doc)
                },
                |(mut handler, mut doc)| {
                    handler.upgrade_all(&mut doc).unwrap();
                    black_box(handler.instance_count());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_repeat_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("upgrade_pass/already_upgraded");

    for count in [10, 100, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let journal = Journal::new();
            let mut handler = setup_handler(&journal);
            let (mut doc, _) = build_document(count);
            handler.upgrade_all(&mut doc).unwrap();

            b.iter(|| {
                handler.upgrade_all(&mut doc).unwrap();
            });
        });
    }

    group.finish();
}

fn bench_upgrade_elements(c: &mut Criterion) {
    c.bench_function("upgrade_pass/upgrade_elements_subtree", |b| {
        b.iter_batched(
            || {
                let journal = Journal::new();
                let handler = setup_handler(&journal);
                let (doc, sections) = build_document(100);
                (handler, doc, sections)
            },
            |(mut handler, mut doc, sections)| {
                handler.upgrade_elements(&mut doc, &sections).unwrap();
                black_box(handler.instance_count());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_downgrade(c: &mut Criterion) {
    c.bench_function("upgrade_pass/downgrade_all", |b| {
        b.iter_batched(
            || {
                let journal = Journal::new();
                let mut handler = setup_handler(&journal);
                let (mut doc, sections) = build_document(100);
                handler.upgrade_all(&mut doc).unwrap();
                let targets: Vec<NodeId> = sections
                    .iter()
                    .flat_map(|section| doc.element_children(*section).into_vec())
                    .collect();
                (handler, doc, targets)
            },
            |(mut handler, mut doc, targets)| {
                black_box(handler.downgrade_elements(&mut doc, targets).unwrap());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_upgrade_all,
    bench_repeat_pass,
    bench_upgrade_elements,
    bench_downgrade
);
criterion_main!(benches);
