//! Criterion benchmarks for papergen.
//!
//! Uses a synthetic question pool to measure allocation cost
//! independent of any real question source.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use papergen::bank::{Question, QuestionBank};
use papergen::exam::{Bounds, Exam, Rule};
use papergen::generator::{check_papers, GeneratorConfig, GeneratorRunner, Strategy};
use papergen::search::SearchRunner;

// ===========================================================================
// Synthetic pool: lessons of equal size, cycling tag combinations,
// an exclusion group per lesson
// ===========================================================================

const SKILLS: [&str; 3] = ["bloom:recall", "bloom:apply", "bloom:analyse"];
const FIGURES: [&str; 2] = ["shallow:has_figure", "shallow:does_not_have_figure"];

fn synthetic_pool(lessons: usize, per_lesson: usize) -> QuestionBank {
    let mut questions = Vec::with_capacity(lessons * per_lesson);
    let mut group = 0usize;

    for lesson in 0..lessons {
        group += 1;
        for i in 0..per_lesson {
            let mut tags = vec![
                SKILLS[(lesson + i) % SKILLS.len()].to_owned(),
                FIGURES[i % FIGURES.len()].to_owned(),
            ];
            // Two questions per lesson share an exclusion group.
            if i < 2 {
                tags.push(format!("group:{group}"));
            }
            questions.push(Question::new(
                format!("q_{lesson}_{i}"),
                format!("lesson_{lesson}"),
                tags,
            ));
        }
    }

    QuestionBank::new(questions).expect("synthetic pool is self-consistent")
}

fn synthetic_exam(lessons: usize, paper_size: u32) -> Exam {
    let mut exam = Exam::new("bench", "synthetic")
        .with_rule(Rule::TotalCount(Bounds::exactly(paper_size)))
        .with_rule(Rule::Tag {
            tag: "bloom:recall".into(),
            bounds: Bounds::new(1, paper_size),
        })
        .with_rule(Rule::Tag {
            tag: "bloom:apply".into(),
            bounds: Bounds::new(1, paper_size),
        })
        .with_rule(Rule::Tag {
            tag: "shallow:has_figure".into(),
            bounds: Bounds::at_least(1),
        });

    // Pair up lessons into clusters.
    for pair in (0..lessons).collect::<Vec<_>>().chunks(2) {
        exam.rules.push(Rule::LessonGroup {
            lessons: pair.iter().map(|l| format!("lesson_{l}")).collect(),
            bounds: Bounds::new(0, paper_size / 2),
        });
    }
    exam
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_generate_global(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_global");
    group.sample_size(10);

    for (lessons, per_lesson, papers) in [(10usize, 20usize, 3usize), (20, 50, 5), (40, 50, 10)] {
        let bank = synthetic_pool(lessons, per_lesson);
        let exam = synthetic_exam(lessons, 20);
        let config = GeneratorConfig::default().with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("l{}_q{}_p{}", lessons, per_lesson, papers), papers),
            &(bank, exam, config),
            |b, (bank, exam, config)| {
                b.iter(|| {
                    let result = GeneratorRunner::run(
                        black_box(bank),
                        black_box(exam),
                        papers,
                        black_box(config),
                    );
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_generate_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_sampling");
    group.sample_size(10);

    for &papers in &[3usize, 5, 10] {
        let bank = synthetic_pool(20, 50);
        let exam = synthetic_exam(20, 20);
        let config = GeneratorConfig::default()
            .with_strategy(Strategy::RandomSampling)
            .with_attempts_per_paper(100)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(papers),
            &(bank, exam, config),
            |b, (bank, exam, config)| {
                b.iter(|| {
                    let result = GeneratorRunner::run(
                        black_box(bank),
                        black_box(exam),
                        papers,
                        black_box(config),
                    );
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_papers");
    group.sample_size(10);

    let bank = synthetic_pool(20, 50);
    let exam = synthetic_exam(20, 20);
    let config = GeneratorConfig::default().with_seed(42);
    let result = GeneratorRunner::run(&bank, &exam, 10, &config).expect("generation succeeds");

    group.bench_function("p10", |b| {
        b.iter(|| black_box(check_papers(black_box(&result.papers), black_box(&exam))))
    });
    group.finish();
}

fn bench_seed_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("seed_search");
    group.sample_size(10);

    let bank = synthetic_pool(10, 20);
    let exam = synthetic_exam(10, 20);
    let config = GeneratorConfig::default();

    group.bench_function("a10", |b| {
        b.iter(|| {
            let result = SearchRunner::run(
                black_box(&bank),
                black_box(&exam),
                3,
                black_box(&config),
                0,
                10,
            );
            black_box(result)
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_generate_global,
    bench_generate_sampling,
    bench_check,
    bench_seed_search
);
criterion_main!(benches);
