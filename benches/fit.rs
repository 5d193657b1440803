use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use room_fit::logging::{LogEvent, LogSink};
use room_fit::{
    CanvasSurface, Catalog, CheckerConfig, DimensionField, FitChecker, Logger, LoggingResult,
    RoomDimensions, SceneRenderer, SvgRenderer, annotate, layout,
};

#[derive(Clone, Default)]
struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _event: &LogEvent) -> LoggingResult<()> {
        Ok(())
    }
}

fn annotate_catalog(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let room = RoomDimensions::new(3.0, 3.0, 2.5);
    c.bench_function("annotate_catalog", |b| {
        b.iter(|| annotate(black_box(&catalog), black_box(Some(&room))));
    });
}

fn layout_and_svg(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let sofa = catalog.get("1").cloned().expect("sofa");
    let room = RoomDimensions::new(4.0, 2.0, 2.5);
    let renderer = SceneRenderer::with_default();
    let svg = SvgRenderer::default();

    c.bench_function("layout_and_svg", |b| {
        b.iter(|| {
            let scene = layout(black_box(&room), 600.0, 60.0, Some(&sofa)).expect("layout");
            svg.to_document(&renderer.frame(&scene))
        });
    });
}

fn checker_session(c: &mut Criterion) {
    c.bench_function("checker_session", |b| {
        b.iter(|| {
            let mut checker = FitChecker::new(CheckerConfig::default(), Catalog::builtin())
                .expect("checker")
                .with_logger(Logger::new(NullSink));
            let mut surface = CanvasSurface::new();
            let form = checker.form_mut();
            form.set(DimensionField::Length, "3");
            form.set(DimensionField::Width, "2.4");
            form.set(DimensionField::Height, "2.5");
            checker.submit().expect("submit");
            for id in ["1", "2", "2", "4"] {
                checker.select(id).expect("select");
                black_box(checker.listing());
                checker.draw(&mut surface).expect("draw");
            }
        });
    });
}

criterion_group!(benches, annotate_catalog, layout_and_svg, checker_session);
criterion_main!(benches);
