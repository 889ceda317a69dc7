use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::io;
use teleprompter::buffer::Buffer;
use teleprompter::layout::{CellMetrics, PageLayout};
use teleprompter::render::{paint_page, Palette};
use teleprompter::{Command, ControlState, Frame, Paragraphs, Renderer, TerminalRenderer};

fn speech(paragraphs: usize) -> Paragraphs {
    let mut text = String::new();
    for i in 0..paragraphs {
        text.push_str(&format!(
            "Paragraph {i}: four score and seven years ago our fathers brought forth on this \
             continent a new nation, conceived in liberty, and dedicated to the proposition \
             that all men are created equal.\n"
        ));
    }
    Paragraphs::from_text(&text, 10)
}

fn layout_long_speech(c: &mut Criterion) {
    let paragraphs = speech(500);
    let state = ControlState::default();
    let metrics = CellMetrics::default();

    c.bench_function("layout_500_paragraphs_120x40", |b| {
        b.iter(|| PageLayout::compute(black_box(&state), &paragraphs, &metrics, 120, 40))
    });
}

fn paint_page_only(c: &mut Criterion) {
    let paragraphs = speech(100);
    let state = ControlState::default();
    let metrics = CellMetrics::default();
    let palette = Palette::default();
    let layout = PageLayout::compute(&state, &paragraphs, &metrics, 120, 40);
    let mut buffer = Buffer::new(120, 40);

    c.bench_function("paint_page_120x40", |b| {
        b.iter(|| paint_page(black_box(&mut buffer), &layout, &palette))
    });
}

fn scrolling_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_frame_by_size");
    let paragraphs = speech(200);

    for (width, height) in [(80, 24), (120, 40), (200, 60)] {
        group.bench_with_input(
            BenchmarkId::new("terminal_renderer", format!("{width}x{height}")),
            &(width, height),
            |b, &(width, height)| {
                let mut renderer = TerminalRenderer::new(
                    io::sink(),
                    width,
                    height,
                    CellMetrics::default(),
                    Palette::default(),
                );
                let mut state = ControlState::default();
                b.iter(|| {
                    state.apply(Command::ScrollDown(4.0));
                    let frame = Frame {
                        state: &state,
                        paragraphs: &paragraphs,
                    };
                    renderer.paint(black_box(&frame))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, layout_long_speech, paint_page_only, scrolling_frames);
criterion_main!(benches);
