use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mailsmith_compiler_html::{compile_to_html, CompileOptions};
use mailsmith_model::{Block, BlockKind, Document};

fn compile_small_document(c: &mut Criterion) {
    let mut document = Document::default();
    document.blocks.push(Block::new(BlockKind::Text));
    document.blocks.push(Block::new(BlockKind::Image));
    document.blocks.push(Block::new(BlockKind::Button));

    c.bench_function("compile_small_document", |b| {
        b.iter(|| compile_to_html(black_box(&document), CompileOptions::default()))
    });
}

fn compile_large_document(c: &mut Criterion) {
    let mut document = Document::default();
    for i in 0..200 {
        let kind = match i % 3 {
            0 => BlockKind::Text,
            1 => BlockKind::Image,
            _ => BlockKind::Button,
        };
        document.blocks.push(Block::new(kind));
    }

    c.bench_function("compile_large_document", |b| {
        b.iter(|| compile_to_html(black_box(&document), CompileOptions::default()))
    });
}

criterion_group!(benches, compile_small_document, compile_large_document);
criterion_main!(benches);
