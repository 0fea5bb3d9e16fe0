use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rdfpp::{Reader, Serializer, Writer};
use std::io;

fn parse_nq(c: &mut Criterion) {
    let data = nquads(1000);
    let mut group = c.benchmark_group("parse NQ");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_with_input("parse NQ", &data, |b, data| {
        b.iter(|| {
            let mut count = 0;
            Reader::new(data.as_bytes(), Some("application/n-quads"), None, None)
                .and_then(|mut r| r.read_quads(|_| count += 1))
                .map(|_| count)
        })
    });
    group.finish();
}

fn parse_ttl(c: &mut Criterion) {
    let data = turtle(1000);
    if Reader::new(data.as_bytes(), Some("text/turtle"), None, None).is_err() {
        return;
    }
    let mut group = c.benchmark_group("parse TTL");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_with_input("parse TTL", &data, |b, data| {
        b.iter(|| {
            let mut count = 0;
            Reader::new(data.as_bytes(), Some("text/turtle"), None, None)
                .and_then(|mut r| r.read_triples(|_| count += 1))
                .map(|_| count)
        })
    });
    group.finish();
}

fn convert_nq_nt(c: &mut Criterion) {
    let data = nquads(1000);
    let mut group = c.benchmark_group("convert NQ to NT");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_with_input("convert NQ to NT", &data, |b, data| {
        b.iter(|| -> Result<(), rdfpp::Error> {
            let mut reader = Reader::new(data.as_bytes(), Some("application/n-quads"), None, None)?;
            let mut writer = Writer::new(io::sink(), "application/n-triples", None, None)?;
            reader.try_read_quads(|q| writer.write_quad(&q))?;
            writer.finish()
        })
    });
    group.finish();
}

criterion_group!(benches, parse_nq, parse_ttl, convert_nq_nt);
criterion_main!(benches);

fn nquads(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                "<http://example.org/s{}> <http://example.org/p{}> \"value {i}\"@en <http://example.org/g{}> .\n\
                 _:b{i} <http://example.org/knows> <http://example.org/s{}> .\n",
                i % 97,
                i % 7,
                i % 3,
                i
            )
        })
        .collect()
}

fn turtle(n: usize) -> String {
    let mut ttl = String::from("@prefix : <http://example.org/> .\n");
    for i in 0..n {
        ttl.push_str(&format!(
            ":s{} :p{} \"value {i}\"@en ;\n    :knows [ :name \"node {i}\" ] .\n",
            i % 97,
            i % 7
        ));
    }
    ttl
}
