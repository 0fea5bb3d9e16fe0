//! Convert RDF on stdin into another syntax on stdout.
//!
//! usage: convert <input content type> <output content type>
//!
//! The base IRI of the input can be set with the `RDFPP_BASE` environment variable.
//! Diagnostics are controlled by `RUST_LOG`.
use rdfpp::{Reader, Serializer, Writer};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Vec<_> = std::env::args().collect();
    let (Some(input_ct), Some(output_ct)) = (args.get(1), args.get(2)) else {
        eprintln!("usage: {} <input content type> <output content type>", args[0]);
        std::process::exit(1);
    };
    let base = std::env::var("RDFPP_BASE").ok();

    let stdin = io::stdin().lock();
    let mut reader = Reader::new(stdin, Some(input_ct), None, base.as_deref())?;
    let stdout = io::BufWriter::new(io::stdout().lock());
    let mut writer = Writer::new(stdout, output_ct, None, None)?;

    writer.begin()?;
    reader.try_read_quads(|q| writer.write_quad(&q))?;
    writer.finish()?;
    Ok(())
}
