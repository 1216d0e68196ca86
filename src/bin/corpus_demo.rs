use glyph_corpus::config;
use glyph_corpus::corpus::build_corpus_from_dir;
use glyph_corpus::export::write_training_csv;
use glyph_corpus::image::io::write_json_file;
use glyph_corpus::types::Corpus;
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "corpus_demo".to_string());
    let config = config::parse_cli(&program)?;

    let corpus = build_corpus_from_dir(&config.corpus_dir, &config.params)?;
    print_text_summary(&corpus);

    let csv_path = config
        .output
        .csv_out
        .unwrap_or_else(|| PathBuf::from("data.csv"));
    write_training_csv(&csv_path, &corpus)?;
    println!("Training table written to {}", csv_path.display());

    if let Some(path) = &config.output.means_json {
        write_json_file(path, &corpus.means)?;
        println!("Mean vectors written to {}", path.display());
    }

    Ok(())
}

fn print_text_summary(corpus: &Corpus) {
    println!("Corpus summary");
    println!("  grid size: {}", corpus.grid_size);
    println!(
        "  vector length: {}",
        corpus.grid_size * corpus.grid_size
    );
    println!("  samples: {}", corpus.samples.len());
    println!("  skipped: {}", corpus.skipped);

    for (label, mean) in &corpus.means {
        let count = corpus
            .samples
            .iter()
            .filter(|s| s.label == *label)
            .count();
        let inked = mean.bits().iter().filter(|&&b| b == 1).count();
        println!("  '{label}': {count} samples, mean has {inked} inked blocks");
    }

    if !corpus.empty_labels.is_empty() {
        let empty: String = corpus.empty_labels.iter().collect();
        println!("  labels without samples: {empty}");
    }
}
