use crate::engine::SearchEngine;
use crate::utils::AppConfig;

/// Display load and index statistics
pub fn show_stats(engine: &SearchEngine, config: &AppConfig) {
    let stats = engine.stats();

    println!("Index Statistics");
    println!("================");
    println!();
    println!("Corpus:           {}", config.corpus_path.display());
    println!("Contents source:  {}", config.toc_path.display());
    println!("Corpus size:      {}", format_size(stats.corpus_bytes as u64));
    println!("Suffixes:         {}", stats.suffix_count);
    println!("Index size:       {}", format_size(index_bytes(stats.suffix_count)));
    println!("Titles:           {}", stats.title_count);
    println!("Snippet window:   {} bytes", stats.window);
    println!();
    println!(
        "Index build:      {:.1} ms ({})",
        stats.index_build_ms,
        if stats.parallel_build { "parallel" } else { "sequential" }
    );
    println!("Total load:       {:.1} ms", stats.total_load_ms);
}

/// Memory held by the suffix array itself
fn index_bytes(suffix_count: usize) -> u64 {
    (suffix_count * std::mem::size_of::<usize>()) as u64
}

/// Format byte size to human readable
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 bytes");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(5 * 1024 * 1024 + 512 * 1024), "5.50 MB");
    }

    #[test]
    fn test_index_bytes() {
        assert_eq!(index_bytes(10), 10 * std::mem::size_of::<usize>() as u64);
    }
}
