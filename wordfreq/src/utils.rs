// src/utils.rs
use crate::core::counter::Entry;

/// Prints a ranked word list in the `\t1) word: count` shape.
pub fn print_ranked_words(title: &str, picked: &[&Entry<String>]) {
    println!("{title}");
    for (rank, entry) in picked.iter().enumerate() {
        println!("\t{}) {}: {}", rank.saturating_add(1), entry.key, entry.count);
    }
    println!();
}
