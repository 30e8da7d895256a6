pub mod draw;
pub mod interpret;
pub mod list;
pub mod ritual;
pub mod show;

use colored::Colorize;

use lq_core::{Corpus, Interpretation, Slip, verse};

/// Look up a slip by id or produce a user-facing error.
fn find_slip(id: u32) -> Result<&'static Slip, String> {
    let corpus = Corpus::builtin();
    corpus
        .get(id)
        .ok_or_else(|| format!("no slip with id {id} (the corpus has {} slips)", corpus.len()))
}

/// Print a slip as a result paper.
fn print_slip(slip: &Slip) {
    let heading = format!("第 {} 签 · {}（{}）", slip.id, slip.title, slip.kind);
    println!("  {}", heading.red().bold());
    println!();
    println!("  {}", "诗曰".yellow());
    for line in verse::lines(&slip.poetry) {
        println!("      {line}");
    }
    println!();
    println!("  {}  {}", "诗意".yellow(), slip.meaning);
    println!("  {}  {}", "解曰".yellow(), slip.explanation);
}

/// Print a completed reading.
fn print_reading(reading: &Interpretation) {
    println!("  {}", "禅悟 · 当下启示".yellow().bold());
    println!("      {}", reading.insight);
    println!();
    for advice in &reading.advice {
        let label = format!("【{}】", advice.category);
        println!("  {}  {}", label.red(), advice.content);
    }
}
