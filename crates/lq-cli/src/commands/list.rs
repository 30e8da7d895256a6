use comfy_table::{ContentArrangement, Table};

use lq_core::{Corpus, verse};

pub fn run() -> Result<(), String> {
    let corpus = Corpus::builtin();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["签号", "签题", "签品", "首句"]);

    for slip in corpus.slips() {
        let first_line = verse::lines(&slip.poetry)
            .first()
            .copied()
            .unwrap_or("—")
            .to_string();
        table.add_row(vec![
            slip.id.to_string(),
            slip.title.clone(),
            slip.kind.clone(),
            first_line,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} slips", corpus.len());

    Ok(())
}
