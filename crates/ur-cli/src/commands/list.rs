use comfy_table::{ContentArrangement, Table};
use ur_core::DivinationKind;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "System", "Tradition"]);

    for kind in DivinationKind::all() {
        table.add_row(vec![kind.as_str(), kind.label(), kind.traditional_source()]);
    }

    println!("{table}");
    println!();
    println!("  {} systems", DivinationKind::all().len());

    Ok(())
}
