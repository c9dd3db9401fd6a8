use comfy_table::{ContentArrangement, Table};
use ur_engines::tarot::available_spreads;

use super::{Format, to_json};

pub fn run(format: &str) -> Result<(), String> {
    let spreads = available_spreads();

    if Format::parse(format)? == Format::Json {
        println!("{}", to_json(&spreads)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Type", "Name", "Cards", "Positions"]);

    for spread in &spreads {
        table.add_row(vec![
            spread.spread_type.as_str().to_string(),
            spread.name.to_string(),
            spread.card_count.to_string(),
            spread.positions.join(" / "),
        ]);
    }

    println!("{table}");
    Ok(())
}
