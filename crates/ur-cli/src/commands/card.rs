use colored::Colorize;
use ur_engines::tarot::{DECK_SIZE, get_card_preview};

use super::{Format, to_json};

pub fn run(index: i64, format: &str) -> Result<(), String> {
    let format = Format::parse(format)?;
    let card = get_card_preview(index)
        .ok_or_else(|| format!("card index {index} out of range (0-{})", DECK_SIZE - 1))?;

    match format {
        Format::Json => println!("{}", to_json(&card)?),
        Format::Text => {
            let group = card.suit.map_or("大アルカナ", |s| s.label());
            println!("  {} {} [{}]", card.name.bold(), card.name_en, group.dimmed());
            println!();
            println!("  id:       {}", card.id);
            println!("  number:   {}", card.number);
            println!("  element:  {}", card.element);
            println!("  keywords: {}", card.keywords.join(", "));
        }
    }
    Ok(())
}
