use hotelpricelib::{
    formats::{json::PriceJson, text::TextReport},
    model::Report,
    pricing::{compute_totals, find_cheapest},
    traits::{ReadFormat, WriteFormat},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: котировки JSON из stdin -> текстовый отчёт в stdout
    let records = PriceJson::read(std::io::BufReader::new(std::io::stdin()))?;
    let report = Report {
        cheapest: find_cheapest(&records)?,
        totals: compute_totals(&records)?,
    };
    TextReport::write(std::io::stdout(), &report)?;
    Ok(())
}
