//! Output formatting module

use offer_app::export::report::format_eur;
use offer_domain::model::{NormalizedVehicle, OptionCategory, Quote, VehicleItem};
use offer_types::{OutputFormat, Result};

pub fn print_parse(
    output_format: OutputFormat,
    vehicle: &NormalizedVehicle,
    quote: &Quote,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let combined = serde_json::json!({
            "vehicle": vehicle,
            "quote": quote,
        });
        println!("{}", serde_json::to_string_pretty(&combined)?);
    } else {
        // Table format
        println!("\nNormalized Vehicle");
        println!("==================");
        print_section(OptionCategory::Base.label(), &vehicle.base);
        print_section(OptionCategory::Standard.label(), &vehicle.standard);
        print_section(OptionCategory::Optional.label(), &vehicle.optional);
        print_section(OptionCategory::Security.label(), &vehicle.security);
        println!("Total price:     {}", format_eur(vehicle.total_price));

        println!("\nDerived Quote");
        println!("=============");
        if quote.items.is_empty() {
            println!("(no option codes entered)");
        } else {
            for item in &quote.items {
                println!(
                    "[{}] {:<35} | {}",
                    item.code,
                    item.description,
                    format_eur(item.price)
                );
            }
        }
        println!("Total:           {}", format_eur(quote.total));
    }

    Ok(())
}

fn print_section(title: &str, items: &[VehicleItem]) {
    println!("{}:", title);
    if items.is_empty() {
        println!("  (none)");
    } else {
        for item in items {
            println!("  {} {:<35} {}", item.code, item.text, format_eur(item.price));
        }
    }
}
