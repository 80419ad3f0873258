//! Normalization of raw order input into the structured vehicle

use offer_types::Result;

use crate::model::{NormalizedVehicle, OptionCategory, VehicleItem};
use crate::repository::OptionCatalog;
use crate::service::line_parser::parse_priced_lines;

/// Build the structured vehicle representation from the raw code list.
///
/// Codes the catalog does not know are skipped. Base codes always carry a
/// zero price; the remaining categories take their price from the strictly
/// parsed priced lines (0 when no line names the code) and contribute to
/// the total.
pub fn normalize_vehicle_input(
    all_codes: &[String],
    priced_lines: &[String],
    catalog: &dyn OptionCatalog,
) -> Result<NormalizedVehicle> {
    let prices = parse_priced_lines(priced_lines)?;

    let mut vehicle = NormalizedVehicle::default();

    for code in all_codes {
        let Some(info) = catalog.describe(code) else {
            continue;
        };

        match info.category {
            OptionCategory::Base => {
                vehicle.base.push(VehicleItem {
                    code: code.clone(),
                    text: info.description.clone(),
                    price: 0.0,
                });
            }
            category => {
                let price = prices.get(code.as_str()).copied().unwrap_or(0.0);
                let item = VehicleItem {
                    code: code.clone(),
                    text: info.description.clone(),
                    price,
                };
                match category {
                    OptionCategory::Standard => vehicle.standard.push(item),
                    OptionCategory::Optional => vehicle.optional.push(item),
                    OptionCategory::Security => vehicle.security.push(item),
                    OptionCategory::Base => unreachable!(),
                }
                vehicle.total_price += price;
            }
        }
    }

    Ok(vehicle)
}
