// Pure projection of a catalog snapshot into what the page displays

use crate::{
    models::{SearchCriterion, Vehicle, VehicleId},
    view::CatalogSnapshot,
};

pub struct VehicleRow {
    pub id: VehicleId,
    pub model: String,
    pub brand: String,
    pub vehicle_type: String,
    pub fuel_type: String,
    pub price: String,
    pub on_sale: bool,
    pub sale_label: &'static str,
}

impl From<&Vehicle> for VehicleRow {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id.clone(),
            model: vehicle.model.clone(),
            brand: vehicle.brand.clone(),
            vehicle_type: vehicle.vehicle_type.clone(),
            fuel_type: vehicle.fuel_type.clone(),
            price: format_price(vehicle.base_price),
            on_sale: vehicle.is_on_sale,
            sale_label: if vehicle.is_on_sale { "On Sale" } else { "Regular Price" },
        }
    }
}

pub struct CriterionOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

pub struct CatalogDisplay {
    pub rows: Vec<VehicleRow>,
    pub options: Vec<CriterionOption>,
    pub search_value: String,
    pub loading: bool,
    pub error: Option<String>,
    pub last_updated: Option<String>,
}

pub fn project(snapshot: &CatalogSnapshot) -> CatalogDisplay {
    CatalogDisplay {
        rows: snapshot.vehicles.iter().map(VehicleRow::from).collect(),
        options: criterion_options(&snapshot.criteria),
        search_value: snapshot.value.clone(),
        loading: snapshot.status.is_loading(),
        error: snapshot.status.error_message().map(str::to_string),
        last_updated: snapshot
            .last_updated
            .map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string()),
    }
}

// The three fixed options; an unknown selection falls back to none selected
fn criterion_options(selected: &SearchCriterion) -> Vec<CriterionOption> {
    SearchCriterion::SELECTABLE
        .iter()
        .map(|criterion| CriterionOption {
            value: criterion.as_str().to_string(),
            label: criterion.label().to_string(),
            selected: criterion == selected,
        })
        .collect()
}

/// `$` followed by the amount with thousands separators and up to three
/// decimals, trailing zeros dropped: `24000.0` -> `$24,000`,
/// `18999.5` -> `$18,999.5`.
pub fn format_price(amount: f64) -> String {
    let millis = (amount.abs() * 1000.0).round() as u64;
    let whole = millis / 1000;
    let fraction = millis % 1000;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && millis > 0 { "-" } else { "" };
    if fraction == 0 {
        format!("{sign}${grouped}")
    } else {
        let decimals = format!("{fraction:03}");
        format!("{sign}${grouped}.{}", decimals.trim_end_matches('0'))
    }
}
