//! Seed catalog
//!
//! The equipment, packages and financing plans the sales tool ships with.
//! Hosts fall back to these when no catalog snapshot is configured.

use serde_json::{Value, json};
use shared::models::{FinancingOption, Package};

/// Category-keyed seed catalog document
pub fn default_catalog() -> Value {
    json!({
        "conditioners": [
            { "id": "c1", "name": "EC5 Conditioner 75 (8x44)", "price": 8000, "category": "conditioner" },
            { "id": "c2", "name": "TCM Conditioner 75 (8x44)", "price": 7000, "category": "conditioner" },
            { "id": "c3", "name": "EC5 OxyTech (Well) 150 (10x54)", "price": 6000, "category": "conditioner" }
        ],
        "filters": [
            { "id": "f1", "name": "QRS Carbon Wholehouse Filter (8x44)", "price": 2200, "packagePrice": 1400, "category": "filter" },
            { "id": "f2", "name": "CleanStart (Laundry Station)", "price": 3000, "packagePrice": 1600, "category": "filter" },
            { "id": "f3", "name": "AirMaster (Air Purifier)", "price": 3000, "packagePrice": 1600, "category": "filter" }
        ],
        "drinkingWater": [
            { "id": "d1", "name": "UltreFiner (RO)", "price": 2400, "packagePrice": 1595, "category": "drinking" },
            { "id": "d2", "name": "Alkaline", "price": 800, "category": "drinking" },
            { "id": "d3", "name": "HydroFiner (Drinking water)", "price": 1600, "packagePrice": 900, "category": "drinking" }
        ],
        "upgrades": [
            { "id": "u1", "name": "Up size on softener to 150 (10x54) 1.5cf", "price": 500, "category": "upgrade" },
            { "id": "u2", "name": "Up size on softener to 250 (13x54) 2.5cf", "price": 1000, "category": "upgrade" },
            { "id": "u3", "name": "Up size on softener to 400 (16x65) 4.0cf", "price": 1500, "category": "upgrade" }
        ],
        "nonRainsoft": [
            { "id": "n1", "name": "Tankless RO", "price": 1500, "category": "nonRainsoft" },
            { "id": "n2", "name": "Regular RO 5-Stage", "price": 1000, "category": "nonRainsoft" },
            { "id": "n3", "name": "Regular RO 6-Stage", "price": 1100, "category": "nonRainsoft" },
            { "id": "n4", "name": "RO Pump", "price": 500, "packagePrice": 300, "category": "nonRainsoft" },
            { "id": "n5", "name": "UV Light Viqua", "price": 1600, "category": "nonRainsoft" },
            { "id": "n6", "name": "Pressure Tank (Wellmate)", "price": 1350, "category": "nonRainsoft" },
            { "id": "n7", "name": "Pump Goulds 1.5hp (Well)", "price": 1500, "category": "nonRainsoft" }
        ],
        "addons": [
            { "id": "addon1", "name": "Lifetime Soap Supply (5 Years Included)", "price": 499, "category": "addon",
              "subscriptionInfo": "First 5 years included, $99/year after" },
            { "id": "addon2", "name": "Lifetime Soap Supply (10 Years Included)", "price": 899, "category": "addon",
              "subscriptionInfo": "First 10 years included, $99/year after" },
            { "id": "addon3", "name": "Premium Salt Delivery Service", "price": 299, "category": "addon",
              "subscriptionInfo": "First year included, $149/year after" },
            { "id": "addon4", "name": "Extended Water Quality Monitoring", "price": 399, "category": "addon",
              "subscriptionInfo": "First 2 years included, $129/year after" }
        ]
    })
}

fn ids(items: &[&str]) -> Vec<String> {
    items.iter().map(|id| id.to_string()).collect()
}

pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new(
            "pkg1",
            "Premium Package (EC5, QRS, RO, Alkaline, AirMaster, CleanStart)",
            ids(&["c1", "f1", "d1", "d2", "f3", "f2"]),
            19400.0,
            14995.0,
        ),
        Package::new(
            "pkg2",
            "Premium Basic City Package (EC5, QRS, RO)",
            ids(&["c1", "f1", "d1"]),
            12600.0,
            10995.0,
        ),
        Package::new(
            "pkg3",
            "Premium Well Package (EC5, Oxy, UV, RO, Alkaline, AirMaster, CleanStart)",
            ids(&["c1", "c3", "n5", "d1", "d2", "f3", "f2"]),
            25300.0,
            21695.0,
        ),
        Package::new(
            "pkg4",
            "Premium Well with Pump & Pressure Tank",
            ids(&["c1", "c3", "n5", "d1", "d2", "f3", "f2", "n6", "n7"]),
            28300.0,
            24695.0,
        ),
        Package::new(
            "pkg5",
            "Premium Basic Well (EC5-150, Oxy, UV, RO)",
            ids(&["c1", "c3", "n5", "d1"]),
            18000.0,
            17695.0,
        ),
    ]
}

pub fn default_financing_options() -> Vec<FinancingOption> {
    vec![
        FinancingOption::new("fin1", "Home Depot Credit Card", 0.0, vec![24])
            .with_description("No Interest if Paid in Full within 24 Months"),
        FinancingOption::new("fin2", "ISPC", 9.9, vec![0])
            .with_payment_factor(0.01)
            .with_description("Revolving Charge Account - 1% Payment Factor"),
        FinancingOption::new("fin3", "Goodleap", 10.9, vec![180]).with_description("15 Year Term Length"),
        FinancingOption::new("fin4", "YGrene", 8.9, vec![120, 180, 240, 300])
            .with_description("10-15-20-25 Year Term Length"),
    ]
}
