//! Embedded regional rate table.

/// Two regional carriers plus a discounted DHL tariff.
pub const REGIONAL_RATES_CSV: &str = "\
carrier,base,per_kg,per_km\n\
DPD,8.5,0.55,0.09\n\
GLS,9,0.35,0.11\n\
DHL,9.5,0.5,0.1\n\
";
