/// The exact output schema for the load target, order-significant.
pub const CANONICAL_COLUMNS: [&str; 26] = [
    "vendorid",
    "tpep_pickup_datetime",
    "tpep_dropoff_datetime",
    "passenger_count",
    "trip_distance",
    "ratecodeid",
    "store_and_fwd_flag",
    "pulocationid",
    "dolocationid",
    "payment_type",
    "fare_amount",
    "extra",
    "mta_tax",
    "tip_amount",
    "tolls_amount",
    "improvement_surcharge",
    "total_amount",
    "congestion_surcharge",
    "airport_fee",
    "cbd_congestion_fee",
    "pu_borough",
    "pu_zone",
    "pu_servicezone",
    "do_borough",
    "do_zone",
    "do_servicezone",
];

/// Source header variants mapped to canonical lowercase names. Identity
/// entries make alias application idempotent: a column already in canonical
/// form is a no-op.
pub const COLUMN_ALIASES: &[(&str, &str)] = &[
    // TLC standard fields
    ("VendorID", "vendorid"),
    ("RatecodeID", "ratecodeid"),
    ("PULocationID", "pulocationid"),
    ("DOLocationID", "dolocationid"),
    ("tpep_pickup_datetime", "tpep_pickup_datetime"),
    ("tpep_dropoff_datetime", "tpep_dropoff_datetime"),
    ("passenger_count", "passenger_count"),
    ("trip_distance", "trip_distance"),
    ("store_and_fwd_flag", "store_and_fwd_flag"),
    ("payment_type", "payment_type"),
    ("fare_amount", "fare_amount"),
    ("extra", "extra"),
    ("mta_tax", "mta_tax"),
    ("tip_amount", "tip_amount"),
    ("tolls_amount", "tolls_amount"),
    ("improvement_surcharge", "improvement_surcharge"),
    ("total_amount", "total_amount"),
    ("congestion_surcharge", "congestion_surcharge"),
    // Capitalized in some TLC releases
    ("Airport_fee", "airport_fee"),
    ("airport_fee", "airport_fee"),
    ("cbd_congestion_fee", "cbd_congestion_fee"),
    // Zone enrichment columns, PU_/DO_-prefixed upstream
    ("PU_Borough", "pu_borough"),
    ("PU_Zone", "pu_zone"),
    ("PU_ServiceZone", "pu_servicezone"),
    ("DO_Borough", "do_borough"),
    ("DO_Zone", "do_zone"),
    ("DO_ServiceZone", "do_servicezone"),
    // Crawlers sometimes emit the enrichment names already lowercased
    ("pu_borough", "pu_borough"),
    ("pu_zone", "pu_zone"),
    ("pu_servicezone", "pu_servicezone"),
    ("do_borough", "do_borough"),
    ("do_zone", "do_zone"),
    ("do_servicezone", "do_servicezone"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_alias_targets_a_canonical_column() {
        for (_, target) in COLUMN_ALIASES {
            assert!(
                CANONICAL_COLUMNS.contains(target),
                "alias target '{target}' is not canonical"
            );
        }
    }

    #[test]
    fn test_every_canonical_column_has_an_identity_or_alias() {
        for col in CANONICAL_COLUMNS {
            assert!(
                COLUMN_ALIASES.iter().any(|(_, target)| *target == col),
                "canonical column '{col}' has no alias entry"
            );
        }
    }

    #[test]
    fn test_alias_sources_are_unique() {
        for (i, (src, _)) in COLUMN_ALIASES.iter().enumerate() {
            assert!(
                !COLUMN_ALIASES[i + 1..].iter().any(|(other, _)| other == src),
                "duplicate alias source '{src}'"
            );
        }
    }
}
