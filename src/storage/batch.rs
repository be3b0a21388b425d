use super::record::Record;

/// The fixed sample batch written by the demo. Order is significant.
pub fn build_sample_batch() -> Vec<Record> {
    vec![
        Record::new("edgardo", "vasquez", 20),
        Record::new("roberto", "fajardo", 30),
        Record::new("ernesto", "baez", 27),
        Record::new("pedro", "toro", 32),
        Record::new("juan", "zambrano", 25),
        Record::new("diego", "valenzuela", 35),
        Record::new("edgardo", "vasquez", 18),
    ]
}

/// Count records whose name is exactly `target` (case-sensitive).
pub fn count_by_name(records: &[Record], target: &str) -> usize {
    records.iter().filter(|record| record.name == target).count()
}
