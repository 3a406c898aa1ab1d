pub(crate) mod records;
pub(crate) mod roster;

pub(crate) use records::sample_records;
pub(crate) use roster::{find_class, sample_classes, sample_students};
