use serde::{Deserialize, Serialize};

/// How many values of a column resolved against the directory.
///
/// `num_mapped_to` counts distinct raw values that matched something;
/// `num_people` counts data rows carrying one of those values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingResult {
    pub num_mapped_to: usize,
    pub num_people: usize,
}

impl MappingResult {
    pub fn new(num_mapped_to: usize, num_people: usize) -> Self {
        Self {
            num_mapped_to,
            num_people,
        }
    }

    /// Returns true when nothing resolved.
    pub fn is_empty(&self) -> bool {
        self.num_mapped_to == 0
    }
}
