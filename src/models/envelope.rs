use serde::{Deserialize, Serialize};

/// Success envelope shared by every endpoint: the payload (object or array)
/// sits under a single `data` field.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DataBody<T> {
    pub data: T,
}

impl<T> DataBody<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
