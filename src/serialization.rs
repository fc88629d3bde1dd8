//! JSON encoding of an `ArrayList` as a bare array of its elements.

use alloc::vec::Vec;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ArrayListError;
use crate::list::ArrayList;

impl<T: Serialize> ArrayList<T> {
    /// Encodes the elements as a JSON array, in order.
    ///
    /// # Errors
    ///
    /// Returns `ArrayListError::Serialization` if an element cannot be
    /// represented in JSON.
    pub fn to_json(&self) -> Result<Vec<u8>, ArrayListError> {
        serde_json::to_vec(self).map_err(|err| ArrayListError::serialization(&err))
    }
}

impl<T: DeserializeOwned> ArrayList<T> {
    /// Replaces the content of the list with the elements of a JSON array.
    ///
    /// Capacity becomes exactly the number of parsed elements. The resize
    /// policy is kept.
    ///
    /// # Errors
    ///
    /// Returns `ArrayListError::MalformedJson` if `data` is not a JSON array
    /// of `T`. The list is left unchanged in that case.
    pub fn from_json(&mut self, data: &[u8]) -> Result<(), ArrayListError> {
        let values: Vec<T> = serde_json::from_slice(data).map_err(|err| {
            tracing::debug!(line = err.line(), column = err.column(), "rejected JSON input");
            ArrayListError::malformed(&err)
        })?;
        self.replace_with(values);
        Ok(())
    }
}

impl<T: Serialize> Serialize for ArrayList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ArrayList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}
