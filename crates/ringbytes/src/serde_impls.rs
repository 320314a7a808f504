//! Serde support, enabled with the `serde` feature.
//!
//! A buffer serializes as its capacity plus its logical contents; cursor
//! positions are not part of the representation.
use alloc::vec::Vec;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

use crate::RingBuffer;

#[derive(Serialize)]
#[serde(rename = "RingBuffer")]
struct Repr<'a> {
    capacity: usize,
    data: &'a [u8],
}

#[derive(Deserialize)]
#[serde(rename = "RingBuffer")]
struct OwnedRepr {
    capacity: usize,
    data: Vec<u8>,
}

impl Serialize for RingBuffer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let data = self.to_vec();
        Repr {
            capacity: self.capacity(),
            data: &data,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RingBuffer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let OwnedRepr { capacity, data } = OwnedRepr::deserialize(deserializer)?;
        RingBuffer::from_slice_with_capacity(&data, capacity).map_err(D::Error::custom)
    }
}
