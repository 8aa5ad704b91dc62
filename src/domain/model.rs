use serde::{Deserialize, Serialize};

/// A fixed-size unit of inventory.
///
/// The size is always positive: both [`Pack::new`] and deserialization
/// reject zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPack")]
pub struct Pack {
    size: u32,
}

impl Pack {
    pub fn new(size: u32) -> Option<Self> {
        (size > 0).then_some(Self { size })
    }

    pub fn size(&self) -> u32 {
        self.size
    }
}

#[derive(Deserialize)]
struct RawPack {
    size: u32,
}

impl TryFrom<RawPack> for Pack {
    type Error = String;

    fn try_from(raw: RawPack) -> Result<Self, Self::Error> {
        Pack::new(raw.size).ok_or_else(|| "pack size must be greater than zero".to_string())
    }
}

/// Ship `quantity` packs of size `pack`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRow {
    pub quantity: u64,
    pub pack: u32,
}

impl OrderRow {
    /// Items covered by this row.
    pub fn items(&self) -> u64 {
        self.quantity * u64::from(self.pack)
    }
}

/// Allocation result. Rows are sorted by pack size, largest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub rows: Vec<OrderRow>,
}

impl Order {
    /// Total items shipped by this order.
    pub fn shipped_quantity(&self) -> u64 {
        self.rows.iter().map(OrderRow::items).sum()
    }

    pub fn pack_count(&self) -> u64 {
        self.rows.iter().map(|row| row.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
