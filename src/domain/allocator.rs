use crate::domain::error::OrderError;
use crate::domain::model::{Order, OrderRow, Pack};
use std::collections::BTreeSet;

/// Splits `quantity` into packs from `catalog`.
///
/// The request is first rounded up to the nearest multiple of the smallest
/// pack size, then that target is divided greedily from the largest size
/// down. Duplicate sizes in the catalog are ignored. An empty catalog yields
/// an empty order.
///
/// This is not an optimal packing search: for catalogs whose sizes are not
/// multiples of the smallest one the overshoot can exceed the true minimum.
pub fn allocate(quantity: i64, catalog: &[Pack]) -> Result<Order, OrderError> {
    if quantity <= 0 {
        return Err(OrderError::InvalidArgument { quantity });
    }

    let sizes: BTreeSet<u64> = catalog.iter().map(|p| u64::from(p.size())).collect();

    let Some(&min_size) = sizes.first() else {
        return Ok(Order::default());
    };

    // i64::MAX + u32::MAX still fits in u64
    let mut remaining = (quantity as u64).div_ceil(min_size) * min_size;
    let mut rows = Vec::with_capacity(sizes.len());

    for &size in sizes.iter().rev() {
        let count = remaining / size;
        if count > 0 {
            remaining %= size;
            rows.push(OrderRow {
                quantity: count,
                pack: size as u32,
            });
        }
    }

    rows.sort_by(|a, b| b.pack.cmp(&a.pack));

    Ok(Order { rows })
}
