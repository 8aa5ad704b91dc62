use pack_order::{allocate, OrderError, Pack};
use proptest::prelude::*;

/// Catalogs where every size is a multiple of the smallest one, possibly with duplicates.
fn divisible_catalog() -> impl Strategy<Value = Vec<Pack>> {
    (1u32..1000, prop::collection::vec(1u32..50, 0..6)).prop_map(|(base, multipliers)| {
        std::iter::once(base)
            .chain(multipliers.into_iter().map(|m| base * m))
            .filter_map(Pack::new)
            .collect()
    })
}

fn any_catalog() -> impl Strategy<Value = Vec<Pack>> {
    prop::collection::vec(1u32..100_000, 0..8)
        .prop_map(|sizes| sizes.into_iter().filter_map(Pack::new).collect())
}

proptest! {
    #[test]
    fn non_positive_quantity_is_rejected(quantity in i64::MIN..=0, catalog in any_catalog()) {
        let err = allocate(quantity, &catalog).unwrap_err();
        let is_invalid = matches!(err, OrderError::InvalidArgument { quantity: q } if q == quantity);
        prop_assert!(is_invalid);
    }

    #[test]
    fn empty_catalog_gives_no_rows(quantity in 1i64..i64::MAX) {
        prop_assert!(allocate(quantity, &[]).unwrap().rows.is_empty());
    }

    #[test]
    fn shipped_is_smallest_covering_multiple(quantity in 1i64..1_000_000_000, catalog in divisible_catalog()) {
        let order = allocate(quantity, &catalog).unwrap();
        let min_size = catalog.iter().map(|p| u64::from(p.size())).min().unwrap();
        let expected = (quantity as u64).div_ceil(min_size) * min_size;

        prop_assert!(order.shipped_quantity() >= quantity as u64);
        prop_assert_eq!(order.shipped_quantity(), expected);
    }

    #[test]
    fn rows_are_descending_unique_and_non_zero(quantity in 1i64..1_000_000_000, catalog in any_catalog()) {
        let order = allocate(quantity, &catalog).unwrap();

        prop_assert!(order.rows.windows(2).all(|w| w[0].pack > w[1].pack));
        prop_assert!(order.rows.iter().all(|r| r.quantity > 0));
    }

    #[test]
    fn allocation_is_deterministic(quantity in 1i64..1_000_000_000, catalog in any_catalog()) {
        prop_assert_eq!(allocate(quantity, &catalog).unwrap(), allocate(quantity, &catalog).unwrap());
    }

    #[test]
    fn catalog_order_does_not_matter(quantity in 1i64..1_000_000_000, catalog in any_catalog()) {
        let mut reversed = catalog.clone();
        reversed.reverse();
        prop_assert_eq!(allocate(quantity, &catalog).unwrap(), allocate(quantity, &reversed).unwrap());
    }
}
