//! Order total computation.

use super::aggregate::Product;

/// Total order price: for every product, unit price plus the stitching
/// surcharge (absent surcharge counts as zero), times quantity.
///
/// Full precision is kept here; rounding to two decimals happens at
/// presentation time only.
pub fn order_total(products: &[Product]) -> f64 {
    products
        .iter()
        .map(|p| (p.price + p.stitched_price.unwrap_or(0.0)) * f64::from(p.quantity))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: f64, stitched_price: Option<f64>, quantity: u32) -> Product {
        Product {
            price,
            stitched_price,
            quantity,
            ..Default::default()
        }
    }

    #[test]
    fn empty_list_totals_zero() {
        assert_eq!(order_total(&[]), 0.0);
    }

    #[test]
    fn sums_price_and_surcharge_times_quantity() {
        let products = vec![
            product(1000.0, None, 2),
            product(500.0, Some(200.0), 1),
        ];
        assert_eq!(order_total(&products), 2700.0);
    }

    #[test]
    fn missing_surcharge_equals_zero_surcharge() {
        let with_none = vec![product(750.0, None, 3)];
        let with_zero = vec![product(750.0, Some(0.0), 3)];
        assert_eq!(order_total(&with_none), order_total(&with_zero));
    }

    #[test]
    fn total_is_order_independent() {
        let mut products = vec![
            product(1200.0, Some(300.0), 1),
            product(80.0, None, 5),
            product(999.99, Some(0.01), 2),
        ];
        let forward = order_total(&products);
        products.reverse();
        assert_eq!(order_total(&products), forward);
    }

    #[test]
    fn zero_quantity_contributes_nothing() {
        let products = vec![product(1500.0, Some(400.0), 0), product(100.0, None, 1)];
        assert_eq!(order_total(&products), 100.0);
    }
}
