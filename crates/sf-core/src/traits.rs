//! Core traits shared by models, the HTTP binding, and the list views

/// Primary key type assigned by the backend
pub type Id = i64;

/// Trait for entities that have a backend-assigned primary key
pub trait Identifiable {
    fn id(&self) -> Id;
}

/// Trait for entity types exposed by the remote API
pub trait Resource {
    /// Human-readable name used in log fields and messages
    const NAME: &'static str;
}

/// Entities whose amount is derived from two persisted factors.
///
/// The amount is never stored or sent; it is recomputed from the factors every
/// time it is read.
pub trait Costed {
    /// The (quantity, price) pair the amount is derived from
    fn factors(&self) -> (f64, f64);

    fn amount(&self) -> f64 {
        let (quantity, price) = self.factors();
        quantity * price
    }
}

/// Sum of the derived amounts of a slice of entities
pub fn total_amount<T: Costed>(items: &[T]) -> f64 {
    items.iter().map(Costed::amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line(f64, f64);

    impl Costed for Line {
        fn factors(&self) -> (f64, f64) {
            (self.0, self.1)
        }
    }

    #[test]
    fn test_amount_is_product_of_factors() {
        assert_eq!(Line(4.0, 3.5).amount(), 14.0);
        assert_eq!(Line(0.0, 99.0).amount(), 0.0);
    }

    #[test]
    fn test_total_amount() {
        let lines = vec![Line(2.0, 5.0), Line(3.0, 1.5)];
        assert_eq!(total_amount(&lines), 14.5);
        assert_eq!(total_amount::<Line>(&[]), 0.0);
    }
}
