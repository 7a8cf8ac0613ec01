use super::{Factory, traced};
use crate::core::error::ValidationResult;
use crate::core::validation::validators::{ensure_non_negative, ensure_present};
use crate::entities::candle::Candle;

impl Factory {
    /// Create a catalogue candle with a freshly allocated candle number
    pub fn create_candle(
        &self,
        name: &str,
        scent: &str,
        price: f64,
        color: &str,
        category: &str,
    ) -> ValidationResult<Candle> {
        const ENTITY: &str = "candle";
        traced(|| {
            ensure_present(ENTITY, "name", name)?;
            let price = ensure_non_negative(ENTITY, "price", price)?;
            let candle_number = self.next_number(ENTITY, "candle_number")?;

            Candle::builder()
                .candle_number(candle_number)
                .name(name)
                .scent(scent)
                .price(price)
                .color(color)
                .category(category)
                .build()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    #[test]
    fn test_create_candle() {
        let candle = Factory::default()
            .create_candle("Ocean Breeze", "Sea Salt", 99.99, "Blue", "Fresh")
            .unwrap();

        assert!(candle.candle_number() > 0);
        assert_eq!(candle.name(), "Ocean Breeze");
        assert_eq!(candle.scent(), "Sea Salt");
        assert_eq!(candle.price(), 99.99);
        assert_eq!(candle.color(), "Blue");
        assert_eq!(candle.category(), "Fresh");
    }

    #[test]
    fn test_free_candle_is_allowed() {
        let candle = Factory::default()
            .create_candle("Sample", "", 0.0, "", "")
            .unwrap();
        assert_eq!(candle.price(), 0.0);
    }

    #[test]
    fn test_invalid_price() {
        let factory = Factory::default();
        for price in [-0.01, f64::NAN, f64::INFINITY] {
            let err = factory.create_candle("Ocean Breeze", "", price, "", "").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::OutOfRange);
            assert_eq!(err.field(), "price");
        }
    }
}
