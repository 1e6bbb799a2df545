use serde::{Deserialize, Serialize};

/// Цена платного контента (секция "Pricing" в формах)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    pub price: f64,
    #[serde(default)]
    pub discount_price: Option<f64>,
}

impl Pricing {
    pub fn free() -> Self {
        Self::default()
    }

    pub fn is_free(&self) -> bool {
        self.effective_price() == 0.0
    }

    /// Цена к оплате с учётом скидки
    pub fn effective_price(&self) -> f64 {
        self.discount_price.unwrap_or(self.price)
    }

    /// Скидка в процентах, округлённая вниз
    pub fn discount_percent(&self) -> Option<u32> {
        match self.discount_price {
            Some(d) if self.price > 0.0 && d < self.price => {
                Some((((self.price - d) / self.price) * 100.0).floor() as u32)
            }
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err("Price must be a non-negative number".into());
        }
        if let Some(d) = self.discount_price {
            if !d.is_finite() || d < 0.0 {
                return Err("Discount price must be a non-negative number".into());
            }
            if d > self.price {
                return Err("Discount price must not exceed the price".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_cannot_exceed_price() {
        let p = Pricing {
            price: 499.0,
            discount_price: Some(599.0),
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_effective_price_and_percent() {
        let p = Pricing {
            price: 1000.0,
            discount_price: Some(749.0),
        };
        assert!(p.validate().is_ok());
        assert_eq!(p.effective_price(), 749.0);
        assert_eq!(p.discount_percent(), Some(25));

        let no_discount = Pricing {
            price: 1000.0,
            discount_price: None,
        };
        assert_eq!(no_discount.discount_percent(), None);
        assert!(!no_discount.is_free());
        assert!(Pricing::free().is_free());
    }

    #[test]
    fn test_negative_and_nan_rejected() {
        assert!(Pricing { price: -1.0, discount_price: None }.validate().is_err());
        assert!(Pricing { price: f64::NAN, discount_price: None }.validate().is_err());
        assert!(Pricing { price: 10.0, discount_price: Some(-2.0) }.validate().is_err());
    }
}
