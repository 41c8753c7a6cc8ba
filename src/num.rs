use fastnum::{
    UD256, bint,
    decimal::{Context, RoundingMode, UnsignedDecimal},
    udec256,
};

use crate::types::MicroAmount;

/// Decimals of every token listed in [`crate::types::MARKETS`].
pub const MICRO_DECIMALS: u8 = 6;

/// One whole token in micro-units.
pub const MICRO_UNITS: MicroAmount = 1_000_000;

/// Fractional digits of prices below 1, the most a rounded price carries.
pub const MAX_PRICE_SCALE: i16 = 8;

/// Rounding applied to prices: round half to even.
pub const PRICE_ROUNDING: RoundingMode = RoundingMode::HalfEven;

/// Price in pivot terms.
///
/// 256 bits hold the exact product of two `u128` micro-unit amounts.
pub type Price = UD256;

/// Fixed-point to decimal converter.
#[derive(Clone, Copy, Debug, Default)]
pub struct Converter {
    decimals: i32,
}

impl Converter {
    pub fn new(decimals: u8) -> Self {
        Self {
            decimals: decimals as i32,
        }
    }

    /// Converter for on-chain micro-unit amounts.
    pub fn micro() -> Self {
        Self::new(MICRO_DECIMALS)
    }

    /// Returns `None` if the amount does not fit into `N` words.
    pub fn from_unsigned<const N: usize>(&self, value: MicroAmount) -> Option<UnsignedDecimal<N>> {
        let unscaled = bint::UInt::<N>::from_le_slice(&value.to_le_bytes())?;
        Some(UnsignedDecimal::<N>::from_parts(
            unscaled,
            -self.decimals,
            Context::default().with_rounding_mode(PRICE_ROUNDING),
        ))
    }
}

/// Number of decimal places a price is rounded to, depending on its magnitude.
///
/// | Price        | Decimal places |
/// |--------------|----------------|
/// | `< 1`        | 8              |
/// | `[1, 10)`    | 6              |
/// | `>= 10`      | 4              |
pub fn price_scale(value: &Price) -> i16 {
    if *value < udec256!(1) {
        MAX_PRICE_SCALE
    } else if *value < udec256!(10) {
        6
    } else {
        4
    }
}

/// Rounds the price to [`price_scale`] decimal places with [`PRICE_ROUNDING`].
pub fn adjust_rounding(value: Price) -> Price {
    value
        .with_rounding_mode(PRICE_ROUNDING)
        .rescale(price_scale(&value))
}

/// Renders a price rounded to `scale` decimal places in plain notation.
///
/// Trailing fractional zeros are dropped but at least one fractional digit is kept,
/// e.g. `2.5`, `3.0`, `0.00001234`.
pub fn format_price(value: Price, scale: i16) -> String {
    let width = scale.max(0) as usize;
    let digits = value.rescale(scale).digits().to_string();
    let padded = format!("{digits:0>len$}", len = width + 1);
    let (int, frac) = padded.split_at(padded.len() - width);
    let frac = frac.trim_end_matches('0');
    if frac.is_empty() {
        format!("{int}.0")
    } else {
        format!("{int}.{frac}")
    }
}

/// Rounds the price with [`adjust_rounding`] and renders it with [`format_price`].
pub fn display_price(value: Price) -> String {
    format_price(adjust_rounding(value), price_scale(&value))
}

#[cfg(test)]
mod tests {
    use fastnum::{udec64, udec128, udec256};

    use super::*;

    #[test]
    fn test_numeric_converter_from_unsigned() {
        assert_eq!(
            Converter::new(0).from_unsigned::<2>(1234567890),
            Some(udec128!(1234567890))
        );
        assert_eq!(
            Converter::micro().from_unsigned::<2>(1234567890),
            Some(udec128!(1234.56789))
        );
        assert_eq!(
            Converter::micro().from_unsigned::<4>(2500000),
            Some(udec256!(2.5))
        );
        assert_eq!(
            Converter::new(12).from_unsigned::<2>(1234567890),
            Some(udec128!(0.00123456789))
        );
        assert_eq!(
            Converter::micro().from_unsigned::<1>(1234567890),
            Some(udec64!(1234.56789))
        );
        assert_eq!(Converter::micro().from_unsigned::<1>(u128::MAX), None);
        assert_eq!(
            Converter::micro().from_unsigned::<4>(u128::MAX),
            Some(udec256!(340282366920938463463374607431768.211455))
        );
    }

    #[test]
    fn test_price_scale() {
        assert_eq!(price_scale(&udec256!(0)), 8);
        assert_eq!(price_scale(&udec256!(0.99999999)), 8);
        assert_eq!(price_scale(&udec256!(1)), 6);
        assert_eq!(price_scale(&udec256!(9.999)), 6);
        assert_eq!(price_scale(&udec256!(10)), 4);
        assert_eq!(price_scale(&udec256!(123456)), 4);
    }

    #[test]
    fn test_adjust_rounding() {
        assert_eq!(adjust_rounding(udec256!(0.123456789)), udec256!(0.12345679));
        assert_eq!(adjust_rounding(udec256!(1.23456789)), udec256!(1.234568));
        assert_eq!(adjust_rounding(udec256!(12.3456789)), udec256!(12.3457));
        assert_eq!(adjust_rounding(udec256!(2.5)), udec256!(2.5));
        assert_eq!(adjust_rounding(udec256!(0)), udec256!(0));

        // Ties go to the even neighbour
        assert_eq!(adjust_rounding(udec256!(0.123456785)), udec256!(0.12345678));
        assert_eq!(adjust_rounding(udec256!(0.123456775)), udec256!(0.12345678));
        assert_eq!(adjust_rounding(udec256!(12.34565)), udec256!(12.3456));
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(udec256!(2.5), 6), "2.5");
        assert_eq!(format_price(udec256!(3), 6), "3.0");
        assert_eq!(format_price(udec256!(0), 8), "0.0");
        assert_eq!(format_price(udec256!(0.00001234), 8), "0.00001234");
        assert_eq!(format_price(udec256!(0.12345679), 8), "0.12345679");
        assert_eq!(format_price(udec256!(123.4567), 4), "123.4567");
        assert_eq!(format_price(udec256!(1000000), 4), "1000000.0");
    }

    #[test]
    fn test_display_price() {
        assert_eq!(display_price(udec256!(0.123456785)), "0.12345678");
        assert_eq!(display_price(udec256!(9.9999996)), "10.0");
        assert_eq!(display_price(udec256!(12.34567891)), "12.3457");
    }

    #[test]
    fn test_display_large_price() {
        let max = Converter::micro().from_unsigned::<4>(u128::MAX).unwrap();
        assert_eq!(
            display_price(max),
            "340282366920938463463374607431768.2115"
        );
        // Product of two amounts of u128::MAX micro-units is exact
        assert_eq!(
            display_price(max * max),
            "115792089237316195423570985008687907852589419931798687112530834793.0496"
        );

        let big = udec256!(1000000000000000000000000000000000000);
        assert_eq!(
            display_price(big),
            "1000000000000000000000000000000000000.0"
        );
    }

    #[test]
    fn test_rounded_price_decimal_places() {
        for (value, places) in [
            (udec256!(0.987654321987), 8),
            (udec256!(5.987654321987), 6),
            (udec256!(55.987654321987), 4),
        ] {
            let rendered = display_price(value);
            let (_, frac) = rendered.split_once('.').unwrap();
            assert_eq!(frac.len(), places, "{rendered}");
        }
    }
}
