/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use approx::{assert_abs_diff_eq, assert_relative_eq};

use measure::{Factor, Unit, UnitError};

#[test]
fn transformed_units() {
    let m = Unit::Fundamental;
    let km = m.scale_multiply(1000.0);
    let cm = m.scale_divide(100.0);

    let cm_to_km = cm.converter_to(&km);
    assert_abs_diff_eq!(cm_to_km.convert(3.0), 0.00003, epsilon = 1e-15);
    assert_abs_diff_eq!(
        cm_to_km.inverse().convert(0.00003),
        3.0,
        epsilon = 1e-10
    );
}

#[test]
fn derived_units() {
    let m = Unit::Fundamental;
    let km = m.scale_multiply(1000.0);
    let cm = m.scale_divide(100.0);
    let km2 = Unit::derived([km.factor(2)]);
    let cm2 = Unit::derived([cm.factor(2)]);

    let km2_to_cm2 = km2.converter_to(&cm2);
    assert_relative_eq!(km2_to_cm2.convert(3.0), 3e10, max_relative = 1e-12);
    assert_relative_eq!(
        km2_to_cm2.inverse().convert(3e10),
        3.0,
        max_relative = 1e-12
    );
}

#[test]
fn combined_dimensions() {
    let m = Unit::Fundamental;
    let kg = Unit::Fundamental;
    let g = kg.scale_divide(1000.0);
    let ton = kg.scale_multiply(1000.0);
    let km = m.scale_multiply(1000.0);
    let cm = m.scale_divide(100.0);

    let g_per_m2 = Unit::derived([Factor::from(&g), m.factor(-2)]);
    let ton_per_km2 = Unit::derived([Factor::from(&ton), km.factor(-2)]);
    let ton_per_cm2 = Unit::derived([Factor::from(&ton), cm.factor(-2)]);

    let to_ton_per_km2 = g_per_m2.converter_to(&ton_per_km2);
    assert_relative_eq!(to_ton_per_km2.convert(1.0), 1.0, max_relative = 1e-12);
    assert_relative_eq!(
        to_ton_per_km2.inverse().convert(3.0),
        3.0,
        max_relative = 1e-12
    );

    let to_ton_per_cm2 = g_per_m2.converter_to(&ton_per_cm2);
    assert_relative_eq!(
        to_ton_per_cm2.convert(1.0),
        1e-10,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        to_ton_per_cm2.convert(3.0),
        3e-10,
        max_relative = 1e-12
    );
    // The scale works out bit-exactly, offsets stay at (signed) zero.
    assert_eq!(to_ton_per_cm2.scale(), 1e-10);
    assert_eq!(to_ton_per_cm2.offset(), 0.0);
    assert_eq!(to_ton_per_cm2.inverse().offset(), -0.0);
    assert_relative_eq!(
        to_ton_per_cm2.inverse().convert(3e-10),
        3.0,
        max_relative = 1e-12
    );
}

#[test]
fn temperatures() {
    let k = Unit::Fundamental;
    let c = k.shift(273.15);

    let k_to_c = k.converter_to(&c);
    let c_to_k = k_to_c.inverse();
    assert_abs_diff_eq!(k_to_c.convert(0.0), -273.15, epsilon = 1e-10);
    assert_abs_diff_eq!(c_to_k.convert(0.0), 273.15, epsilon = 1e-10);
    assert_abs_diff_eq!(k_to_c.convert(1.0), -272.15, epsilon = 1e-10);
    assert_abs_diff_eq!(c_to_k.convert(1.0), 274.15, epsilon = 1e-10);
    assert_abs_diff_eq!(k_to_c.convert(2.0), -271.15, epsilon = 1e-10);
    assert_abs_diff_eq!(c_to_k.convert(2.0), 275.15, epsilon = 1e-10);

    // Inside a compound unit the scale origin no longer applies: a
    // kelvin per metre is a degree Celsius per metre.
    let m = Unit::Fundamental;
    let c_per_m = Unit::derived([Factor::from(&c), m.factor(-1)]);
    let k_per_m = Unit::derived([Factor::from(&k), m.factor(-1)]);

    let k_per_m_to_c_per_m = k_per_m.converter_to(&c_per_m);
    assert_abs_diff_eq!(k_per_m_to_c_per_m.convert(3.0), 3.0, epsilon = 1e-10);
    assert_abs_diff_eq!(
        k_per_m_to_c_per_m.inverse().convert(3.0),
        3.0,
        epsilon = 1e-10
    );
}

#[test]
fn speed() {
    let m = Unit::Fundamental;
    let km = m.scale_multiply(1000.0);
    let s = Unit::Fundamental;
    let h = s.scale_multiply(3600.0);

    let m_per_s = Unit::derived([Factor::from(&m), s.factor(-1)]);
    let km_per_h = Unit::derived([Factor::from(&km), h.factor(-1)]);

    let to_km_per_h = m_per_s.converter_to(&km_per_h);
    assert_abs_diff_eq!(to_km_per_h.convert(100.0), 360.0, epsilon = 1e-10);
    assert_abs_diff_eq!(
        to_km_per_h.inverse().convert(18.0),
        5.0,
        epsilon = 1e-10
    );
}

#[test]
fn fractional_powers() {
    let m = Unit::Fundamental;
    let km = m.scale_multiply(1000.0);
    let km2 = Unit::derived([km.factor(2)]);

    // The square root of a square kilometre converts like a kilometre.
    let side = Unit::derived([Factor::rational(km2, 1, 2)]);
    assert_eq!(side.to_base().scale(), 1000.0);
    assert_abs_diff_eq!(
        side.converter_to(&km).convert(3.0),
        3.0,
        epsilon = 1e-10
    );
    assert_abs_diff_eq!(
        side.converter_to(&m).convert(1.0),
        1000.0,
        epsilon = 1e-10
    );
}

#[test]
fn try_rational_rejects_a_zero_denominator() {
    assert_eq!(
        Factor::try_rational(Unit::Fundamental, 3, 0),
        Err(UnitError::ZeroDenominator(3))
    );
    assert_eq!(
        Factor::try_rational(Unit::Fundamental, 1, 2),
        Ok(Factor::rational(Unit::Fundamental, 1, 2))
    );
    assert_eq!(Factor::rational(Unit::Fundamental, 1, 2).power(), 0.5);
}

#[test]
fn exponent_arithmetic_saturates() {
    let m = Unit::Fundamental;
    assert_eq!(m.factor(-3).recip().numerator(), 3);
    assert_eq!(m.factor(2).powi(3).numerator(), 6);
    assert_eq!(m.factor(i32::MIN).recip().numerator(), i32::MAX);
    assert_eq!(m.factor(2).powi(i32::MAX).numerator(), i32::MAX);
}

#[test]
fn chained_transformations() {
    let k = Unit::Fundamental;
    let c = k.shift(273.15);
    let f = c.scale_multiply(5.0 / 9.0).shift(-32.0);

    let f_to_c = f.converter_to(&c);
    assert_abs_diff_eq!(f_to_c.convert(32.0), 0.0, epsilon = 1e-10);
    assert_abs_diff_eq!(f_to_c.convert(212.0), 100.0, epsilon = 1e-10);
    assert_abs_diff_eq!(
        f_to_c.inverse().convert(100.0),
        212.0,
        epsilon = 1e-10
    );

    let f_to_k = f.converter_to(&k);
    assert_abs_diff_eq!(f_to_k.convert(32.0), 273.15, epsilon = 1e-10);
}

#[test]
fn nested_derived_units() {
    let m = Unit::Fundamental;
    let s = Unit::Fundamental;
    let m_per_s = Unit::derived([Factor::from(&m), s.factor(-1)]);
    let km = m.scale_multiply(1000.0);
    let h = s.scale_multiply(3600.0);
    let km_per_h = Unit::derived([Factor::from(&km), h.factor(-1)]);

    // Acceleration built on top of the speed units themselves.
    let m_per_s2 = Unit::derived([Factor::from(&m_per_s), s.factor(-1)]);
    let km_per_h_per_s = Unit::derived([Factor::from(&km_per_h), s.factor(-1)]);

    let conv = m_per_s2.converter_to(&km_per_h_per_s);
    assert_abs_diff_eq!(conv.convert(1.0), 3.6, epsilon = 1e-10);
}

#[test]
fn unit_convert_shorthand() {
    let m = Unit::Fundamental;
    let km = m.scale_multiply(1000.0);
    assert_abs_diff_eq!(km.convert(&m, 3.0), 3000.0);
    assert_abs_diff_eq!(m.convert(&km, 250.0), 0.25, epsilon = 1e-10);
}
