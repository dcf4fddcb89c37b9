use serde::{Deserialize, Serialize};

use crate::NumericError;

/// 0 °C in Kelvin.
pub const ZERO_C_IN_K: f64 = 273.15;
/// Reference temperature of the nearest neighbor parameters (37 °C), in Kelvin.
pub const DEFAULT_TEMPERATURE: f64 = 37.0 + ZERO_C_IN_K;
/// g/mol
pub const WATER_MOLAR_MASS: f64 = 18.0152;

/// Admissible sodium molarity [mol/L] for [`dna_salt_correction`].
pub const SODIUM_BOUNDS: (f64, f64) = (0.05, 1.1);
/// Admissible magnesium molarity [mol/L] for [`dna_salt_correction`].
pub const MAGNESIUM_BOUNDS: (f64, f64) = (0.0, 0.2);

pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + ZERO_C_IN_K
}

/// Molarity of pure water [mol/L] at temperature `t` [K].
///
/// Density fit of Tanaka M., Girard G. et al., Metrologia 38, 301-309 (2001).
pub fn water_molarity(t: f64) -> f64 {
    const A1: f64 = -3.983035 - ZERO_C_IN_K;
    const A2: f64 = 301.797 - ZERO_C_IN_K;
    const A3: f64 = 522528.9;
    const A4: f64 = 69.34881 - ZERO_C_IN_K;
    const A5: f64 = 999.974950;
    A5 * (1. - (t + A1) * (t + A1) * (t + A2) / A3 / (t + A4)) / WATER_MOLAR_MASS
}

fn require_at_least(argument: &'static str, value: f64, bound: f64) -> Result<(), NumericError> {
    if value >= bound {
        Ok(())
    } else {
        Err(NumericError::RangeViolation { argument, relation: ">=", bound, value })
    }
}

fn require_at_most(argument: &'static str, value: f64, bound: f64) -> Result<(), NumericError> {
    if value <= bound {
        Ok(())
    } else {
        Err(NumericError::RangeViolation { argument, relation: "<=", bound, value })
    }
}

fn check_salt_bounds(na: f64, mg: f64) -> Result<(), NumericError> {
    require_at_least("na", na, SODIUM_BOUNDS.0)?;
    require_at_most("na", na, SODIUM_BOUNDS.1)?;
    require_at_least("mg", mg, MAGNESIUM_BOUNDS.0)?;
    require_at_most("mg", mg, MAGNESIUM_BOUNDS.1)?;
    Ok(())
}

/// Salt correction for DNA duplex free energies at temperature `t` [K],
/// sodium molarity `na` and magnesium molarity `mg` [mol/L].
///
/// With `long_helix`, magnesium is ignored (not cited why; kept for
/// consistency with Mfold). There is no RNA counterpart, since no
/// parameters are available.
///
/// Fails with [`NumericError::RangeViolation`] unless
/// `0.05 <= na <= 1.1` and `0 <= mg <= 0.2`.
pub fn dna_salt_correction(t: f64, na: f64, mg: f64, long_helix: bool) -> Result<f64, NumericError> {
    check_salt_bounds(na, mg)?;
    if long_helix {
        return Ok(-(0.2 + 0.175 * na.ln()) * t / DEFAULT_TEMPERATURE);
    }
    Ok(-0.114 * (na + 3.3 * mg.sqrt()).ln() * t / DEFAULT_TEMPERATURE)
}

/// Solution conditions for DNA free energy evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SaltConditions {
    /// Kelvin
    pub temperature: f64,
    /// mol/L
    pub sodium: f64,
    /// mol/L
    pub magnesium: f64,
    pub long_helix: bool,
}

impl Default for SaltConditions {
    fn default() -> Self {
        SaltConditions {
            temperature: DEFAULT_TEMPERATURE,
            sodium: 1.0,
            magnesium: 0.0,
            long_helix: false,
        }
    }
}

impl SaltConditions {
    pub fn new(temperature: f64, sodium: f64, magnesium: f64, long_helix: bool) -> Result<Self, NumericError> {
        let conditions = SaltConditions { temperature, sodium, magnesium, long_helix };
        conditions.validate()?;
        Ok(conditions)
    }

    pub fn validate(&self) -> Result<(), NumericError> {
        check_salt_bounds(self.sodium, self.magnesium)
    }

    pub fn correction(&self) -> Result<f64, NumericError> {
        dna_salt_correction(self.temperature, self.sodium, self.magnesium, self.long_helix)
    }

    pub fn water_molarity(&self) -> f64 {
        water_molarity(self.temperature)
    }
}
