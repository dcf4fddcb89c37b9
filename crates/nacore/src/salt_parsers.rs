use clap::Args;
use log::debug;
use nc_common::NumericError;
use nc_common::SaltConditions;
use nc_common::celsius_to_kelvin;

/// Solution conditions for DNA salt corrections.
#[derive(Debug, Args)]
pub struct SaltArguments {
    /// Temperature in Celsius
    #[arg(short, long, default_value = "37.0")]
    pub temperature: f64,

    /// Sodium concentration in mol/L (0.05 to 1.1)
    #[arg(long, default_value_t = 1.0)]
    pub sodium: f64,

    /// Magnesium concentration in mol/L (0 to 0.2)
    #[arg(long, default_value_t = 0.0)]
    pub magnesium: f64,

    /// Long helix mode (magnesium is ignored)
    #[arg(long)]
    pub long_helix: bool,
}

impl SaltArguments {
    pub fn build_conditions(&self) -> Result<SaltConditions, NumericError> {
        debug!("Temperature: {} °C", self.temperature);
        debug!("Na+: {} M, Mg2+: {} M, long helix: {}",
            self.sodium, self.magnesium, self.long_helix);
        SaltConditions::new(
            celsius_to_kelvin(self.temperature),
            self.sodium,
            self.magnesium,
            self.long_helix,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use nc_common::DEFAULT_TEMPERATURE;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        salt: SaltArguments,
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::try_parse_from(["test"]).unwrap();
        let sc = cli.salt.build_conditions().unwrap();
        assert_eq!(sc, SaltConditions::default());
        assert_eq!(sc.temperature, DEFAULT_TEMPERATURE);
    }

    #[test]
    fn test_custom_conditions() {
        let cli = TestCli::try_parse_from([
            "test", "-t", "25", "--sodium", "0.5", "--magnesium", "0.01", "--long-helix",
        ]).unwrap();
        let sc = cli.salt.build_conditions().unwrap();
        assert!((sc.temperature - 298.15).abs() < 1e-9);
        assert_eq!(sc.sodium, 0.5);
        assert_eq!(sc.magnesium, 0.01);
        assert!(sc.long_helix);
    }

    #[test]
    fn test_invalid_sodium() {
        let cli = TestCli::try_parse_from(["test", "--sodium", "2.0"]).unwrap();
        let err = cli.salt.build_conditions().unwrap_err();
        assert!(matches!(err, NumericError::RangeViolation { argument: "na", .. }));
    }
}
