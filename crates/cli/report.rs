use polars::prelude::*;
use std::error::Error;

/// Whether derived tables are printed next to the charts. Tables are never written to disk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputType {
    NONE,
    POLAR,
}

impl OutputType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "none" => Some(OutputType::NONE),
            "polar" => Some(OutputType::POLAR),
            _ => None,
        }
    }
}

pub trait Output {
    fn output(&self) -> Result<(), Box<dyn Error>>;
}

struct PolarOutput {
    name: String,
    df: DataFrame,
}

impl Output for PolarOutput {
    fn output(&self) -> Result<(), Box<dyn Error>> {
        println!("{}\n{}", self.name, self.df);
        Ok(())
    }
}

/// `None` when reporting is switched off.
pub fn get_output(output_type: OutputType, name: &str, df: &DataFrame) -> Option<Box<dyn Output>> {
    match output_type {
        OutputType::NONE => None,
        OutputType::POLAR => Some(Box::new(PolarOutput {
            name: name.to_string(),
            df: df.clone(),
        })),
    }
}

pub fn report(output_type: OutputType, name: &str, df: &DataFrame) -> Result<(), Box<dyn Error>> {
    match get_output(output_type, name, df) {
        Some(out) => out.output(),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals() -> DataFrame {
        df!("type" => ["MOVIE", "SHOW"], "count" => [2u64, 1]).unwrap()
    }

    #[test]
    fn test_output_type() {
        assert_eq!(OutputType::from_str("polar"), Some(OutputType::POLAR));
        assert_eq!(OutputType::from_str("none"), Some(OutputType::NONE));
        assert_eq!(OutputType::from_str("csv"), None);
        assert_eq!(OutputType::from_str("json"), None);
    }

    #[test]
    fn test_polar_report() {
        assert!(get_output(OutputType::POLAR, "type_totals", &totals()).is_some());
        report(OutputType::POLAR, "type_totals", &totals()).unwrap();
    }

    #[test]
    fn test_no_report() {
        assert!(get_output(OutputType::NONE, "type_totals", &totals()).is_none());
        report(OutputType::NONE, "type_totals", &totals()).unwrap();
    }
}
