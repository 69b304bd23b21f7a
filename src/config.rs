use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::Result;

#[derive(Clone, Copy, Deserialize, Serialize, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
/// Which loss the trainer optimizes
pub enum LossFunc {
    /// Pairwise logistic loss weighted by the change in DCG
    LambdaMart,
}

impl Default for LossFunc {
    fn default() -> Self {
        LossFunc::LambdaMart
    }
}

#[derive(Clone, Default, Deserialize, Serialize, Debug, PartialEq)]
/// Parameters specific to LambdaMART
pub struct LambdaMartConfig {
    /// Base of the logarithm in the rank discount. Only used when it is
    /// provided and positive; the default is used otherwise
    #[serde(default)]
    pub dcg_base: Option<f64>,
}

#[derive(Clone, Default, Deserialize, Serialize, Debug, PartialEq)]
/// Configuration of the training loss
pub struct LossFuncConfig {
    /// Loss to build
    #[serde(default)]
    pub loss_func: LossFunc,
    /// LambdaMART parameters
    #[serde(default)]
    pub lambdamart_config: LambdaMartConfig,
}

impl LossFuncConfig {
    /// Config for LambdaMART with the given DCG base
    pub fn lambdamart(dcg_base: f64) -> Self {
        LossFuncConfig {
            loss_func: LossFunc::LambdaMart,
            lambdamart_config: LambdaMartConfig {
                dcg_base: Some(dcg_base),
            },
        }
    }

    /// Parses a JSON config
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Reads a JSON config
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads a JSON config from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let f = File::open(path)?;
        Self::from_reader(BufReader::new(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_parse_full() {
        let config = LossFuncConfig::from_json_str(
            r#"{"loss_func": "lambda_mart", "lambdamart_config": {"dcg_base": 3.5}}"#,
        )
        .expect("valid config");
        assert_eq!(config, LossFuncConfig::lambdamart(3.5));
    }

    #[test]
    fn test_parse_defaults() {
        let config = LossFuncConfig::from_json_str("{}").expect("valid config");
        assert_eq!(config.loss_func, LossFunc::LambdaMart);
        assert_eq!(config.lambdamart_config.dcg_base, None);

        let config = LossFuncConfig::from_json_str(r#"{"lambdamart_config": {}}"#)
            .expect("valid config");
        assert_eq!(config.lambdamart_config.dcg_base, None);
    }

    #[test]
    fn test_parse_errors() {
        match LossFuncConfig::from_json_str(r#"{"loss_func": "mse"}"#) {
            Err(Error::Config(_)) => {}
            other => panic!("expected a config error, got {:?}", other),
        }
        match LossFuncConfig::from_file("/nonexistent/loss.json") {
            Err(Error::Io(_)) => {}
            other => panic!("expected an io error, got {:?}", other),
        }
    }
}
