use crate::core::pricing::zone;
use crate::core::sequences::{FIZZBUZZ_MAX, FIZZBUZZ_MIN};
use crate::core::text::Normalization;
use crate::utils::error::{ExerciseError, Result};
use crate::utils::validation::{
    validate_non_negative, validate_one_of, validate_path, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const OUTPUT_FORMATS: [&str; 3] = ["text", "json", "csv"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub fibonacci: FibonacciConfig,
    pub primes: PrimesConfig,
    pub palindromes: PalindromesConfig,
    pub even_sum: EvenSumConfig,
    pub call_cost: CallCostConfig,
    pub fizzbuzz: FizzBuzzConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FibonacciConfig {
    pub terms: i64,
}

impl Default for FibonacciConfig {
    fn default() -> Self {
        Self { terms: 7 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimesConfig {
    pub values: Vec<i64>,
}

impl Default for PrimesConfig {
    fn default() -> Self {
        Self {
            values: vec![1, 2, 3, 4, 17, 18, 19, 20],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PalindromesConfig {
    pub texts: Vec<String>,
    pub normalization: Normalization,
}

impl Default for PalindromesConfig {
    fn default() -> Self {
        Self {
            texts: vec![
                "reconocer".to_string(),
                "Anita lava la tina".to_string(),
                "No es palindromo".to_string(),
            ],
            normalization: Normalization::Unicode,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvenSumConfig {
    pub numbers: Vec<i64>,
}

impl Default for EvenSumConfig {
    fn default() -> Self {
        Self {
            numbers: vec![1, 2, 3, 4, 5, 6],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSpec {
    pub zone: i64,
    pub minutes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CallCostConfig {
    pub calls: Vec<CallSpec>,
}

impl Default for CallCostConfig {
    fn default() -> Self {
        Self {
            calls: vec![
                CallSpec {
                    zone: 12,
                    minutes: 25,
                },
                CallSpec {
                    zone: 19,
                    minutes: 45,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FizzBuzzConfig {
    pub n: i64,
}

impl Default for FizzBuzzConfig {
    fn default() -> Self {
        Self { n: 15 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
        }
    }
}

impl DemoConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        validate_path("config", &path.as_ref().to_string_lossy())?;
        let content = std::fs::read_to_string(&path).map_err(ExerciseError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${FIZZBUZZ_N})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ExerciseError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_range("fizzbuzz.n", self.fizzbuzz.n, FIZZBUZZ_MIN, FIZZBUZZ_MAX)?;

        for call in &self.call_cost.calls {
            validate_non_negative("call_cost.calls.minutes", call.minutes)?;
            if zone(call.zone).is_none() {
                return Err(ExerciseError::InvalidConfigValueError {
                    field: "call_cost.calls.zone".to_string(),
                    value: call.zone.to_string(),
                    reason: "Unknown zone key".to_string(),
                });
            }
        }

        validate_one_of("output.format", &self.output.format, &OUTPUT_FORMATS)?;

        Ok(())
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
