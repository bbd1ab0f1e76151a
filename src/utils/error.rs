use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExerciseError {
    #[error("Invalid input for {field} ({value}): {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown zone key: {key}")]
    UnknownZone { key: i64 },

    #[error("{field} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ExerciseError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ExerciseError::InvalidInput { .. }
            | ExerciseError::UnknownZone { .. }
            | ExerciseError::OutOfRange { .. } => ErrorCategory::Input,
            ExerciseError::TomlError(_)
            | ExerciseError::ConfigError { .. }
            | ExerciseError::ConfigValidationError { .. }
            | ExerciseError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ExerciseError::IoError(_)
            | ExerciseError::SerializationError(_)
            | ExerciseError::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 依嚴重程度決定的程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    /// 給終端使用者看的訊息 (西班牙文輸出)
    pub fn user_friendly_message(&self) -> String {
        match self {
            ExerciseError::InvalidInput { field, value, .. } => {
                format!("Entrada inválida en '{}': {}", field, value)
            }
            ExerciseError::UnknownZone { key } => format!("Zona desconocida: {}", key),
            ExerciseError::OutOfRange {
                field,
                value,
                min,
                max,
            } => format!(
                "'{}' = {} está fuera del rango [{}, {}]",
                field, value, min, max
            ),
            ExerciseError::IoError(e) => format!("Error de archivo: {}", e),
            ExerciseError::TomlError(_)
            | ExerciseError::ConfigError { .. }
            | ExerciseError::ConfigValidationError { .. }
            | ExerciseError::InvalidConfigValueError { .. } => {
                format!("Configuración inválida: {}", self)
            }
            ExerciseError::SerializationError(_) | ExerciseError::CsvError(_) => {
                format!("No se pudo generar la salida: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ExerciseError::InvalidInput { .. } => "Use un número de minutos mayor o igual a 0",
            ExerciseError::UnknownZone { .. } => {
                "Use una de las claves registradas: 12, 15, 18, 19, 23, 25, 29"
            }
            ExerciseError::OutOfRange { .. } => "Use un valor dentro del rango indicado",
            ExerciseError::IoError(_) => "Verifique que el archivo exista y sea legible",
            ExerciseError::TomlError(_)
            | ExerciseError::ConfigError { .. }
            | ExerciseError::ConfigValidationError { .. }
            | ExerciseError::InvalidConfigValueError { .. } => {
                "Revise el archivo de configuración TOML"
            }
            ExerciseError::SerializationError(_) | ExerciseError::CsvError(_) => {
                "Intente con otro formato de salida (text, json, csv)"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ExerciseError>;
