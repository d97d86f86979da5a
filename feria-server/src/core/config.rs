use std::path::PathBuf;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | ./work_dir | Database and log directory |
/// | HTTP_PORT | 3000 | HTTP port (bound on localhost) |
/// | ENVIRONMENT | development | development / production |
/// | LOG_LEVEL | info | Default tracing filter |
/// | LOG_JSON | true in production | JSON log lines on the console |
/// | DB_FILE | ferias.redb | Store file name inside WORK_DIR |
/// | ORG_NAME | ABA Animal | Shown on the "nosotros" page |
/// | ORG_EMAIL | info@abaanimal.org | Contact e-mail |
/// | ORG_PHONE | (506) 8849-0592 | Contact phone |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/aba HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory (database, logs)
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    /// redb file name, relative to `work_dir`
    pub db_file: String,
    pub org_name: String,
    pub org_email: String,
    pub org_phone: String,
}

impl Config {
    /// Load configuration from the environment, with defaults
    pub fn from_env() -> Self {
        let mut config = Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./work_dir".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: false,
            db_file: std::env::var("DB_FILE").unwrap_or_else(|_| "ferias.redb".into()),
            org_name: std::env::var("ORG_NAME").unwrap_or_else(|_| "ABA Animal".into()),
            org_email: std::env::var("ORG_EMAIL")
                .unwrap_or_else(|_| "info@abaanimal.org".into()),
            org_phone: std::env::var("ORG_PHONE").unwrap_or_else(|_| "(506) 8849-0592".into()),
        };
        config.log_json = std::env::var("LOG_JSON")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(config.is_production());
        config
    }

    /// Override the parts tests care about
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(&self.db_file)
    }

    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }
}
