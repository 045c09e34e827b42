use shared::AppError;

/// 服务配置 - catalog-server 的所有配置项
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATABASE_URL | rocksdb://data/catalog | SurrealDB 连接串 (`mem://` 用于测试) |
/// | DB_NAMESPACE | catalog | SurrealDB namespace |
/// | DB_NAME | dialibatou | SurrealDB database |
/// | HTTP_PORT | 8001 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | `RUST_LOG` 未设置时的日志级别 |
/// | LOG_DIR | (无) | 日志目录，存在时按天滚动写文件 |
/// | SERVICE_NAME | DIALIBATOU BTP API | 健康检查返回的服务名 |
///
/// # 示例
///
/// ```ignore
/// DATABASE_URL=mem:// HTTP_PORT=9000 cargo run -p catalog-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SurrealDB connection string
    pub database_url: String,
    pub db_namespace: String,
    pub db_name: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// Reported by `/api/health`
    pub service_name: String,
}

const ENVIRONMENTS: [&str; 3] = ["development", "staging", "production"];

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "rocksdb://data/catalog".into(),
            db_namespace: "catalog".into(),
            db_name: "dialibatou".into(),
            http_port: 8001,
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
            service_name: "DIALIBATOU BTP API".into(),
        }
    }
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 未设置的变量使用默认值；`HTTP_PORT` 无法解析或 `ENVIRONMENT`
    /// 不是已知取值时返回配置错误。
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let http_port = match std::env::var("HTTP_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| AppError::config(format!("HTTP_PORT is not a valid port: {raw}")))?,
            Err(_) => defaults.http_port,
        };

        let config = Self {
            database_url: std::env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            db_namespace: std::env::var("DB_NAMESPACE").unwrap_or(defaults.db_namespace),
            db_name: std::env::var("DB_NAME").unwrap_or(defaults.db_name),
            http_port,
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            service_name: std::env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
        };

        config.validate()?;
        Ok(config)
    }

    /// In-memory store, everything else at defaults
    pub fn in_memory() -> Self {
        Self {
            database_url: "mem://".into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !ENVIRONMENTS.contains(&self.environment.as_str()) {
            return Err(AppError::config(format!(
                "ENVIRONMENT must be one of {}, got '{}'",
                ENVIRONMENTS.join(" | "),
                self.environment
            )));
        }
        if self.database_url.trim().is_empty() {
            return Err(AppError::config("DATABASE_URL must not be empty"));
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
