use crate::auth::JwtConfig;
use crate::core::{Result, ServerError};

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3001 | HTTP 服务端口 |
/// | DATABASE_PATH | data/admin.db | SQLite 数据库文件 |
/// | ENVIRONMENT | development | 运行环境 |
/// | CLIENT_URL | http://localhost:3000 | 允许跨域的前端地址 |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_DIR | - | 日志目录，设置后按天滚动写文件 |
/// | LOG_JSON | false | JSON 格式日志 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
/// | ADMIN_INITIAL_PASSWORD | - | 空库时创建 admin 账号的初始密码 |
/// | JWT_SECRET | 开发环境随机 | 至少 32 字符，生产环境必填 |
/// | JWT_EXPIRATION_MINUTES | 480 | 令牌有效期 |
/// | JWT_ISSUER / JWT_AUDIENCE | admin-server / admin-console | 令牌签发者 / 受众 |
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub database_path: String,
    /// development | staging | production
    pub environment: String,
    pub client_url: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub log_json: bool,
    pub request_timeout_ms: u64,
    pub admin_initial_password: Option<String>,
    pub jwt: JwtConfig,
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ServerError::Config(format!("{key} has an invalid value: '{raw}'"))),
        Err(_) => Ok(default),
    }
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let is_development = environment == "development";

        Ok(Self {
            http_port: env_parse("HTTP_PORT", 3001)?,
            database_path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "data/admin.db".into()),
            client_url: std::env::var("CLIENT_URL").unwrap_or_else(|_| "http://localhost:3000".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: env_opt("LOG_DIR"),
            log_json: env_parse("LOG_JSON", false)?,
            request_timeout_ms: env_parse("REQUEST_TIMEOUT_MS", 30_000)?,
            admin_initial_password: env_opt("ADMIN_INITIAL_PASSWORD"),
            jwt: JwtConfig::from_env(!is_development)?,
            environment,
        })
    }

    /// In-memory friendly config for tests
    pub fn for_tests(jwt_secret: &str) -> Self {
        Self {
            http_port: 0,
            database_path: ":memory:".into(),
            environment: "test".into(),
            client_url: "http://localhost:3000".into(),
            log_level: "debug".into(),
            log_dir: None,
            log_json: false,
            request_timeout_ms: 30_000,
            admin_initial_password: None,
            jwt: JwtConfig::with_secret(jwt_secret),
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}
