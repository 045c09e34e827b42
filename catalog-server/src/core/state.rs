use crate::core::{Config, Result};
use crate::db::DbService;
use crate::services::CatalogService;

/// 服务器状态 - 每个请求克隆一份
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | DbService | SurrealDB 句柄 + 插入序列 |
///
/// Repositories are built per request from `db`; they hold nothing else.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
}

impl ServerState {
    /// 连接数据库并在集合为空时写入默认数据
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.validate()?;

        let db = DbService::connect(&config.database_url, &config.db_namespace, &config.db_name)
            .await?;

        let report = CatalogService::new(db.clone()).seed_if_empty().await?;
        if report.properties == 0 && report.lots == 0 {
            tracing::info!("Existing catalog found, seeding skipped");
        }

        Ok(Self {
            config: config.clone(),
            db,
        })
    }

    pub fn catalog(&self) -> CatalogService {
        CatalogService::new(self.db.clone())
    }
}
