use anyhow::Result;
use hr_extraction_demo::utils::logging;
use hr_extraction_demo::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    let _stats = App::initialize(config).await?.run()?;

    Ok(())
}
