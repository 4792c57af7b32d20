use clap::Parser;

/// 崩溃上报接收服务
#[derive(Parser, Debug)]
#[command(name = "crash-reporter", version, about)]
pub struct Args {
    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<String>,

    /// SQLite 数据库路径（覆盖配置文件中的 databasePath）
    #[arg(long)]
    pub database: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let args = Args::parse_from(["crash-reporter", "-c", "prod.json", "--database", "crash.db"]);
        assert_eq!(args.config.as_deref(), Some("prod.json"));
        assert_eq!(args.database.as_deref(), Some("crash.db"));

        let args = Args::parse_from(["crash-reporter"]);
        assert!(args.config.is_none());
        assert!(args.database.is_none());
    }
}
