//! Corpus Commands

/// 加载经文数据命令（启动时执行一次）
#[derive(Debug, Clone, Default)]
pub struct LoadCorpus;
