use crate::services::codegen::FileContext;
use crate::services::settings::Settings;

#[derive(Debug, Clone)]
pub enum Effect {
    /// 请求外部运行时发起一次代码生成
    Generate {
        prompt: String,
        context: Option<FileContext>,
    },
    /// 请求外部运行时把设置写盘
    SaveSettings(Settings),
}
