//! Application State
//!
//! 只读：分词器与默认设置在启动时确定，请求之间不共享可变状态

use crate::application::{
    AnnotateTextHandler, GetReaderSettingsHandler, ReaderSettings, SharedWordSegmenter,
};

/// 应用状态
pub struct AppState {
    // ========== Query Handlers ==========
    pub annotate_text_handler: AnnotateTextHandler,
    pub get_settings_handler: GetReaderSettingsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(segmenter: SharedWordSegmenter, settings: ReaderSettings) -> Self {
        Self {
            annotate_text_handler: AnnotateTextHandler::new(segmenter, settings.clone()),
            get_settings_handler: GetReaderSettingsHandler::new(settings),
        }
    }
}
