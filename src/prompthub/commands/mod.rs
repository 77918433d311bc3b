use crate::config::GalleryConfig;
use crate::model::{Platform, Work};
use crate::tools::ToolInfo;

pub mod config;
pub mod delete;
pub mod filter;
pub mod init;
pub mod like;
pub mod list;
pub mod platforms;
pub mod sort;
pub mod space;
pub mod upload;
pub mod view;

pub use view::WorkDetail;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_works: Vec<Work>,
    pub listed_works: Vec<Work>,
    pub detail: Option<WorkDetail>,
    pub platforms: Vec<Platform>,
    pub tools: Vec<&'static ToolInfo>,
    pub config: Option<GalleryConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_works(mut self, works: Vec<Work>) -> Self {
        self.affected_works = works;
        self
    }

    pub fn with_listed_works(mut self, works: Vec<Work>) -> Self {
        self.listed_works = works;
        self
    }

    pub fn with_detail(mut self, detail: WorkDetail) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn with_platforms(mut self, platforms: Vec<Platform>) -> Self {
        self.platforms = platforms;
        self
    }

    pub fn with_tools(mut self, tools: Vec<&'static ToolInfo>) -> Self {
        self.tools = tools;
        self
    }

    pub fn with_config(mut self, config: GalleryConfig) -> Self {
        self.config = Some(config);
        self
    }
}
