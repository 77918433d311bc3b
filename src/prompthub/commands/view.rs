use crate::commands::CmdResult;
use crate::error::{HubError, Result};
use crate::model::{PromptKind, Work};
use crate::prompt::{segment, PromptSegment};
use crate::store::DataStore;
use crate::tools::{tool_info, ToolInfo};

/// Everything the detail page shows for one work.
#[derive(Debug, Clone)]
pub struct WorkDetail {
    pub work: Work,
    pub tool: &'static ToolInfo,
    pub positive: Vec<PromptSegment>,
    /// Empty when the work has no negative prompt.
    pub negative: Vec<PromptSegment>,
}

impl WorkDetail {
    pub fn from_work(work: Work) -> Self {
        let positive = segment(&work.positive_prompt, PromptKind::Positive);
        let negative = match work.negative_prompt.as_deref() {
            Some(prompt) => segment(prompt, PromptKind::Negative),
            None => Vec::new(),
        };
        Self {
            tool: tool_info(work.tool),
            work,
            positive,
            negative,
        }
    }

    pub fn segments(&self, kind: PromptKind) -> &[PromptSegment] {
        match kind {
            PromptKind::Positive => &self.positive,
            PromptKind::Negative => &self.negative,
        }
    }

    pub fn find_segment(&self, segment_id: &str) -> Result<&PromptSegment> {
        self.positive
            .iter()
            .chain(self.negative.iter())
            .find(|s| s.id == segment_id)
            .ok_or_else(|| {
                HubError::InvalidArgument(format!(
                    "No segment {} in {}",
                    segment_id, self.work.id
                ))
            })
    }

    /// The full prompt text of one kind, as the author wrote it.
    pub fn full_prompt(&self, kind: PromptKind) -> Result<&str> {
        self.work.prompt(kind).ok_or_else(|| {
            HubError::InvalidArgument(format!("{} has no {} prompt", self.work.id, kind))
        })
    }
}

pub fn run<S: DataStore>(store: &S, id: &str) -> Result<CmdResult> {
    let work = store.get_work(id)?;
    Ok(CmdResult::default().with_detail(WorkDetail::from_work(work)))
}
