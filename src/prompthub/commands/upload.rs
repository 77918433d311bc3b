use crate::commands::{CmdMessage, CmdResult};
use crate::error::{HubError, Result};
use crate::model::{ToolType, User, Work};
use crate::prompt::parse_tags;
use crate::seed::sample_users;
use crate::store::DataStore;

pub const MAX_IMAGES: usize = 9;

/// A submission as the user typed it, before validation.
#[derive(Debug, Clone, Default)]
pub struct WorkDraft {
    pub title: String,
    pub images: Vec<String>,
    pub tool: Option<ToolType>,
    pub positive_prompt: String,
    pub negative_prompt: Option<String>,
    /// Comma-separated, e.g. `"city, night, sci-fi"`
    pub tags: String,
}

impl WorkDraft {
    /// Checks fields in form order and reports the first problem.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(HubError::Validation("Title cannot be empty".into()));
        }
        if self.images.is_empty() {
            return Err(HubError::Validation("At least one image is required".into()));
        }
        if self.images.len() > MAX_IMAGES {
            return Err(HubError::Validation(format!(
                "At most {} images can be uploaded",
                MAX_IMAGES
            )));
        }
        if let Some(pos) = self.images.iter().position(|i| i.trim().is_empty()) {
            return Err(HubError::Validation(format!(
                "Image {} cannot be blank",
                pos + 1
            )));
        }
        if self.tool.is_none() {
            return Err(HubError::Validation("A generation tool must be chosen".into()));
        }
        if self.positive_prompt.trim().is_empty() {
            return Err(HubError::Validation("Positive prompt cannot be empty".into()));
        }
        Ok(())
    }

    /// Validates and turns the draft into a new work by `author`.
    pub fn into_work(self, author: User) -> Result<Work> {
        self.validate()?;
        let tool = self
            .tool
            .ok_or_else(|| HubError::Validation("A generation tool must be chosen".into()))?;

        let mut work = Work::new(
            self.title.trim().to_string(),
            self.images.iter().map(|i| i.trim().to_string()).collect(),
            tool,
            self.positive_prompt.trim().to_string(),
            author,
        );
        work.negative_prompt = self
            .negative_prompt
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());
        work.tags = parse_tags(&self.tags);
        Ok(work)
    }
}

/// Resolves the viewer id to a user: someone already in the gallery, a sample user, or a
/// bare user named after the id.
pub fn resolve_author<S: DataStore>(store: &S, viewer: &str) -> Result<User> {
    if let Some(work) = store.list_works()?.into_iter().find(|w| w.author.id == viewer) {
        return Ok(work.author);
    }
    Ok(sample_users()
        .into_iter()
        .find(|u| u.id == viewer)
        .unwrap_or_else(|| User::new(viewer, viewer, "")))
}

pub fn run<S: DataStore>(store: &mut S, draft: WorkDraft, viewer: &str) -> Result<CmdResult> {
    let author = resolve_author(store, viewer)?;
    let work = draft.into_work(author)?;
    store.save_work(&work)?;
    tracing::info!(id = %work.id, tool = %work.tool, "published work");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Published {} ({})",
        work.title, work.id
    )));
    Ok(result.with_affected_works(vec![work]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn valid_draft() -> WorkDraft {
        WorkDraft {
            title: "  Lantern Festival ".into(),
            images: vec!["lantern.png".into()],
            tool: Some(ToolType::Flux),
            positive_prompt: "lanterns, night sky, crowd".into(),
            negative_prompt: Some("   ".into()),
            tags: "festival, , night".into(),
        }
    }

    fn validation_message(draft: WorkDraft) -> String {
        match draft.validate() {
            Err(HubError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn accepts_valid_draft() {
        assert!(valid_draft().validate().is_ok());
    }

    #[test]
    fn rejects_blank_title() {
        let draft = WorkDraft {
            title: "   ".into(),
            ..valid_draft()
        };
        assert!(validation_message(draft).contains("Title"));
    }

    #[test]
    fn rejects_missing_and_excess_images() {
        let none = WorkDraft {
            images: vec![],
            ..valid_draft()
        };
        assert!(validation_message(none).contains("At least one image"));

        let too_many = WorkDraft {
            images: (0..10).map(|i| format!("{i}.png")).collect(),
            ..valid_draft()
        };
        assert!(validation_message(too_many).contains("At most 9"));
    }

    #[test]
    fn rejects_blank_image_reference() {
        let draft = WorkDraft {
            images: vec!["lantern.png".into(), "  ".into()],
            ..valid_draft()
        };
        assert_eq!(validation_message(draft), "Image 2 cannot be blank");

        let mut store = StoreFixture::new().store;
        let blank_only = WorkDraft {
            images: vec![" ".into()],
            ..valid_draft()
        };
        assert!(run(&mut store, blank_only, "user-001").is_err());
        assert!(store.list_works().unwrap().is_empty());
    }

    #[test]
    fn rejects_missing_tool_and_prompt() {
        let no_tool = WorkDraft {
            tool: None,
            ..valid_draft()
        };
        assert!(validation_message(no_tool).contains("tool"));

        let no_prompt = WorkDraft {
            positive_prompt: "\n".into(),
            ..valid_draft()
        };
        assert!(validation_message(no_prompt).contains("Positive prompt"));
    }

    #[test]
    fn title_is_checked_before_images() {
        let draft = WorkDraft {
            title: String::new(),
            images: vec![],
            ..valid_draft()
        };
        assert!(validation_message(draft).contains("Title"));
    }

    #[test]
    fn into_work_normalizes_fields() {
        let author = User::new("user-009", "Tester", "");
        let work = valid_draft().into_work(author).unwrap();
        assert_eq!(work.title, "Lantern Festival");
        assert_eq!(work.images, vec!["lantern.png"]);
        assert_eq!(work.negative_prompt, None);
        assert_eq!(work.tags, vec!["festival", "night"]);
        assert_eq!(work.likes, 0);
        assert!(!work.is_liked);
    }

    #[test]
    fn run_appends_with_viewer_as_author() {
        let mut store = StoreFixture::new().with_samples().store;
        let result = run(&mut store, valid_draft(), "user-003").unwrap();

        let works = store.list_works().unwrap();
        assert_eq!(works.len(), 13);
        assert_eq!(works[12].id, result.affected_works[0].id);
        assert_eq!(works[12].author.name, "Zhang Wei");
    }

    #[test]
    fn unknown_viewer_becomes_bare_author() {
        let store = StoreFixture::new().store;
        let author = resolve_author(&store, "guest").unwrap();
        assert_eq!(author.id, "guest");
        assert_eq!(author.department, None);
    }

    #[test]
    fn invalid_draft_is_not_saved() {
        let mut store = StoreFixture::new().store;
        let draft = WorkDraft {
            tool: None,
            ..valid_draft()
        };
        assert!(run(&mut store, draft, "user-001").is_err());
        assert!(store.list_works().unwrap().is_empty());
    }
}
