use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The generation engine a work was made with.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ToolType {
    Midjourney,
    StableDiffusion,
    DallE,
    Flux,
    Jimeng,
    Doubao,
    Other,
}

/// Which half of a work's prompt a segment came from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PromptKind {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: avatar.into(),
            department: None,
        }
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    pub id: String,
    pub title: String,
    pub images: Vec<String>,
    pub tool: ToolType,
    pub positive_prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: User,
    pub created_at: DateTime<Utc>,
    pub likes: u32,
    pub is_liked: bool,
}

impl Work {
    /// A freshly submitted work: new id, created now, nobody has liked it yet.
    pub fn new(
        title: String,
        images: Vec<String>,
        tool: ToolType,
        positive_prompt: String,
        author: User,
    ) -> Self {
        Self {
            id: format!("work-{}", Uuid::new_v4()),
            title,
            images,
            tool,
            positive_prompt,
            negative_prompt: None,
            tags: Vec::new(),
            author,
            created_at: Utc::now(),
            likes: 0,
            is_liked: false,
        }
    }

    /// Returns a copy with the viewer's like flipped and the count moved with it.
    pub fn with_like_toggled(&self) -> Self {
        let mut next = self.clone();
        if self.is_liked {
            next.is_liked = false;
            next.likes = self.likes.saturating_sub(1);
        } else {
            next.is_liked = true;
            next.likes = self.likes.saturating_add(1);
        }
        next
    }

    pub fn prompt(&self, kind: PromptKind) -> Option<&str> {
        match kind {
            PromptKind::Positive => Some(self.positive_prompt.as_str()),
            PromptKind::Negative => self.negative_prompt.as_deref(),
        }
    }
}

/// A curated external AI platform shown on the platforms page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub icon: String,
    pub color: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn author() -> User {
        User::new("user-001", "Li Ming", "avatar.png")
    }

    fn work_with_likes(likes: u32, is_liked: bool) -> Work {
        let mut work = Work::new(
            "Neon".into(),
            vec!["a.png".into()],
            ToolType::Midjourney,
            "neon, rain".into(),
            author(),
        );
        work.likes = likes;
        work.is_liked = is_liked;
        work
    }

    #[test]
    fn toggle_once_likes_and_increments() {
        let work = work_with_likes(10, false);
        let toggled = work.with_like_toggled();
        assert!(toggled.is_liked);
        assert_eq!(toggled.likes, 11);
        // original snapshot untouched
        assert_eq!(work.likes, 10);
        assert!(!work.is_liked);
    }

    #[test]
    fn toggle_twice_restores_original() {
        let work = work_with_likes(10, false);
        let back = work.with_like_toggled().with_like_toggled();
        assert_eq!(back.likes, 10);
        assert!(!back.is_liked);
    }

    #[test]
    fn unlike_never_goes_negative() {
        let work = work_with_likes(0, true);
        let toggled = work.with_like_toggled();
        assert_eq!(toggled.likes, 0);
        assert!(!toggled.is_liked);
    }

    #[test]
    fn new_work_gets_prefixed_id() {
        let work = work_with_likes(0, false);
        assert!(work.id.starts_with("work-"));
    }

    #[test]
    fn tool_type_uses_kebab_case() {
        assert_eq!(ToolType::StableDiffusion.to_string(), "stable-diffusion");
        assert_eq!(ToolType::from_str("dall-e").unwrap(), ToolType::DallE);
        let json = serde_json::to_string(&ToolType::DallE).unwrap();
        assert_eq!(json, "\"dall-e\"");
    }

    #[test]
    fn negative_prompt_is_optional_on_the_wire() {
        let work = work_with_likes(3, false);
        let json = serde_json::to_string(&work).unwrap();
        assert!(!json.contains("negative_prompt"));
        let loaded: Work = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.prompt(PromptKind::Negative), None);
        assert_eq!(loaded.prompt(PromptKind::Positive), Some("neon, rain"));
    }
}
