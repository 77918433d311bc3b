//! Sample data for a fresh gallery.
//!
//! `init` writes [`sample_works`] into an empty store, and the test suites use the same
//! collection as their fixture so the numbers in assertions match what a user sees.

use crate::model::{Platform, ToolType, User, Work};
use chrono::{DateTime, TimeZone, Utc};

/// The viewer the gallery assumes when no `viewer` is configured.
pub const DEFAULT_VIEWER_ID: &str = "user-001";

const UNSPLASH: &str = "https://images.unsplash.com";

fn avatar(photo: &str) -> String {
    format!("{UNSPLASH}/{photo}?w=100&h=100&fit=crop&crop=face")
}

fn image(photo: &str) -> String {
    format!("{UNSPLASH}/{photo}?w=800&q=80")
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

pub fn sample_users() -> Vec<User> {
    vec![
        User::new(
            DEFAULT_VIEWER_ID,
            "Li Ming",
            avatar("photo-1472099645785-5658abf4ff4e"),
        )
        .with_department("Design"),
        User::new(
            "user-002",
            "Wang Fang",
            avatar("photo-1494790108377-be9c29b29330"),
        )
        .with_department("Product"),
        User::new(
            "user-003",
            "Zhang Wei",
            avatar("photo-1507003211169-0a1dd7228f2d"),
        )
        .with_department("Engineering"),
        User::new(
            "user-004",
            "Liu Yang",
            avatar("photo-1500648767791-00dcc994a43e"),
        )
        .with_department("Marketing"),
        User::new(
            "user-005",
            "Chen Jing",
            avatar("photo-1438761681033-6461ffad8d80"),
        )
        .with_department("Design"),
    ]
}

struct Sample {
    id: &'static str,
    title: &'static str,
    images: &'static [&'static str],
    tool: ToolType,
    positive: &'static str,
    negative: Option<&'static str>,
    tags: &'static [&'static str],
    author: usize,
    created_at: (i32, u32, u32, u32, u32),
    likes: u32,
    is_liked: bool,
}

const SAMPLES: &[Sample] = &[
    Sample {
        id: "work-001",
        title: "Cyberpunk City at Night",
        images: &["photo-1480714378408-67cf0d13bc1b", "photo-1519501025264-65ba15a82390"],
        tool: ToolType::Midjourney,
        positive: "cyberpunk city, neon lights, rain, reflections, futuristic buildings, flying cars, holographic advertisements, night scene, ultra detailed, cinematic lighting, 8k, masterpiece",
        negative: Some("blurry, low quality, distorted, ugly, bad anatomy"),
        tags: &["cyberpunk", "city", "night", "sci-fi"],
        author: 0,
        created_at: (2024, 1, 15, 10, 30),
        likes: 128,
        is_liked: false,
    },
    Sample {
        id: "work-002",
        title: "Anime Girl Character Sheet",
        images: &["photo-1578632767115-351597cf2477"],
        tool: ToolType::StableDiffusion,
        positive: "anime girl, silver hair, blue eyes, school uniform, cherry blossoms, spring, soft lighting, beautiful detailed eyes, high quality, masterpiece, best quality",
        negative: Some("bad hands, extra fingers, mutated hands, poorly drawn face, mutation, deformed"),
        tags: &["anime", "character", "girl", "spring"],
        author: 1,
        created_at: (2024, 1, 14, 15, 45),
        likes: 256,
        is_liked: true,
    },
    Sample {
        id: "work-003",
        title: "Future Tech Product Design",
        images: &[
            "photo-1550751827-4bd374c3f58b",
            "photo-1518770660439-4636190af475",
            "photo-1485827404703-89b55fcc595e",
        ],
        tool: ToolType::DallE,
        positive: "futuristic headphones, transparent materials, holographic display, minimalist design, floating elements, soft glow, product photography, studio lighting, 4k render",
        negative: None,
        tags: &["product design", "tech", "futuristic", "industrial design"],
        author: 2,
        created_at: (2024, 1, 13, 9, 20),
        likes: 89,
        is_liked: false,
    },
    Sample {
        id: "work-004",
        title: "Dreamy Forest Fairy",
        images: &["photo-1518531933037-91b2f5f229cc"],
        tool: ToolType::Flux,
        positive: "fantasy forest, magical fairy, glowing wings, bioluminescent plants, misty atmosphere, ethereal light, enchanted woodland, ultra realistic, ray tracing",
        negative: Some("cartoon, anime, low resolution, text, watermark"),
        tags: &["fantasy", "forest", "fairy", "magic"],
        author: 3,
        created_at: (2024, 1, 12, 18, 0),
        likes: 312,
        is_liked: true,
    },
    Sample {
        id: "work-005",
        title: "Chinese Ink Landscape",
        images: &["photo-1506905925346-21bda4d32df4", "photo-1464822759023-fed622ff2c3b"],
        tool: ToolType::Jimeng,
        positive: "chinese ink painting, high mountains and flowing water, drifting clouds, pine trees, classical architecture, negative space composition, freehand style, zen, fine detail",
        negative: None,
        tags: &["chinese style", "landscape", "ink wash", "traditional art"],
        author: 4,
        created_at: (2024, 1, 11, 14, 30),
        likes: 198,
        is_liked: false,
    },
    Sample {
        id: "work-006",
        title: "Mech Armor Design",
        images: &["photo-1485827404703-89b55fcc595e"],
        tool: ToolType::Midjourney,
        positive: "mecha armor, giant robot, detailed mechanical parts, battle stance, energy core, glowing eyes, metallic texture, sci-fi background, epic composition, dramatic lighting",
        negative: Some("simple, flat, 2d, cartoon style"),
        tags: &["mecha", "robot", "sci-fi", "battle"],
        author: 0,
        created_at: (2024, 1, 10, 11, 15),
        likes: 445,
        is_liked: false,
    },
    Sample {
        id: "work-007",
        title: "Vintage Film Portrait",
        images: &["photo-1531746020798-e6953c6e8e04"],
        tool: ToolType::StableDiffusion,
        positive: "vintage film photography, portrait, woman, natural light, soft focus, film grain, warm tones, golden hour, kodak portra 400, nostalgic mood",
        negative: Some("digital look, over-processed, HDR, oversaturated"),
        tags: &["portrait", "vintage", "film", "photography"],
        author: 1,
        created_at: (2024, 1, 9, 16, 45),
        likes: 167,
        is_liked: true,
    },
    Sample {
        id: "work-008",
        title: "Abstract Art",
        images: &["photo-1541701494587-cb58502866ab", "photo-1507003211169-0a1dd7228f2d"],
        tool: ToolType::DallE,
        positive: "abstract art, fluid shapes, vibrant colors, organic forms, digital painting, modern art, color splash, dynamic composition, artistic expression",
        negative: None,
        tags: &["abstract", "art", "color", "modern"],
        author: 2,
        created_at: (2024, 1, 8, 8, 30),
        likes: 78,
        is_liked: false,
    },
    Sample {
        id: "work-009",
        title: "Space Exploration Concept",
        images: &["photo-1446776811953-b23d57bd21aa"],
        tool: ToolType::Flux,
        positive: "space exploration, astronaut, distant planet, starfield, nebula background, spacecraft, cosmic scale, photorealistic, NASA style, cinematic composition",
        negative: Some("cartoon, unrealistic, low detail"),
        tags: &["space", "exploration", "astronaut", "sci-fi"],
        author: 3,
        created_at: (2024, 1, 7, 20, 0),
        likes: 534,
        is_liked: false,
    },
    Sample {
        id: "work-010",
        title: "Food Photography Style",
        images: &["photo-1565299624946-b28f40a0ae38", "photo-1565958011703-44f9829ba187"],
        tool: ToolType::Doubao,
        positive: "refined food photography, japanese cuisine, elegant plating, natural light, shallow depth of field, wooden tableware, minimal background, fine dining style, 4k",
        negative: None,
        tags: &["food", "photography", "japanese", "cuisine"],
        author: 4,
        created_at: (2024, 1, 6, 12, 0),
        likes: 223,
        is_liked: true,
    },
    Sample {
        id: "work-011",
        title: "Architectural Visualization",
        images: &["photo-1486325212027-8081e485255e"],
        tool: ToolType::Midjourney,
        positive: "modern architecture, glass facade, contemporary building, urban landscape, sunset lighting, architectural visualization, photorealistic render, 8k quality",
        negative: Some("old style, traditional, low poly"),
        tags: &["architecture", "visualization", "modern", "design"],
        author: 0,
        created_at: (2024, 1, 5, 17, 30),
        likes: 156,
        is_liked: false,
    },
    Sample {
        id: "work-012",
        title: "Game Character Concept",
        images: &["photo-1511512578047-dfb367046420"],
        tool: ToolType::StableDiffusion,
        positive: "game character design, fantasy warrior, detailed armor, magical weapon, dynamic pose, concept art, artstation style, high detail, professional illustration",
        negative: Some("amateur, sketch, unfinished"),
        tags: &["game", "character", "concept", "warrior"],
        author: 1,
        created_at: (2024, 1, 4, 13, 15),
        likes: 387,
        is_liked: false,
    },
];

pub fn sample_works() -> Vec<Work> {
    let users = sample_users();
    SAMPLES
        .iter()
        .map(|s| {
            let (year, month, day, hour, minute) = s.created_at;
            Work {
                id: s.id.to_string(),
                title: s.title.to_string(),
                images: s.images.iter().map(|photo| image(photo)).collect(),
                tool: s.tool,
                positive_prompt: s.positive.to_string(),
                negative_prompt: s.negative.map(str::to_string),
                tags: s.tags.iter().map(|t| t.to_string()).collect(),
                author: users[s.author].clone(),
                created_at: at(year, month, day, hour, minute),
                likes: s.likes,
                is_liked: s.is_liked,
            }
        })
        .collect()
}

pub fn sample_platforms() -> Vec<Platform> {
    let platform = |id: &str,
                    name: &str,
                    description: &str,
                    url: &str,
                    icon: &str,
                    color: &str,
                    tags: &[&str]| Platform {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        url: url.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    };

    vec![
        platform(
            "doubao",
            "Doubao",
            "ByteDance's AI assistant with multimodal interaction",
            "https://www.doubao.com",
            "🫘",
            "hsl(15 90% 55%)",
            &["chat", "multimodal", "bytedance"],
        ),
        platform(
            "jimeng",
            "Jimeng",
            "ByteDance's AI painting tool, strong at Chinese style and creative design",
            "https://jimeng.jianying.com",
            "✨",
            "hsl(45 100% 55%)",
            &["painting", "chinese style", "creative"],
        ),
        platform(
            "gemini",
            "Gemini",
            "Google's multimodal model with strong understanding and generation",
            "https://gemini.google.com",
            "💎",
            "hsl(200 100% 60%)",
            &["google", "multimodal", "ai"],
        ),
        platform(
            "lovart",
            "Lovart",
            "AI painting platform focused on anime and line art",
            "https://www.lovart.ai",
            "💜",
            "hsl(280 80% 60%)",
            &["anime", "line art", "illustration"],
        ),
        platform(
            "qwen",
            "Qwen",
            "Alibaba Cloud's large language model for creative tasks",
            "https://tongyi.aliyun.com",
            "🌐",
            "hsl(25 90% 55%)",
            &["alibaba", "language model", "writing"],
        ),
        platform(
            "liblib",
            "LiblibAI",
            "AI painting community with a large library of models and resources",
            "https://www.liblib.art",
            "🎭",
            "hsl(330 85% 55%)",
            &["community", "models", "sd"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_set_has_twelve_unique_works() {
        let works = sample_works();
        assert_eq!(works.len(), 12);
        let ids: HashSet<&str> = works.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn every_sample_has_an_image() {
        assert!(sample_works().iter().all(|w| !w.images.is_empty()));
    }

    #[test]
    fn timestamps_parse_to_expected_instants() {
        let works = sample_works();
        assert_eq!(works[0].created_at.to_rfc3339(), "2024-01-15T10:30:00+00:00");
        assert!(works.windows(2).all(|w| w[0].created_at > w[1].created_at));
    }

    #[test]
    fn authors_are_shared_users() {
        let works = sample_works();
        let viewer_works = works
            .iter()
            .filter(|w| w.author.id == DEFAULT_VIEWER_ID)
            .count();
        assert_eq!(viewer_works, 3);
    }
}
