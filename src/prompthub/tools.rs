//! Display descriptors for each [`ToolType`].
//!
//! This is a fixed table, not derived data. Colors are CSS `hsl()` strings so they can be
//! handed straight to a web front end; the terminal client only uses the short names.

use crate::model::ToolType;
use serde::Serialize;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolInfo {
    pub id: ToolType,
    pub name: &'static str,
    pub short_name: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

static MIDJOURNEY: ToolInfo = ToolInfo {
    id: ToolType::Midjourney,
    name: "Midjourney",
    short_name: "MJ",
    color: "hsl(265 89% 62%)",
    icon: "🎨",
};

static STABLE_DIFFUSION: ToolInfo = ToolInfo {
    id: ToolType::StableDiffusion,
    name: "Stable Diffusion",
    short_name: "SD",
    color: "hsl(200 100% 60%)",
    icon: "🖼️",
};

static DALL_E: ToolInfo = ToolInfo {
    id: ToolType::DallE,
    name: "DALL·E",
    short_name: "DE",
    color: "hsl(160 84% 50%)",
    icon: "🤖",
};

static FLUX: ToolInfo = ToolInfo {
    id: ToolType::Flux,
    name: "Flux",
    short_name: "FX",
    color: "hsl(330 90% 60%)",
    icon: "⚡",
};

static JIMENG: ToolInfo = ToolInfo {
    id: ToolType::Jimeng,
    name: "Jimeng",
    short_name: "JM",
    color: "hsl(45 100% 55%)",
    icon: "✨",
};

static DOUBAO: ToolInfo = ToolInfo {
    id: ToolType::Doubao,
    name: "Doubao",
    short_name: "DB",
    color: "hsl(15 90% 55%)",
    icon: "🫘",
};

static OTHER: ToolInfo = ToolInfo {
    id: ToolType::Other,
    name: "Other",
    short_name: "OT",
    color: "hsl(0 0% 60%)",
    icon: "🔧",
};

pub fn tool_info(tool: ToolType) -> &'static ToolInfo {
    match tool {
        ToolType::Midjourney => &MIDJOURNEY,
        ToolType::StableDiffusion => &STABLE_DIFFUSION,
        ToolType::DallE => &DALL_E,
        ToolType::Flux => &FLUX,
        ToolType::Jimeng => &JIMENG,
        ToolType::Doubao => &DOUBAO,
        ToolType::Other => &OTHER,
    }
}

/// Every descriptor, in enum declaration order.
pub fn all_tools() -> Vec<&'static ToolInfo> {
    ToolType::iter().map(tool_info).collect()
}
