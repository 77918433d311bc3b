use crate::commands::CmdResult;
use crate::seed::sample_platforms;
use crate::tools::all_tools;

pub fn platforms() -> CmdResult {
    CmdResult::default().with_platforms(sample_platforms())
}

pub fn tools() -> CmdResult {
    CmdResult::default().with_tools(all_tools())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_six_platforms() {
        let result = platforms();
        assert_eq!(result.platforms.len(), 6);
        assert!(result.platforms.iter().all(|p| p.url.starts_with("https://")));
    }

    #[test]
    fn lists_every_tool() {
        assert_eq!(tools().tools.len(), 7);
    }
}
