//! Markdown importer for the upstream prompt collection.
//!
//! The upstream README lists one case per section:
//!
//! ```text
//! <a id="prompt-12"></a>
//! ## 案例 12：Retro neon poster (来源 @someone)
//! <img src="./images/12.png" ...>
//! ```
//! ```text
//! prompt text
//! ```
//!
//! Each section becomes a [`PromptRecord`]. Sections without a fenced prompt
//! are skipped. Categories are guessed from title keywords.

use regex::Regex;

use crate::error::GalleryResult;
use crate::types::{PromptRecord, RecordId};

/// Where the upstream images are served from
pub const DEFAULT_IMAGE_BASE: &str =
    "https://raw.githubusercontent.com/songguoxs/gpt4o-image-prompts/master/";

/// Category assigned when no keyword matches
pub const FALLBACK_CATEGORY: &str = "other";

/// One title keyword rule
struct KeywordRule {
    category: &'static str,
    keywords: &'static [&'static str],
    /// Match against the lowercased title instead of the title as written
    fold_case: bool,
}

const fn rule(
    category: &'static str,
    keywords: &'static [&'static str],
    fold_case: bool,
) -> KeywordRule {
    KeywordRule {
        category,
        keywords,
        fold_case,
    }
}

/// Title keyword rules, checked in order. Only `branding` and `3d` ignore
/// case; every other keyword must appear exactly as written.
const KEYWORD_RULES: &[KeywordRule] = &[
    rule("branding", &["logo", "标志", "品牌"], true),
    rule("3d", &["3d", "雕塑", "立体"], true),
    rule("photography", &["摄影", "photograph", "相机"], false),
    rule("illustration", &["插画", "illustration", "绘画"], false),
    rule("character", &["卡通", "cartoon", "可爱"], false),
    rule("retro", &["复古", "retro", "怀旧"], false),
    rule("neon", &["霓虹", "neon", "发光"], false),
    rule("product", &["产品", "product"], false),
    rule("food", &["食物", "food", "美食", "零食"], false),
    rule("fashion", &["时尚", "fashion"], false),
    rule("minimalist", &["极简", "minimal"], false),
    rule("fantasy", &["奇幻", "fantasy", "魔法"], false),
    rule("landscape", &["风景", "landscape", "自然"], false),
    rule("sci-fi", &["科幻", "sci-fi", "未来"], false),
];

/// Categories for a case title
pub fn categorize(title: &str) -> Vec<String> {
    let lowered = title.to_lowercase();
    let categories: Vec<String> = KEYWORD_RULES
        .iter()
        .filter(|rule| {
            let haystack = if rule.fold_case { lowered.as_str() } else { title };
            rule.keywords.iter().any(|k| haystack.contains(k))
        })
        .map(|rule| rule.category.to_string())
        .collect();

    if categories.is_empty() {
        vec![FALLBACK_CATEGORY.to_string()]
    } else {
        categories
    }
}

pub struct MarkdownImporter {
    header: Regex,
    image: Regex,
    prompt: Regex,
    image_base: String,
}

impl MarkdownImporter {
    pub fn new(image_base: impl Into<String>) -> GalleryResult<Self> {
        let mut image_base = image_base.into();
        if !image_base.is_empty() && !image_base.ends_with('/') {
            image_base.push('/');
        }
        Ok(Self {
            header: Regex::new(
                r#"<a id="prompt-(\d+)"></a>\r?\n## 案例 \d+[:：](.+?)(?:\(来源.*?\))?\r?\n"#,
            )?,
            image: Regex::new(r#"<img src="\./(images/\d+(?:-\d+)?\.(?:png|jpeg|jpg))""#)?,
            prompt: Regex::new(r"(?s)```\r?\n(.*?)\r?\n```")?,
            image_base,
        })
    }

    /// Parse the whole markdown document.
    pub fn parse(&self, markdown: &str) -> Vec<PromptRecord> {
        let headers: Vec<_> = self.header.captures_iter(markdown).collect();
        let mut records = Vec::with_capacity(headers.len());

        for (i, caps) in headers.iter().enumerate() {
            let (Some(whole), Some(id), Some(title)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };
            let body_end = headers
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map_or(markdown.len(), |m| m.start());
            let body = &markdown[whole.end()..body_end];

            if let Some(record) = self.parse_section(id.as_str(), title.as_str().trim(), body) {
                records.push(record);
            } else {
                tracing::debug!(id = id.as_str(), "Skipping case without prompt");
            }
        }

        tracing::info!(count = records.len(), "Imported prompts from markdown");
        records
    }

    fn parse_section(&self, id: &str, title: &str, body: &str) -> Option<PromptRecord> {
        let prompt = self
            .prompt
            .captures(body)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|p| !p.is_empty())?;

        let image = self
            .image
            .captures(body)
            .and_then(|c| c.get(1))
            .map(|m| format!("{}{}", self.image_base, m.as_str()))
            .unwrap_or_default();

        let id = id
            .parse::<i64>()
            .map(RecordId::Int)
            .unwrap_or_else(|_| RecordId::Text(id.to_string()));

        Some(PromptRecord {
            id,
            title: title.to_string(),
            prompt,
            image,
            categories: categorize(title),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "# Gallery\n\n\
<a id=\"prompt-1\"></a>\n## 案例 1：复古霓虹海报 (来源 @someone)\n\n\
<img src=\"./images/1.png\" width=\"300\">\n\n```\nA retro neon poster\n```\n\n\
<a id=\"prompt-2\"></a>\n## 案例 2: Empty case\n\nno prompt here\n\n\
<a id=\"prompt-3\"></a>\n## 案例 3：Mountain\n\n```\nsnowy peaks\n```\n";

    #[test]
    fn parses_cases_and_skips_empty() {
        let importer = MarkdownImporter::new(DEFAULT_IMAGE_BASE).unwrap();
        let records = importer.parse(SAMPLE);
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].id, RecordId::Int(1));
        assert_eq!(records[0].title, "复古霓虹海报");
        assert_eq!(records[0].prompt, "A retro neon poster");
        assert_eq!(
            records[0].image,
            format!("{}images/1.png", DEFAULT_IMAGE_BASE)
        );
        assert_eq!(records[0].categories, vec!["retro", "neon"]);

        assert_eq!(records[1].id, RecordId::Int(3));
        assert!(records[1].image.is_empty());
        assert_eq!(records[1].categories, vec![FALLBACK_CATEGORY]);
    }

    #[test]
    fn image_base_gets_trailing_slash() {
        let importer = MarkdownImporter::new("https://cdn.example").unwrap();
        let records = importer.parse(SAMPLE);
        assert_eq!(records[0].image, "https://cdn.example/images/1.png");
    }

    #[test]
    fn branding_and_3d_ignore_case() {
        assert_eq!(categorize("Minimal LOGO"), vec!["branding"]);
        assert_eq!(categorize("3D clay figure"), vec!["3d"]);
    }

    #[test]
    fn other_rules_match_case_as_written() {
        assert_eq!(categorize("Retro poster"), vec![FALLBACK_CATEGORY]);
        assert_eq!(categorize("a retro poster"), vec!["retro"]);
        assert_eq!(categorize("minimal logo"), vec!["branding", "minimalist"]);
    }
}
