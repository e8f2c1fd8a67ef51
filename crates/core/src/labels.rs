//! Static label sets for the two tools.
//!
//! There are exactly two display languages. The selected one only changes
//! what the shell prints; transforms never look at it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Display language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Vi,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Vi];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Vi => "vi",
        }
    }

    /// The other language
    pub fn toggle(&self) -> Language {
        match self {
            Language::En => Language::Vi,
            Language::Vi => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "vi" => Ok(Language::Vi),
            other => Err(ConfigError::UnknownLanguage(other.to_string())),
        }
    }
}

#[derive(Debug)]
pub struct UrlLabels {
    pub title: &'static str,
    pub input_label: &'static str,
    pub placeholder: &'static str,
    pub result_label: &'static str,
    pub examples_label: &'static str,
    pub error_message: &'static str,
    pub copy_tooltip: &'static str,
    pub copied_tooltip: &'static str,
    pub open_link_tooltip: &'static str,
}

#[derive(Debug)]
pub struct SlugLabels {
    pub title: &'static str,
    pub input_label: &'static str,
    pub placeholder: &'static str,
    pub result_label: &'static str,
    pub char_count_label: &'static str,
    pub examples_label: &'static str,
    pub error_message: &'static str,
    pub copy_tooltip: &'static str,
    pub copied_tooltip: &'static str,
    pub help_title: &'static str,
    pub help_body: &'static str,
}

/// Interactive session commands
#[derive(Debug)]
pub struct CommandLabels {
    pub title: &'static str,
    pub hint: &'static str,
    pub unknown: &'static str,
    pub submit: &'static str,
    pub edit: &'static str,
    pub copy: &'static str,
    pub open: &'static str,
    pub lang: &'static str,
    pub examples: &'static str,
    pub quit: &'static str,
}

#[derive(Debug)]
pub struct Labels {
    pub language: Language,
    pub url: UrlLabels,
    pub slug: SlugLabels,
    pub commands: CommandLabels,
}

pub static EN: Labels = Labels {
    language: Language::En,
    url: UrlLabels {
        title: "URL Converter",
        input_label: "Enter URL:",
        placeholder: "e.g. https://cday.kambria.io/cdcg-news",
        result_label: "Result:",
        examples_label: "Examples:",
        error_message: "Invalid URL format. URL must start with https://cday.kambria.io/ followed by either \"knth-\" or \"cdcg-\"",
        copy_tooltip: "Copy",
        copied_tooltip: "Copied!",
        open_link_tooltip: "Open link",
    },
    slug: SlugLabels {
        title: "Slug Tool",
        input_label: "Input the text:",
        placeholder: "Enter text here",
        result_label: "Result:",
        char_count_label: "Character count",
        examples_label: "Examples:",
        error_message: "Please enter some text!",
        copy_tooltip: "Copy",
        copied_tooltip: "Copied!",
        help_title: "What is a Slug?",
        help_body: "A slug is a human-readable, URL-friendly version of a piece of text. \
It is typically used in web addresses to make them more readable and SEO-friendly \
and is placed after a domain. Slugs are usually:
  - Lowercase
  - Use hyphens (-) instead of spaces
  - Contain only alphanumeric characters
  - Remove special characters and accents
For example, a blog post titled \"My Awesome Blog Post!\" would become \
\"my-awesome-blog-post\" as a slug.",
    },
    commands: CommandLabels {
        title: "Commands",
        hint: "Type :help for commands",
        unknown: "Unknown command, type :help",
        submit: "convert the text",
        edit: "replace the result with your own text",
        copy: "copy the result",
        open: "open the result in the browser",
        lang: "switch between English and Vietnamese",
        examples: "show examples",
        quit: "leave",
    },
};

pub static VI: Labels = Labels {
    language: Language::Vi,
    url: UrlLabels {
        title: "Công cụ chuyển đổi URL",
        input_label: "Nhập URL:",
        placeholder: "ví dụ: https://cday.kambria.io/cdcg-news",
        result_label: "Kết quả:",
        examples_label: "Ví dụ:",
        error_message: "Định dạng URL không hợp lệ. URL phải bắt đầu bằng https://cday.kambria.io/ theo sau là \"knth-\" hoặc \"cdcg-\"",
        copy_tooltip: "Sao chép",
        copied_tooltip: "Đã sao chép!",
        open_link_tooltip: "Mở liên kết",
    },
    slug: SlugLabels {
        title: "Công cụ tạo Slug",
        input_label: "Nhập văn bản:",
        placeholder: "Nhập văn bản tại đây",
        result_label: "Kết quả:",
        char_count_label: "Số ký tự",
        examples_label: "Ví dụ:",
        error_message: "Vui lòng nhập văn bản!",
        copy_tooltip: "Sao chép",
        copied_tooltip: "Đã sao chép!",
        help_title: "Slug là gì?",
        help_body: "Slug là phiên bản dễ đọc, thân thiện với URL của một đoạn văn bản. \
Slug thường được dùng trong địa chỉ web, đặt sau tên miền, giúp địa chỉ dễ đọc \
và tốt cho SEO. Slug thường:
  - Viết thường
  - Dùng dấu gạch ngang (-) thay cho khoảng trắng
  - Chỉ chứa chữ và số
  - Bỏ ký tự đặc biệt và dấu
Ví dụ, bài viết có tiêu đề \"My Awesome Blog Post!\" sẽ có slug là \
\"my-awesome-blog-post\".",
    },
    commands: CommandLabels {
        title: "Lệnh",
        hint: "Gõ :help để xem các lệnh",
        unknown: "Lệnh không hợp lệ, gõ :help",
        submit: "chuyển đổi văn bản",
        edit: "thay kết quả bằng văn bản của bạn",
        copy: "sao chép kết quả",
        open: "mở kết quả trong trình duyệt",
        lang: "chuyển giữa tiếng Anh và tiếng Việt",
        examples: "xem ví dụ",
        quit: "thoát",
    },
};

impl Labels {
    pub fn for_language(language: Language) -> &'static Labels {
        match language {
            Language::En => &EN,
            Language::Vi => &VI,
        }
    }
}

/// Slug tool examples: input and expected slug
pub const SLUG_EXAMPLES: &[(&str, &str)] = &[
    ("Xin chào!", "xin-chao"),
    ("Hello World!", "hello-world"),
    ("This & That", "this-that"),
    ("Café Olé", "cafe-ole"),
    ("Multiple   Spaces", "multiple-spaces"),
];

/// URL converter examples: source and destination
pub const URL_EXAMPLES: &[(&str, &str)] = &[
    (
        "https://cday.kambria.io/knth-tin-tuc",
        "https://knth.cday.global/tin-tuc",
    ),
    (
        "https://cday.kambria.io/cdcg-news",
        "https://cdcg.cday.global/news",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::convert_url_string;
    use crate::slug::slugify;

    #[test]
    fn test_language_from_str() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!(" VI ".parse::<Language>().unwrap(), Language::Vi);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_toggle() {
        assert_eq!(Language::En.toggle(), Language::Vi);
        assert_eq!(Language::Vi.toggle(), Language::En);
    }

    #[test]
    fn test_for_language() {
        for language in Language::ALL {
            assert_eq!(Labels::for_language(language).language, language);
        }
        assert_eq!(Labels::for_language(Language::Vi).url.copy_tooltip, "Sao chép");
    }

    #[test]
    fn test_command_labels_are_translated() {
        assert_eq!(EN.commands.unknown, "Unknown command, type :help");
        assert_ne!(VI.commands.title, EN.commands.title);
        assert_ne!(VI.commands.unknown, EN.commands.unknown);
        assert!(VI.commands.hint.contains(":help"));
        assert!(VI.commands.unknown.contains(":help"));
    }

    #[test]
    fn test_slug_examples_hold() {
        for (input, expected) in SLUG_EXAMPLES {
            assert_eq!(slugify(input), *expected, "input: {input}");
        }
    }

    #[test]
    fn test_url_examples_hold() {
        for (source, expected) in URL_EXAMPLES {
            assert_eq!(convert_url_string(source).unwrap(), *expected);
        }
    }
}
