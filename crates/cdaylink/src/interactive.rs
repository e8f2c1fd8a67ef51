use crate::prelude::{eprintln, println, *};
use cdaylink_core::convert::convert_url;
use cdaylink_core::labels::{Labels, Language, SLUG_EXAMPLES, URL_EXAMPLES};
use cdaylink_core::result::{EditableResult, COPIED_INDICATOR_TTL};
use cdaylink_core::slug::slug_tool;
use colored::Colorize;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

#[derive(Debug, clap::Parser)]
#[command(name = "interactive")]
#[command(about = "Run one of the tools as an interactive session")]
pub struct App {
    #[command(subcommand)]
    pub tool: Tool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::Subcommand)]
pub enum Tool {
    /// Convert text into slugs
    #[clap(name = "slug")]
    Slug,

    /// Rewrite cday.kambria.io links
    #[clap(name = "url")]
    Url,
}

/// One line typed by the user
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Submit(String),
    Edit(String),
    Copy,
    Open,
    Lang,
    Help,
    Examples,
    Quit,
    Unknown(String),
}

/// Lines starting with `:` are commands, anything else is submitted to the tool
fn parse_input(line: &str) -> Input {
    let line = line.trim_end_matches(&['\r', '\n'][..]);

    let Some(command) = line.strip_prefix(':') else {
        return Input::Submit(line.to_string());
    };

    let (name, argument) = command.split_once(' ').unwrap_or((command, ""));

    match name {
        "edit" | "e" => Input::Edit(argument.to_string()),
        "copy" | "c" => Input::Copy,
        "open" | "o" => Input::Open,
        "lang" | "l" => Input::Lang,
        "help" | "h" | "?" => Input::Help,
        "examples" | "x" => Input::Examples,
        "quit" | "q" | "exit" => Input::Quit,
        other => Input::Unknown(other.to_string()),
    }
}

/// State of one tool: the last error and the editable result
#[derive(Debug)]
struct Session {
    tool: Tool,
    language: Language,
    result: EditableResult,
    error: Option<cdaylink_core::Error>,
}

impl Session {
    fn new(tool: Tool, language: Language) -> Self {
        Self {
            tool,
            language,
            result: EditableResult::default(),
            error: None,
        }
    }

    fn labels(&self) -> &'static Labels {
        Labels::for_language(self.language)
    }

    /// Run the tool on `input`, replacing the previous result or error
    fn submit(&mut self, input: &str) {
        let outcome = match self.tool {
            Tool::Slug => slug_tool(input).map(|output| output.slug),
            Tool::Url => convert_url(input).map(|conversion| conversion.destination),
        };

        match outcome {
            Ok(value) => {
                self.error = None;
                self.result.replace(value);
            }
            Err(e) => {
                self.error = Some(e);
                self.result.replace("");
            }
        }
    }

    fn prompt(&self) -> String {
        let labels = self.labels();
        let (input_label, placeholder, copy, copied) = match self.tool {
            Tool::Slug => (
                labels.slug.input_label,
                labels.slug.placeholder,
                labels.slug.copy_tooltip,
                labels.slug.copied_tooltip,
            ),
            Tool::Url => (
                labels.url.input_label,
                labels.url.placeholder,
                labels.url.copy_tooltip,
                labels.url.copied_tooltip,
            ),
        };

        if self.result.is_empty() {
            f!("{input_label} ({placeholder})")
        } else if self.result.is_copied() {
            f!("{input_label} [{copied}]")
        } else {
            f!("{input_label} [{copy}]")
        }
    }

    fn title(&self) -> &'static str {
        match self.tool {
            Tool::Slug => self.labels().slug.title,
            Tool::Url => self.labels().url.title,
        }
    }

    fn print_outcome(&self) {
        let labels = self.labels();

        if let Some(error) = &self.error {
            eprintln!("{}", error.message(self.language).red());
            return;
        }

        if self.result.is_empty() {
            return;
        }

        match self.tool {
            Tool::Slug => {
                eprintln!("{}", labels.slug.result_label.green());
                println!("{}", self.result.value().bright_white().bold());
                eprintln!(
                    "{}: {}",
                    labels.slug.char_count_label,
                    self.result.char_count().to_string().bright_cyan().bold()
                );
            }
            Tool::Url => {
                eprintln!("{}", labels.url.result_label.green());
                println!("{}", self.result.value().cyan().underline());
            }
        }
    }

    fn print_examples(&self) {
        let labels = self.labels();
        let (label, examples) = match self.tool {
            Tool::Slug => (labels.slug.examples_label, SLUG_EXAMPLES),
            Tool::Url => (labels.url.examples_label, URL_EXAMPLES),
        };

        eprintln!("{}", label.bright_yellow().bold());
        for (from, to) in examples {
            eprintln!("  {from:?} -> {to:?}");
        }
    }

    fn print_help(&self) {
        if self.tool == Tool::Slug {
            let labels = self.labels();
            eprintln!("{}", labels.slug.help_title.bright_white().bold());
            eprintln!("{}", labels.slug.help_body);
            eprintln!();
        }

        eprintln!("{}", self.labels().commands.title.bright_white().bold());
        for (usage, description) in self.command_list() {
            eprintln!("  {usage:<16}{description}");
        }
    }

    /// Usage and description of every command available for this tool
    fn command_list(&self) -> Vec<(&'static str, &'static str)> {
        let commands = &self.labels().commands;

        let mut list = vec![
            ("<text>", commands.submit),
            (":edit <text>", commands.edit),
            (":copy", commands.copy),
        ];
        if self.tool == Tool::Url {
            list.push((":open", commands.open));
        }
        list.extend([
            (":lang", commands.lang),
            (":examples", commands.examples),
            (":quit", commands.quit),
        ]);

        list
    }
}

/// Owns the session and the pending "copied" indicator reversion
struct Controller {
    session: Arc<Mutex<Session>>,
    pending_revert: Option<JoinHandle<()>>,
}

impl Controller {
    fn new(session: Session) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            pending_revert: None,
        }
    }

    fn cancel_pending_revert(&mut self) {
        if let Some(handle) = self.pending_revert.take() {
            handle.abort();
        }
    }

    async fn submit(&mut self, input: &str) {
        self.cancel_pending_revert();
        self.session.lock().await.submit(input);
    }

    async fn edit(&mut self, text: &str) {
        self.cancel_pending_revert();
        self.session.lock().await.result.edit(text);
    }

    /// Turn the indicator on and schedule its reversion after `ttl`.
    ///
    /// Returns the text to copy.
    async fn indicate_copied(&mut self, ttl: Duration) -> Result<String> {
        let (text, ticket) = {
            let mut session = self.session.lock().await;
            if session.result.is_empty() {
                return Err(Error::EmptyResult("copy").into());
            }
            let ticket = session.result.mark_copied();
            (session.result.value().to_string(), ticket)
        };

        self.cancel_pending_revert();

        let session = Arc::clone(&self.session);
        self.pending_revert = Some(tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            if session.lock().await.result.revert_copied(ticket) {
                log::debug!("Copied indicator reverted");
            }
        }));

        Ok(text)
    }

    /// Copy the current result. The clipboard write is not awaited.
    async fn copy(&mut self) -> Result<()> {
        let text = self.indicate_copied(COPIED_INDICATOR_TTL).await?;

        tokio::task::spawn_blocking(move || {
            if let Err(e) = crate::system::copy_to_clipboard(&text) {
                log::warn!("{e}");
            }
        });

        Ok(())
    }

    async fn open(&self) -> Result<()> {
        let url = self.session.lock().await.result.value().to_string();
        crate::system::open_url(&url)
    }

    async fn toggle_language(&self) -> Language {
        let mut session = self.session.lock().await;
        session.language = session.language.toggle();
        session.language
    }
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let language = crate::config::resolve_language(&global);
    let mut controller = Controller::new(Session::new(app.tool, language));

    {
        let session = controller.session.lock().await;
        eprintln!("{}", session.title().bright_cyan().bold());
        eprintln!("{}", session.labels().commands.hint.dimmed());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        eprintln!("{}", controller.session.lock().await.prompt().bold());

        let Some(line) = lines.next_line().await? else {
            break; // EOF
        };

        match parse_input(&line) {
            Input::Submit(text) => {
                controller.submit(&text).await;
                controller.session.lock().await.print_outcome();
            }
            Input::Edit(text) => {
                controller.edit(&text).await;
                controller.session.lock().await.print_outcome();
            }
            Input::Copy => match controller.copy().await {
                Ok(()) => {
                    let session = controller.session.lock().await;
                    let copied = match session.tool {
                        Tool::Slug => session.labels().slug.copied_tooltip,
                        Tool::Url => session.labels().url.copied_tooltip,
                    };
                    eprintln!("{}", copied.green());
                }
                Err(e) => eprintln!("{}", e.to_string().red()),
            },
            Input::Open if app.tool == Tool::Url => {
                if let Err(e) = controller.open().await {
                    eprintln!("{}", e.to_string().red());
                }
            }
            Input::Lang => {
                let language = controller.toggle_language().await;
                if let Err(e) = crate::config::save_language(&global, language) {
                    log::warn!("{e:#}");
                }
                eprintln!(
                    "{}",
                    controller.session.lock().await.title().bright_cyan().bold()
                );
            }
            Input::Help => controller.session.lock().await.print_help(),
            Input::Examples => controller.session.lock().await.print_examples(),
            Input::Quit => break,
            Input::Open | Input::Unknown(_) => {
                let unknown = controller.session.lock().await.labels().commands.unknown;
                eprintln!("{}", unknown.red());
            }
        }
    }

    controller.cancel_pending_revert();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // parse_input tests
    // ============================================================================

    #[test]
    fn test_parse_input_submit() {
        assert_eq!(
            parse_input("Xin chào!\n"),
            Input::Submit("Xin chào!".to_string())
        );
    }

    #[test]
    fn test_parse_input_commands() {
        assert_eq!(parse_input(":copy"), Input::Copy);
        assert_eq!(parse_input(":o"), Input::Open);
        assert_eq!(parse_input(":lang"), Input::Lang);
        assert_eq!(parse_input(":?"), Input::Help);
        assert_eq!(parse_input(":examples"), Input::Examples);
        assert_eq!(parse_input(":q\r\n"), Input::Quit);
        assert_eq!(parse_input(":nope"), Input::Unknown("nope".to_string()));
    }

    #[test]
    fn test_parse_input_edit_keeps_text_verbatim() {
        assert_eq!(
            parse_input(":edit My Own Slug!"),
            Input::Edit("My Own Slug!".to_string())
        );
        assert_eq!(parse_input(":edit"), Input::Edit(String::new()));
    }

    // ============================================================================
    // Session tests
    // ============================================================================

    #[test]
    fn test_session_slug_submit() {
        let mut session = Session::new(Tool::Slug, Language::En);
        session.submit("Café Olé");

        assert_eq!(session.error, None);
        assert_eq!(session.result.value(), "cafe-ole");
        assert_eq!(session.result.char_count(), 8);
    }

    #[test]
    fn test_session_slug_blank_input() {
        let mut session = Session::new(Tool::Slug, Language::En);
        session.submit("Hello World!");
        session.submit("   ");

        assert_eq!(session.error, Some(cdaylink_core::Error::EmptyInput));
        assert!(session.result.is_empty());
    }

    #[test]
    fn test_session_url_submit_and_error() {
        let mut session = Session::new(Tool::Url, Language::Vi);
        session.submit(" https://cday.kambria.io/cdcg-news ");
        assert_eq!(session.result.value(), "https://cdcg.cday.global/news");

        session.submit("https://example.com/foo");
        assert_eq!(session.error, Some(cdaylink_core::Error::InvalidUrlFormat));
        assert!(session.result.is_empty());
    }

    #[test]
    fn test_session_prompt_tracks_indicator() {
        let mut session = Session::new(Tool::Url, Language::En);
        assert_eq!(
            session.prompt(),
            "Enter URL: (e.g. https://cday.kambria.io/cdcg-news)"
        );

        session.submit("https://cday.kambria.io/knth-tin-tuc");
        assert_eq!(session.prompt(), "Enter URL: [Copy]");

        session.result.mark_copied();
        assert_eq!(session.prompt(), "Enter URL: [Copied!]");
    }

    #[test]
    fn test_session_prompt_shows_placeholder_in_language() {
        let session = Session::new(Tool::Slug, Language::Vi);
        assert_eq!(session.prompt(), "Nhập văn bản: (Nhập văn bản tại đây)");
    }

    #[test]
    fn test_command_list_follows_tool_and_language() {
        let slug = Session::new(Tool::Slug, Language::En);
        let usages: Vec<_> = slug.command_list().iter().map(|(usage, _)| *usage).collect();
        assert!(!usages.contains(&":open"));
        assert_eq!(slug.command_list()[0], ("<text>", "convert the text"));

        let url = Session::new(Tool::Url, Language::Vi);
        assert!(url.command_list().contains(&(":open", "mở kết quả trong trình duyệt")));
        assert!(url.command_list().contains(&(":quit", "thoát")));
    }

    // ============================================================================
    // Controller tests
    // ============================================================================

    #[tokio::test]
    async fn test_copied_indicator_reverts_after_ttl() {
        let mut controller = Controller::new(Session::new(Tool::Slug, Language::En));
        controller.submit("Hello World!").await;

        let text = controller
            .indicate_copied(Duration::from_millis(20))
            .await
            .unwrap();
        assert_eq!(text, "hello-world");
        assert!(controller.session.lock().await.result.is_copied());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!controller.session.lock().await.result.is_copied());
    }

    #[tokio::test]
    async fn test_new_copy_supersedes_pending_revert() {
        let mut controller = Controller::new(Session::new(Tool::Slug, Language::En));
        controller.submit("Hello World!").await;

        controller
            .indicate_copied(Duration::from_millis(20))
            .await
            .unwrap();
        controller
            .indicate_copied(Duration::from_secs(60))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(controller.session.lock().await.result.is_copied());

        controller.cancel_pending_revert();
    }

    #[tokio::test]
    async fn test_edit_cancels_pending_revert() {
        let mut controller = Controller::new(Session::new(Tool::Url, Language::En));
        controller
            .submit("https://cday.kambria.io/knth-tin-tuc")
            .await;

        controller
            .indicate_copied(Duration::from_millis(20))
            .await
            .unwrap();
        controller.edit("https://knth.cday.global/custom").await;
        assert!(controller.pending_revert.is_none());

        let session = controller.session.lock().await;
        assert!(!session.result.is_copied());
        assert_eq!(session.result.value(), "https://knth.cday.global/custom");
    }

    #[tokio::test]
    async fn test_copy_requires_result() {
        let mut controller = Controller::new(Session::new(Tool::Slug, Language::En));
        assert!(controller
            .indicate_copied(Duration::from_millis(20))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_toggle_language() {
        let controller = Controller::new(Session::new(Tool::Slug, Language::En));
        assert_eq!(controller.toggle_language().await, Language::Vi);
        assert_eq!(
            controller.session.lock().await.title(),
            "Công cụ tạo Slug"
        );
    }
}
