use crate::messages::Language;
use crate::theme::ThemeChoice;
use crate::window::ClosePolicy;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seconds before the window closes itself
    #[arg(short, long, default_value_t = 3)]
    pub seconds: u32,
    #[arg(long, value_enum, default_value_t = ClosePolicy::Exit)]
    pub close_policy: ClosePolicy,
    #[arg(long, value_enum, default_value_t = Language::En)]
    pub lang: Language,
    #[arg(long, value_enum, default_value_t = ThemeChoice::Auto)]
    pub theme: ThemeChoice,
    #[arg(short, long)]
    pub message: Option<String>,
    /// Text copied with [c], defaults to the message
    #[arg(long)]
    pub copy: Option<String>,
    #[arg(long)]
    pub no_label: bool,
    #[arg(long)]
    pub no_toasts: bool,
    #[arg(short, long)]
    pub log: Option<String>,
}

pub fn load_config() -> Config {
    Config::from(Args::parse())
}

#[derive(Clone, Debug)]
pub struct Config {
    pub seconds: u32,
    pub close_policy: ClosePolicy,
    pub language: Language,
    pub theme: ThemeChoice,
    pub message: Option<String>,
    pub copy_text: Option<String>,
    pub show_label: bool,
    pub toasts: bool,
    pub log_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seconds: 3,
            close_policy: ClosePolicy::Exit,
            language: Language::En,
            theme: ThemeChoice::Auto,
            message: None,
            copy_text: None,
            show_label: true,
            toasts: true,
            log_path: None,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            seconds: args.seconds,
            close_policy: args.close_policy,
            language: args.lang,
            theme: args.theme,
            message: args.message,
            copy_text: args.copy,
            show_label: !args.no_label,
            toasts: !args.no_toasts,
            log_path: args.log,
        }
    }
}

impl Config {
    pub fn message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| self.language.messages().body.to_string())
    }

    pub fn copy_text(&self) -> String {
        self.copy_text.clone().unwrap_or_else(|| self.message())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Config {
        Config::from(Args::try_parse_from(args).expect("valid arguments"))
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["success-screen"]);

        assert_eq!(3, config.seconds);
        assert_eq!(ClosePolicy::Exit, config.close_policy);
        assert_eq!(Language::En, config.language);
        assert_eq!(ThemeChoice::Auto, config.theme);
        assert!(config.show_label);
        assert!(config.toasts);
        assert_eq!(None, config.log_path);
    }

    #[test]
    fn test_flags() {
        let config = parse(&[
            "success-screen",
            "--seconds",
            "5",
            "--close-policy",
            "hold",
            "--lang",
            "es",
            "--theme",
            "high-contrast",
            "--no-label",
            "--no-toasts",
            "--log",
            "/tmp/success.log",
        ]);

        assert_eq!(5, config.seconds);
        assert_eq!(ClosePolicy::Hold, config.close_policy);
        assert_eq!(Language::Es, config.language);
        assert_eq!(ThemeChoice::HighContrast, config.theme);
        assert!(!config.show_label);
        assert!(!config.toasts);
        assert_eq!(Some("/tmp/success.log".to_string()), config.log_path);
    }

    #[test]
    fn test_message_and_copy_text_fall_back() {
        let config = Config {
            language: Language::Es,
            ..Config::default()
        };
        assert_eq!(Language::Es.messages().body, config.message());
        assert_eq!(config.message(), config.copy_text());

        let config = parse(&["success-screen", "-m", "done", "--copy", "1234"]);
        assert_eq!("done", config.message());
        assert_eq!("1234", config.copy_text());
    }

    #[test]
    fn test_rejects_unknown_policy() {
        assert!(Args::try_parse_from(["success-screen", "--close-policy", "maybe"]).is_err());
    }
}
