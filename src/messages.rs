use clap::ValueEnum;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub fn messages(&self) -> &'static Messages {
        match self {
            Language::En => &ENGLISH,
            Language::Es => &SPANISH,
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Language::En => "en",
            Language::Es => "es",
        })
    }
}

/// Every string the user gets to see.
pub struct Messages {
    pub title: &'static str,
    pub body: &'static str,
    pub close_button: &'static str,
    pub closing: &'static str,
    pub close_manually: &'static str,
    pub copied: &'static str,
    pub copy_failed: &'static str,
    pub key_hints: &'static str,
    countdown: fn(u32) -> String,
}

impl Messages {
    pub fn countdown(&self, seconds: u32) -> String {
        (self.countdown)(seconds)
    }
}

fn countdown_en(seconds: u32) -> String {
    format!("This window will close in {} seconds...", seconds)
}

fn countdown_es(seconds: u32) -> String {
    format!("Esta ventana se cerrará en {} segundos...", seconds)
}

static ENGLISH: Messages = Messages {
    title: "Verification complete",
    body: "Your Genius account is linked and your roles have been assigned. You can go back to Discord.",
    close_button: "Close window",
    closing: "Closing window...",
    close_manually: "You can close this window manually",
    copied: "Copied to clipboard",
    copy_failed: "Error copying",
    key_hints: "[enter] close  [c] copy  [t] theme  [?] help  [q] quit",
    countdown: countdown_en,
};

static SPANISH: Messages = Messages {
    title: "Verificación completada",
    body: "Tu cuenta de Genius está vinculada y tus roles han sido asignados. Ya puedes volver a Discord.",
    close_button: "Cerrar ventana",
    closing: "Cerrando ventana...",
    close_manually: "Puedes cerrar esta pestaña manualmente",
    copied: "Copiado al portapapeles",
    copy_failed: "Error al copiar",
    key_hints: "[enter] cerrar  [c] copiar  [t] tema  [?] ayuda  [q] salir",
    countdown: countdown_es,
};

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_countdown_text() {
        assert_eq!(
            "This window will close in 2 seconds...",
            Language::En.messages().countdown(2)
        );
        assert_eq!(
            "Esta ventana se cerrará en 1 segundos...",
            Language::Es.messages().countdown(1)
        );
    }

    #[test]
    fn test_spanish_messages() {
        let messages = Language::Es.messages();
        assert_eq!("Copiado al portapapeles", messages.copied);
        assert_eq!("Puedes cerrar esta pestaña manualmente", messages.close_manually);
    }
}
