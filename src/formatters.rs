use crate::{logger::Config, Level, LogFormatter};

pub struct DefaultFormatter {
    config: Config,
}

impl DefaultFormatter {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn timestamp(&self) -> String {
        let color = if self.config.use_ansi {
            "\x1b[0;90m"
        } else {
            ""
        };

        let time = chrono::Local::now().format(&self.config.datetime_format);
        format!("{}{}{}", color, time, self.reset())
    }

    // Color codes stay outside the brackets so consumers that substring
    // match on "[WARN]" etc. keep working with ANSI enabled.
    fn format_tag(&self, level: Level) -> String {
        let color = if self.config.use_ansi {
            match level {
                Level::Debug => "\x1b[0;34m",
                Level::Info => "\x1b[0;32m",
                Level::Warn => "\x1b[0;33m",
                Level::Error => "\x1b[0;31m",
                Level::Fatal => "\x1b[1;31m",
            }
        } else {
            ""
        };

        format!("{}[{}]{}", color, level.tag(), self.reset())
    }

    fn reset(&self) -> &str {
        if self.config.use_ansi {
            "\x1b[0m"
        } else {
            ""
        }
    }
}

impl LogFormatter for DefaultFormatter {
    fn format(&self, level: Level, message: &str) -> String {
        format!(
            "{} {} {}",
            self.timestamp(),
            self.format_tag(level),
            message,
        )
    }
}
