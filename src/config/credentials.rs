use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Telegram credentials. Always supplied by file or by the first-run prompt;
/// there is no built-in default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub bot_token: String,
    pub chat_id: String,
}

impl Credentials {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let credentials: Credentials = toml::from_str(&contents)?;
        credentials.validate()?;
        Ok(credentials)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Load from `path`, or run the one-time interactive setup and persist
    /// the answers.
    pub fn load_or_bootstrap(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }

        println!("Credentials file {} not found.", path.display());
        let bot_token = prompt("Enter the Telegram bot token (available from BotFather): ")?;
        let chat_id = prompt("Enter your Telegram account id: ")?;

        let credentials = Self { bot_token, chat_id };
        credentials.validate()?;
        credentials.save(path)?;
        println!("Credentials file created at {}.", path.display());
        Ok(credentials)
    }
}

impl Validate for Credentials {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("bot_token", &self.bot_token)?;
        validate_non_empty_string("chat_id", &self.chat_id)?;
        Ok(())
    }
}

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
