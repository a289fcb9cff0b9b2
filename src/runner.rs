use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::client::LookupClient;
use crate::errors::FileAccessError;
use crate::render;
use crate::validate::validate;

/// Drives the validate -> fetch -> render sequence across the three input
/// modes. Requests are strictly sequential; file mode pauses between items
/// as politeness toward the remote service.
pub struct BatchRunner {
    client: LookupClient,
    delay: Duration,
}

impl BatchRunner {
    pub fn new(client: LookupClient, delay: Duration) -> Self {
        Self { client, delay }
    }

    /// Runs one identifier through the full sequence.
    ///
    /// Returns `true` when validation passed and the sequence ran to the
    /// end, whether or not the fetch itself succeeded. The batch summary
    /// counts on exactly this.
    pub async fn process_one(&self, raw: &str) -> bool {
        let id = match validate(raw) {
            Ok(id) => id,
            Err(e) => {
                println!("{}", format!("❌ Invalid mobile number: {}", e).red());
                return false;
            }
        };

        render::show_scan_progress(&id).await;
        let result = self.client.fetch(&id).await;
        render::render(&result, &id);
        true
    }

    pub async fn run_single(&self, raw: &str) {
        self.process_one(raw).await;
    }

    /// Processes every non-blank line of the file in order.
    ///
    /// Returns `(processed, total)` where `processed` is the number of
    /// lines that passed validation. Missing or unreadable files are fatal;
    /// a file with no usable lines reports and performs no requests.
    pub async fn run_file(&self, path: &Path) -> anyhow::Result<(usize, usize)> {
        let contents = match tokio::fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(FileAccessError::NotFound(path.to_path_buf()).into());
            }
            Err(e) => {
                return Err(FileAccessError::Read(path.to_path_buf(), e).into());
            }
        };

        let mobiles: Vec<&str> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if mobiles.is_empty() {
            println!(
                "{}",
                format!("❌ No valid mobile numbers found in file: {}", path.display()).red()
            );
            return Ok((0, 0));
        }

        let total = mobiles.len();
        println!(
            "{}",
            format!("📁 Processing {} numbers from: {}", total, path.display()).yellow()
        );
        tracing::info!("Starting batch of {} from {}", total, path.display());

        let mut processed = 0;
        for (idx, raw) in mobiles.iter().enumerate() {
            println!("\n{}", "=".repeat(60).cyan());
            println!(
                "{}",
                format!("📱 Processing {}/{}: {}", idx + 1, total, raw).yellow()
            );

            if self.process_one(raw).await {
                processed += 1;
            }

            // Pause between requests, not after the last one.
            if idx + 1 < total {
                tokio::time::sleep(self.delay).await;
            }
        }

        println!(
            "\n{}",
            format!("✅ Successfully processed {}/{} numbers", processed, total).green()
        );
        Ok((processed, total))
    }

    /// Prompt loop: one identifier per line until a quit token, EOF, or
    /// Ctrl-C at the prompt.
    pub async fn run_interactive(&self) -> anyhow::Result<()> {
        let mut editor = DefaultEditor::new()?;
        let prompt = format!(
            "\n{}",
            "[WASP] Enter mobile number (or 'quit' to exit): ".yellow()
        );

        loop {
            match editor.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if matches!(line.to_lowercase().as_str(), "quit" | "exit" | "q") {
                        break;
                    }
                    if line.is_empty() {
                        println!("{}", "⚠️  Please enter a mobile number".yellow());
                        continue;
                    }
                    self.process_one(line).await;
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!("\n{}", "[WASP] Scan session terminated".red());
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}
