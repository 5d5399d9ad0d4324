use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::borrow::Cow;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio_stream::{wrappers::SplitStream, StreamExt};
use tracing::warn;

use crate::constants::{CMD_EXIT, CMD_HISTORY};
use crate::directory::Directory;
use crate::resolver::IntentResolver;
use crate::session::Transcript;

/// Interactive chat: one utterance per line, one reply per utterance
pub struct ChatSession<D> {
    resolver: IntentResolver<D>,
    transcript: Transcript,
}

impl<D: Directory> ChatSession<D> {
    pub fn new(resolver: IntentResolver<D>) -> Self {
        Self {
            resolver,
            transcript: Transcript::new(),
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Chat over stdin until `/salir` or EOF
    pub async fn run(&mut self) -> Result<()> {
        println!(
            "{}",
            "Preguntame por rutas, horarios o paradas. Escribí /salir para terminar.".cyan()
        );
        self.run_with(BufReader::new(tokio::io::stdin())).await
    }

    /// Chat over any line source
    pub async fn run_with<R: AsyncBufRead + Unpin>(&mut self, reader: R) -> Result<()> {
        // Raw byte lines: a badly encoded line still gets a reply
        let mut lines = SplitStream::new(reader.split(b'\n'));

        prompt();
        while let Some(bytes) = lines.next().await {
            let bytes = bytes?;
            let line = String::from_utf8_lossy(&bytes);
            if let Cow::Owned(_) = line {
                warn!("input line is not valid UTF-8; invalid bytes replaced");
            }
            let text = line.trim();

            match text {
                "" => {}
                CMD_EXIT => break,
                CMD_HISTORY => {
                    if self.transcript.is_empty() {
                        println!("{}", "(sin mensajes)".dimmed());
                    } else {
                        println!("{}", self.transcript.render());
                    }
                }
                _ => {
                    let reply = self.handle_turn(text).await;
                    println!("{}", reply.green());
                }
            }
            prompt();
        }
        println!();

        Ok(())
    }

    /// Resolve one user line and record both sides of the exchange
    pub async fn handle_turn(&mut self, text: &str) -> String {
        self.transcript.push_user(text);
        let reply = self.resolver.resolve(text).await;
        self.transcript.push_bot(reply.clone());
        reply
    }
}

fn prompt() {
    print!("{} ", ">".bold());
    // A failed flush only delays the prompt
    let _ = std::io::stdout().flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FALLBACK_RESPONSE;
    use crate::directory::{MockDirectory, Route};
    use crate::resolver::{Gazetteer, KeywordSets};
    use crate::session::Speaker;

    fn session() -> ChatSession<MockDirectory> {
        let mut directory = MockDirectory::new();
        directory
            .expect_list_routes_by_region()
            .returning(|_| Ok(vec![Route::new(1, "Ruta 1")]));
        ChatSession::new(IntentResolver::new(
            Gazetteer::default(),
            KeywordSets::default(),
            directory,
        ))
    }

    #[tokio::test]
    async fn test_lines_until_exit_command() {
        let mut session = session();
        let input: &[u8] = b"ruta managua\n\n/historial\nhola\n/salir\nruta leon\n";
        session.run_with(input).await.unwrap();

        let entries = &session.transcript().entries;
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].speaker, Speaker::User);
        assert_eq!(entries[0].text, "ruta managua");
        assert_eq!(entries[1].text, "Podés tomar la ruta Ruta 1.");
        assert_eq!(entries[3].text, FALLBACK_RESPONSE);
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_does_not_end_session() {
        let mut session = session();
        // Latin-1 "ó" followed by a well-formed line
        let input: &[u8] = b"ruta le\xf3n\r\nruta managua\n";
        session.run_with(input).await.unwrap();

        let entries = &session.transcript().entries;
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].text, "ruta le\u{FFFD}n");
        assert_eq!(entries[1].text, "Podés tomar la ruta Ruta 1.");
        assert_eq!(entries[2].text, "ruta managua");
        assert_eq!(entries[3].text, "Podés tomar la ruta Ruta 1.");
    }

    #[tokio::test]
    async fn test_eof_ends_session() {
        let mut session = session();
        let input: &[u8] = b"ruta granada";
        session.run_with(input).await.unwrap();
        assert_eq!(session.transcript().len(), 2);
    }
}
