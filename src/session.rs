/// The interactive read-eval-print loop
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::{
    address_book::AddressBook,
    commands::{Action, dispatch},
    utils::messages,
};

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `close` or `exit`
    Exit,
    /// Input was closed
    EndOfInput,
}

/// Run commands from `input` against `book` until the user leaves
pub async fn run<R, W>(
    book: &mut AddressBook,
    window_days: i64,
    input: R,
    output: &mut W,
) -> std::io::Result<SessionEnd>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    write_line(output, messages::WELCOME).await?;

    loop {
        output.write_all(messages::PROMPT.as_bytes()).await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            info!("Input closed, ending session");
            write_line(output, "").await?;
            return Ok(SessionEnd::EndOfInput);
        };

        debug!(line = %line, "Received command");

        match dispatch(&line, book, window_days) {
            Action::Reply(reply) => write_line(output, &reply).await?,
            Action::Nothing => {}
            Action::Exit => {
                write_line(output, messages::GOODBYE).await?;
                return Ok(SessionEnd::Exit);
            }
        }
    }
}

async fn write_line<W>(output: &mut W, text: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await
}
