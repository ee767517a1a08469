use anyhow::Result;
use flightdesk_core::{BookingFlowController, Completion, Outcome, PendingCompletion};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::debug;

use crate::command::{Command, HELP};
use crate::render::render;

/// Runs one session: reads commands line by line and redraws after every
/// change. Requests run on spawned tasks and report back over a channel, so
/// input keeps flowing while they are in flight.
pub async fn run<R, W>(controller: &mut BookingFlowController, input: R, mut out: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let (tx, mut rx) = mpsc::unbounded_channel::<Completion>();
    let mut in_flight = 0usize;
    let mut input_closed = false;

    write(&mut out, &render(controller.state())).await?;

    loop {
        if input_closed && in_flight == 0 {
            break;
        }

        tokio::select! {
            line = lines.next_line(), if !input_closed => {
                let Some(line) = line? else {
                    input_closed = true;
                    continue;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match Command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Wait) => {
                        while in_flight > 0 {
                            let Some(completion) = rx.recv().await else { break };
                            in_flight -= 1;
                            finish(controller, completion, &mut out).await?;
                        }
                    }
                    Ok(command) => {
                        if let Some(pending) = execute(controller, command, &mut out).await? {
                            in_flight += 1;
                            spawn(pending, tx.clone());
                        }
                    }
                    Err(err) => write(&mut out, &format!("{}\n", err)).await?,
                }
            }
            Some(completion) = rx.recv() => {
                in_flight -= 1;
                finish(controller, completion, &mut out).await?;
            }
        }
    }

    out.flush().await?;
    Ok(())
}

/// Handles a command that does not leave the session. Returns a request to
/// run in the background when the command issued one.
async fn execute<W>(
    controller: &mut BookingFlowController,
    command: Command,
    out: &mut W,
) -> Result<Option<PendingCompletion>>
where
    W: AsyncWrite + Unpin,
{
    let pending = match command {
        Command::Search => Some(controller.issue_search()),
        Command::Book(flight) => {
            if let Err(err) = controller.begin_booking(flight) {
                write(out, &format!("{}\n", err)).await?;
                return Ok(None);
            }
            None
        }
        Command::Set { field, value } => {
            controller.update_field(field, value);
            None
        }
        Command::Confirm => match controller.issue_booking() {
            Ok(pending) => Some(pending),
            Err(err) => {
                write(out, &format!("{}\n", err)).await?;
                return Ok(None);
            }
        },
        Command::Cancel => {
            controller.cancel_booking();
            None
        }
        Command::Close => {
            controller.close_booking();
            None
        }
        Command::Help => {
            write(out, &format!("{}\n", HELP)).await?;
            return Ok(None);
        }
        Command::Show => None,
        Command::Wait | Command::Quit => return Ok(None),
    };

    if pending.is_some() {
        write(out, "...\n").await?;
    } else {
        write(out, &render(controller.state())).await?;
    }
    Ok(pending)
}

async fn finish<W>(controller: &mut BookingFlowController, completion: Completion, out: &mut W) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    match controller.complete(completion) {
        Outcome::Stale => {
            debug!("ignored superseded response");
            Ok(())
        }
        Outcome::Applied | Outcome::Failed(_) => write(out, &render(controller.state())).await,
    }
}

fn spawn(pending: PendingCompletion, tx: mpsc::UnboundedSender<Completion>) {
    tokio::spawn(async move {
        let completion = pending.await;
        // The session may already be gone.
        let _ = tx.send(completion);
    });
}

async fn write<W>(out: &mut W, text: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(text.as_bytes()).await?;
    out.flush().await?;
    Ok(())
}
