use crossbeam_channel::{Receiver, Sender};
use std::io::{BufRead, Write};
use std::thread;
use tracing::{debug, trace, warn};

use super::protocol::{parse_command, Command, StatusReport};

/// Everything the owning session reacts to, funnelled through one channel so
/// commands and renderer reports are handled strictly one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// A recognized command line from the host
    Host(Command),
    /// Host input reached EOF or failed
    HostClosed,
    /// Renderer says it has settled into this label
    RendererStatus(String),
}

/// Messages drained by the outbound writer thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundMessage {
    StatusChanged(StatusReport),
}

// ============================================================================
// Host Reader Thread
// ============================================================================

/// Read newline-delimited host input and forward recognized commands.
/// Unrecognized lines are dropped here and never reach the session.
pub fn spawn_host_reader<R>(mut reader: R, tx: Sender<InboundEvent>) -> thread::JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(err) => {
                    warn!("Host input read failed: {err}");
                    break;
                }
            }

            let line = String::from_utf8_lossy(&buf);
            match parse_command(&line) {
                Some(cmd) => {
                    if tx.send(InboundEvent::Host(cmd)).is_err() {
                        debug!("Session gone, host reader exiting");
                        return;
                    }
                }
                None => trace!("Ignoring host line: {:?}", line.trim_end()),
            }
        }

        let _ = tx.send(InboundEvent::HostClosed);
        debug!("Host reader thread exiting");
    })
}

// ============================================================================
// Outbound Writer Thread
// ============================================================================

/// Single consumer for every outbound status so lines never interleave.
/// Each line is flushed as soon as it is written.
pub fn spawn_status_writer<W>(rx: Receiver<OutboundMessage>, mut out: W) -> thread::JoinHandle<()>
where
    W: Write + Send + 'static,
{
    thread::spawn(move || {
        for message in rx.iter() {
            match message {
                OutboundMessage::StatusChanged(report) => {
                    let line = report.to_line();
                    let result = writeln!(out, "{line}").and_then(|()| out.flush());
                    if let Err(err) = result {
                        warn!("Failed to write '{line}' to host: {err}");
                    }
                }
            }
        }
        debug!("Status writer thread exiting");
    })
}
