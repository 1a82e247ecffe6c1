use crossbeam_channel::{Receiver, Sender};
use std::io::{self, BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, Command, ExitStatus, Stdio};
use std::thread;
use tracing::{debug, info, trace, warn};

use super::wire::{parse_renderer_event, RendererEvent, RendererInstruction};
use super::{ContentSurface, SurfaceError};
use crate::overlay::InboundEvent;

/// Renderer running as a child process. Instructions are queued to a writer
/// thread that feeds its stdin as JSON lines; its stdout is scanned for events.
/// Its stderr passes straight through.
pub struct ProcessSurface {
    child: Child,
    input_tx: Option<Sender<String>>,
    label: String,
}

impl ProcessSurface {
    /// Spawn the renderer. When `events` is set, `update_status` reports are
    /// forwarded there; otherwise renderer output is only logged.
    pub fn spawn(
        command: &str,
        args: &[String],
        events: Option<Sender<InboundEvent>>,
    ) -> io::Result<Self> {
        let mut child = Command::new(command)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| io::Error::other("renderer stdin not captured"))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| io::Error::other("renderer stdout not captured"))?;

        info!("Renderer started: {command} (pid {})", child.id());
        let (input_tx, input_rx) = crossbeam_channel::unbounded();
        spawn_input_writer(input_rx, stdin);
        spawn_event_reader(BufReader::new(stdout), events);

        Ok(Self {
            child,
            input_tx: Some(input_tx),
            label: command.to_string(),
        })
    }
}

impl ContentSurface for ProcessSurface {
    /// Queue the instruction for the writer thread. Never blocks on the pipe.
    fn deliver(&mut self, instruction: &RendererInstruction) -> Result<(), SurfaceError> {
        if let Ok(Some(status)) = self.child.try_wait() {
            self.input_tx = None;
            return Err(SurfaceError::Closed(Some(status)));
        }
        let tx = self.input_tx.as_ref().ok_or(SurfaceError::Closed(None))?;

        let line = instruction.to_line().map_err(SurfaceError::Encode)?;
        if tx.send(line).is_err() {
            // Writer thread hit a broken pipe and hung up.
            self.input_tx = None;
            return Err(SurfaceError::Closed(None));
        }
        Ok(())
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn wait(&mut self) -> Option<ExitStatus> {
        match self.child.wait() {
            Ok(status) => Some(status),
            Err(err) => {
                warn!("Waiting for renderer failed: {err}");
                None
            }
        }
    }
}

// ============================================================================
// Renderer Writer Thread
// ============================================================================

/// Sole writer of the renderer's stdin. Lines go out in submission order; the
/// thread exits when the surface drops its sender or the pipe breaks, which
/// closes the renderer's stdin.
fn spawn_input_writer<W>(rx: Receiver<String>, mut stdin: W) -> thread::JoinHandle<()>
where
    W: Write + Send + 'static,
{
    thread::spawn(move || {
        for line in rx.iter() {
            if let Err(err) = writeln!(stdin, "{line}").and_then(|()| stdin.flush()) {
                if err.kind() == io::ErrorKind::BrokenPipe {
                    debug!("Renderer input closed");
                } else {
                    warn!("Renderer write failed: {err}");
                }
                break;
            }
            trace!("Renderer <- {line}");
        }
        debug!("Renderer writer thread exiting");
    })
}

// ============================================================================
// Renderer Reader Thread
// ============================================================================

/// Scan renderer output until EOF. Lines are read as bytes and converted
/// lossily so stray binary output is skipped instead of ending the scan.
/// Output is drained to the end even once nobody listens, so the renderer
/// never writes into a closed pipe.
fn spawn_event_reader<R>(
    mut reader: R,
    mut events: Option<Sender<InboundEvent>>,
) -> thread::JoinHandle<()>
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
                    debug!("Renderer output read failed: {err}");
                    break;
                }
            }

            let line = String::from_utf8_lossy(&buf);
            match parse_renderer_event(&line) {
                Some(RendererEvent::UpdateStatus { status }) => {
                    let Some(tx) = events.as_ref() else {
                        debug!("Renderer status '{status}' with no listener");
                        continue;
                    };
                    if tx.send(InboundEvent::RendererStatus(status)).is_err() {
                        debug!("Session gone, discarding further renderer status");
                        events = None;
                    }
                }
                Some(RendererEvent::Ready) => info!("Renderer ready"),
                None => trace!("Renderer: {:?}", line.trim_end()),
            }
        }
        debug!("Renderer reader thread exiting");
    })
}
