use model::{AreaResult, Fix, GeoPoint};
use tokio::sync::{mpsc, oneshot};

use crate::{
    builder::{CaptureConfig, PolygonBuilder},
    CaptureError, CaptureResult,
};

/// Decides when delivered fixes become vertices. Selection is a UI
/// concern; the polygon builder itself is mode-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureMode {
    /// Every delivered fix is offered to the builder immediately.
    Walking,
    /// Fixes only track the current position; a vertex is added on an
    /// explicit capture request.
    #[default]
    Manual,
}

/// Requests handled by the session task. Fix delivery and user actions
/// travel over the same channel, so all mutation is serialized onto a
/// single consumer.
#[derive(Debug)]
pub enum Request {
    Fix(Fix),
    SetMode(CaptureMode),
    Capture {
        responder: oneshot::Sender<CaptureResult<()>>,
    },
    Undo {
        responder: oneshot::Sender<()>,
    },
    Reset {
        responder: oneshot::Sender<()>,
    },
    Finish {
        responder: oneshot::Sender<CaptureResult<AreaResult>>,
    },
    Snapshot {
        responder: oneshot::Sender<Vec<GeoPoint>>,
    },
    Area {
        responder: oneshot::Sender<Option<AreaResult>>,
    },
    LastFix {
        responder: oneshot::Sender<Option<Fix>>,
    },
}

#[derive(Debug)]
pub enum SessionError {
    SendError(mpsc::error::SendError<Request>),
    ResponseError(oneshot::error::RecvError),
    Capture(CaptureError),
}

impl From<mpsc::error::SendError<Request>> for SessionError {
    fn from(why: mpsc::error::SendError<Request>) -> Self {
        Self::SendError(why)
    }
}

impl From<oneshot::error::RecvError> for SessionError {
    fn from(why: oneshot::error::RecvError) -> Self {
        Self::ResponseError(why)
    }
}

impl From<CaptureError> for SessionError {
    fn from(why: CaptureError) -> Self {
        Self::Capture(why)
    }
}

pub type SessionResult<O> = Result<O, SessionError>;

/// Handle used by the UI layer and the location source to drive a
/// capture session. Cloneable; all clones feed the same builder.
#[derive(Debug, Clone)]
pub struct SessionClient {
    sender: mpsc::Sender<Request>,
}

/// Starts the session task owning the polygon builder and returns a
/// client for it. The task ends when the last client is dropped.
pub fn spawn(config: CaptureConfig) -> SessionClient {
    let (sender, receiver) = mpsc::channel(16);
    tokio::spawn(run(PolygonBuilder::with_config(config), receiver));
    SessionClient { sender }
}

async fn run(mut builder: PolygonBuilder, mut receiver: mpsc::Receiver<Request>) {
    let mut mode = CaptureMode::default();
    let mut current_fix: Option<Fix> = None;
    while let Some(request) = receiver.recv().await {
        match request {
            Request::Fix(fix) => {
                current_fix = Some(fix.clone());
                if mode == CaptureMode::Walking {
                    // rejected fixes are expected while standing still
                    if let Err(why) = builder.capture(fix) {
                        log::debug!("walking capture skipped: {why}");
                    }
                }
            }
            Request::SetMode(new_mode) => {
                log::info!("capture mode: {new_mode:?}");
                mode = new_mode;
            }
            Request::Capture { responder } => {
                let result = match current_fix.clone() {
                    Some(fix) => builder.capture(fix),
                    None => Err(CaptureError::NoFixAvailable),
                };
                let _ = responder.send(result);
            }
            Request::Undo { responder } => {
                builder.undo();
                let _ = responder.send(());
            }
            Request::Reset { responder } => {
                builder.reset();
                current_fix = None;
                let _ = responder.send(());
            }
            Request::Finish { responder } => {
                let _ = responder.send(builder.finish());
            }
            Request::Snapshot { responder } => {
                let _ = responder.send(builder.snapshot());
            }
            Request::Area { responder } => {
                let _ = responder.send(builder.area());
            }
            Request::LastFix { responder } => {
                let _ = responder.send(builder.last_fix().cloned());
            }
        }
    }
}

impl SessionClient {
    /// Delivers a fix from the location source. In walking mode this may
    /// add a vertex; in manual mode it only updates the current position.
    pub async fn deliver_fix(&self, fix: Fix) -> SessionResult<()> {
        self.sender.send(Request::Fix(fix)).await?;
        Ok(())
    }

    pub async fn set_mode(&self, mode: CaptureMode) -> SessionResult<()> {
        self.sender.send(Request::SetMode(mode)).await?;
        Ok(())
    }

    /// Captures the most recently delivered fix as a vertex.
    pub async fn capture(&self) -> SessionResult<()> {
        let (responder, response) = oneshot::channel();
        self.sender.send(Request::Capture { responder }).await?;
        response.await??;
        Ok(())
    }

    pub async fn undo(&self) -> SessionResult<()> {
        let (responder, response) = oneshot::channel();
        self.sender.send(Request::Undo { responder }).await?;
        Ok(response.await?)
    }

    pub async fn reset(&self) -> SessionResult<()> {
        let (responder, response) = oneshot::channel();
        self.sender.send(Request::Reset { responder }).await?;
        Ok(response.await?)
    }

    pub async fn finish(&self) -> SessionResult<AreaResult> {
        let (responder, response) = oneshot::channel();
        self.sender.send(Request::Finish { responder }).await?;
        Ok(response.await??)
    }

    pub async fn snapshot(&self) -> SessionResult<Vec<GeoPoint>> {
        let (responder, response) = oneshot::channel();
        self.sender.send(Request::Snapshot { responder }).await?;
        Ok(response.await?)
    }

    pub async fn area(&self) -> SessionResult<Option<AreaResult>> {
        let (responder, response) = oneshot::channel();
        self.sender.send(Request::Area { responder }).await?;
        Ok(response.await?)
    }

    /// The fix that produced the most recent vertex, for export metadata.
    pub async fn last_fix(&self) -> SessionResult<Option<Fix>> {
        let (responder, response) = oneshot::channel();
        self.sender.send(Request::LastFix { responder }).await?;
        Ok(response.await?)
    }
}
