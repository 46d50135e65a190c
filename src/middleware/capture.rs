//! Response capture.
//!
//! An axum handler "writes" its response in two steps: it returns a
//! `Response` whose status is already set, and the server then streams the
//! body out frame by frame, possibly long after the handler returned. The
//! capture therefore has two halves:
//!
//! - [`ResponseCapture`] is the per-request record: last status set, bytes
//!   accepted so far, and whether the body reached its end.
//! - [`CaptureBody`] decorates the response body. It forwards every frame,
//!   size hint and end-of-stream signal untouched and counts the data bytes
//!   on the way through.
//!
//! The owner of the capture is a guard `G` carried inside the body. When the
//! body reports its end the guard is dropped right away; if the body is
//! dropped early (client went away, write error) the guard goes with it. The
//! guard's `Drop` is therefore the single place a request is finalized.

use axum::body::{Body, Bytes};
use axum::http::StatusCode;
use axum::response::Response;
use http_body::{Body as HttpBody, Frame, SizeHint};
use std::pin::Pin;
use std::task::{Context, Poll};

/// Status and byte count observed for one response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseCapture {
    status: StatusCode,
    bytes_written: u64,
    complete: bool,
}

impl ResponseCapture {
    // ---

    /// A fresh capture: implicit `200 OK`, nothing written.
    pub fn new() -> Self {
        // ---
        ResponseCapture {
            status: StatusCode::OK,
            bytes_written: 0,
            complete: false,
        }
    }

    /// Record the status the handler set. The last call wins.
    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    /// Account for `len` bytes the body handed to the server.
    pub fn record_write(&mut self, len: usize) {
        self.bytes_written += len as u64;
    }

    /// Mark the body as fully written.
    pub fn mark_complete(&mut self) {
        self.complete = true;
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

impl Default for ResponseCapture {
    fn default() -> Self {
        Self::new()
    }
}

/// Body decorator that counts data bytes into the guard's [`ResponseCapture`].
pub struct CaptureBody<G> {
    inner: Body,
    guard: Option<G>,
}

impl<G> CaptureBody<G>
where
    G: AsMut<ResponseCapture>,
{
    pub fn new(inner: Body, guard: G) -> Self {
        // ---
        let mut body = CaptureBody {
            inner,
            guard: Some(guard),
        };
        // Servers may never poll a body that is already at its end
        if body.inner.is_end_stream() {
            body.finish();
        }
        body
    }

    /// Mark the capture complete and release the guard. Later calls are no-ops.
    fn finish(&mut self) {
        // ---
        if let Some(mut guard) = self.guard.take() {
            guard.as_mut().mark_complete();
        }
    }
}

impl<G> HttpBody for CaptureBody<G>
where
    G: AsMut<ResponseCapture> + Unpin,
{
    type Data = Bytes;
    type Error = axum::Error;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        // ---
        let this = self.get_mut();
        let polled = Pin::new(&mut this.inner).poll_frame(cx);

        let finished = match &polled {
            Poll::Ready(Some(Ok(frame))) => {
                if let (Some(data), Some(guard)) = (frame.data_ref(), this.guard.as_mut()) {
                    guard.as_mut().record_write(data.len());
                }
                // Servers stop polling once the body says it is done
                this.inner.is_end_stream()
            }
            Poll::Ready(None) => true,
            // Errors pass through; the guard finalizes when the body is dropped
            Poll::Ready(Some(Err(_))) | Poll::Pending => false,
        };

        if finished {
            this.finish();
        }

        polled
    }

    fn is_end_stream(&self) -> bool {
        self.inner.is_end_stream()
    }

    fn size_hint(&self) -> SizeHint {
        self.inner.size_hint()
    }
}

/// Copy the response's status into the guard and route its body through a
/// [`CaptureBody`] that owns the guard from here on.
pub fn capture_response<G>(response: Response, mut guard: G) -> Response
where
    G: AsMut<ResponseCapture> + Unpin + Send + 'static,
{
    // ---
    guard.as_mut().set_status(response.status());
    response.map(|body| Body::new(CaptureBody::new(body, guard)))
}
