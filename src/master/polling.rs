use std::time::Duration;
use tokio::time::{Instant, sleep};
use log::*;

use crate::{
    frame::{Frame, CAPTURE, MAX_PAYLOAD},
    transport::Transport,
    };
use super::{send, Request, SendError, QueryError};


/// how long a query keeps retrying for its expected answer
pub const QUERY_TIMEOUT: Duration = Duration::from_millis(5000);
/// pause between two retry cycles
pub const RETRY_INTERVAL: Duration = Duration::from_millis(50);


/// descriptor of one query, discarded at its end
#[derive(Copy, Clone, Debug)]
pub struct Query<'a> {
    /// command to transmit, re-sent as is on every retry cycle
    pub request: Request<'a>,
    /// answer to wait for, compared over at most [MAX_PAYLOAD] bytes against the reply's whole meaningful payload. a reply padded past the expected text, even with trailing zero bytes, is not a match. its presence enables match-and-wait semantics
    pub expected: Option<&'a [u8]>,
    /// suppress the per-cycle payload echo. errors are reported regardless
    pub silent: bool,
    /// overall retry window
    pub timeout: Duration,
    /// pause between retry cycles
    pub retry: Duration,
}
impl Default for Query<'_> {
    fn default() -> Self {
        Self {
            request: Request::default(),
            expected: None,
            silent: false,
            timeout: QUERY_TIMEOUT,
            retry: RETRY_INTERVAL,
        }
    }
}

/**
    send a command and poll the addressed peer for its reply

    each cycle re-sends the request (a reset clears the bus address, so it is re-applied every time), captures a full frame worth of bytes and evaluates the reply:

    - without `expected`, one well formed reply ends the query successfully
    - with `expected`, the reply payload is compared against it and the cycle repeats every [RETRY_INTERVAL](Query::retry) until they match or the [QUERY_TIMEOUT](Query::timeout) window closes

    unless [silent](Query::silent) is set, every well formed reply payload is passed to `echo`, on every cycle and not only the last. a reply too short to hold a header ends the whole query with [QueryError::Malformed], a garbled frame is treated as a bus fault rather than retried

    every outcome exits the loop, a query can never poll forever
*/
pub async fn query<B, F>(bus: &mut B, query: &Query<'_>, mut echo: F) -> Result<Frame, QueryError<B::Error>>
where
    B: Transport,
    F: FnMut(&[u8]),
{
    let started = Instant::now();
    let mut cycle = 0;
    loop {
        cycle += 1;
        // a request with missing fields never transmits and must not consult the bus register, a previous command may have left its own address there
        match send(bus, &query.request).await {
            Err(SendError::MissingField) => return Err(QueryError::NoAddress),
            Err(error) => return Err(QueryError::SendFailed(error)),
            Ok(()) => (),
        }
        if !bus.has_address()
            {return Err(QueryError::NoAddress)}

        let mut raw = [0; CAPTURE];
        let received = bus.capture(&mut raw).await.map_err(QueryError::Bus)?;

        let Some(reply) = Frame::from_wire(&raw[.. received])
            else {
                debug!("unusable reply of {} bytes on cycle {}", received, cycle);
                return Err(QueryError::Malformed)
            };

        if !query.silent {
            echo(&reply.payload);
        }

        let Some(expected) = query.expected
            // no expectation, one round trip is enough
            else {return Ok(reply)};

        if expected[.. expected.len().min(MAX_PAYLOAD)] == reply.payload[..] {
            debug!("expected answer matched on cycle {}", cycle);
            return Ok(reply)
        }
        if started.elapsed() > query.timeout
            {return Err(QueryError::Timeout)}
        sleep(query.retry).await;
    }
}
