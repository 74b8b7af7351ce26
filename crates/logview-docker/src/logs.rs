//! Docker log retrieval.

use bollard::Docker;
use bollard::container::{LogOutput, LogsOptions};
use bollard::errors::Error as BollardError;
use futures_util::{Stream, StreamExt};
use logview_core::{Error, Result};

/// Docker's `tail` argument for a line limit. Negative limits mean the whole log.
fn tail_arg(limit: i64) -> String {
    if limit < 0 {
        "all".to_string()
    } else {
        limit.to_string()
    }
}

/// Collect the last `limit` lines of a container's stdout and stderr.
///
/// Does not follow the log; the stream ends once the daemon has sent the tail.
pub(crate) async fn read_tail(docker: &Docker, container_id: &str, limit: i64) -> Result<Vec<u8>> {
    let options = LogsOptions::<String> {
        follow: false,
        stdout: true,
        stderr: true,
        tail: tail_arg(limit),
        ..Default::default()
    };

    collect_output(container_id, docker.logs(container_id, Some(options))).await
}

/// Concatenate the stdout, stderr and TTY frames of a log stream in arrival order.
///
/// Bytes are joined before decoding, so a character split across frames survives.
async fn collect_output<S>(container_id: &str, stream: S) -> Result<Vec<u8>>
where
    S: Stream<Item = std::result::Result<LogOutput, BollardError>>,
{
    let mut stream = std::pin::pin!(stream);
    let mut output = Vec::new();

    while let Some(result) = stream.next().await {
        match result {
            Ok(
                LogOutput::StdOut { message }
                | LogOutput::StdErr { message }
                | LogOutput::Console { message },
            ) => {
                output.extend_from_slice(&message);
            }
            Ok(LogOutput::StdIn { .. }) => {}
            Err(e) => {
                tracing::error!("Log stream error for {}: {}", container_id, e);
                return Err(Error::Docker(e.to_string()));
            }
        }
    }

    Ok(output)
}
