use std::{ops::ControlFlow, time::Duration};

use thiserror::Error;

/// A function that polls a fallible future for some period of time and errors if it fails to get
/// a result after polling.
///
/// Given a future that returns a [`Result<ControlFlow<O, ()>, E>`], this function calls the future
/// repeatedly, waiting `interval` between calls, until the future returns a [`ControlFlow::Break`]
/// or until it returns an [`Err`] in which case the function stops polling and returns the error
/// wrapped in [`PollError::Failed`].
///
/// If the future keeps returning [`ControlFlow::Continue`] and fails to return a [`Break`] within
/// the permitted polling duration then this function returns [`PollError::TimedOut`].
///
/// [`Break`]: ControlFlow::Break
pub async fn poll<F, O, E>(
    polling_duration: Duration,
    interval: Duration,
    mut future: impl FnMut() -> F,
) -> Result<O, PollError<E>>
where
    F: Future<Output = Result<ControlFlow<O, ()>, E>>,
{
    let mut retries = 0u32;
    let mut total_wait_duration = Duration::ZERO;

    loop {
        if total_wait_duration >= polling_duration {
            break Err(PollError::TimedOut {
                retries,
                total_wait_duration,
            });
        }

        match future().await.map_err(PollError::Failed)? {
            ControlFlow::Continue(()) => {
                let next_wait_duration = interval.min(polling_duration - total_wait_duration);
                total_wait_duration += next_wait_duration;
                retries = retries.saturating_add(1);

                tokio::time::sleep(next_wait_duration).await;
            }
            ControlFlow::Break(output) => {
                break Ok(output);
            }
        }
    }
}

/// The reasons a [`poll`] loop can end without an output.
#[derive(Debug, Error)]
pub enum PollError<E> {
    #[error("Polling failed after {retries} retries and a total of {total_wait_duration:?} of wait time")]
    TimedOut {
        retries: u32,
        total_wait_duration: Duration,
    },
    #[error("Polled future returned an error during polling loop")]
    Failed(#[source] E),
}
