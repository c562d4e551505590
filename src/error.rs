/// Errors of the price pipeline.
///
/// The application glue wraps these into [`anyhow::Error`] with context.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to fetch the prices")]
    FetchFailure(#[source] anyhow::Error),

    #[error("the price series is empty")]
    EmptySeries,

    #[error("invalid price series: {0}")]
    InvalidSeries(String),
}
