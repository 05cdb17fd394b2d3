use thiserror::Error;

#[derive(Error, Debug)]
#[error("error fetching daily renewables report: {0}")]
pub struct FetchError(pub String);
impl From<ureq::Error> for FetchError {
    fn from(e: ureq::Error) -> FetchError {
        match e {
            ureq::Error::StatusCode(status) => FetchError(format!("http status {}", status)),
            e => FetchError(format!("http request error: {}", e)),
        }
    }
}
